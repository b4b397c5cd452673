use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::seq::SliceRandom;
use raylib::prelude::*;
use std::path::PathBuf;
use tracing::{info, warn};

use pet_carousel::carousel::{InputEvent, Key, Point};
use pet_carousel::constants::FPS;
use pet_carousel::pet::{available_count, featured, load_pets, sample_pets};
use pet_carousel::widgets::{CountUp, Modal, ToastQueue};
use pet_carousel::{AppConfig, Carousel, Preferences};

mod render;
mod texture_loader;

use crate::render::{HeroLayout, contains};
use crate::texture_loader::{PhotoCache, load_sorted_image_paths};

/// Hero carousel of adoptable pets.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON array of pets (built-in samples when omitted)
    #[arg(long)]
    pets: Option<PathBuf>,

    /// Directory of slide photos, matched to slides by sorted file name
    #[arg(long)]
    photos: Option<PathBuf>,

    /// Milliseconds between autoplay advances
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Start with autoplay off
    #[arg(long)]
    no_autoplay: bool,

    /// Randomize the order of the pets
    #[arg(long)]
    shuffle: bool,

    #[arg(long, default_value = "info")]
    log_level: tracing::Level,
}

fn resolve_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => AppConfig::load(path).context("failed to load configuration")?,
        None => AppConfig::default(),
    };

    if let Some(pets) = &args.pets {
        config.pets_file = Some(pets.clone());
    }
    if let Some(photos) = &args.photos {
        config.photos_dir = Some(photos.clone());
    }
    if let Some(delay) = args.delay_ms {
        config.carousel.autoplay_delay_ms = delay;
    }
    if args.no_autoplay {
        config.carousel.autoplay = false;
    }
    config.validate()?;
    Ok(config)
}

/// Turns this frame's raylib input into carousel events.
fn collect_input(rl: &RaylibHandle, layout: &HeroLayout, pointer_inside: &mut bool) -> Vec<InputEvent> {
    let mut events = Vec::new();
    let mouse = rl.get_mouse_position();

    let inside = contains(&layout.hero, mouse);
    if inside != *pointer_inside {
        *pointer_inside = inside;
        events.push(if inside {
            InputEvent::PointerEnter
        } else {
            InputEvent::PointerLeave
        });
    }

    if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
        events.push(InputEvent::KeyDown(Key::ArrowLeft));
    }
    if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
        events.push(InputEvent::KeyDown(Key::ArrowRight));
    }

    // Mouse drag stands in for touch; clicks on controls are not drags
    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        if contains(&layout.prev_button, mouse) {
            events.push(InputEvent::PrevButton);
        } else if contains(&layout.next_button, mouse) {
            events.push(InputEvent::NextButton);
        } else if let Some(dot) = layout.dots.iter().position(|r| contains(r, mouse)) {
            events.push(InputEvent::Dot(dot));
        } else if inside {
            events.push(InputEvent::TouchStart(Point::new(mouse.x, mouse.y)));
        }
    }
    if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
        events.push(InputEvent::TouchEnd(Point::new(mouse.x, mouse.y)));
    }

    events
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt().with_max_level(args.log_level).init();

    let config = resolve_config(&args)?;

    let mut preferences = Preferences::load(&config.preferences_file).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable preferences");
        Preferences::default()
    });

    // --- Load Pets ---
    let mut pets = match &config.pets_file {
        Some(path) => load_pets(path).context("failed to load pets")?,
        None => sample_pets(),
    };
    if args.shuffle {
        pets.shuffle(&mut rand::rng());
    }
    let pets_available = available_count(&pets) as u64;

    let mut options = config.carousel;
    if preferences.reduced_motion {
        options.animate = false;
    }
    let Some(mut carousel) = Carousel::mount(featured(pets), &options) else {
        bail!("no available pets to show");
    };

    let photo_paths = match &config.photos_dir {
        Some(dir) => load_sorted_image_paths(dir)?,
        None => Vec::new(),
    };

    let (mut rl, thread) = raylib::init()
        .size(config.window.width, config.window.height)
        .title(&config.window.title)
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    rl.set_exit_key(None);

    let mut photos = PhotoCache::new(photo_paths);
    let mut toasts = ToastQueue::new();
    let mut counter = CountUp::new(pets_available, 1.5);
    let mut help = Modal::new(
        "Keys",
        "Left/Right: browse pets\nSpace: play or pause autoplay\nM: reduced motion\nEsc: close",
    );
    counter.reveal();
    let mut pointer_inside = false;

    info!(slides = carousel.len(), "starting render loop");

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let layout = HeroLayout::new(rl.get_screen_width(), rl.get_screen_height(), carousel.len());

        if rl.is_key_pressed(KeyboardKey::KEY_H) {
            help.toggle();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_ESCAPE) {
            help.handle_key(Key::Escape);
        }

        // An open dialog swallows navigation but hover still reaches autoplay
        for event in collect_input(&rl, &layout, &mut pointer_inside) {
            let hover = matches!(event, InputEvent::PointerEnter | InputEvent::PointerLeave);
            if hover || !help.is_open() {
                carousel.handle(event);
            }
        }

        if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
            if carousel.view().autoplay_enabled {
                carousel.pause();
                toasts.info("Autoplay paused");
            } else {
                carousel.play();
                toasts.success("Autoplay resumed");
            }
        }

        if rl.is_key_pressed(KeyboardKey::KEY_M) {
            preferences.reduced_motion = !preferences.reduced_motion;
            carousel.set_animate(!preferences.reduced_motion);
            match preferences.save(&config.preferences_file) {
                Ok(()) if preferences.reduced_motion => toasts.info("Reduced motion on"),
                Ok(()) => toasts.info("Reduced motion off"),
                Err(e) => {
                    warn!(error = %e, "could not save preferences");
                    toasts.error("Could not save preference");
                }
            }
        }

        carousel.update(dt);
        toasts.update(dt);
        counter.update(dt);
        help.update(dt);

        // Lazy photo loading: the active slide and its neighbours
        let len = carousel.len();
        let active = carousel.active_index();
        photos.ensure_loaded(&mut rl, &thread, [active, (active + 1) % len, (active + len - 1) % len]);

        let view = carousel.view();
        let mut d = rl.begin_drawing(&thread);
        render::draw_frame(&mut d, &layout, &view, photos.get(active), &toasts, &counter);
        render::draw_modal(&mut d, &help);
    }

    carousel.destroy();
    Ok(())
}
