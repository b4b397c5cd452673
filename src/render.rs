use raylib::prelude::*;

use pet_carousel::CarouselView;
use pet_carousel::carousel::Region;
use pet_carousel::widgets::{CountUp, Modal, ToastKind, ToastQueue};

const ACCENT: Color = Color { r: 255, g: 153, b: 51, a: 255 };
const PANEL: Color = Color { r: 20, g: 24, b: 32, a: 220 };
const BACKDROP: Color = Color { r: 28, g: 32, b: 44, a: 255 };
const DOT_SPACING: f32 = 24.0;
const DOT_RADIUS: f32 = 6.0;
const NAV_HEIGHT: f32 = 80.0;

/// Screen rectangles of the interactive parts of the hero.
pub struct HeroLayout {
    pub hero: Rectangle,
    pub prev_button: Rectangle,
    pub next_button: Rectangle,
    pub dots: Vec<Rectangle>,
}

impl HeroLayout {
    pub fn new(width: i32, height: i32, slide_count: usize) -> Self {
        let w = width as f32;
        let h = height as f32;

        let row_width = DOT_SPACING * slide_count as f32;
        let first_x = (w - row_width) * 0.5 + DOT_SPACING * 0.5;
        let dots = (0..slide_count)
            .map(|i| {
                let cx = first_x + i as f32 * DOT_SPACING;
                let cy = h - 40.0;
                Rectangle::new(cx - DOT_RADIUS * 1.5, cy - DOT_RADIUS * 1.5, DOT_RADIUS * 3.0, DOT_RADIUS * 3.0)
            })
            .collect();

        Self {
            hero: Rectangle::new(0.0, NAV_HEIGHT, w, h - NAV_HEIGHT),
            prev_button: Rectangle::new(20.0, h * 0.5 - 30.0, 60.0, 60.0),
            next_button: Rectangle::new(w - 80.0, h * 0.5 - 30.0, 60.0, 60.0),
            dots,
        }
    }
}

pub fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x && point.x <= rect.x + rect.width && point.y >= rect.y && point.y <= rect.y + rect.height
}

fn faded(color: Color, opacity: f32) -> Color {
    Color::new(color.r, color.g, color.b, (color.a as f32 * opacity.clamp(0.0, 1.0)) as u8)
}

/// Scales the photo to cover the hero, cropping the overflow.
fn draw_cover(d: &mut RaylibDrawHandle, texture: &Texture2D, area: &Rectangle) {
    let tex_w = texture.width() as f32;
    let tex_h = texture.height() as f32;
    let scale = (area.width / tex_w).max(area.height / tex_h);
    let src_w = area.width / scale;
    let src_h = area.height / scale;
    let source = Rectangle::new((tex_w - src_w) * 0.5, (tex_h - src_h) * 0.5, src_w, src_h);

    d.draw_texture_pro(texture, source, *area, Vector2::new(0.0, 0.0), 0.0, Color::WHITE);
    d.draw_rectangle_rec(*area, Color::new(0, 0, 0, 110));
}

fn draw_button(d: &mut RaylibDrawHandle, rect: &Rectangle, label: &str, color: Color) {
    d.draw_rectangle_rec(*rect, color);
    d.draw_text(label, rect.x as i32 + 16, rect.y as i32 + 15, 20, Color::WHITE);
}

pub fn draw_frame(
    d: &mut RaylibDrawHandle,
    layout: &HeroLayout,
    view: &CarouselView,
    photo: Option<&Texture2D>,
    toasts: &ToastQueue,
    counter: &CountUp,
) {
    d.clear_background(BACKDROP);
    if let Some(texture) = photo {
        draw_cover(d, texture, &layout.hero);
    }
    d.draw_rectangle(0, 0, layout.hero.width as i32, NAV_HEIGHT as i32, PANEL);

    let w = layout.hero.width;
    let h = layout.hero.y + layout.hero.height;
    let content = view.content;

    let title = view.style(Region::Title);
    d.draw_text(
        &content.title,
        100,
        (h * 0.32 + title.offset_y) as i32,
        72,
        faded(Color::WHITE, title.opacity),
    );

    let primary = view.style(Region::PrimaryAction);
    let rect = Rectangle::new(100.0, h * 0.32 + 100.0 + primary.offset_y, 190.0, 50.0);
    draw_button(d, &rect, "Adopt Me", faded(ACCENT, primary.opacity));
    d.draw_text(
        &content.primary_href,
        100,
        (rect.y + 58.0) as i32,
        14,
        faded(Color::LIGHTGRAY, primary.opacity),
    );

    let secondary = view.style(Region::SecondaryAction);
    let rect = Rectangle::new(310.0, h * 0.32 + 100.0 + secondary.offset_y, 190.0, 50.0);
    draw_button(d, &rect, "Meet Them", faded(PANEL, secondary.opacity));

    let card = view.style(Region::InfoCard);
    let card_rect = Rectangle::new(w - 380.0, h - 250.0 + card.offset_y, 280.0, 150.0);
    d.draw_rectangle_rec(card_rect, faded(PANEL, card.opacity));
    let x = card_rect.x as i32 + 20;
    let y = card_rect.y as i32;
    d.draw_text(&content.counter, x, y + 16, 48, faded(ACCENT, card.opacity));
    d.draw_text(&content.species, x + 90, y + 34, 22, faded(Color::LIGHTGRAY, card.opacity));
    d.draw_text(&content.age, x, y + 76, 22, faded(Color::WHITE, card.opacity));
    d.draw_text(&content.breed, x, y + 106, 22, faded(Color::LIGHTGRAY, card.opacity));

    draw_button(d, &layout.prev_button, "<", PANEL);
    draw_button(d, &layout.next_button, ">", PANEL);

    for (rect, visual) in layout.dots.iter().zip(&view.slides) {
        let cx = (rect.x + rect.width * 0.5) as i32;
        let cy = (rect.y + rect.height * 0.5) as i32;
        let (radius, color) = if visual.is_active() {
            (DOT_RADIUS * 1.3, ACCENT)
        } else {
            (DOT_RADIUS, Color::GRAY)
        };
        d.draw_circle(cx, cy, radius, color);
    }

    d.draw_text(&format!("{} pets waiting", counter.display()), 24, 20, 24, Color::WHITE);
    let autoplay = match (view.autoplay_enabled, view.autoplay_running) {
        (true, true) => "autoplay",
        (true, false) => "autoplay (paused on hover)",
        (false, _) => "autoplay off",
    };
    d.draw_text(autoplay, 24, 52, 16, Color::LIGHTGRAY);

    for (i, toast) in toasts.iter().enumerate() {
        let color = match toast.kind {
            ToastKind::Info => PANEL,
            ToastKind::Success => Color::new(46, 160, 67, 230),
            ToastKind::Warning => Color::new(210, 153, 34, 230),
            ToastKind::Error => Color::new(200, 55, 55, 230),
        };
        let rect = Rectangle::new(w - 320.0, 20.0 + i as f32 * 56.0, 300.0, 46.0);
        d.draw_rectangle_rec(rect, faded(color, toast.opacity()));
        d.draw_text(
            &toast.message,
            rect.x as i32 + 14,
            rect.y as i32 + 14,
            18,
            faded(Color::WHITE, toast.opacity()),
        );
    }
}

/// Dims the frame and draws the dialog box while the modal is visible.
pub fn draw_modal(d: &mut RaylibDrawHandle, modal: &Modal) {
    if !modal.is_visible() {
        return;
    }
    let opacity = modal.opacity();
    let w = d.get_screen_width();
    let h = d.get_screen_height();
    d.draw_rectangle(0, 0, w, h, faded(Color::BLACK, opacity * 0.6));

    let rect = Rectangle::new(w as f32 * 0.5 - 220.0, h as f32 * 0.5 - 120.0, 440.0, 240.0);
    d.draw_rectangle_rec(rect, faded(BACKDROP, opacity));
    d.draw_rectangle_lines_ex(rect, 2.0, faded(ACCENT, opacity));

    let x = rect.x as i32 + 24;
    d.draw_text(&modal.title, x, rect.y as i32 + 20, 30, faded(ACCENT, opacity));
    for (i, line) in modal.message.lines().enumerate() {
        d.draw_text(line, x, rect.y as i32 + 70 + i as i32 * 30, 20, faded(Color::WHITE, opacity));
    }
}
