//! Hero carousel controller.
//!
//! Input and timer events are turned into `next`/`prev`/`goto` requests, the
//! state store gates them so only one transition is in flight, and the
//! sequencer fades the hero regions out, swaps their content and fades them
//! back in. The host calls [`Carousel::update`] every frame and draws
//! [`Carousel::view`].

pub mod autoplay;
pub mod input;
pub mod sequencer;
pub mod slide;
pub mod state;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::animation::Style;
use crate::constants::AUTOPLAY_DELAY_MS;
use crate::pet::PetSummary;

pub use autoplay::Autoplay;
pub use input::{Command, InputEvent, InputRouter, Key, Point};
pub use sequencer::{REGION_COUNT, Region, TransitionPhase, TransitionSequencer, TransitionTiming};
pub use slide::{Slide, SlideContent, SlideVisual};
pub use state::{CarouselState, PendingTransition};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselOptions {
    pub autoplay: bool,
    pub autoplay_delay_ms: u64,
    /// Fade between slides; off means instant swaps
    pub animate: bool,
    pub transition: TransitionTiming,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            autoplay: true,
            autoplay_delay_ms: AUTOPLAY_DELAY_MS,
            animate: true,
            transition: TransitionTiming::default(),
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselView<'a> {
    pub current_index: usize,
    pub active_index: usize,
    pub content: &'a SlideContent,
    pub styles: [Style; REGION_COUNT],
    pub slides: Vec<SlideVisual>,
    pub phase: TransitionPhase,
    pub autoplay_enabled: bool,
    pub autoplay_running: bool,
}

impl CarouselView<'_> {
    pub fn style(&self, region: Region) -> Style {
        self.styles[region.index()]
    }
}

pub struct Carousel {
    slides: Vec<Slide>,
    state: CarouselState,
    sequencer: TransitionSequencer,
    router: InputRouter,
    autoplay: Autoplay,
    animate: bool,
}

impl Carousel {
    /// Builds the carousel and shows the first slide without animation.
    /// Returns `None` when there is nothing to show.
    pub fn mount(pets: Vec<PetSummary>, options: &CarouselOptions) -> Option<Self> {
        if pets.is_empty() {
            debug!("no slides, carousel not mounted");
            return None;
        }

        let slides: Vec<Slide> = pets
            .into_iter()
            .enumerate()
            .map(|(index, pet)| Slide::new(index, pet))
            .collect();
        let len = slides.len();

        let mut sequencer = TransitionSequencer::new(options.transition);
        sequencer.show(slides[0].content.clone());

        info!(slides = len, autoplay = options.autoplay, "carousel mounted");
        Some(Self {
            slides,
            state: CarouselState::new(len),
            sequencer,
            router: InputRouter::new(len),
            autoplay: Autoplay::new(options.autoplay, options.autoplay_delay_ms, len),
            animate: options.animate,
        })
    }

    pub fn next(&mut self) -> bool {
        let index = self.state.next_index();
        self.go_to(index)
    }

    pub fn prev(&mut self) -> bool {
        let index = self.state.prev_index();
        self.go_to(index)
    }

    /// Requests a transition to `index`. Returns whether it was accepted.
    pub fn go_to(&mut self, index: usize) -> bool {
        if !self.router.is_attached() {
            return false;
        }
        let Some(transition) = self.state.request_go_to(index) else {
            return false;
        };

        debug!(from = transition.from, to = transition.to, "slide change");
        let incoming = self.slides[transition.to].content.clone();
        if let Some(done) = self.sequencer.run(transition.to, incoming, self.animate) {
            self.state.commit(done);
        }
        true
    }

    /// Routes one host event. Returns whether it changed anything.
    pub fn handle(&mut self, event: InputEvent) -> bool {
        match self.router.route(event) {
            Some(Command::Next) => self.next(),
            Some(Command::Prev) => self.prev(),
            Some(Command::GoTo(index)) => self.go_to(index),
            Some(Command::SuspendAutoplay) => {
                self.autoplay.suspend();
                true
            }
            Some(Command::ResumeAutoplay) => {
                self.autoplay.resume();
                true
            }
            None => false,
        }
    }

    /// Advances the running transition and the autoplay timer by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if !self.router.is_attached() {
            return;
        }
        if let Some(done) = self.sequencer.update(dt) {
            self.state.commit(done);
        }
        for _ in 0..self.autoplay.tick(dt) {
            self.next();
        }
    }

    pub fn play(&mut self) {
        self.autoplay.play();
    }

    pub fn pause(&mut self) {
        self.autoplay.pause();
    }

    /// Stops the timer and detaches input. The carousel is inert afterwards.
    pub fn destroy(&mut self) {
        self.autoplay.stop();
        self.router.detach();
        info!("carousel destroyed");
    }

    /// Turns fading on or off for later transitions.
    pub fn set_animate(&mut self, animate: bool) {
        self.animate = animate;
    }

    pub fn view(&self) -> CarouselView<'_> {
        let active = self.state.active_index();
        CarouselView {
            current_index: self.state.current_index(),
            active_index: active,
            content: self.sequencer.content(),
            styles: self.sequencer.styles(),
            slides: (0..self.slides.len())
                .map(|i| {
                    if i == active {
                        SlideVisual::Active
                    } else {
                        SlideVisual::Inactive
                    }
                })
                .collect(),
            phase: self.sequencer.phase(),
            autoplay_enabled: self.autoplay.is_enabled(),
            autoplay_running: self.autoplay.is_running(),
        }
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn active_index(&self) -> usize {
        self.state.active_index()
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn is_destroyed(&self) -> bool {
        !self.router.is_attached()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pet::sample_pets;

    const FRAME: f32 = 1.0 / 60.0;

    fn mounted(options: CarouselOptions) -> Carousel {
        Carousel::mount(sample_pets(), &options).unwrap()
    }

    fn quiet() -> CarouselOptions {
        CarouselOptions {
            autoplay: false,
            ..CarouselOptions::default()
        }
    }

    fn settle(carousel: &mut Carousel) {
        for _ in 0..120 {
            carousel.update(FRAME);
            if !carousel.is_transitioning() {
                return;
            }
        }
        panic!("transition never completed");
    }

    #[test]
    fn mount_requires_slides() {
        assert!(Carousel::mount(Vec::new(), &CarouselOptions::default()).is_none());
    }

    #[test]
    fn mount_shows_first_slide_immediately() {
        let carousel = mounted(quiet());
        let view = carousel.view();
        assert_eq!(view.current_index, 0);
        assert_eq!(view.content.title, "JARVIS");
        assert_eq!(view.content.counter, "01");
        assert_eq!(view.phase, TransitionPhase::Idle);
        assert_eq!(view.style(Region::Title), Style::VISIBLE);
        assert!(view.slides[0].is_active());
    }

    #[test]
    fn rapid_requests_keep_one_transition_in_flight() {
        let mut carousel = mounted(quiet());
        assert!(carousel.next());
        assert!(!carousel.next());
        assert!(!carousel.prev());
        assert!(!carousel.go_to(4));
        assert!(!carousel.handle(InputEvent::KeyDown(Key::ArrowRight)));

        settle(&mut carousel);
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.view().content.title, "ARIA");
    }

    #[test]
    fn active_highlight_moves_before_commit() {
        let mut carousel = mounted(quiet());
        carousel.go_to(3);
        carousel.update(FRAME);
        let view = carousel.view();
        assert_eq!(view.current_index, 0);
        assert_eq!(view.active_index, 3);
        assert!(view.slides[3].is_active());
        assert!(!view.slides[0].is_active());
        assert_eq!(view.slides.iter().filter(|v| v.is_active()).count(), 1);
    }

    #[test]
    fn go_to_current_is_a_no_op() {
        let mut carousel = mounted(quiet());
        assert!(!carousel.go_to(0));
        assert!(!carousel.is_transitioning());
        assert_eq!(carousel.view().phase, TransitionPhase::Idle);
    }

    #[test]
    fn next_wraps_around_and_prev_inverts_it() {
        let mut carousel = mounted(quiet());
        let len = carousel.len();
        for _ in 0..len {
            assert!(carousel.next());
            settle(&mut carousel);
        }
        assert_eq!(carousel.current_index(), 0);

        carousel.prev();
        settle(&mut carousel);
        assert_eq!(carousel.current_index(), len - 1);
        carousel.next();
        settle(&mut carousel);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn swipe_triggers_exactly_one_change() {
        let mut carousel = mounted(quiet());
        carousel.handle(InputEvent::TouchStart(Point::new(300.0, 200.0)));
        assert!(carousel.handle(InputEvent::TouchEnd(Point::new(240.0, 210.0))));
        settle(&mut carousel);
        assert_eq!(carousel.current_index(), 1);

        carousel.handle(InputEvent::TouchStart(Point::new(300.0, 200.0)));
        assert!(!carousel.handle(InputEvent::TouchEnd(Point::new(270.0, 200.0))));
        assert!(!carousel.is_transitioning());
    }

    #[test]
    fn autoplay_advances_and_hover_suspends() {
        let options = CarouselOptions {
            autoplay_delay_ms: 1000,
            ..CarouselOptions::default()
        };
        let mut carousel = mounted(options);
        carousel.update(1.01);
        assert!(carousel.is_transitioning());
        settle(&mut carousel);
        assert_eq!(carousel.current_index(), 1);

        carousel.handle(InputEvent::PointerEnter);
        carousel.update(5.0);
        assert!(!carousel.is_transitioning());
        assert!(carousel.view().autoplay_enabled);
        assert!(!carousel.view().autoplay_running);

        carousel.handle(InputEvent::PointerLeave);
        carousel.update(1.01);
        assert!(carousel.is_transitioning());
    }

    #[test]
    fn pause_then_play_does_not_fire_early() {
        let options = CarouselOptions {
            autoplay_delay_ms: 1000,
            ..CarouselOptions::default()
        };
        let mut carousel = mounted(options);
        carousel.update(0.9);
        carousel.pause();
        carousel.play();
        carousel.update(0.5);
        assert!(!carousel.is_transitioning());
        carousel.update(0.6);
        assert!(carousel.is_transitioning());
    }

    #[test]
    fn instant_mode_commits_synchronously() {
        let options = CarouselOptions {
            animate: false,
            ..quiet()
        };
        let mut carousel = mounted(options);
        assert!(carousel.go_to(2));
        assert!(!carousel.is_transitioning());
        assert_eq!(carousel.current_index(), 2);
        assert_eq!(carousel.view().content.title, "THOR");

        carousel.set_animate(true);
        carousel.next();
        assert!(carousel.is_transitioning());
    }

    #[test]
    fn destroy_stops_timer_and_input() {
        let mut carousel = mounted(CarouselOptions::default());
        carousel.destroy();
        assert!(carousel.is_destroyed());
        assert!(!carousel.view().autoplay_running);
        assert!(!carousel.handle(InputEvent::NextButton));
        assert!(!carousel.next());
        carousel.update(60.0);
        assert_eq!(carousel.current_index(), 0);
        assert!(!carousel.is_transitioning());
    }

    #[test]
    fn single_slide_carousel_never_moves() {
        let pets = sample_pets().into_iter().take(1).collect();
        let mut carousel = Carousel::mount(pets, &CarouselOptions::default()).unwrap();
        assert!(!carousel.next());
        assert!(!carousel.prev());
        carousel.update(30.0);
        assert_eq!(carousel.current_index(), 0);
        assert!(!carousel.view().autoplay_running);
    }
}
