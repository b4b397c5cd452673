//! Normalizes host input into carousel commands.
//!
//! The host forwards raw events (clicks, keys, touches, hover) to the
//! carousel it owns; nothing is registered globally. Once detached the router
//! drops every event.

use tracing::trace;

use crate::constants::SWIPE_THRESHOLD;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Raw input delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PrevButton,
    NextButton,
    Dot(usize),
    KeyDown(Key),
    TouchStart(Point),
    TouchEnd(Point),
    PointerEnter,
    PointerLeave,
}

/// What the carousel should do in response to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    GoTo(usize),
    SuspendAutoplay,
    ResumeAutoplay,
}

pub struct InputRouter {
    slide_count: usize,
    touch_start: Option<Point>,
    attached: bool,
}

impl InputRouter {
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            touch_start: None,
            attached: true,
        }
    }

    pub fn route(&mut self, event: InputEvent) -> Option<Command> {
        if !self.attached {
            trace!(?event, "router detached, event dropped");
            return None;
        }

        match event {
            InputEvent::PrevButton => Some(Command::Prev),
            InputEvent::NextButton => Some(Command::Next),
            InputEvent::Dot(index) if index < self.slide_count => Some(Command::GoTo(index)),
            InputEvent::Dot(_) => None,
            InputEvent::KeyDown(Key::ArrowLeft) => Some(Command::Prev),
            InputEvent::KeyDown(Key::ArrowRight) => Some(Command::Next),
            InputEvent::KeyDown(Key::Escape | Key::Other) => None,
            InputEvent::TouchStart(point) => {
                self.touch_start = Some(point);
                None
            }
            InputEvent::TouchEnd(end) => {
                let start = self.touch_start.take()?;
                swipe(start, end)
            }
            InputEvent::PointerEnter => Some(Command::SuspendAutoplay),
            InputEvent::PointerLeave => Some(Command::ResumeAutoplay),
        }
    }

    /// Stops listening. Later events are ignored.
    pub fn detach(&mut self) {
        self.attached = false;
        self.touch_start = None;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

/// A mostly horizontal drag longer than the threshold; dragging left
/// advances.
fn swipe(start: Point, end: Point) -> Option<Command> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    if dx.abs() <= dy.abs() || dx.abs() <= SWIPE_THRESHOLD {
        return None;
    }
    if dx < 0.0 {
        Some(Command::Next)
    } else {
        Some(Command::Prev)
    }
}
