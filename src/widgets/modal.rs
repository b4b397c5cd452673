use crate::animation::{Easing, Tween};
use crate::carousel::Key;
use crate::constants::MODAL_FADE;

/// What the user did with an open modal this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalResult {
    None,
    Confirm,
    Cancel,
}

/// Dialog overlay with open/close state and a short fade.
///
/// Escape dismisses it. While closed, keys pass through untouched so the
/// host can forward them to the carousel.
pub struct Modal {
    pub title: String,
    pub message: String,
    open: bool,
    fade: Tween,
}

impl Modal {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        let mut fade = Tween::new(Easing::Linear, 1.0, 0.0, 0.0);
        fade.finish();
        Self {
            title: title.into(),
            message: message.into(),
            open: false,
            fade,
        }
    }

    pub fn open(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        self.fade = Tween::new(Easing::QuadOut, self.opacity(), 1.0, MODAL_FADE);
    }

    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        self.fade = Tween::new(Easing::QuadIn, self.opacity(), 0.0, MODAL_FADE);
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Handles a key while open. Returns `Cancel` on Escape; any other key
    /// is swallowed. A closed modal reports `None` and consumes nothing.
    pub fn handle_key(&mut self, key: Key) -> ModalResult {
        if !self.open {
            return ModalResult::None;
        }
        match key {
            Key::Escape => {
                self.close();
                ModalResult::Cancel
            }
            _ => ModalResult::None,
        }
    }

    /// Closes the modal as accepted.
    pub fn confirm(&mut self) -> ModalResult {
        if !self.open {
            return ModalResult::None;
        }
        self.close();
        ModalResult::Confirm
    }

    pub fn update(&mut self, dt: f32) {
        self.fade.apply(dt);
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// True while open or still fading out.
    pub fn is_visible(&self) -> bool {
        self.open || self.opacity() > 0.0
    }

    pub fn opacity(&self) -> f32 {
        self.fade.value()
    }
}
