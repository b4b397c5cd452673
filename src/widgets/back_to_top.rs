use crate::animation::{Easing, Tween};
use crate::constants::{BACK_TO_TOP_DURATION, BACK_TO_TOP_THRESHOLD};

/// Button that appears once the page is scrolled past a threshold and
/// smooth-scrolls back to the top when activated.
pub struct BackToTop {
    threshold: f32,
    visible: bool,
    scroll: Option<Tween>,
}

impl Default for BackToTop {
    fn default() -> Self {
        Self::new(BACK_TO_TOP_THRESHOLD)
    }
}

impl BackToTop {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            visible: false,
            scroll: None,
        }
    }

    /// Feeds the current scroll offset. Returns true when visibility changed.
    pub fn on_scroll(&mut self, offset: f32) -> bool {
        let visible = offset > self.threshold;
        let changed = visible != self.visible;
        self.visible = visible;
        changed
    }

    /// Starts scrolling from `offset` to the top. Ignored while hidden.
    pub fn activate(&mut self, offset: f32) -> bool {
        if !self.visible {
            return false;
        }
        self.scroll = Some(Tween::new(Easing::CubicInOut, offset, 0.0, BACK_TO_TOP_DURATION));
        true
    }

    /// Advances the scroll and returns the offset the host should apply, if
    /// a scroll is running.
    pub fn update(&mut self, dt: f32) -> Option<f32> {
        let tween = self.scroll.as_mut()?;
        let offset = tween.apply(dt);
        if tween.is_complete() {
            self.scroll = None;
        }
        self.on_scroll(offset);
        Some(offset)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_scrolling(&self) -> bool {
        self.scroll.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_past_threshold() {
        let mut button = BackToTop::new(300.0);
        assert!(!button.is_visible());
        assert!(!button.on_scroll(300.0));
        assert!(button.on_scroll(301.0));
        assert!(button.is_visible());
        assert!(!button.on_scroll(900.0));
        assert!(button.on_scroll(10.0));
        assert!(!button.is_visible());
    }

    #[test]
    fn hidden_button_does_nothing() {
        let mut button = BackToTop::default();
        assert!(!button.activate(100.0));
        assert_eq!(button.update(0.1), None);
    }

    #[test]
    fn scrolls_to_top_and_hides() {
        let mut button = BackToTop::new(300.0);
        button.on_scroll(1200.0);
        assert!(button.activate(1200.0));

        let midway = button.update(BACK_TO_TOP_DURATION / 2.0).unwrap();
        assert!(midway > 0.0 && midway < 1200.0, "offset {midway}");
        assert!(button.is_scrolling());

        assert_eq!(button.update(BACK_TO_TOP_DURATION), Some(0.0));
        assert!(!button.is_scrolling());
        assert!(!button.is_visible());
        assert_eq!(button.update(0.1), None);
    }
}
