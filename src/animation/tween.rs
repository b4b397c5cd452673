use raylib::prelude::ease;

use crate::animation::easing::Easing;

/// A single delayed scalar tween.
///
/// Interpolation is delegated to raylib's `ease::Tween`; this wrapper adds a
/// start delay and pins the value to `to` once the duration has elapsed.
pub struct Tween {
    inner: ease::Tween,
    to: f32,
    delay: f32,
    duration: f32,
    elapsed: f32,
    value: f32,
    done: bool,
}

impl Tween {
    pub fn new(easing: Easing, from: f32, to: f32, duration: f32) -> Self {
        Self {
            inner: ease::Tween::new(easing.ease_fn(), from, to, duration.max(f32::EPSILON)),
            to,
            delay: 0.0,
            duration: duration.max(0.0),
            elapsed: 0.0,
            value: from,
            done: false,
        }
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// Advances the tween by `dt` seconds and returns the new value.
    pub fn apply(&mut self, dt: f32) -> f32 {
        if self.done {
            return self.value;
        }

        let before = self.elapsed;
        self.elapsed += dt;

        // Only the part of dt past the delay moves the inner tween
        let active_before = (before - self.delay).max(0.0);
        let active_after = (self.elapsed - self.delay).max(0.0);
        let step = active_after - active_before;

        if active_after >= self.duration {
            self.value = self.to;
            self.done = true;
        } else if step > 0.0 {
            self.value = self.inner.apply(step);
        }
        self.value
    }

    /// Jumps straight to the end value.
    pub fn finish(&mut self) {
        self.elapsed = self.delay + self.duration;
        self.value = self.to;
        self.done = true;
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Delay plus duration.
    pub fn total_duration(&self) -> f32 {
        self.delay + self.duration
    }

    pub fn is_complete(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_start_value_during_delay() {
        let mut tween = Tween::new(Easing::Linear, 0.0, 10.0, 1.0).with_delay(0.5);
        assert_eq!(tween.apply(0.4), 0.0);
        assert!(!tween.is_complete());
    }

    #[test]
    fn reaches_end_value_exactly() {
        let mut tween = Tween::new(Easing::BackOut, 2.0, 8.0, 0.3);
        for _ in 0..10 {
            tween.apply(0.05);
        }
        assert!(tween.is_complete());
        assert_eq!(tween.value(), 8.0);
    }

    #[test]
    fn moves_toward_target_midway() {
        let mut tween = Tween::new(Easing::Linear, 0.0, 1.0, 1.0).with_delay(0.2);
        let v = tween.apply(0.7);
        assert!(v > 0.0 && v < 1.0, "value {v}");
    }

    #[test]
    fn single_large_step_completes() {
        let mut tween = Tween::new(Easing::CubicOut, 1.0, 0.0, 0.3).with_delay(0.1);
        assert_eq!(tween.apply(5.0), 0.0);
        assert!(tween.is_complete());
        assert!((tween.total_duration() - 0.4).abs() < 1e-6);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let mut tween = Tween::new(Easing::Linear, 0.0, 1.0, 0.0);
        assert_eq!(tween.apply(0.0), 1.0);
    }

    #[test]
    fn finish_jumps_to_end() {
        let mut tween = Tween::new(Easing::Linear, 0.0, 4.0, 2.0);
        tween.finish();
        assert!(tween.is_complete());
        assert_eq!(tween.value(), 4.0);
    }
}
