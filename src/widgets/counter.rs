use crate::animation::{Easing, Tween};

/// Stat counter that counts up from zero once it is revealed.
pub struct CountUp {
    target: u64,
    duration: f32,
    tween: Option<Tween>,
}

impl CountUp {
    pub fn new(target: u64, duration: f32) -> Self {
        Self {
            target,
            duration,
            tween: None,
        }
    }

    /// Starts counting. Later calls do nothing.
    pub fn reveal(&mut self) {
        if self.tween.is_none() {
            self.tween = Some(Tween::new(Easing::CubicOut, 0.0, self.target as f32, self.duration));
        }
    }

    pub fn update(&mut self, dt: f32) {
        if let Some(tween) = self.tween.as_mut() {
            tween.apply(dt);
        }
    }

    pub fn value(&self) -> u64 {
        match &self.tween {
            None => 0,
            Some(tween) if tween.is_complete() => self.target,
            Some(tween) => (tween.value().round().max(0.0) as u64).min(self.target),
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.tween.is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.tween.as_ref().is_some_and(Tween::is_complete)
    }

    /// Current value with thousands separators.
    pub fn display(&self) -> String {
        group_thousands(self.value())
    }
}

pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_at_zero_until_revealed() {
        let mut counter = CountUp::new(500, 1.0);
        counter.update(2.0);
        assert_eq!(counter.value(), 0);
        assert!(!counter.is_revealed());
    }

    #[test]
    fn counts_up_to_target() {
        let mut counter = CountUp::new(1200, 1.0);
        counter.reveal();
        counter.update(0.5);
        let mid = counter.value();
        assert!(mid > 0 && mid < 1200, "mid {mid}");
        counter.update(0.6);
        assert!(counter.is_complete());
        assert_eq!(counter.display(), "1,200");
    }

    #[test]
    fn reveal_is_idempotent() {
        let mut counter = CountUp::new(10, 1.0);
        counter.reveal();
        counter.update(0.7);
        let before = counter.value();
        counter.reveal();
        assert_eq!(counter.value(), before);
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
