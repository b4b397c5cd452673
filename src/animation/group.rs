use serde::{Deserialize, Serialize};

use crate::animation::easing::Easing;
use crate::animation::preset::{Preset, Style};
use crate::animation::stagger::Stagger;
use crate::animation::tween::Tween;

/// Duration, delay, curve and stagger shared by every target of a group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    /// Seconds
    pub duration: f32,
    #[serde(default)]
    pub delay: f32,
    #[serde(default)]
    pub ease: Easing,
    #[serde(default)]
    pub stagger: Option<Stagger>,
}

impl Timing {
    pub fn new(duration: f32, ease: Easing) -> Self {
        Self {
            duration,
            delay: 0.0,
            ease,
            stagger: None,
        }
    }

    pub fn with_stagger(mut self, stagger: Stagger) -> Self {
        self.stagger = Some(stagger);
        self
    }

    /// Time until the last of `count` targets settles.
    pub fn total_duration(&self, count: usize) -> f32 {
        let span = self.stagger.map_or(0.0, |s| s.span(count));
        self.delay + span + self.duration
    }
}

/// A preset plus its timing, as written in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationSpec {
    pub preset: Preset,
    #[serde(flatten)]
    pub timing: Timing,
}

impl AnimationSpec {
    /// Runs the preset on `count` targets.
    pub fn build(&self, count: usize) -> AnimationGroup {
        let (from, to) = self.preset.keyframes();
        AnimationGroup::new(vec![from; count], to, &self.timing)
    }
}

struct Track {
    opacity: Tween,
    offset_y: Tween,
    scale: Tween,
}

impl Track {
    fn new(from: Style, to: Style, timing: &Timing, delay: f32) -> Self {
        let tween = |a: f32, b: f32| Tween::new(timing.ease, a, b, timing.duration).with_delay(delay);
        Self {
            opacity: tween(from.opacity, to.opacity),
            offset_y: tween(from.offset_y, to.offset_y),
            scale: tween(from.scale, to.scale),
        }
    }

    fn apply(&mut self, dt: f32) {
        self.opacity.apply(dt);
        self.offset_y.apply(dt);
        self.scale.apply(dt);
    }

    fn finish(&mut self) {
        self.opacity.finish();
        self.offset_y.finish();
        self.scale.finish();
    }

    fn style(&self) -> Style {
        Style {
            opacity: self.opacity.value(),
            offset_y: self.offset_y.value(),
            scale: self.scale.value(),
        }
    }

    fn is_complete(&self) -> bool {
        self.opacity.is_complete() && self.offset_y.is_complete() && self.scale.is_complete()
    }
}

/// One animation applied to a group of targets, each target starting from
/// its own style and converging on a shared end style.
pub struct AnimationGroup {
    tracks: Vec<Track>,
    total_duration: f32,
}

impl AnimationGroup {
    pub fn new(starts: Vec<Style>, end: Style, timing: &Timing) -> Self {
        let count = starts.len();
        let delays = timing
            .stagger
            .map(|s| s.delays(count))
            .unwrap_or_else(|| vec![0.0; count]);

        let tracks = starts
            .into_iter()
            .zip(delays)
            .map(|(start, stagger_delay)| Track::new(start, end, timing, timing.delay + stagger_delay))
            .collect();

        Self {
            tracks,
            total_duration: timing.total_duration(count),
        }
    }

    /// Advances every target by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        for track in &mut self.tracks {
            track.apply(dt);
        }
    }

    /// Jumps every target to its end style.
    pub fn finish(&mut self) {
        for track in &mut self.tracks {
            track.finish();
        }
    }

    pub fn style(&self, index: usize) -> Option<Style> {
        self.tracks.get(index).map(Track::style)
    }

    pub fn styles(&self) -> Vec<Style> {
        self.tracks.iter().map(Track::style).collect()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn total_duration(&self) -> f32 {
        self.total_duration
    }

    pub fn is_complete(&self) -> bool {
        self.tracks.iter().all(Track::is_complete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staggered_targets_settle_in_order() {
        let timing = Timing::new(0.4, Easing::CubicOut).with_stagger(Stagger::each(0.1));
        let mut group = AnimationGroup::new(vec![Style::HIDDEN; 3], Style::VISIBLE, &timing);

        group.advance(0.45);
        let styles = group.styles();
        assert_eq!(styles[0].opacity, 1.0);
        assert!(styles[1].opacity < 1.0);
        assert!(styles[2].opacity < styles[1].opacity);
        assert!(!group.is_complete());

        group.advance(0.2);
        assert!(group.is_complete());
        assert!(group.styles().iter().all(|s| *s == Style::VISIBLE));
    }

    #[test]
    fn total_duration_includes_delay_and_stagger() {
        let mut timing = Timing::new(0.5, Easing::Linear).with_stagger(Stagger::each(0.1));
        timing.delay = 0.2;
        assert!((timing.total_duration(4) - 1.0).abs() < 1e-5);
        let group = AnimationGroup::new(vec![Style::VISIBLE; 4], Style::HIDDEN, &timing);
        assert!((group.total_duration() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn targets_start_from_their_own_style() {
        let timing = Timing::new(1.0, Easing::Linear);
        let starts = vec![Style::VISIBLE, Style::HIDDEN.offset(10.0)];
        let group = AnimationGroup::new(starts, Style::VISIBLE, &timing);
        assert_eq!(group.style(0), Some(Style::VISIBLE));
        assert_eq!(group.style(1).map(|s| s.offset_y), Some(10.0));
        assert_eq!(group.style(2), None);
    }

    #[test]
    fn spec_builds_group_from_config() {
        let spec: AnimationSpec = serde_json::from_str(
            r#"{
                "preset": {"kind": "fade_up", "distance": 24.0},
                "duration": 0.6,
                "ease": "power2.out",
                "stagger": {"each": 0.1, "from": "center"}
            }"#,
        )
        .unwrap();
        assert_eq!(spec.timing.ease, Easing::CubicOut);

        let mut group = spec.build(3);
        assert_eq!(group.len(), 3);
        assert_eq!(group.style(0).map(|s| s.offset_y), Some(24.0));
        group.advance(spec.timing.total_duration(3) + 0.01);
        assert!(group.is_complete());
    }

    #[test]
    fn finish_settles_everything() {
        let timing = Timing::new(2.0, Easing::SineInOut).with_stagger(Stagger::each(0.5));
        let mut group = AnimationGroup::new(vec![Style::VISIBLE; 2], Style::HIDDEN, &timing);
        group.finish();
        assert!(group.is_complete());
        assert_eq!(group.style(1), Some(Style::HIDDEN));
    }
}
