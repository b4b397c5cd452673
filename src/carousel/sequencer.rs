use serde::{Deserialize, Serialize};
use std::mem;
use tracing::debug;

use crate::animation::{AnimationGroup, Easing, Stagger, Style, Timing};
use crate::carousel::slide::SlideContent;
use crate::constants::*;

/// Hero regions whose content follows the active slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Title,
    PrimaryAction,
    SecondaryAction,
    InfoCard,
}

impl Region {
    pub const ALL: [Region; 4] = [
        Region::Title,
        Region::PrimaryAction,
        Region::SecondaryAction,
        Region::InfoCard,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

pub const REGION_COUNT: usize = Region::ALL.len();

/// Fade-out and fade-in timing of a slide change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionTiming {
    pub fade_out: Timing,
    pub fade_in: Timing,
    /// Downward offset of faded-out regions, in pixels
    pub offset: f32,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            fade_out: Timing::new(FADE_OUT_DURATION, Easing::CubicIn),
            fade_in: Timing::new(FADE_IN_DURATION, Easing::CubicOut)
                .with_stagger(Stagger::each(FADE_IN_STAGGER)),
            offset: FADE_OFFSET,
        }
    }
}

impl TransitionTiming {
    pub fn fade_out_duration(&self) -> f32 {
        self.fade_out.total_duration(REGION_COUNT)
    }

    pub fn fade_in_duration(&self) -> f32 {
        self.fade_in.total_duration(REGION_COUNT)
    }

    /// Time from the start of a transition to its commit.
    pub fn total_duration(&self) -> f32 {
        self.fade_out_duration() + self.fade_in_duration()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    Idle,
    FadingOut,
    FadingIn,
}

enum Phase {
    Idle,
    FadingOut {
        target: usize,
        incoming: SlideContent,
        group: AnimationGroup,
        elapsed: f32,
    },
    FadingIn {
        target: usize,
        group: AnimationGroup,
        elapsed: f32,
    },
}

/// Runs fade-out, content swap and fade-in over the hero regions.
///
/// Owns what the regions currently display. Re-entrancy is prevented by the
/// state store, so `run` is only ever called while idle.
pub struct TransitionSequencer {
    timing: TransitionTiming,
    content: SlideContent,
    styles: [Style; REGION_COUNT],
    phase: Phase,
}

impl TransitionSequencer {
    pub fn new(timing: TransitionTiming) -> Self {
        Self {
            timing,
            content: SlideContent::default(),
            styles: [Style::VISIBLE; REGION_COUNT],
            phase: Phase::Idle,
        }
    }

    /// Displays `content` at once, without any fade.
    pub fn show(&mut self, content: SlideContent) {
        self.content = content;
        self.styles = [Style::VISIBLE; REGION_COUNT];
        self.phase = Phase::Idle;
    }

    /// Starts the sequence toward `target`.
    ///
    /// Without animation the swap happens immediately and the target is
    /// returned as already complete.
    pub fn run(&mut self, target: usize, incoming: SlideContent, animate: bool) -> Option<usize> {
        if !animate {
            debug!(target, "instant transition");
            self.show(incoming);
            return Some(target);
        }

        debug!(target, "transition started");
        let end = Style::HIDDEN.offset(self.timing.offset);
        let group = AnimationGroup::new(self.styles.to_vec(), end, &self.timing.fade_out);
        self.phase = Phase::FadingOut {
            target,
            incoming,
            group,
            elapsed: 0.0,
        };
        None
    }

    /// Advances the running sequence. Returns the target index once the
    /// whole sequence has elapsed.
    pub fn update(&mut self, dt: f32) -> Option<usize> {
        let mut remaining = dt;

        loop {
            match mem::replace(&mut self.phase, Phase::Idle) {
                Phase::Idle => return None,
                Phase::FadingOut {
                    target,
                    incoming,
                    mut group,
                    elapsed,
                } => {
                    let left = (self.timing.fade_out_duration() - elapsed).max(0.0);
                    if remaining < left {
                        group.advance(remaining);
                        self.copy_styles(&group);
                        self.phase = Phase::FadingOut {
                            target,
                            incoming,
                            group,
                            elapsed: elapsed + remaining,
                        };
                        return None;
                    }
                    remaining -= left;

                    // Midpoint: regions are hidden, swap what they show
                    group.finish();
                    self.copy_styles(&group);
                    self.content = incoming;
                    debug!(target, "content swapped");

                    let group = AnimationGroup::new(self.styles.to_vec(), Style::VISIBLE, &self.timing.fade_in);
                    self.phase = Phase::FadingIn {
                        target,
                        group,
                        elapsed: 0.0,
                    };
                }
                Phase::FadingIn {
                    target,
                    mut group,
                    elapsed,
                } => {
                    let left = (self.timing.fade_in_duration() - elapsed).max(0.0);
                    if remaining < left {
                        group.advance(remaining);
                        self.copy_styles(&group);
                        self.phase = Phase::FadingIn {
                            target,
                            group,
                            elapsed: elapsed + remaining,
                        };
                        return None;
                    }

                    group.finish();
                    self.copy_styles(&group);
                    debug!(target, "transition complete");
                    return Some(target);
                }
            }
        }
    }

    fn copy_styles(&mut self, group: &AnimationGroup) {
        for (slot, style) in self.styles.iter_mut().zip(group.styles()) {
            *slot = style;
        }
    }

    pub fn content(&self) -> &SlideContent {
        &self.content
    }

    pub fn style(&self, region: Region) -> Style {
        self.styles[region.index()]
    }

    pub fn styles(&self) -> [Style; REGION_COUNT] {
        self.styles
    }

    pub fn phase(&self) -> TransitionPhase {
        match self.phase {
            Phase::Idle => TransitionPhase::Idle,
            Phase::FadingOut { .. } => TransitionPhase::FadingOut,
            Phase::FadingIn { .. } => TransitionPhase::FadingIn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pet::PetSummary;

    fn content(index: usize, name: &str) -> SlideContent {
        SlideContent::for_pet(index, &PetSummary::new(index as u32 + 1, name, 2, "Mixed"))
    }

    fn sequencer() -> TransitionSequencer {
        let mut sequencer = TransitionSequencer::new(TransitionTiming::default());
        sequencer.show(content(0, "Jarvis"));
        sequencer
    }

    #[test]
    fn default_sequence_lasts_about_eight_tenths() {
        let total = TransitionTiming::default().total_duration();
        assert!((total - 0.8).abs() < 1e-4, "total {total}");
    }

    #[test]
    fn old_content_stays_until_midpoint() {
        let mut seq = sequencer();
        assert_eq!(seq.run(1, content(1, "Aria"), true), None);

        assert_eq!(seq.update(0.15), None);
        assert_eq!(seq.phase(), TransitionPhase::FadingOut);
        assert_eq!(seq.content().title, "JARVIS");
        let title = seq.style(Region::Title);
        assert!(title.opacity < 1.0 && title.opacity > 0.0);
        assert!(title.offset_y > 0.0);

        assert_eq!(seq.update(0.2), None);
        assert_eq!(seq.phase(), TransitionPhase::FadingIn);
        assert_eq!(seq.content().title, "ARIA");
        assert_eq!(seq.content().counter, "02");
    }

    #[test]
    fn regions_settle_in_sequence() {
        let mut seq = sequencer();
        seq.run(1, content(1, "Aria"), true);
        seq.update(0.3 + 0.2);
        let title = seq.style(Region::Title).opacity;
        let card = seq.style(Region::InfoCard).opacity;
        assert!(title > card, "title {title} card {card}");
    }

    #[test]
    fn completes_after_full_duration() {
        let mut seq = sequencer();
        seq.run(2, content(2, "Thor"), true);
        let mut done = None;
        for _ in 0..60 {
            if let Some(target) = seq.update(1.0 / 60.0) {
                done = Some(target);
                break;
            }
        }
        assert_eq!(done, Some(2));
        assert_eq!(seq.phase(), TransitionPhase::Idle);
        assert!(seq.styles().iter().all(|s| *s == Style::VISIBLE));
    }

    #[test]
    fn one_large_step_runs_the_whole_sequence() {
        let mut seq = sequencer();
        seq.run(3, content(3, "Luna"), true);
        assert_eq!(seq.update(5.0), Some(3));
        assert_eq!(seq.content().title, "LUNA");
        assert_eq!(seq.update(1.0), None);
    }

    #[test]
    fn instant_run_swaps_immediately() {
        let mut seq = sequencer();
        assert_eq!(seq.run(4, content(4, "Atlas"), false), Some(4));
        assert_eq!(seq.content().title, "ATLAS");
        assert_eq!(seq.phase(), TransitionPhase::Idle);
    }
}
