use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Where the stagger wave starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaggerFrom {
    #[default]
    Start,
    End,
    Center,
    Edges,
    Random,
}

/// Incremental per-target delay for a group animating together.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Stagger {
    /// Seconds between two consecutive steps of the wave
    pub each: f32,
    #[serde(default)]
    pub from: StaggerFrom,
}

impl Stagger {
    pub fn each(each: f32) -> Self {
        Self {
            each,
            from: StaggerFrom::Start,
        }
    }

    pub fn starting_at(mut self, from: StaggerFrom) -> Self {
        self.from = from;
        self
    }

    /// Delay of every target, in target order.
    pub fn delays(&self, count: usize) -> Vec<f32> {
        self.delays_with(count, &mut rand::rng())
    }

    pub fn delays_with<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<f32> {
        if count == 0 {
            return Vec::new();
        }

        let last = (count - 1) as f32;
        let mid = last / 2.0;
        let each = self.each.max(0.0);

        match self.from {
            StaggerFrom::Start => (0..count).map(|i| i as f32 * each).collect(),
            StaggerFrom::End => (0..count).map(|i| (last - i as f32) * each).collect(),
            StaggerFrom::Center => (0..count)
                .map(|i| (i as f32 - mid).abs() * each)
                .collect(),
            StaggerFrom::Edges => (0..count)
                .map(|i| (mid - (i as f32 - mid).abs()) * each)
                .collect(),
            StaggerFrom::Random => {
                let mut steps: Vec<usize> = (0..count).collect();
                steps.shuffle(rng);
                steps.into_iter().map(|step| step as f32 * each).collect()
            }
        }
    }

    /// Largest delay the wave produces for `count` targets.
    pub fn span(&self, count: usize) -> f32 {
        if count == 0 {
            return 0.0;
        }
        let last = (count - 1) as f32;
        let each = self.each.max(0.0);
        match self.from {
            StaggerFrom::Start | StaggerFrom::End | StaggerFrom::Random => last * each,
            StaggerFrom::Center | StaggerFrom::Edges => (last / 2.0) * each,
        }
    }
}
