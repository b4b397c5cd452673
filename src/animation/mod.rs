//! Thin animation layer over raylib's easing functions.
//!
//! Callers describe an effect declaratively ([`AnimationSpec`]: a [`Preset`]
//! plus [`Timing`]) and get back an [`AnimationGroup`] they advance with frame
//! deltas. Curve evaluation is left to raylib.

pub mod easing;
pub mod group;
pub mod preset;
pub mod stagger;
pub mod tween;

pub use easing::Easing;
pub use group::{AnimationGroup, AnimationSpec, Timing};
pub use preset::{Preset, Style};
pub use stagger::{Stagger, StaggerFrom};
pub use tween::Tween;
