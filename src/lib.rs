//! Hero carousel and page widgets for a pet-adoption site.
//!
//! The library is host-agnostic: the host forwards input events and frame
//! deltas, then draws the state the carousel projects. The bundled binary is
//! a raylib host.

pub mod animation;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod error;
pub mod pet;
pub mod preferences;
pub mod widgets;

pub use carousel::{Carousel, CarouselOptions, CarouselView, InputEvent};
pub use config::AppConfig;
pub use error::{LoadError, LoadResult};
pub use pet::PetSummary;
pub use preferences::Preferences;
