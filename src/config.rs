//! Application configuration.
//!
//! Precedence, highest first: command-line flags, the JSON config file,
//! built-in defaults. Every field has a default so a partial file is valid.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::carousel::CarouselOptions;
use crate::constants::{RENDER_HEIGHT, RENDER_WIDTH};
use crate::error::{LoadError, LoadResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: RENDER_WIDTH,
            height: RENDER_HEIGHT,
            title: "Find Your Companion".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    /// JSON array of pets; the built-in samples are used when absent
    pub pets_file: Option<PathBuf>,
    /// Photos matched to slides by sorted file name
    pub photos_dir: Option<PathBuf>,
    pub carousel: CarouselOptions,
    pub preferences_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            pets_file: None,
            photos_dir: None,
            carousel: CarouselOptions::default(),
            preferences_file: PathBuf::from("preferences.json"),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> LoadResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        let config: Self = serde_json::from_str(&text).map_err(|e| LoadError::json(path, e))?;
        config.validate()?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn validate(&self) -> LoadResult<()> {
        if self.carousel.autoplay_delay_ms == 0 {
            return Err(LoadError::Invalid {
                what: "carousel.autoplay_delay_ms",
                message: "must be positive".to_string(),
            });
        }
        if self.window.width <= 0 || self.window.height <= 0 {
            return Err(LoadError::Invalid {
                what: "window",
                message: format!("size {}x{} is not drawable", self.window.width, self.window.height),
            });
        }
        let timing = &self.carousel.transition;
        if timing.fade_out.duration < 0.0 || timing.fade_in.duration < 0.0 {
            return Err(LoadError::Invalid {
                what: "carousel.transition",
                message: "durations cannot be negative".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Easing;
    use crate::constants::AUTOPLAY_DELAY_MS;
    use std::io::Write;

    fn write_config(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn empty_object_gives_defaults() {
        let file = write_config("{}");
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.carousel.autoplay_delay_ms, AUTOPLAY_DELAY_MS);
        assert!(config.carousel.animate);
    }

    #[test]
    fn partial_file_overrides_only_given_fields() {
        let file = write_config(
            r#"{
                "pets_file": "pets.json",
                "carousel": {
                    "autoplay_delay_ms": 4000,
                    "transition": {
                        "fade_out": {"duration": 0.2, "ease": "power1.in"}
                    }
                }
            }"#,
        );
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.pets_file, Some(PathBuf::from("pets.json")));
        assert_eq!(config.carousel.autoplay_delay_ms, 4000);
        assert!(config.carousel.autoplay);
        assert_eq!(config.carousel.transition.fade_out.ease, Easing::QuadIn);
        assert_eq!(config.carousel.transition.fade_out.duration, 0.2);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn power3_curves_load() {
        let file = write_config(
            r#"{
                "carousel": {
                    "transition": {
                        "fade_out": {"duration": 0.3, "ease": "power3.in"},
                        "fade_in": {"duration": 0.44, "ease": "power3.inOut"}
                    }
                }
            }"#,
        );
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.carousel.transition.fade_out.ease, Easing::ExpoIn);
        assert_eq!(config.carousel.transition.fade_in.ease, Easing::ExpoInOut);
    }

    #[test]
    fn zero_delay_is_invalid() {
        let file = write_config(r#"{"carousel": {"autoplay_delay_ms": 0}}"#);
        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Invalid { what: "carousel.autoplay_delay_ms", .. }));
    }

    #[test]
    fn malformed_json_is_reported() {
        let file = write_config("{ not json");
        assert!(matches!(AppConfig::load(file.path()), Err(LoadError::Json { .. })));
    }
}
