//! The one locally persisted setting.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

use crate::error::{LoadError, LoadResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Swap slides without fading
    pub reduced_motion: bool,
}

impl Preferences {
    /// Reads preferences, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> LoadResult<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no saved preferences");
                return Ok(Self::default());
            }
            Err(e) => return Err(LoadError::io(path, e)),
        };
        serde_json::from_str(&text).map_err(|e| LoadError::json(path, e))
    }

    pub fn save(&self, path: &Path) -> LoadResult<()> {
        let text = serde_json::to_string_pretty(self).map_err(|e| LoadError::json(path, e))?;
        fs::write(path, text).map_err(|e| LoadError::io(path, e))?;
        debug!(path = %path.display(), reduced_motion = self.reduced_motion, "preferences saved");
        Ok(())
    }
}
