use serde::{Deserialize, Serialize};

/// Animated properties of one target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub opacity: f32,
    /// Vertical offset in pixels, positive is downward
    pub offset_y: f32,
    pub scale: f32,
}

impl Style {
    pub const VISIBLE: Style = Style {
        opacity: 1.0,
        offset_y: 0.0,
        scale: 1.0,
    };

    pub const HIDDEN: Style = Style {
        opacity: 0.0,
        offset_y: 0.0,
        scale: 1.0,
    };

    pub fn offset(mut self, offset_y: f32) -> Self {
        self.offset_y = offset_y;
        self
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// Declarative entrance/exit effects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Preset {
    FadeIn,
    FadeOut,
    /// Rise into place from `distance` pixels below
    FadeUp { distance: f32 },
    /// Sink `distance` pixels while fading out
    FadeDown { distance: f32 },
    ScaleIn { from: f32 },
}

impl Preset {
    /// Start and end style of the effect.
    pub fn keyframes(self) -> (Style, Style) {
        match self {
            Preset::FadeIn => (Style::HIDDEN, Style::VISIBLE),
            Preset::FadeOut => (Style::VISIBLE, Style::HIDDEN),
            Preset::FadeUp { distance } => (Style::HIDDEN.offset(distance), Style::VISIBLE),
            Preset::FadeDown { distance } => (Style::VISIBLE, Style::HIDDEN.offset(distance)),
            Preset::ScaleIn { from } => (
                Style {
                    scale: from,
                    ..Style::HIDDEN
                },
                Style::VISIBLE,
            ),
        }
    }
}
