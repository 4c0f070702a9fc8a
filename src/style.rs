//! Surface options passed through to render backends.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::render::Color;

/// Background used when none is configured.
pub const DEFAULT_BACKGROUND: u32 = 0xefefef;

/// Options for the drawing surface.
///
/// These have no effect on the coordinate transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotOptions {
    /// Fill painted beneath every layer.
    pub background: Color,
    /// Request antialiased rendering from the backend.
    pub antialias: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            background: Color::from_rgb_hex(DEFAULT_BACKGROUND),
            antialias: true,
        }
    }
}

impl PlotOptions {
    /// Parse options from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_light_grey_antialiased_surface() {
        let options = PlotOptions::default();
        assert_eq!(options.background.to_rgba_hex(), 0xefefefff);
        assert!(options.antialias);
    }

    #[test]
    fn json_overrides_single_fields() {
        let options = PlotOptions::from_json(r#"{"background": "0x202020"}"#).unwrap();
        assert_eq!(options.background, Color::from_rgb_hex(0x202020));
        assert!(options.antialias);
        assert!(PlotOptions::from_json(r#"{"background": "nope"}"#).is_err());
    }
}
