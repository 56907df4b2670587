//! Request specification types.
//!
//! A [`GenerationRequestSpec`] is an immutable snapshot of the user's WELL
//! feature selections for a single generation request. It is constructed
//! once at the submission boundary, passed by reference into the prompt
//! composer and the backend call, and dropped when the response is handled.

use serde::{Deserialize, Serialize};

/// Optional visual-style modifier appended to the prompt and sent to the
/// backend as the `lora` form field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleHint {
    /// No style hint; the style clause is omitted from the prompt and the
    /// wire value is the literal string `"None"`.
    #[default]
    None,
    PastelMix,
    ModernArchitecture,
    InteriorStudio,
}

impl StyleHint {
    /// The hyphenated label sent to the backend in the `lora` field.
    pub fn wire_label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::PastelMix => "pastel-mix",
            Self::ModernArchitecture => "modern-architecture",
            Self::InteriorStudio => "interior-studio",
        }
    }

    /// The label as it appears inside the prompt: hyphens replaced by spaces.
    ///
    /// Only meaningful for non-`None` variants; the composer never asks for
    /// the `None` label.
    pub fn prompt_label(self) -> String {
        self.wire_label().replace('-', " ")
    }
}

/// One user submission's worth of WELL feature selections.
///
/// Numeric fields are only meaningful when their companion toggle is set
/// (`lux` with `daylight_enabled`, and so on); `stair_width_m` is always
/// used. Range constraints (lux 100-1000, percentages 0-100, noise
/// 20-70 dB, stair width 0.5-3.0 m) are enforced at the input boundary,
/// not here.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationRequestSpec {
    /// Maximize daylight through large windows.
    pub daylight_enabled: bool,
    /// Ambient light level in lux.
    pub lux: u32,
    /// Add indoor plants.
    pub plants_enabled: bool,
    /// Greenery area coverage in percent.
    pub greenery_pct: u8,
    /// Use natural wood materials.
    pub wood_enabled: bool,
    /// Wood material coverage in percent.
    pub wood_pct: u8,
    /// Create a relaxation lounge area.
    pub lounge_enabled: bool,
    /// Improve acoustic comfort with panels.
    pub acoustic_enabled: bool,
    /// Target noise level in dB.
    pub noise_db: u32,
    /// Central staircase width in metres; always part of the prompt.
    pub stair_width_m: f64,
    /// Optional visual style.
    pub style_hint: StyleHint,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_labels_match_backend_vocabulary() {
        assert_eq!(StyleHint::None.wire_label(), "None");
        assert_eq!(StyleHint::PastelMix.wire_label(), "pastel-mix");
        assert_eq!(
            StyleHint::ModernArchitecture.wire_label(),
            "modern-architecture"
        );
        assert_eq!(StyleHint::InteriorStudio.wire_label(), "interior-studio");
    }

    #[test]
    fn prompt_label_replaces_hyphens_with_spaces() {
        assert_eq!(StyleHint::PastelMix.prompt_label(), "pastel mix");
        assert_eq!(
            StyleHint::ModernArchitecture.prompt_label(),
            "modern architecture"
        );
        assert_eq!(StyleHint::InteriorStudio.prompt_label(), "interior studio");
    }
}
