//! Prompt composition.
//!
//! This module contains the deterministic mapping from a
//! [`GenerationRequestSpec`] to the natural-language prompt sent to the
//! generation backend.
//!
//! # Clause order
//!
//! The clause order is fixed regardless of which toggles are active:
//! daylight, plants, wood, lounge, acoustics, staircase, realism
//! qualifier, style hint. Disabled toggles omit their clause; nothing is
//! ever reordered. The staircase clause and the realism qualifier are
//! always present.

use crate::spec::{GenerationRequestSpec, StyleHint};

/// Composes the generation prompt for one request.
///
/// Pure and total: no I/O, deterministic for a given spec, and panic-free
/// for any spec whose numeric fields are within their documented ranges.
/// Out-of-range values are not rejected here; they simply appear verbatim
/// in the output.
///
/// # Example
///
/// ```ignore
/// let prompt = compose(&spec);
/// assert!(prompt.ends_with("architectural interior photography"));
/// ```
pub fn compose(spec: &GenerationRequestSpec) -> String {
    let mut clauses: Vec<String> = Vec::with_capacity(8);

    if spec.daylight_enabled {
        clauses.push(format!(
            "soft natural daylight filtering through large windows, {} lux",
            spec.lux
        ));
    }
    if spec.plants_enabled {
        clauses.push(format!(
            "indoor plants with {}% area coverage",
            spec.greenery_pct
        ));
    }
    if spec.wood_enabled {
        clauses.push(format!(
            "natural wood surfaces covering {}%",
            spec.wood_pct
        ));
    }
    if spec.lounge_enabled {
        clauses.push("relaxation lounge with soft seating and calm textures".to_string());
    }
    if spec.acoustic_enabled {
        clauses.push(format!(
            "acoustic panels reducing noise to {} dB",
            spec.noise_db
        ));
    }

    clauses.push(format!(
        "central staircase with width {}m to promote movement",
        format_metres(spec.stair_width_m)
    ));
    clauses.push("ultra realistic, architectural interior photography".to_string());

    if spec.style_hint != StyleHint::None {
        clauses.push(format!("style hint: {}", spec.style_hint.prompt_label()));
    }

    clauses.join(", ")
}

/// Renders a width in metres with its natural decimal representation.
///
/// Whole numbers keep one decimal place (`2.0`, not `2`); fractional
/// values render as-is (`1.5`, not `1.50`).
fn format_metres(width: f64) -> String {
    if width == width.trunc() {
        format!("{width:.1}")
    } else {
        format!("{width}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A spec with every optional toggle off and neutral metric values.
    fn base_spec() -> GenerationRequestSpec {
        GenerationRequestSpec {
            daylight_enabled: false,
            lux: 500,
            plants_enabled: false,
            greenery_pct: 25,
            wood_enabled: false,
            wood_pct: 30,
            lounge_enabled: false,
            acoustic_enabled: false,
            noise_db: 40,
            stair_width_m: 1.5,
            style_hint: StyleHint::None,
        }
    }

    #[test]
    fn all_toggles_off_yields_only_unconditional_clauses() {
        let prompt = compose(&base_spec());
        assert_eq!(
            prompt,
            "central staircase with width 1.5m to promote movement, \
             ultra realistic, architectural interior photography"
        );
    }

    #[test]
    fn daylight_only_matches_end_to_end_example() {
        let spec = GenerationRequestSpec {
            daylight_enabled: true,
            lux: 700,
            stair_width_m: 2.0,
            ..base_spec()
        };
        assert_eq!(
            compose(&spec),
            "soft natural daylight filtering through large windows, 700 lux, \
             central staircase with width 2.0m to promote movement, \
             ultra realistic, architectural interior photography"
        );
    }

    #[test]
    fn clause_order_is_fixed_regardless_of_toggle_combination() {
        let spec = GenerationRequestSpec {
            daylight_enabled: true,
            plants_enabled: true,
            wood_enabled: true,
            lounge_enabled: true,
            acoustic_enabled: true,
            ..base_spec()
        };
        let prompt = compose(&spec);

        let daylight = prompt.find("soft natural daylight").unwrap();
        let plants = prompt.find("indoor plants").unwrap();
        let wood = prompt.find("natural wood surfaces").unwrap();
        let lounge = prompt.find("relaxation lounge").unwrap();
        let acoustic = prompt.find("acoustic panels").unwrap();
        let stairs = prompt.find("central staircase").unwrap();
        let realism = prompt.find("ultra realistic").unwrap();

        assert!(daylight < plants);
        assert!(plants < wood);
        assert!(wood < lounge);
        assert!(lounge < acoustic);
        assert!(acoustic < stairs);
        assert!(stairs < realism);
    }

    #[test]
    fn acoustics_never_precede_plants() {
        // The order is fixed by the algorithm, not by the order in which
        // the user happened to enable the features.
        let spec = GenerationRequestSpec {
            plants_enabled: true,
            acoustic_enabled: true,
            ..base_spec()
        };
        let prompt = compose(&spec);
        assert!(prompt.find("indoor plants").unwrap() < prompt.find("acoustic panels").unwrap());
    }

    #[test]
    fn style_hint_none_omits_style_clause() {
        assert!(!compose(&base_spec()).contains("style hint"));
    }

    #[test]
    fn style_hint_appends_exactly_one_clause_with_spaces() {
        let spec = GenerationRequestSpec {
            style_hint: StyleHint::PastelMix,
            ..base_spec()
        };
        let prompt = compose(&spec);
        assert!(prompt.ends_with(", style hint: pastel mix"));
        assert_eq!(prompt.matches("style hint").count(), 1);
        assert!(!prompt.contains("pastel-mix"));
    }

    #[test]
    fn numeric_interpolation_is_exact() {
        let spec = GenerationRequestSpec {
            daylight_enabled: true,
            lux: 500,
            acoustic_enabled: true,
            noise_db: 40,
            plants_enabled: true,
            greenery_pct: 25,
            wood_enabled: true,
            wood_pct: 30,
            stair_width_m: 1.5,
            ..base_spec()
        };
        let prompt = compose(&spec);
        assert!(prompt.contains("500 lux"));
        assert!(prompt.contains("25% area coverage"));
        assert!(prompt.contains("covering 30%"));
        assert!(prompt.contains("40 dB"));
        assert!(prompt.contains("width 1.5m"));
    }

    #[test]
    fn whole_metre_widths_keep_one_decimal_place() {
        assert_eq!(format_metres(2.0), "2.0");
        assert_eq!(format_metres(3.0), "3.0");
        assert_eq!(format_metres(1.5), "1.5");
        assert_eq!(format_metres(0.75), "0.75");
    }

    #[test]
    fn composition_is_idempotent() {
        let spec = GenerationRequestSpec {
            daylight_enabled: true,
            wood_enabled: true,
            style_hint: StyleHint::InteriorStudio,
            ..base_spec()
        };
        assert_eq!(compose(&spec), compose(&spec));
    }
}
