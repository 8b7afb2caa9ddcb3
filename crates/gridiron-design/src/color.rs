//! Hex color lightening and classification rules.
//!
//! Classification is total and mutually exclusive: every well-formed hex
//! color maps to exactly one luminance bucket and exactly one psychology
//! sentence. Rule order matters for the psychology classifier and is part
//! of the contract (red, blue, green, yellow, then the unique fallback).

use gridiron_types::HexColor;

/// Lighten a color by a percentage of full scale.
///
/// Each channel gains `percent * 255 / 100` (integer math), clamped to
/// 255, and the result is re-encoded as lowercase hex. Lightening is
/// monotonic non-decreasing per channel and saturates at `#ffffff` for
/// any percentage large enough.
pub fn lighten_color(color: &HexColor, percent: u32) -> HexColor {
    let delta = percent.saturating_mul(255) / 100;
    let lift = |c: u8| -> u8 {
        let raised = u32::from(c).saturating_add(delta);
        u8::try_from(raised.min(255)).unwrap_or(u8::MAX)
    };
    let (r, g, b) = color.rgb();
    HexColor::from_rgb(lift(r), lift(g), lift(b))
}

/// Bucket a color by average-channel luminance.
///
/// Average of R, G, B over 255: below 0.3 is dark-dominant, above 0.7 is
/// light-dominant, everything else is balanced.
pub fn color_dominance(color: &HexColor) -> &'static str {
    let (r, g, b) = color.rgb();
    let sum = u16::from(r) + u16::from(g) + u16::from(b);
    let lightness = f64::from(sum) / (3.0 * 255.0);

    if lightness < 0.3 {
        "Dark-dominant (Strong, Authoritative)"
    } else if lightness > 0.7 {
        "Light-dominant (Clean, Modern)"
    } else {
        "Balanced (Versatile, Dynamic)"
    }
}

/// Classify a color into a psychology sentence.
///
/// Rules are evaluated in order; the first hit wins. Red, blue, and green
/// require that channel to strictly exceed both others and exceed 150;
/// yellow requires strong red and green with weak blue.
pub fn color_psychology(color: &HexColor) -> &'static str {
    let (r, g, b) = color.rgb();

    if r > g && r > b && r > 150 {
        "Red conveys power, aggression, and passion"
    } else if b > r && b > g && b > 150 {
        "Blue represents trust, stability, and professionalism"
    } else if g > r && g > b && g > 150 {
        "Green symbolizes growth, nature, and freshness"
    } else if r > 200 && g > 200 && b < 100 {
        "Yellow/Gold represents excellence, energy, and optimism"
    } else {
        "Unique color choice for distinctive brand identity"
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn hex(s: &str) -> HexColor {
        HexColor::parse(s).unwrap()
    }

    #[test]
    fn lighten_black_by_twenty_percent() {
        assert_eq!(lighten_color(&hex("#000000"), 20).as_str(), "#333333");
    }

    #[test]
    fn lighten_is_monotonic_per_channel() {
        let base = hex("#102030");
        let mut previous = base.rgb();
        for percent in [0, 5, 10, 25, 50, 75, 100] {
            let (r, g, b) = lighten_color(&base, percent).rgb();
            assert!(r >= previous.0 && g >= previous.1 && b >= previous.2);
            previous = (r, g, b);
        }
    }

    #[test]
    fn lighten_clamps_at_white() {
        assert_eq!(lighten_color(&hex("#fafafa"), 20).as_str(), "#ffffff");
        assert_eq!(lighten_color(&hex("#000000"), 100).as_str(), "#ffffff");
        assert_eq!(lighten_color(&hex("#c0ffee"), 400).as_str(), "#ffffff");
    }

    #[test]
    fn lighten_re_encodes_lowercase() {
        assert_eq!(lighten_color(&hex("#AA0000"), 0).as_str(), "#aa0000");
    }

    #[test]
    fn dominance_buckets() {
        assert_eq!(
            color_dominance(&hex("#000000")),
            "Dark-dominant (Strong, Authoritative)"
        );
        assert_eq!(
            color_dominance(&hex("#ffffff")),
            "Light-dominant (Clean, Modern)"
        );
        assert_eq!(
            color_dominance(&hex("#808080")),
            "Balanced (Versatile, Dynamic)"
        );
    }

    #[test]
    fn psychology_rule_order() {
        assert_eq!(
            color_psychology(&hex("#C60C30")),
            "Red conveys power, aggression, and passion"
        );
        assert_eq!(
            color_psychology(&hex("#0033A0")),
            "Blue represents trust, stability, and professionalism"
        );
        assert_eq!(
            color_psychology(&hex("#00B140")),
            "Green symbolizes growth, nature, and freshness"
        );
        // Gold with a red edge (#FFD700) hits the red rule first; pure
        // yellow needs equal red and green so the red rule passes over it.
        assert_eq!(
            color_psychology(&hex("#FFD700")),
            "Red conveys power, aggression, and passion"
        );
        assert_eq!(
            color_psychology(&hex("#FFFF00")),
            "Yellow/Gold represents excellence, energy, and optimism"
        );
        assert_eq!(
            color_psychology(&hex("#241773")),
            "Unique color choice for distinctive brand identity"
        );
    }

    #[test]
    fn red_requires_strict_dominance_over_150() {
        // Equal channels never classify as a hue.
        assert_eq!(
            color_psychology(&hex("#969696")),
            "Unique color choice for distinctive brand identity"
        );
        // Dominant but dim red misses the 150 threshold.
        assert_eq!(
            color_psychology(&hex("#900000")),
            "Unique color choice for distinctive brand identity"
        );
    }

    #[test]
    fn classification_is_total_over_a_channel_sweep() {
        let dominance = [
            "Dark-dominant (Strong, Authoritative)",
            "Light-dominant (Clean, Modern)",
            "Balanced (Versatile, Dynamic)",
        ];
        let psychology = [
            "Red conveys power, aggression, and passion",
            "Blue represents trust, stability, and professionalism",
            "Green symbolizes growth, nature, and freshness",
            "Yellow/Gold represents excellence, energy, and optimism",
            "Unique color choice for distinctive brand identity",
        ];
        for step in 0..=17u8 {
            let c = step.wrapping_mul(15);
            let color = HexColor::from_rgb(c, c.wrapping_add(40), c.wrapping_add(80));
            assert!(dominance.contains(&color_dominance(&color)));
            assert!(psychology.contains(&color_psychology(&color)));
        }
    }
}
