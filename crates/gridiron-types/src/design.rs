//! Derived design-description structures.
//!
//! Everything in this module is computed, never persisted: a
//! [`DesignConcept`] is fully determined by a team record and a
//! [`LogoStyle`], and is rebuilt fresh on every request. Fields that come
//! from fixed lookup tables are `&'static str`; fields interpolated from
//! team data are owned strings.

use serde::Serialize;

use crate::color::HexColor;

/// The three logo style variants the derivation library produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogoStyle {
    /// Clean, reduced design language.
    Minimalist,
    /// Vintage-inspired design language.
    Retro,
    /// Contemporary, gradient-heavy design language.
    Modern,
}

impl LogoStyle {
    /// All styles in the order variations are generated.
    pub const ALL: [Self; 3] = [Self::Minimalist, Self::Retro, Self::Modern];

    /// Lowercase key used in query parameters and variation maps.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Minimalist => "minimalist",
            Self::Retro => "retro",
            Self::Modern => "modern",
        }
    }

    /// Human-readable style label used in concept payloads.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Minimalist => "Minimalist",
            Self::Retro => "Retro Classic",
            Self::Modern => "Modern Dynamic",
        }
    }
}

/// Per-team design-elements analysis attached to catalog responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DesignElements {
    /// Visual motif family the mascot belongs to.
    pub primary_motif: &'static str,
    /// Luminance bucket of the primary color.
    pub color_dominance: &'static str,
    /// Founding-era design heritage bucket.
    pub historical_context: &'static str,
    /// Regional design influence matched from the city name.
    pub regional_influence: &'static str,
}

/// Color scheme for one style variant.
///
/// Serialized untagged so each variant produces exactly the key set the
/// dashboard expects (`additional` only for retro, gradient keys only for
/// modern).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ColorScheme {
    /// Two-color palette kept by the minimalist variant.
    Minimalist {
        /// Dominant color.
        primary: HexColor,
        /// Contrast color.
        accent: HexColor,
        /// Usage note for the palette.
        usage: &'static str,
    },
    /// Full palette plus a fixed vintage brown.
    Retro {
        /// Dominant color.
        primary: HexColor,
        /// Supporting color.
        secondary: HexColor,
        /// Contrast color.
        accent: HexColor,
        /// Fixed vintage-brown addition.
        additional: HexColor,
        /// Usage note for the palette.
        usage: &'static str,
    },
    /// Full palette plus a lightened gradient pair.
    Modern {
        /// Dominant color.
        primary: HexColor,
        /// Supporting color.
        secondary: HexColor,
        /// Contrast color.
        accent: HexColor,
        /// Gradient start (the primary color).
        gradient_start: HexColor,
        /// Gradient end (primary lightened by a fixed step).
        gradient_end: HexColor,
        /// Usage note for the palette.
        usage: &'static str,
    },
}

/// The design-elements block inside a [`DesignConcept`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConceptElements {
    /// Primary shape selected from the mascot tables.
    pub primary_shape: &'static str,
    /// Style-specific color scheme.
    pub color_scheme: ColorScheme,
    /// Typography descriptor.
    pub typography: &'static str,
    /// Visual-weight descriptor.
    pub visual_weight: &'static str,
    /// Complexity descriptor.
    pub complexity: &'static str,
}

/// Color application guidance inside the SVG instructions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorInstructions {
    /// Background fill or gradient description.
    pub background: String,
    /// Foreground fill description.
    pub foreground: String,
    /// Accent usage description.
    pub accent: String,
}

/// Typography guidance inside the SVG instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypographySpecs {
    /// Font family descriptor.
    pub font_family: &'static str,
    /// Font weight descriptor.
    pub weight: &'static str,
    /// Letterform style descriptor.
    pub style: &'static str,
}

/// Authoring instructions for rendering a concept as an SVG.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SvgInstructions {
    /// Canvas size in pixels (`WxH`).
    pub canvas_size: &'static str,
    /// Primary shape to render.
    pub primary_element: &'static str,
    /// Color application guidance.
    pub color_application: ColorInstructions,
    /// Typography guidance.
    pub typography_specs: TypographySpecs,
    /// Layout guidance for the composition.
    pub layout_guidelines: &'static str,
}

/// One complete derived design concept for a (team, style) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DesignConcept {
    /// Style label (e.g. "Retro Classic").
    pub style: &'static str,
    /// One-line style description.
    pub description: &'static str,
    /// Structured design-elements block.
    pub design_elements: ConceptElements,
    /// Narrative concept description interpolated from team data.
    pub concept_description: String,
    /// SVG authoring instructions.
    pub svg_instructions: SvgInstructions,
}

/// The three style variants produced by `generateLogoVariations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogoVariations {
    /// Minimalist variant.
    pub minimalist: DesignConcept,
    /// Retro variant.
    pub retro: DesignConcept,
    /// Modern variant.
    pub modern: DesignConcept,
}

/// Rationale block accompanying generated variations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DesignRationale {
    /// Sentence tying the franchise to its city and mascot.
    pub team_identity: String,
    /// Color psychology sentence for the primary color.
    pub color_significance: &'static str,
    /// Founding-era design heritage bucket.
    pub historical_context: &'static str,
    /// Mood list borrowed from the style profile.
    pub design_philosophy: &'static [&'static str],
}

/// Description of the team's current logo, as derived from static fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentLogoElements {
    /// Shape the mascot maps to, or the generic fallback.
    pub primary_element: &'static str,
    /// Primary/secondary color summary.
    pub color_usage: String,
    /// Founding-era design heritage bucket.
    pub style_era: &'static str,
    /// Fixed complexity assessment.
    pub complexity_level: &'static str,
}

/// Brand positioning commentary for a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandPositioning {
    /// Conference/division market slot.
    pub market_position: String,
    /// Fixed personality descriptor.
    pub brand_personality: &'static str,
    /// Fixed audience descriptor.
    pub target_audience: &'static str,
    /// Mascot/city differentiation sentence.
    pub differentiation: String,
}

/// The four analysis blocks returned by `getLogoAnalysis`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogoAnalysis {
    /// Current logo description.
    pub current_logo_elements: CurrentLogoElements,
    /// Color psychology sentence for the primary color.
    pub color_psychology: &'static str,
    /// Brand positioning commentary.
    pub brand_positioning: BrandPositioning,
    /// Static list of design opportunities.
    pub design_opportunities: &'static [&'static str],
}

/// The hand-authored style-guide constant returned by `getDesignProfile`.
///
/// Pure constant data: identical on every call, independent of the
/// catalog contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DesignProfile {
    /// Profile identifier.
    pub name: &'static str,
    /// Profile summary sentence.
    pub description: &'static str,
    /// Overall style descriptors.
    pub overall_style: &'static [&'static str],
    /// Common shape vocabulary.
    pub common_shapes: &'static [&'static str],
    /// Palette conventions.
    pub color_palettes: &'static [&'static str],
    /// Typography conventions.
    pub typography_style: &'static [&'static str],
    /// Recurring visual motifs.
    pub visual_motifs: &'static [&'static str],
    /// Rendering techniques.
    pub design_techniques: &'static [&'static str],
    /// Mood and atmosphere descriptors.
    pub mood_and_atmosphere: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn style_keys_and_labels() {
        assert_eq!(LogoStyle::Minimalist.key(), "minimalist");
        assert_eq!(LogoStyle::Retro.label(), "Retro Classic");
        assert_eq!(LogoStyle::Modern.label(), "Modern Dynamic");
        assert_eq!(LogoStyle::ALL.len(), 3);
    }

    #[test]
    fn color_scheme_serializes_variant_specific_keys() {
        let scheme = ColorScheme::Retro {
            primary: HexColor::parse("#002244").unwrap(),
            secondary: HexColor::parse("#869397").unwrap(),
            accent: HexColor::parse("#69BE28").unwrap(),
            additional: HexColor::parse("#8B4513").unwrap(),
            usage: "Rich, traditional color palette",
        };
        let value = serde_json::to_value(&scheme).unwrap();
        assert_eq!(value["additional"], "#8B4513");
        assert!(value.get("gradient_end").is_none());
    }
}
