//! Style-variant design concepts and the accompanying rationale.
//!
//! A [`DesignConcept`] is assembled from fixed templates keyed by
//! [`LogoStyle`] plus the team's palette and mascot. The narrative text is
//! plain string interpolation -- there is no generation model behind it.

use gridiron_types::{
    ColorInstructions, ColorScheme, ConceptElements, DesignConcept, DesignRationale, LogoStyle,
    LogoVariations, SvgInstructions, TeamRecord, TypographySpecs,
};

use crate::analysis::historical_context;
use crate::color::{color_psychology, lighten_color};
use crate::profile::design_profile;
use crate::shape::primary_shape;

/// Fixed vintage brown added to every retro palette.
const VINTAGE_BROWN: &str = "#8B4513";

/// Lightening step applied to the modern gradient end, in percent.
const GRADIENT_LIGHTEN_PERCENT: u32 = 20;

/// Build the complete design concept for one (team, style) pair.
pub fn design_concept(team: &TeamRecord, style: LogoStyle) -> DesignConcept {
    let shape = primary_shape(&team.mascot, Some(style));

    DesignConcept {
        style: style.label(),
        description: style_description(style),
        design_elements: ConceptElements {
            primary_shape: shape,
            color_scheme: color_scheme(team, style),
            typography: element_typography(style),
            visual_weight: visual_weight(style),
            complexity: complexity(style),
        },
        concept_description: concept_description(team, style),
        svg_instructions: SvgInstructions {
            canvas_size: "200x200",
            primary_element: shape,
            color_application: color_instructions(team, style),
            typography_specs: typography_specs(style),
            layout_guidelines: layout_guidelines(style),
        },
    }
}

/// Produce all three style variants for a team.
pub fn logo_variations(team: &TeamRecord) -> LogoVariations {
    LogoVariations {
        minimalist: design_concept(team, LogoStyle::Minimalist),
        retro: design_concept(team, LogoStyle::Retro),
        modern: design_concept(team, LogoStyle::Modern),
    }
}

/// Build the rationale block accompanying generated variations.
pub fn design_rationale(team: &TeamRecord) -> DesignRationale {
    DesignRationale {
        team_identity: format!(
            "The {} represent {} with a {} identity",
            team.name, team.city, team.mascot
        ),
        color_significance: color_psychology(&team.colors.primary),
        historical_context: historical_context(team.founded),
        design_philosophy: design_profile().mood_and_atmosphere,
    }
}

/// Style-specific color scheme transform.
///
/// Minimalist keeps {primary, accent}; retro adds the secondary and a
/// fixed vintage brown; modern adds a gradient pair ending at the primary
/// lightened by a fixed step.
fn color_scheme(team: &TeamRecord, style: LogoStyle) -> ColorScheme {
    let colors = &team.colors;
    match style {
        LogoStyle::Minimalist => ColorScheme::Minimalist {
            primary: colors.primary.clone(),
            accent: colors.accent.clone(),
            usage: "Two-color palette for maximum clarity",
        },
        LogoStyle::Retro => ColorScheme::Retro {
            primary: colors.primary.clone(),
            secondary: colors.secondary.clone(),
            accent: colors.accent.clone(),
            additional: vintage_brown(),
            usage: "Rich, traditional color palette",
        },
        LogoStyle::Modern => ColorScheme::Modern {
            primary: colors.primary.clone(),
            secondary: colors.secondary.clone(),
            accent: colors.accent.clone(),
            gradient_start: colors.primary.clone(),
            gradient_end: lighten_color(&colors.primary, GRADIENT_LIGHTEN_PERCENT),
            usage: "Dynamic gradients and modern color applications",
        },
    }
}

/// The vintage-brown constant as a validated color.
fn vintage_brown() -> gridiron_types::HexColor {
    // The literal is well-formed, so the fallback never fires.
    gridiron_types::HexColor::parse(VINTAGE_BROWN)
        .unwrap_or_else(|_| gridiron_types::HexColor::from_rgb(0x8B, 0x45, 0x13))
}

const fn style_description(style: LogoStyle) -> &'static str {
    match style {
        LogoStyle::Minimalist => "Clean, simplified design focusing on essential elements",
        LogoStyle::Retro => "Vintage-inspired design with traditional NFL aesthetics",
        LogoStyle::Modern => "Contemporary design with dynamic elements and gradients",
    }
}

const fn element_typography(style: LogoStyle) -> &'static str {
    match style {
        LogoStyle::Minimalist => "Sans-serif, clean letterforms",
        LogoStyle::Retro => "Serif or slab-serif, bold letterforms",
        LogoStyle::Modern => "Custom sans-serif with dynamic elements",
    }
}

const fn visual_weight(style: LogoStyle) -> &'static str {
    match style {
        LogoStyle::Minimalist => "Light to medium",
        LogoStyle::Retro => "Medium to heavy",
        LogoStyle::Modern => "Medium",
    }
}

const fn complexity(style: LogoStyle) -> &'static str {
    match style {
        LogoStyle::Minimalist => "Low",
        LogoStyle::Retro => "Medium",
        LogoStyle::Modern => "Medium to high",
    }
}

fn concept_description(team: &TeamRecord, style: LogoStyle) -> String {
    let mascot = &team.mascot;
    let city = &team.city;
    match style {
        LogoStyle::Minimalist => format!(
            "A clean, modern interpretation of the {mascot} identity, stripping away \
             unnecessary details to focus on the core essence of {city}'s team spirit. \
             Uses bold, simple shapes and limited colors for maximum impact and scalability."
        ),
        LogoStyle::Retro => format!(
            "Drawing inspiration from classic NFL design traditions, this vintage concept \
             celebrates the rich history of the {mascot} with traditional shapes, classic \
             typography, and time-honored design elements that evoke the golden era of football."
        ),
        LogoStyle::Modern => format!(
            "A contemporary take on the {mascot} brand, incorporating dynamic elements, \
             subtle gradients, and modern design principles while maintaining the aggressive, \
             powerful presence expected of an NFL franchise."
        ),
    }
}

fn color_instructions(team: &TeamRecord, style: LogoStyle) -> ColorInstructions {
    match style {
        LogoStyle::Minimalist => ColorInstructions {
            background: team.colors.primary.to_string(),
            foreground: team.colors.accent.to_string(),
            accent: String::from("None or minimal use of secondary color"),
        },
        LogoStyle::Retro => ColorInstructions {
            background: String::from("Gradient from primary to secondary"),
            foreground: team.colors.accent.to_string(),
            accent: String::from("Traditional gold or silver highlights"),
        },
        LogoStyle::Modern => ColorInstructions {
            background: String::from("Dynamic gradient"),
            foreground: String::from("High contrast application"),
            accent: String::from("Subtle color variations and highlights"),
        },
    }
}

const fn typography_specs(style: LogoStyle) -> TypographySpecs {
    match style {
        LogoStyle::Minimalist => TypographySpecs {
            font_family: "Clean sans-serif",
            weight: "Medium to bold",
            style: "Simple, geometric letterforms",
        },
        LogoStyle::Retro => TypographySpecs {
            font_family: "Serif or slab-serif",
            weight: "Bold",
            style: "Classic, traditional letterforms",
        },
        LogoStyle::Modern => TypographySpecs {
            font_family: "Contemporary sans-serif",
            weight: "Variable",
            style: "Dynamic, possibly custom letterforms",
        },
    }
}

const fn layout_guidelines(style: LogoStyle) -> &'static str {
    match style {
        LogoStyle::Minimalist => "Centered composition with generous white space",
        LogoStyle::Retro => "Traditional shield or badge layout with decorative elements",
        LogoStyle::Modern => "Dynamic, possibly asymmetrical composition with movement",
    }
}
