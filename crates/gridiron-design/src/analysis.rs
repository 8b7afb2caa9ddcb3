//! Per-team design analysis derived from static record fields.
//!
//! Everything here is a fixed-table lookup keyed by mascot, city, founding
//! year, or primary color. The region table is an ordered association list
//! because its first-match-wins semantics are part of the contract.

use gridiron_types::{
    BrandPositioning, CurrentLogoElements, DesignElements, LogoAnalysis, TeamRecord,
};

use crate::color::{color_dominance, color_psychology};
use crate::shape::primary_shape;

/// Mascots classified as birds of prey.
const BIRD_MASCOTS: &[&str] = &["eagles", "falcons", "seahawks", "ravens", "cardinals"];

/// Mascots classified as predators or felines.
const PREDATOR_MASCOTS: &[&str] = &["panthers", "jaguars", "bengals", "bears", "lions"];

/// Mascots classified as hoofed animals.
const HOOFED_MASCOTS: &[&str] = &["colts", "broncos", "rams"];

/// Mascots classified as marine animals.
const MARINE_MASCOTS: &[&str] = &["dolphins"];

/// City-substring to regional-influence table, in declaration order.
///
/// Matching is first-hit against a case-folded city name, so more specific
/// phrases must stay ahead of any overlapping shorter ones.
const REGIONAL_INFLUENCES: &[(&str, &str)] = &[
    ("new england", "Colonial American heritage"),
    ("new orleans", "French Creole culture"),
    ("green bay", "Industrial Midwest tradition"),
    ("san francisco", "California innovation culture"),
    ("seattle", "Pacific Northwest nature themes"),
    ("miami", "Tropical, vibrant aesthetics"),
    ("denver", "Mountain West ruggedness"),
    ("dallas", "Texas pride and scale"),
    ("las vegas", "Entertainment and glamour"),
];

/// Static list of improvement suggestions returned by `getLogoAnalysis`.
pub const DESIGN_OPPORTUNITIES: &[&str] = &[
    "Modernize typography for better digital applications",
    "Simplify complex elements for better scalability",
    "Enhance color contrast for accessibility",
    "Create responsive logo variations for different contexts",
];

/// Classify the mascot into a visual motif family.
pub fn primary_motif(mascot: &str) -> &'static str {
    let mascot = mascot.to_lowercase();
    let is_in = |set: &[&str]| set.contains(&mascot.as_str());

    if is_in(BIRD_MASCOTS) {
        "Bird/Raptor"
    } else if is_in(PREDATOR_MASCOTS) {
        "Predator/Feline"
    } else if is_in(HOOFED_MASCOTS) {
        "Hoofed Animal"
    } else if is_in(MARINE_MASCOTS) {
        "Marine Animal"
    } else {
        "Abstract/Conceptual"
    }
}

/// Bucket the founding year into a design-heritage era.
pub const fn historical_context(founded: u16) -> &'static str {
    if founded < 1950 {
        "Original NFL era - Traditional design heritage"
    } else if founded < 1970 {
        "Expansion era - Classic modernization period"
    } else if founded < 1995 {
        "Modern expansion - Contemporary design influence"
    } else {
        "Recent expansion - Modern brand development"
    }
}

/// Match the city name against the regional-influence table.
///
/// Case-insensitive substring match; first entry in table order wins.
pub fn regional_influence(city: &str) -> &'static str {
    let city = city.to_lowercase();
    REGIONAL_INFLUENCES
        .iter()
        .find(|(region, _)| city.contains(region))
        .map_or("General American sports culture", |(_, influence)| {
            *influence
        })
}

/// Build the design-elements annotation attached to catalog responses.
pub fn design_elements(team: &TeamRecord) -> DesignElements {
    DesignElements {
        primary_motif: primary_motif(&team.mascot),
        color_dominance: color_dominance(&team.colors.primary),
        historical_context: historical_context(team.founded),
        regional_influence: regional_influence(&team.city),
    }
}

/// Build the templated placeholder logo URL for a team without a logo.
///
/// The URL embeds the primary and accent hex digits (no `#`) and the
/// first character of the mascot. No image is generated or fetched.
pub fn placeholder_logo_url(team: &TeamRecord) -> String {
    let initial = team
        .mascot
        .chars()
        .next()
        .map_or_else(String::new, String::from);
    format!(
        "https://via.placeholder.com/200x200/{}/{}?text={initial}",
        team.colors.primary.without_hash(),
        team.colors.accent.without_hash(),
    )
}

/// Build the brand-positioning commentary block.
pub fn brand_positioning(team: &TeamRecord) -> BrandPositioning {
    BrandPositioning {
        market_position: format!("{} {} team", team.conference, team.division),
        brand_personality: "Strong, competitive, regional pride",
        target_audience: "Local fanbase and national NFL audience",
        differentiation: format!("Unique {} identity in {}", team.mascot, team.city),
    }
}

/// Build the four analysis blocks returned by `getLogoAnalysis`.
pub fn logo_analysis(team: &TeamRecord) -> LogoAnalysis {
    LogoAnalysis {
        current_logo_elements: CurrentLogoElements {
            // The current logo has no style tag, so an unknown mascot
            // falls through to the generic frame.
            primary_element: primary_shape(&team.mascot, None),
            color_usage: format!(
                "Primary: {}, Secondary: {}",
                team.colors.primary, team.colors.secondary
            ),
            style_era: historical_context(team.founded),
            complexity_level: "Medium",
        },
        color_psychology: color_psychology(&team.colors.primary),
        brand_positioning: brand_positioning(team),
        design_opportunities: DESIGN_OPPORTUNITIES,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use gridiron_types::{Conference, HexColor, TeamColors, TeamId};

    use super::*;

    fn make_team(city: &str, mascot: &str, founded: u16) -> TeamRecord {
        TeamRecord {
            id: TeamId(1),
            name: format!("{city} {mascot}"),
            city: city.to_string(),
            mascot: mascot.to_string(),
            conference: Conference::Afc,
            division: "North".to_string(),
            founded,
            colors: TeamColors {
                primary: HexColor::parse("#002244").unwrap(),
                secondary: HexColor::parse("#869397").unwrap(),
                accent: HexColor::parse("#C60C30").unwrap(),
            },
            logo: None,
        }
    }

    #[test]
    fn motif_set_membership() {
        assert_eq!(primary_motif("Ravens"), "Bird/Raptor");
        assert_eq!(primary_motif("bengals"), "Predator/Feline");
        assert_eq!(primary_motif("Broncos"), "Hoofed Animal");
        assert_eq!(primary_motif("Dolphins"), "Marine Animal");
        assert_eq!(primary_motif("Steelers"), "Abstract/Conceptual");
    }

    #[test]
    fn era_buckets_at_boundary_years() {
        assert_eq!(
            historical_context(1949),
            "Original NFL era - Traditional design heritage"
        );
        assert_eq!(
            historical_context(1950),
            "Expansion era - Classic modernization period"
        );
        assert_eq!(
            historical_context(1969),
            "Expansion era - Classic modernization period"
        );
        assert_eq!(
            historical_context(1970),
            "Modern expansion - Contemporary design influence"
        );
        assert_eq!(
            historical_context(1994),
            "Modern expansion - Contemporary design influence"
        );
        assert_eq!(
            historical_context(1995),
            "Recent expansion - Modern brand development"
        );
    }

    #[test]
    fn region_matches_substring_case_insensitively() {
        assert_eq!(regional_influence("New England"), "Colonial American heritage");
        assert_eq!(regional_influence("GREEN BAY"), "Industrial Midwest tradition");
        // Substring match, not whole-string equality.
        assert_eq!(
            regional_influence("East Las Vegas"),
            "Entertainment and glamour"
        );
        assert_eq!(
            regional_influence("Pittsburgh"),
            "General American sports culture"
        );
    }

    #[test]
    fn placeholder_url_matches_template() {
        let team = make_team("Baltimore", "Ravens", 1996);
        assert_eq!(
            placeholder_logo_url(&team),
            "https://via.placeholder.com/200x200/002244/C60C30?text=R"
        );
    }

    #[test]
    fn logo_analysis_uses_generic_shape_for_untabled_mascots() {
        let analysis = logo_analysis(&make_team("Columbus", "Discoverers", 2002));
        assert_eq!(
            analysis.current_logo_elements.primary_element,
            "Team initial in geometric frame"
        );
        assert_eq!(analysis.design_opportunities.len(), 4);
    }

    #[test]
    fn brand_positioning_interpolates_market_slot() {
        let positioning = brand_positioning(&make_team("Baltimore", "Ravens", 1996));
        assert_eq!(positioning.market_position, "AFC North team");
        assert_eq!(
            positioning.differentiation,
            "Unique Ravens identity in Baltimore"
        );
    }
}
