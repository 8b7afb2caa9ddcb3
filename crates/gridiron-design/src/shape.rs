//! Mascot-to-shape selection.
//!
//! Shapes come from two ordered association lists: an animal table and a
//! concept table. The animal table is always consulted first; within a
//! table the first matching entry wins. Mascots absent from both tables
//! fall back to a per-style default, or to a generic frame when no style
//! applies (the current-logo analysis path).

use gridiron_types::LogoStyle;

/// Shapes for animal-mascot teams, checked before the concept table.
const ANIMAL_SHAPES: &[(&str, &str)] = &[
    ("eagles", "Stylized eagle head or spread wings"),
    ("falcons", "Falcon silhouette in flight"),
    ("seahawks", "Hawk head profile"),
    ("ravens", "Raven silhouette"),
    ("cardinals", "Cardinal head profile"),
    ("panthers", "Panther head or paw print"),
    ("jaguars", "Jaguar head profile"),
    ("bengals", "Tiger stripes pattern"),
    ("bears", "Bear head or paw"),
    ("lions", "Lion head mane"),
    ("rams", "Ram horns"),
    ("colts", "Horseshoe"),
    ("broncos", "Horse head profile"),
    ("dolphins", "Dolphin jumping"),
];

/// Shapes for location- or concept-mascot teams.
const CONCEPT_SHAPES: &[(&str, &str)] = &[
    ("patriots", "Patriot head profile or star"),
    ("cowboys", "Star"),
    ("steelers", "Steel beam or hypocycloid"),
    ("packers", "Letter G in circle"),
    ("giants", "NY letters"),
    ("jets", "Jet silhouette"),
    ("saints", "Fleur-de-lis"),
    ("browns", "Helmet"),
    ("titans", "Flame or T logo"),
    ("texans", "Bull head"),
    ("chiefs", "Arrowhead"),
    ("raiders", "Shield with crossed swords"),
    ("chargers", "Lightning bolt"),
    ("bills", "Buffalo or charging bull"),
    ("commanders", "W logo or shield"),
];

/// Fallback shape when the mascot misses both tables and no style applies.
const GENERIC_SHAPE: &str = "Team initial in geometric frame";

/// Select the primary shape for a mascot.
///
/// The mascot is case-folded before lookup. Table precedence: animal
/// entries, then concept entries, then the style default (when `style` is
/// given), then [`GENERIC_SHAPE`]. Passing `None` for `style` models the
/// current-logo analysis path, which has no style tag to fall back on.
pub fn primary_shape(mascot: &str, style: Option<LogoStyle>) -> &'static str {
    let mascot = mascot.to_lowercase();

    let table_hit = ANIMAL_SHAPES
        .iter()
        .chain(CONCEPT_SHAPES)
        .find(|(key, _)| *key == mascot)
        .map(|(_, shape)| *shape);

    if let Some(shape) = table_hit {
        return shape;
    }

    match style {
        Some(LogoStyle::Minimalist) => "Clean geometric circle with team initial",
        Some(LogoStyle::Retro) => "Classic shield shape",
        Some(LogoStyle::Modern) => "Dynamic angular shape",
        None => GENERIC_SHAPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animal_table_matches_case_insensitively() {
        assert_eq!(
            primary_shape("Eagles", Some(LogoStyle::Modern)),
            "Stylized eagle head or spread wings"
        );
        assert_eq!(primary_shape("RAVENS", None), "Raven silhouette");
    }

    #[test]
    fn concept_table_matches_when_animal_misses() {
        assert_eq!(primary_shape("Cowboys", Some(LogoStyle::Retro)), "Star");
        assert_eq!(primary_shape("saints", None), "Fleur-de-lis");
    }

    #[test]
    fn table_hit_ignores_the_style_tag() {
        // A mascot in the tables yields the same shape for every style.
        for style in LogoStyle::ALL {
            assert_eq!(primary_shape("Colts", Some(style)), "Horseshoe");
        }
    }

    #[test]
    fn unknown_mascot_falls_back_per_style() {
        assert_eq!(
            primary_shape("Wolves", Some(LogoStyle::Minimalist)),
            "Clean geometric circle with team initial"
        );
        assert_eq!(
            primary_shape("Wolves", Some(LogoStyle::Retro)),
            "Classic shield shape"
        );
        assert_eq!(
            primary_shape("Wolves", Some(LogoStyle::Modern)),
            "Dynamic angular shape"
        );
    }

    #[test]
    fn unknown_mascot_without_style_uses_generic_frame() {
        assert_eq!(primary_shape("Wolves", None), GENERIC_SHAPE);
    }
}
