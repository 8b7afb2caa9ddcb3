//! The hand-authored style-guide constant.
//!
//! `getDesignProfile` returns this structure verbatim on every call. It
//! has no dependency on the catalog or the request, which is exactly what
//! the determinism tests assert.

use gridiron_types::DesignProfile;

/// The league-wide logo style profile.
static DESIGN_PROFILE: DesignProfile = DesignProfile {
    name: "NFL_Team_Logo_Style_Profile",
    description: "A design profile based on the visual elements and aesthetics of NFL team logos.",
    overall_style: &[
        "Bold",
        "Dynamic",
        "Modern with classic elements",
        "Strong and impactful",
        "Scalable for various applications",
    ],
    common_shapes: &[
        "Geometric shapes (circles, shields, stars, ovals)",
        "Stylized animal forms (birds, cats, equines)",
        "Abstract representations of objects or concepts",
        "Letterforms as central elements",
    ],
    color_palettes: &[
        "Primary and secondary colors with high contrast",
        "Limited color palettes, typically 2-4 main colors",
        "Often incorporating patriotic colors (red, white, blue)",
    ],
    typography_style: &[
        "Bold, sans-serif or slab-serif typefaces",
        "Uppercase letters common for team names or initials",
        "Custom or highly stylized letterforms",
        "Clear legibility at various sizes",
    ],
    visual_motifs: &[
        "Animal mascots (eagles, panthers, jaguars, colts, bears, falcons, seahawks)",
        "Iconic objects (stars, helmets, horseshoes, fleur-de-lis, lightning bolts)",
        "Initials or single letters representing team names",
        "Elements symbolizing location or history",
    ],
    design_techniques: &[
        "Flat design with strong outlines and clear separation of elements",
        "Subtle gradients or shadows for depth",
        "Emphasis on clean lines and simplified forms",
        "Effective use of negative space for visual impact",
    ],
    mood_and_atmosphere: &[
        "Aggressive and powerful",
        "Loyal and traditional",
        "Energetic and competitive",
        "Representing strength and determination",
    ],
};

/// The fixed style-guide structure served by `getDesignProfile`.
pub const fn design_profile() -> &'static DesignProfile {
    &DESIGN_PROFILE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_is_identical_across_calls() {
        assert_eq!(design_profile(), design_profile());
        assert_eq!(design_profile().name, "NFL_Team_Logo_Style_Profile");
        assert_eq!(design_profile().mood_and_atmosphere.len(), 4);
    }
}
