//! Pure derivation library for the Gridiron dashboard.
//!
//! Every function in this crate maps a [`TeamRecord`] (and optionally a
//! [`LogoStyle`]) to descriptive structures: shape selections, color-scheme
//! variants, typography specs, narrative text, and color classification.
//! All of it is deterministic lookup-table work -- no hidden state, no
//! randomness, no I/O -- so the functions are freely reentrant under
//! concurrent request handling.
//!
//! # Modules
//!
//! - [`shape`] -- Mascot-to-shape lookup with first-match-wins tables
//! - [`color`] -- Hex color lightening and classification rules
//! - [`analysis`] -- Per-team design-elements and logo analysis blocks
//! - [`concept`] -- Style-variant design concepts and rationale
//! - [`profile`] -- The hand-authored style-guide constant
//!
//! [`TeamRecord`]: gridiron_types::TeamRecord
//! [`LogoStyle`]: gridiron_types::LogoStyle

pub mod analysis;
pub mod color;
pub mod concept;
pub mod profile;
pub mod shape;

pub use analysis::{
    brand_positioning, design_elements, historical_context, logo_analysis, placeholder_logo_url,
    primary_motif, regional_influence, DESIGN_OPPORTUNITIES,
};
pub use color::{color_dominance, color_psychology, lighten_color};
pub use concept::{design_concept, design_rationale, logo_variations};
pub use profile::design_profile;
pub use shape::primary_shape;
