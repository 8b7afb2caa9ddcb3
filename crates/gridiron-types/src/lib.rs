//! Shared type definitions for the Gridiron dashboard.
//!
//! This crate is the single source of truth for all types used across the
//! Gridiron workspace: the catalog records loaded from the JSON fixture,
//! the derived design-description structures, and the response envelope
//! exchanged across the HTTP boundary.
//!
//! # Modules
//!
//! - [`color`] -- Validated `#RRGGBB` hex color newtype
//! - [`team`] -- Team records, conference enum, per-request annotations
//! - [`design`] -- Derived design concepts, analyses, and the style profile
//! - [`envelope`] -- The success/failure wrapper returned by every API call

pub mod color;
pub mod design;
pub mod envelope;
pub mod team;

// Re-export all public types at crate root for convenience.
pub use color::{HexColor, HexColorError};
pub use design::{
    BrandPositioning, ColorInstructions, ColorScheme, ConceptElements, CurrentLogoElements,
    DesignConcept, DesignElements, DesignProfile, DesignRationale, LogoAnalysis, LogoStyle,
    LogoVariations, SvgInstructions, TypographySpecs,
};
pub use envelope::ResponseEnvelope;
pub use team::{AnnotatedTeam, Conference, TeamColors, TeamId, TeamRecord};
