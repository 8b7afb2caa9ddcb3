//! Validated hex color newtype.
//!
//! Every color in the catalog fixture is a `#RRGGBB` string. [`HexColor`]
//! validates that shape once at deserialization time so downstream color
//! math never has to handle malformed input. The original string casing is
//! preserved -- fixture colors pass through to responses verbatim.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors produced when parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HexColorError {
    /// The string was not of the form `#RRGGBB`.
    #[error("malformed hex color {0:?}: expected #RRGGBB")]
    Malformed(String),
}

/// A well-formed `#RRGGBB` color string.
///
/// Invariant: the inner string is exactly seven characters, a leading `#`
/// followed by six ASCII hex digits. Casing is preserved as authored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Parse and validate a `#RRGGBB` string.
    ///
    /// # Errors
    ///
    /// Returns [`HexColorError::Malformed`] if the input is not a `#`
    /// followed by exactly six hex digits.
    pub fn parse(s: &str) -> Result<Self, HexColorError> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| HexColorError::Malformed(s.to_string()))?;
        if digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
            Ok(Self(s.to_string()))
        } else {
            Err(HexColorError::Malformed(s.to_string()))
        }
    }

    /// Build a color from RGB channels, encoded as lowercase hex.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(format!("#{r:02x}{g:02x}{b:02x}"))
    }

    /// The full `#RRGGBB` string as authored.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The six hex digits without the leading `#`.
    ///
    /// Used when building placeholder image URLs, which take bare hex.
    pub fn without_hash(&self) -> &str {
        self.0.strip_prefix('#').unwrap_or(&self.0)
    }

    /// Decode the color into `(r, g, b)` channel values.
    pub fn rgb(&self) -> (u8, u8, u8) {
        let channel = |range: std::ops::Range<usize>| {
            self.0
                .strip_prefix('#')
                .and_then(|d| d.get(range))
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .unwrap_or(0)
        };
        (channel(0..2), channel(2..4), channel(4..6))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HexColor {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = HexColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}
