//! Team catalog records and per-request annotated copies.
//!
//! [`TeamRecord`] mirrors one entry of the `teams` array in the JSON
//! fixture. Records are immutable after load; request handlers that need
//! to backfill a logo or attach analysis work on an [`AnnotatedTeam`]
//! copy so the shared catalog is never written to.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::HexColor;
use crate::design::DesignElements;

/// Unique integer identifier for a team in the catalog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TeamId(pub u32);

impl TeamId {
    /// Return the inner integer value.
    pub const fn into_inner(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TeamId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<TeamId> for u32 {
    fn from(id: TeamId) -> Self {
        id.0
    }
}

/// One of the two conferences a team belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Conference {
    /// American Football Conference.
    #[serde(rename = "AFC")]
    Afc,
    /// National Football Conference.
    #[serde(rename = "NFC")]
    Nfc,
}

impl Conference {
    /// The canonical wire spelling (`"AFC"` / `"NFC"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Afc => "AFC",
            Self::Nfc => "NFC",
        }
    }

    /// Case-insensitive match against a query string.
    pub fn matches(self, query: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(query)
    }
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The three-color palette every team carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamColors {
    /// Dominant brand color.
    pub primary: HexColor,
    /// Supporting brand color.
    pub secondary: HexColor,
    /// Highlight color used for contrast.
    pub accent: HexColor,
}

/// One immutable team record as loaded from the fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    /// Unique identifier within the catalog.
    pub id: TeamId,
    /// Full franchise name (e.g. "Baltimore Ravens").
    pub name: String,
    /// Home city or region (e.g. "Baltimore").
    pub city: String,
    /// Mascot word used for shape and motif lookups (e.g. "Ravens").
    pub mascot: String,
    /// Conference membership.
    pub conference: Conference,
    /// Division name within the conference (e.g. "North").
    pub division: String,
    /// Year the franchise was founded.
    pub founded: u16,
    /// Brand color palette.
    pub colors: TeamColors,
    /// Logo image URL, if one is authored in the fixture.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// A per-request copy of a [`TeamRecord`] with derived annotations.
///
/// The `team` copy carries a backfilled placeholder logo when the fixture
/// record has none; `logo_analysis` is computed fresh on every request.
/// Constructing this by value keeps the backing catalog read-only, so
/// concurrent requests need no locking.
#[derive(Debug, Clone, Serialize)]
pub struct AnnotatedTeam {
    /// The team record, with `logo` always populated.
    #[serde(flatten)]
    pub team: TeamRecord,
    /// Derived design-elements analysis for the dashboard grid.
    pub logo_analysis: DesignElements,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn conference_round_trips_canonical_spelling() {
        let afc: Conference = serde_json::from_str("\"AFC\"").unwrap();
        assert_eq!(afc, Conference::Afc);
        assert_eq!(serde_json::to_string(&Conference::Nfc).unwrap(), "\"NFC\"");
    }

    #[test]
    fn conference_matching_is_case_insensitive() {
        assert!(Conference::Afc.matches("afc"));
        assert!(Conference::Afc.matches("AFC"));
        assert!(Conference::Afc.matches("Afc"));
        assert!(!Conference::Afc.matches("nfc"));
        assert!(!Conference::Afc.matches("af"));
    }

    #[test]
    fn team_record_deserializes_fixture_shape() {
        let team: TeamRecord = serde_json::from_str(
            r##"{
                "id": 5,
                "name": "Baltimore Ravens",
                "city": "Baltimore",
                "mascot": "Ravens",
                "conference": "AFC",
                "division": "North",
                "founded": 1996,
                "colors": {
                    "primary": "#241773",
                    "secondary": "#000000",
                    "accent": "#9E7C0C"
                }
            }"##,
        )
        .unwrap();

        assert_eq!(team.id, TeamId(5));
        assert_eq!(team.conference, Conference::Afc);
        assert_eq!(team.colors.primary.as_str(), "#241773");
        assert!(team.logo.is_none());
    }
}
