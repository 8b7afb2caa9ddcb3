//! Immutable team catalog for the Gridiron dashboard.
//!
//! The catalog is loaded once from a JSON fixture at process start and
//! never mutated afterwards. Load failures degrade to an empty catalog so
//! the server stays reachable with no data -- lookups then simply miss and
//! filters return empty lists. There are no write operations.

use std::path::Path;

use gridiron_types::{TeamId, TeamRecord};
use serde::Deserialize;
use tracing::warn;

/// Errors that can occur when reading the catalog fixture.
///
/// Callers of [`TeamCatalog::load`] never see these -- the loader logs and
/// degrades to empty. [`TeamCatalog::from_json`] surfaces them for tests
/// and tooling that want the strict behavior.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The fixture file could not be read from disk.
    #[error("failed to read catalog file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// The fixture content was not valid JSON of the expected shape.
    #[error("failed to parse catalog JSON: {source}")]
    Parse {
        /// The underlying JSON parse error.
        #[from]
        source: serde_json::Error,
    },
}

/// The fixture document shape: a top-level `teams` array.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    teams: Vec<TeamRecord>,
}

/// The in-memory, read-only team collection.
///
/// Held behind an `Arc` by the server; reads need no synchronization
/// because nothing writes after construction. Iteration order is fixture
/// order.
#[derive(Debug, Clone, Default)]
pub struct TeamCatalog {
    teams: Vec<TeamRecord>,
}

impl TeamCatalog {
    /// Load the catalog from a JSON fixture file.
    ///
    /// A missing file or malformed content is logged at warn level and
    /// yields an empty catalog rather than failing startup.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(catalog) => catalog,
            Err(error) => {
                warn!(path = %path.display(), %error, "catalog load failed, serving empty catalog");
                Self::default()
            }
        }
    }

    /// Load the catalog, surfacing read and parse errors.
    fn try_load(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] if the string is not a JSON object
    /// with a well-formed `teams` array.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Ok(Self {
            teams: document.teams,
        })
    }

    /// Build a catalog directly from records (tests, seed tooling).
    pub fn from_records(teams: Vec<TeamRecord>) -> Self {
        Self { teams }
    }

    /// All records in fixture order.
    pub fn teams(&self) -> &[TeamRecord] {
        &self.teams
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    /// Whether the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Look up a single record by identifier.
    pub fn get(&self, id: TeamId) -> Option<&TeamRecord> {
        self.teams.iter().find(|team| team.id == id)
    }

    /// Records whose conference matches the query, case-insensitively.
    pub fn by_conference(&self, conference: &str) -> Vec<&TeamRecord> {
        self.teams
            .iter()
            .filter(|team| team.conference.matches(conference))
            .collect()
    }

    /// Records whose division matches the query, case-insensitively.
    pub fn by_division(&self, division: &str) -> Vec<&TeamRecord> {
        self.teams
            .iter()
            .filter(|team| team.division.eq_ignore_ascii_case(division))
            .collect()
    }
}
