//! Action dispatch for the query-string API.
//!
//! [`dispatch`] maps the `action` query parameter to one of a fixed set
//! of handlers, parses the parameters each action needs, invokes the
//! derivation library, and wraps the outcome in a [`ResponseEnvelope`].
//! Handler errors never escape: this is the error boundary that turns
//! every [`ApiError`] into a failure envelope.
//!
//! | action | params | behavior |
//! |--------|--------|----------|
//! | `getTeams` | -- | all records, annotated |
//! | `getTeam` | `id` | one annotated record |
//! | `getTeamsByConference` | `conference` | case-insensitive filter |
//! | `getTeamsByDivision` | `division` | case-insensitive filter |
//! | `generateLogoVariations` | `teamId` | three style concepts + rationale |
//! | `getDesignProfile` | -- | fixed style-guide constant |
//! | `getLogoAnalysis` | `teamId` | four analysis blocks |
//! | anything else | -- | failure envelope |

use std::collections::HashMap;

use gridiron_catalog::TeamCatalog;
use gridiron_design::{
    design_elements, design_profile, design_rationale, logo_analysis, logo_variations,
    placeholder_logo_url,
};
use gridiron_types::{AnnotatedTeam, ResponseEnvelope, TeamId, TeamRecord};

use crate::error::ApiError;

/// Dispatch one API request against the catalog.
///
/// Always returns a well-formed envelope: success with the action payload,
/// or failure carrying the error message.
pub fn dispatch(catalog: &TeamCatalog, params: &HashMap<String, String>) -> ResponseEnvelope {
    match run_action(catalog, params) {
        Ok(data) => ResponseEnvelope::ok(data),
        Err(error) => ResponseEnvelope::failure(error.to_string()),
    }
}

/// Route to the action handler and serialize its payload.
fn run_action(
    catalog: &TeamCatalog,
    params: &HashMap<String, String>,
) -> Result<serde_json::Value, ApiError> {
    let action = params.get("action").map_or("", String::as_str);
    tracing::debug!(action, "dispatching API action");

    match action {
        "getTeams" => get_teams(catalog),
        "getTeam" => get_team(catalog, require_id(params, "id")?),
        "getTeamsByConference" => {
            let conference = require_param(params, "conference")?;
            Ok(serde_json::json!({ "teams": catalog.by_conference(conference) }))
        }
        "getTeamsByDivision" => {
            let division = require_param(params, "division")?;
            Ok(serde_json::json!({ "teams": catalog.by_division(division) }))
        }
        "generateLogoVariations" => generate_logo_variations(catalog, require_id(params, "teamId")?),
        "getDesignProfile" => Ok(serde_json::to_value(design_profile())?),
        "getLogoAnalysis" => get_logo_analysis(catalog, require_id(params, "teamId")?),
        _ => Err(ApiError::InvalidAction),
    }
}

/// Build a per-request annotated copy of a record.
///
/// The catalog record itself is never touched: the copy gets the
/// placeholder logo backfilled (when the fixture has none, or an empty
/// one) and the design-elements analysis attached.
fn annotate(team: &TeamRecord) -> AnnotatedTeam {
    let mut team = team.clone();
    if team.logo.as_deref().is_none_or(str::is_empty) {
        team.logo = Some(placeholder_logo_url(&team));
    }
    let logo_analysis = design_elements(&team);
    AnnotatedTeam {
        team,
        logo_analysis,
    }
}

fn get_teams(catalog: &TeamCatalog) -> Result<serde_json::Value, ApiError> {
    let teams: Vec<AnnotatedTeam> = catalog.teams().iter().map(annotate).collect();
    Ok(serde_json::json!({ "teams": teams }))
}

fn get_team(catalog: &TeamCatalog, id: TeamId) -> Result<serde_json::Value, ApiError> {
    let team = catalog.get(id).ok_or(ApiError::TeamNotFound)?;
    Ok(serde_json::to_value(annotate(team))?)
}

fn generate_logo_variations(
    catalog: &TeamCatalog,
    id: TeamId,
) -> Result<serde_json::Value, ApiError> {
    // A missing team propagates the same error as getTeam; no partial
    // variation data is produced.
    let team = catalog.get(id).ok_or(ApiError::TeamNotFound)?;
    Ok(serde_json::json!({
        "team": annotate(team),
        "variations": logo_variations(team),
        "design_rationale": design_rationale(team),
    }))
}

fn get_logo_analysis(catalog: &TeamCatalog, id: TeamId) -> Result<serde_json::Value, ApiError> {
    let team = catalog.get(id).ok_or(ApiError::TeamNotFound)?;
    Ok(serde_json::to_value(logo_analysis(team))?)
}

/// Fetch a required string parameter.
fn require_param<'p>(
    params: &'p HashMap<String, String>,
    name: &'static str,
) -> Result<&'p str, ApiError> {
    params
        .get(name)
        .map(String::as_str)
        .ok_or(ApiError::MissingParam { name })
}

/// Fetch and parse a required base-10 integer identifier.
///
/// Missing or unparseable values are errors surfaced in the envelope --
/// never silently defaulted.
fn require_id(params: &HashMap<String, String>, name: &'static str) -> Result<TeamId, ApiError> {
    let raw = require_param(params, name)?;
    raw.parse::<u32>()
        .map(TeamId)
        .map_err(|_| ApiError::InvalidParam {
            name,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use gridiron_types::{Conference, HexColor, TeamColors};

    use super::*;

    fn make_catalog() -> TeamCatalog {
        TeamCatalog::from_records(vec![TeamRecord {
            id: TeamId(5),
            name: String::from("Baltimore Ravens"),
            city: String::from("Baltimore"),
            mascot: String::from("Ravens"),
            conference: Conference::Afc,
            division: String::from("North"),
            founded: 1996,
            colors: TeamColors {
                primary: HexColor::parse("#002244").unwrap(),
                secondary: HexColor::parse("#000000").unwrap(),
                accent: HexColor::parse("#C60C30").unwrap(),
            },
            logo: None,
        }])
    }

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn annotation_backfills_placeholder_logo() {
        let envelope = dispatch(&make_catalog(), &query(&[("action", "getTeam"), ("id", "5")]));
        assert!(envelope.success);
        let data = envelope.data.unwrap();
        assert_eq!(
            data["logo"],
            "https://via.placeholder.com/200x200/002244/C60C30?text=R"
        );
        assert_eq!(data["logo_analysis"]["primary_motif"], "Bird/Raptor");
    }

    #[test]
    fn unknown_team_is_a_failure_envelope() {
        let envelope = dispatch(&make_catalog(), &query(&[("action", "getTeam"), ("id", "42")]));
        assert!(!envelope.success);
        assert_eq!(envelope.error.as_deref(), Some("Team not found"));
    }

    #[test]
    fn non_integer_id_is_an_error_not_a_default() {
        let envelope = dispatch(
            &make_catalog(),
            &query(&[("action", "getTeam"), ("id", "five")]),
        );
        assert!(!envelope.success);
        assert_eq!(
            envelope.error.as_deref(),
            Some("Invalid integer parameter id: five")
        );
    }

    #[test]
    fn missing_action_is_invalid() {
        let envelope = dispatch(&make_catalog(), &query(&[]));
        assert!(!envelope.success);
        assert_eq!(envelope.error.as_deref(), Some("Invalid action specified"));
    }

    #[test]
    fn variations_propagate_team_not_found() {
        let envelope = dispatch(
            &make_catalog(),
            &query(&[("action", "generateLogoVariations"), ("teamId", "42")]),
        );
        assert!(!envelope.success);
        assert_eq!(envelope.error.as_deref(), Some("Team not found"));
    }

    #[test]
    fn design_profile_is_identical_across_calls() {
        let catalog = make_catalog();
        let first = dispatch(&catalog, &query(&[("action", "getDesignProfile")]));
        let second = dispatch(&catalog, &query(&[("action", "getDesignProfile")]));
        assert_eq!(first.data, second.data);
    }
}
