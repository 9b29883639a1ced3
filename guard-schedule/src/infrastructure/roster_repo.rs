use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::models::Assignment;
use crate::domain::roster::Roster;
use crate::error::ScheduleError;

/// Reads rosters from JSON files
pub struct RosterRepository;

impl RosterRepository {
    /// Reads and validates a roster file
    pub fn load(path: &Path) -> Result<Roster, ScheduleError> {
        let text = fs::read_to_string(path).map_err(|source| ScheduleError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let roster = Self::parse(&text)?;
        tracing::info!(
            path = %path.display(),
            guards = roster.guards.len(),
            sites = roster.sites.len(),
            "roster loaded"
        );
        Ok(roster)
    }

    pub fn parse(json: &str) -> Result<Roster, ScheduleError> {
        let roster: Roster = serde_json::from_str(json)?;
        roster.validate()?;
        Ok(roster)
    }

    /// `path` when given, otherwise the built-in demo roster
    pub fn load_or_demo(path: Option<&Path>) -> Result<Roster, ScheduleError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Roster::demo()),
        }
    }
}

/// Assignment list as written by `schedule_tools assign --out`
#[derive(Debug, Serialize, Deserialize)]
pub struct AssignmentExport {
    pub assignments: Vec<Assignment>,
}

impl AssignmentExport {
    pub fn to_json(&self) -> Result<String, ScheduleError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod roster_repo_tests {
    use super::*;

    #[test]
    fn parse_applies_capacity_default() {
        let roster = RosterRepository::parse(
            r#"{
                "guards": [{"id": "g1", "name": "A", "phone": "99112233"}],
                "sites": [
                    {"id": "s1", "name": "One", "tagIndex": 1},
                    {"id": "s2", "name": "Two", "tagIndex": 2, "capacity": 3}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(roster.guards[0].phone.as_deref(), Some("99112233"));
        assert_eq!(roster.sites[0].capacity, 1);
        assert_eq!(roster.sites[1].capacity, 3);
    }

    #[test]
    fn parse_rejects_bad_json() {
        let r = RosterRepository::parse("{ not json");
        assert!(matches!(r, Err(ScheduleError::Json(_))));
    }

    #[test]
    fn parse_validates() {
        let r = RosterRepository::parse(r#"{"guards": [], "sites": []}"#);
        assert!(matches!(r, Err(ScheduleError::NoSites)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let r = RosterRepository::load(Path::new("/definitely/not/here.json"));
        assert!(matches!(r, Err(ScheduleError::Io { .. })));
    }
}
