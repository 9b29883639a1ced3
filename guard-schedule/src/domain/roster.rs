use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::models::{Guard, GuardId, Site, SiteId};
use crate::error::ScheduleError;

/// Guards and sites the schedule is built from.
///
/// Always passed in explicitly; use [`Roster::demo`] for the built-in data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub guards: Vec<Guard>,
    pub sites: Vec<Site>,
}

impl Roster {
    /// Builds a roster and checks it with [`Roster::validate`]
    pub fn new(guards: Vec<Guard>, sites: Vec<Site>) -> Result<Self, ScheduleError> {
        let roster = Self { guards, sites };
        roster.validate()?;
        Ok(roster)
    }

    /// ids unique, at least one site, every capacity >= 1
    pub fn validate(&self) -> Result<(), ScheduleError> {
        let mut seen_guards = HashSet::new();
        for guard in &self.guards {
            if !seen_guards.insert(&guard.id) {
                return Err(ScheduleError::DuplicateGuard(guard.id.clone()));
            }
        }

        if self.sites.is_empty() {
            return Err(ScheduleError::NoSites);
        }

        let mut seen_sites = HashSet::new();
        for site in &self.sites {
            if !seen_sites.insert(&site.id) {
                return Err(ScheduleError::DuplicateSite(site.id.clone()));
            }
            if site.capacity == 0 {
                return Err(ScheduleError::InvalidCapacity(site.id.clone()));
            }
        }
        Ok(())
    }

    pub fn guard(&self, id: &GuardId) -> Option<&Guard> {
        self.guards.iter().find(|g| &g.id == id)
    }

    pub fn site(&self, id: &SiteId) -> Option<&Site> {
        self.sites.iter().find(|s| &s.id == id)
    }

    pub fn require_guard(&self, id: &GuardId) -> Result<&Guard, ScheduleError> {
        self.guard(id)
            .ok_or_else(|| ScheduleError::UnknownGuard(id.clone()))
    }

    pub fn require_site(&self, id: &SiteId) -> Result<&Site, ScheduleError> {
        self.site(id)
            .ok_or_else(|| ScheduleError::UnknownSite(id.clone()))
    }

    /// guard id -> guard, used to resolve index entries
    pub fn guard_lookup(&self) -> HashMap<&GuardId, &Guard> {
        self.guards.iter().map(|g| (&g.id, g)).collect()
    }

    /// Seven sites and twelve guards, the data the board ships with
    pub fn demo() -> Self {
        let sites = vec![
            Site::new("vega1", "Вега Сити1", 1),
            Site::new("vega2", "Вега Сити2", 2),
            Site::new("хан1", "Хан-Хиллс1", 3),
            Site::new("хан2", "Хан-Хиллс2", 4),
            Site::new("зайсан", "Зайсан", 5),
            Site::new("кристал", "Кристал", 6),
            Site::new("aca", "ACA", 7),
        ];

        let guards = [
            ("g1", "Баярсайхан"),
            ("g2", "Билгүүн"),
            ("g3", "Пүрэвсүрэн"),
            ("g4", "Нямдорж"),
            ("g5", "Төгс-Эрдэнэ"),
            ("g6", "Сод-Өлзий"),
            ("g7", "Амгалан"),
            ("g8", "Сэргэлэн"),
            ("g9", "Ганбаатар"),
            ("g10", "Ариунболд"),
            ("g11", "Гантулга"),
            ("g12", "Бехчулун"),
        ]
        .iter()
        .map(|(id, name)| Guard::new(id, name))
        .collect();

        Self { guards, sites }
    }
}

#[cfg(test)]
mod roster_tests {
    use super::*;

    #[test]
    fn demo_roster_is_valid() {
        let roster = Roster::demo();
        assert!(roster.validate().is_ok());
        assert_eq!(roster.guards.len(), 12);
        assert_eq!(roster.sites.len(), 7);
    }

    #[test]
    fn duplicate_guard_is_rejected() {
        let r = Roster::new(
            vec![Guard::new("g1", "A"), Guard::new("g1", "B")],
            vec![Site::new("s1", "Site", 1)],
        );
        assert!(matches!(r, Err(ScheduleError::DuplicateGuard(id)) if id.as_str() == "g1"));
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let r = Roster::new(
            vec![Guard::new("g1", "A")],
            vec![Site::new("s1", "Site", 1).with_capacity(0)],
        );
        assert!(matches!(r, Err(ScheduleError::InvalidCapacity(_))));
    }

    #[test]
    fn roster_without_sites_is_rejected() {
        let r = Roster::new(vec![Guard::new("g1", "A")], vec![]);
        assert!(matches!(r, Err(ScheduleError::NoSites)));
    }
}
