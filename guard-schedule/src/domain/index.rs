use std::collections::HashMap;

use chrono::NaiveDate;

use crate::domain::models::{Assignment, AssignmentStatus, Guard, GuardId, SiteId};
use crate::domain::roster::Roster;

/// Index A key
pub type GuardDayKey = (GuardId, NaiveDate);
/// Index B key
pub type SiteDayKey = (SiteId, NaiveDate);

/// A site-day holding more guards than the site takes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverbookedCell {
    pub site_id: SiteId,
    pub date: NaiveDate,
    pub occupants: usize,
    pub capacity: usize,
}

/// Lookup tables derived from an assignment list.
///
/// Never patched in place: build a new one whenever the list changes.
#[derive(Debug, Clone, Default)]
pub struct ScheduleIndex {
    by_guard_day: HashMap<GuardDayKey, Assignment>,
    by_site_day: HashMap<SiteDayKey, Vec<Guard>>,
    capacities: HashMap<SiteId, usize>,
}

impl ScheduleIndex {
    pub fn build(assignments: &[Assignment], roster: &Roster) -> Self {
        let guard_lookup = roster.guard_lookup();

        // Index A: last write wins
        let mut by_guard_day = HashMap::with_capacity(assignments.len());
        for a in assignments {
            by_guard_day.insert((a.guard_id.clone(), a.date), a.clone());
        }

        // Index B: assigned only, list order follows the assignment list
        let mut by_site_day: HashMap<SiteDayKey, Vec<Guard>> = HashMap::new();
        for a in assignments {
            if let AssignmentStatus::Assigned { site_id } = &a.status {
                match guard_lookup.get(&a.guard_id) {
                    Some(guard) => by_site_day
                        .entry((site_id.clone(), a.date))
                        .or_default()
                        .push((*guard).clone()),
                    None => {
                        tracing::debug!(guard_id = %a.guard_id, "assignment for unknown guard left out of site index");
                    }
                }
            }
        }

        let capacities = roster
            .sites
            .iter()
            .map(|s| (s.id.clone(), s.capacity))
            .collect();

        tracing::debug!(
            guard_days = by_guard_day.len(),
            site_days = by_site_day.len(),
            "schedule index rebuilt"
        );

        Self { by_guard_day, by_site_day, capacities }
    }

    /// Index A lookup, `None` renders as an empty cell
    pub fn assignment(&self, guard_id: &GuardId, date: NaiveDate) -> Option<&Assignment> {
        self.by_guard_day.get(&(guard_id.clone(), date))
    }

    /// Index B lookup, empty when nobody is at the site that day
    pub fn guards_at(&self, site_id: &SiteId, date: NaiveDate) -> &[Guard] {
        self.by_site_day
            .get(&(site_id.clone(), date))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Exactly `capacity` slots: occupants first, then empty slots.
    ///
    /// Unknown sites have no slots.
    pub fn site_slots(&self, site_id: &SiteId, date: NaiveDate) -> Vec<Option<Guard>> {
        let capacity = match self.capacities.get(site_id) {
            Some(c) => *c,
            None => return Vec::new(),
        };
        let occupants = self.guards_at(site_id, date);

        (0..capacity)
            .map(|i| occupants.get(i).cloned())
            .collect()
    }

    pub fn guard_day_count(&self) -> usize {
        self.by_guard_day.len()
    }

    /// Site-days over capacity, sorted by site then date
    pub fn overbooked_cells(&self) -> Vec<OverbookedCell> {
        let mut cells: Vec<OverbookedCell> = self
            .by_site_day
            .iter()
            .filter_map(|((site_id, date), guards)| {
                let capacity = self.capacities.get(site_id).copied().unwrap_or(1);
                (guards.len() > capacity).then(|| OverbookedCell {
                    site_id: site_id.clone(),
                    date: *date,
                    occupants: guards.len(),
                    capacity,
                })
            })
            .collect();
        cells.sort_by(|a, b| (&a.site_id, a.date).cmp(&(&b.site_id, b.date)));
        cells
    }
}
