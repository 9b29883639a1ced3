use serde::{Deserialize, Serialize};

use crate::domain::date_range::DateRange;
use crate::domain::models::{Assignment, Guard, Site, SiteId, StatusKind};

/// Status tab of the guard view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Free,
    Off,
}

impl StatusFilter {
    fn kind(&self) -> Option<StatusKind> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Free => Some(StatusKind::Free),
            StatusFilter::Off => Some(StatusKind::Off),
        }
    }
}

/// Site selector of the site view
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteFilter {
    #[default]
    All,
    Only(SiteId),
}

/// Case-insensitive substring match, the query is trimmed first.
/// An empty query matches everything.
pub fn matches_query(name: &str, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    q.is_empty() || name.to_lowercase().contains(&q)
}

/// Guards whose name matches `query` and, unless the filter is `All`,
/// who have at least one assignment of the chosen status inside `range`.
pub fn filter_guards<'a>(
    guards: &'a [Guard],
    assignments: &[Assignment],
    range: &DateRange,
    query: &str,
    status: StatusFilter,
) -> Vec<&'a Guard> {
    let by_name = guards.iter().filter(|g| matches_query(&g.name, query));

    match status.kind() {
        None => by_name.collect(),
        Some(kind) => by_name
            .filter(|g| {
                assignments.iter().any(|a| {
                    a.guard_id == g.id && a.status.kind() == kind && range.contains(a.date)
                })
            })
            .collect(),
    }
}

/// Sites whose name matches `query` and that pass the site selector
pub fn filter_sites<'a>(sites: &'a [Site], query: &str, selected: &SiteFilter) -> Vec<&'a Site> {
    sites
        .iter()
        .filter(|s| matches_query(&s.name, query))
        .filter(|s| match selected {
            SiteFilter::All => true,
            SiteFilter::Only(id) => &s.id == id,
        })
        .collect()
}
