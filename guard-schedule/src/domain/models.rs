// =====================
// Domain model
// =====================

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Guard identifier, e.g. `"g10"`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuardId(pub String);

/// Site identifier, e.g. `"vega1"`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteId(pub String);

impl GuardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl SiteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GuardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GuardId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for SiteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

// --- 1. Guard ---
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guard {
    pub id: GuardId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Guard {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: GuardId::new(id),
            name: name.to_string(),
            phone: None,
        }
    }
}

fn default_capacity() -> usize {
    1
}

// --- 2. Site ---
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: SiteId,
    pub name: String,
    /// colour tag for the presentation layer only
    pub tag_index: u32,
    /// how many guards the site takes per day
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Site {
    pub fn new(id: &str, name: &str, tag_index: u32) -> Self {
        Self {
            id: SiteId::new(id),
            name: name.to_string(),
            tag_index,
            capacity: default_capacity(),
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

// --- 3. Assignment ---

/// Status of one guard on one day.
///
/// The site id lives inside `Assigned`, so "site present iff assigned"
/// cannot be broken.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AssignmentStatus {
    Assigned {
        #[serde(rename = "siteId")]
        site_id: SiteId,
    },
    Free,
    Off,
    Leave,
}

impl AssignmentStatus {
    pub fn kind(&self) -> StatusKind {
        match self {
            AssignmentStatus::Assigned { .. } => StatusKind::Assigned,
            AssignmentStatus::Free => StatusKind::Free,
            AssignmentStatus::Off => StatusKind::Off,
            AssignmentStatus::Leave => StatusKind::Leave,
        }
    }

    pub fn site_id(&self) -> Option<&SiteId> {
        match self {
            AssignmentStatus::Assigned { site_id } => Some(site_id),
            _ => None,
        }
    }
}

/// Status without its payload, for filtering and counting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Assigned,
    Free,
    Off,
    Leave,
}

/// One guard on one day. `(guard_id, date)` is the natural key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub guard_id: GuardId,
    pub date: NaiveDate,
    #[serde(flatten)]
    pub status: AssignmentStatus,
}

impl Assignment {
    pub fn assigned(guard_id: GuardId, date: NaiveDate, site_id: SiteId) -> Self {
        Self {
            guard_id,
            date,
            status: AssignmentStatus::Assigned { site_id },
        }
    }

    pub fn with_status(guard_id: GuardId, date: NaiveDate, status: AssignmentStatus) -> Self {
        Self { guard_id, date, status }
    }

    /// true when this record places its guard at `site_id`
    pub fn is_at(&self, site_id: &SiteId) -> bool {
        self.status.site_id() == Some(site_id)
    }
}
