use std::path::PathBuf;

use chrono::NaiveDate;

use crate::domain::models::{GuardId, SiteId};

#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("Unknown guard: {0}")]
    UnknownGuard(GuardId),

    #[error("Unknown site: {0}")]
    UnknownSite(SiteId),

    #[error("Duplicate guard id in roster: {0}")]
    DuplicateGuard(GuardId),

    #[error("Duplicate site id in roster: {0}")]
    DuplicateSite(SiteId),

    #[error("Site {0} must have a capacity of at least 1")]
    InvalidCapacity(SiteId),

    #[error("Roster has no sites")]
    NoSites,

    /// every slot of the site is taken and no slot was named for replacement
    #[error("Site {site_id} is full on {date} (capacity {capacity})")]
    SlotFull {
        site_id: SiteId,
        date: NaiveDate,
        capacity: usize,
    },

    #[error("No cell is being edited")]
    DialogClosed,

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
