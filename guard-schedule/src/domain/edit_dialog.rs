use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::models::{GuardId, SiteId};

/// The cell (or slot) a user opened for editing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditTarget {
    pub site_id: SiteId,
    pub date: NaiveDate,
    /// occupant of the clicked slot, `None` for an empty slot
    pub current_guard_id: Option<GuardId>,
}

/// Guard picker state: closed, or open on one target
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum EditDialog {
    #[default]
    Closed,
    Open { target: EditTarget },
}

impl EditDialog {
    pub fn open(site_id: SiteId, date: NaiveDate, current_guard_id: Option<GuardId>) -> Self {
        EditDialog::Open {
            target: EditTarget { site_id, date, current_guard_id },
        }
    }

    pub fn target(&self) -> Option<&EditTarget> {
        match self {
            EditDialog::Open { target } => Some(target),
            EditDialog::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, EditDialog::Open { .. })
    }

    /// Closes the dialog and hands back what was open
    pub fn take(&mut self) -> Option<EditTarget> {
        match std::mem::take(self) {
            EditDialog::Open { target } => Some(target),
            EditDialog::Closed => None,
        }
    }
}
