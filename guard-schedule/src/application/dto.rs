use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::models::{Guard, Site, SiteId};

/// Header counts for one day column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySummaryDto {
    pub date: NaiveDate,
    pub assigned: usize,
    pub free: usize, // free + leave
    pub off: usize,
}

/// One cell of the guard view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GuardCellDto {
    #[serde(rename_all = "camelCase")]
    Site {
        site_id: SiteId,
        site_name: String,
        tag_index: u32,
    },
    Free,
    Off,
    Leave,
    /// no assignment for that day
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuardDayDto {
    pub date: NaiveDate,
    pub cell: GuardCellDto,
}

/// Guard view row: rows = guards, columns = days
#[derive(Debug, Clone, Serialize)]
pub struct GuardRowDto {
    pub guard: Guard,
    pub days: Vec<GuardDayDto>,
}

/// One site on one day, `capacity` slots long
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteDayDto {
    pub date: NaiveDate,
    pub slots: Vec<Option<Guard>>, // None = empty slot
}

/// Site view row: rows = sites, columns = days
#[derive(Debug, Clone, Serialize)]
pub struct SiteRowDto {
    pub site: Site,
    pub days: Vec<SiteDayDto>,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshotDto {
    pub days: Vec<NaiveDate>,
    pub summaries: Vec<DaySummaryDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guard_rows: Option<Vec<GuardRowDto>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_rows: Option<Vec<SiteRowDto>>,
}
