use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::dto::{
    BoardSnapshotDto, DaySummaryDto, GuardCellDto, GuardDayDto, GuardRowDto, SiteDayDto, SiteRowDto,
};
use crate::domain::date_range::{effective_range, resolve_days, DateRange};
use crate::domain::edit_dialog::EditDialog;
use crate::domain::filter::{filter_guards, filter_sites, SiteFilter, StatusFilter};
use crate::domain::generator::generate_assignments;
use crate::domain::index::ScheduleIndex;
use crate::domain::models::{Assignment, AssignmentStatus, Guard, GuardId, Site, SiteId};
use crate::domain::mutator;
use crate::domain::roster::Roster;
use crate::error::ScheduleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    ByGuard,
    BySite,
}

/// Owner of the whole schedule state.
///
/// The assignment list only changes through this type, and every change
/// swaps in a complete new list and rebuilds the index.
#[derive(Debug, Clone)]
pub struct ScheduleBoard {
    roster: Roster,
    range: Option<DateRange>,
    today: NaiveDate,

    days: Vec<NaiveDate>,
    assignments: Vec<Assignment>,
    index: ScheduleIndex,

    query: String,
    status_filter: StatusFilter,
    site_filter: SiteFilter,
    view_mode: ViewMode,
    dialog: EditDialog,
}

impl ScheduleBoard {
    pub fn new(roster: Roster, range: Option<DateRange>, today: NaiveDate) -> Result<Self, ScheduleError> {
        roster.validate()?;

        let mut board = Self {
            roster,
            range,
            today,
            days: Vec::new(),
            assignments: Vec::new(),
            index: ScheduleIndex::default(),
            query: String::new(),
            status_filter: StatusFilter::default(),
            site_filter: SiteFilter::default(),
            view_mode: ViewMode::default(),
            dialog: EditDialog::default(),
        };
        board.regenerate();
        Ok(board)
    }

    /// Board on the local calendar date
    pub fn starting_today(roster: Roster, range: Option<DateRange>) -> Result<Self, ScheduleError> {
        Self::new(roster, range, chrono::Local::now().date_naive())
    }

    // =====================
    // range
    // =====================

    /// Regenerates the schedule for `range`. Earlier edits are dropped and an
    /// open edit dialog is closed.
    pub fn set_range(&mut self, range: Option<DateRange>) {
        self.range = range;
        self.dialog = EditDialog::Closed;
        self.regenerate();
    }

    pub fn previous_week(&mut self) {
        let range = self.active_range().previous_week();
        self.set_range(Some(range));
    }

    pub fn next_week(&mut self) {
        let range = self.active_range().next_week();
        self.set_range(Some(range));
    }

    /// `[today, today + 6]`
    pub fn reset_to_today(&mut self) {
        self.set_range(Some(DateRange::week_from(self.today)));
    }

    pub fn active_range(&self) -> DateRange {
        effective_range(self.range, self.today)
    }

    fn regenerate(&mut self) {
        self.days = resolve_days(self.range, self.today);
        let assignments = generate_assignments(&self.roster.guards, &self.roster.sites, &self.days);

        tracing::info!(
            start = %self.active_range().start,
            end = %self.active_range().end,
            records = assignments.len(),
            "schedule regenerated"
        );

        self.replace_assignments(assignments);

        let overbooked = self.index.overbooked_cells();
        if !overbooked.is_empty() {
            tracing::warn!(cells = overbooked.len(), "generated schedule puts more guards on a site than it takes");
        }
    }

    fn replace_assignments(&mut self, assignments: Vec<Assignment>) {
        self.index = ScheduleIndex::build(&assignments, &self.roster);
        self.assignments = assignments;
    }

    // =====================
    // filters
    // =====================

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.status_filter = status;
    }

    pub fn set_site_filter(&mut self, site: SiteFilter) {
        self.site_filter = site;
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn filtered_guards(&self) -> Vec<&Guard> {
        filter_guards(
            &self.roster.guards,
            &self.assignments,
            &self.active_range(),
            &self.query,
            self.status_filter,
        )
    }

    pub fn filtered_sites(&self) -> Vec<&Site> {
        filter_sites(&self.roster.sites, &self.query, &self.site_filter)
    }

    // =====================
    // edits
    // =====================

    /// Single-occupant edit, see [`mutator::set_assignment`]
    pub fn set_assignment(
        &mut self,
        site_id: &SiteId,
        date: NaiveDate,
        guard_id: Option<&GuardId>,
    ) -> Result<(), ScheduleError> {
        let next = mutator::set_assignment(&self.assignments, &self.roster, site_id, date, guard_id)?;
        self.replace_assignments(next);
        Ok(())
    }

    /// Per-slot edit, see [`mutator::set_slot`]
    pub fn set_slot(
        &mut self,
        site_id: &SiteId,
        date: NaiveDate,
        replacing: Option<&GuardId>,
        guard_id: Option<&GuardId>,
    ) -> Result<(), ScheduleError> {
        let next = mutator::set_slot(&self.assignments, &self.roster, site_id, date, replacing, guard_id)?;
        self.replace_assignments(next);
        Ok(())
    }

    // =====================
    // dialog
    // =====================

    pub fn open_edit(&mut self, site_id: SiteId, date: NaiveDate, current_guard_id: Option<GuardId>) {
        self.dialog = EditDialog::open(site_id, date, current_guard_id);
    }

    pub fn cancel_edit(&mut self) {
        self.dialog = EditDialog::Closed;
    }

    /// Puts `guard_id` into the open slot and closes the dialog.
    ///
    /// On error the dialog stays open on the same target.
    pub fn save_edit(&mut self, guard_id: &GuardId) -> Result<(), ScheduleError> {
        self.commit_edit(Some(guard_id))
    }

    /// Empties the open slot and closes the dialog
    pub fn clear_edit(&mut self) -> Result<(), ScheduleError> {
        self.commit_edit(None)
    }

    fn commit_edit(&mut self, guard_id: Option<&GuardId>) -> Result<(), ScheduleError> {
        let target = self.dialog.take().ok_or(ScheduleError::DialogClosed)?;

        let result = self.set_slot(
            &target.site_id,
            target.date,
            target.current_guard_id.as_ref(),
            guard_id,
        );
        if result.is_err() {
            self.dialog = EditDialog::Open { target };
        }
        result
    }

    // =====================
    // read side
    // =====================

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn index(&self) -> &ScheduleIndex {
        &self.index
    }

    pub fn dialog(&self) -> &EditDialog {
        &self.dialog
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Per-day counts over the filtered guards; leave counts as free
    pub fn day_summaries(&self) -> Vec<DaySummaryDto> {
        let guards = self.filtered_guards();

        self.days
            .iter()
            .map(|date| {
                let mut summary = DaySummaryDto { date: *date, assigned: 0, free: 0, off: 0 };
                for g in &guards {
                    match self.index.assignment(&g.id, *date).map(|a| &a.status) {
                        Some(AssignmentStatus::Assigned { .. }) => summary.assigned += 1,
                        Some(AssignmentStatus::Free) | Some(AssignmentStatus::Leave) => summary.free += 1,
                        Some(AssignmentStatus::Off) => summary.off += 1,
                        None => {}
                    }
                }
                summary
            })
            .collect()
    }

    pub fn guard_rows(&self) -> Vec<GuardRowDto> {
        self.filtered_guards()
            .into_iter()
            .map(|guard| GuardRowDto {
                guard: guard.clone(),
                days: self
                    .days
                    .iter()
                    .map(|date| GuardDayDto {
                        date: *date,
                        cell: self.guard_cell(&guard.id, *date),
                    })
                    .collect(),
            })
            .collect()
    }

    fn guard_cell(&self, guard_id: &GuardId, date: NaiveDate) -> GuardCellDto {
        match self.index.assignment(guard_id, date).map(|a| &a.status) {
            Some(AssignmentStatus::Assigned { site_id }) => match self.roster.site(site_id) {
                Some(site) => GuardCellDto::Site {
                    site_id: site.id.clone(),
                    site_name: site.name.clone(),
                    tag_index: site.tag_index,
                },
                None => GuardCellDto::Empty,
            },
            Some(AssignmentStatus::Free) => GuardCellDto::Free,
            Some(AssignmentStatus::Off) => GuardCellDto::Off,
            Some(AssignmentStatus::Leave) => GuardCellDto::Leave,
            None => GuardCellDto::Empty,
        }
    }

    pub fn site_rows(&self) -> Vec<SiteRowDto> {
        self.filtered_sites()
            .into_iter()
            .map(|site| SiteRowDto {
                site: site.clone(),
                days: self
                    .days
                    .iter()
                    .map(|date| SiteDayDto {
                        date: *date,
                        slots: self.index.site_slots(&site.id, *date),
                    })
                    .collect(),
            })
            .collect()
    }

    /// Rows for the current view mode plus the day headers
    pub fn snapshot(&self) -> BoardSnapshotDto {
        let (guard_rows, site_rows) = match self.view_mode {
            ViewMode::ByGuard => (Some(self.guard_rows()), None),
            ViewMode::BySite => (None, Some(self.site_rows())),
        };

        BoardSnapshotDto {
            days: self.days.clone(),
            summaries: self.day_summaries(),
            guard_rows,
            site_rows,
        }
    }
}
