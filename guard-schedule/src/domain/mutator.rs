use chrono::NaiveDate;

use crate::domain::models::{Assignment, AssignmentStatus, GuardId, SiteId};
use crate::domain::roster::Roster;
use crate::error::ScheduleError;

/// Puts `guard_id` into the site's cell on `date`, or empties it.
///
/// 1. every other guard at the site that day is demoted to `free`
/// 2. the incoming guard's record for the day becomes `assigned` here,
///    appended if the guard had none
///
/// This is the single-occupant edit: on a site with capacity > 1 it still
/// clears every co-assigned guard. Use [`set_slot`] to edit one slot.
///
/// Returns the new list; `assignments` is left untouched.
pub fn set_assignment(
    assignments: &[Assignment],
    roster: &Roster,
    site_id: &SiteId,
    date: NaiveDate,
    guard_id: Option<&GuardId>,
) -> Result<Vec<Assignment>, ScheduleError> {
    roster.require_site(site_id)?;
    if let Some(id) = guard_id {
        roster.require_guard(id)?;
    }

    tracing::debug!(site_id = %site_id, %date, guard_id = ?guard_id, "set assignment");

    Ok(reconcile(assignments, site_id, date, guard_id, |occupant| {
        Some(occupant) != guard_id
    }))
}

/// Edits one slot of a site's cell on `date`.
///
/// `replacing` names the guard whose slot is being edited; only that guard
/// is demoted, co-assigned guards stay. Without a slot to replace the site
/// needs a free slot, otherwise [`ScheduleError::SlotFull`] is returned and
/// nothing changes.
///
/// A capacity-1 site has one slot, so the edit falls back to
/// [`set_assignment`] and every other occupant is demoted.
///
/// ```text
/// capacity 2, [A, B]
///   set_slot(replacing: A, guard: C) -> [B, C]   A -> free
///   set_slot(replacing: -, guard: C) -> SlotFull
///   set_slot(replacing: B, guard: -) -> [A]      B -> free
/// ```
pub fn set_slot(
    assignments: &[Assignment],
    roster: &Roster,
    site_id: &SiteId,
    date: NaiveDate,
    replacing: Option<&GuardId>,
    guard_id: Option<&GuardId>,
) -> Result<Vec<Assignment>, ScheduleError> {
    let site = roster.require_site(site_id)?;
    if let Some(id) = guard_id {
        roster.require_guard(id)?;
    }
    if let Some(id) = replacing {
        roster.require_guard(id)?;
    }
    if site.capacity == 1 {
        return set_assignment(assignments, roster, site_id, date, guard_id);
    }

    let occupants: Vec<&GuardId> = assignments
        .iter()
        .filter(|a| a.date == date && a.is_at(site_id))
        .map(|a| &a.guard_id)
        .collect();

    // a stale target (no longer at the site) replaces nothing
    let replacing = replacing.filter(|r| occupants.contains(r) && Some(*r) != guard_id);

    if let Some(incoming) = guard_id {
        let already_here = occupants.contains(&incoming);
        if !already_here && replacing.is_none() && occupants.len() >= site.capacity {
            return Err(ScheduleError::SlotFull {
                site_id: site_id.clone(),
                date,
                capacity: site.capacity,
            });
        }
    }

    tracing::debug!(site_id = %site_id, %date, replacing = ?replacing, guard_id = ?guard_id, "set slot");

    Ok(reconcile(assignments, site_id, date, guard_id, |occupant| {
        Some(occupant) == replacing
    }))
}

/// Demotes the occupants picked by `demote`, then places `guard_id`
fn reconcile<F>(
    assignments: &[Assignment],
    site_id: &SiteId,
    date: NaiveDate,
    guard_id: Option<&GuardId>,
    demote: F,
) -> Vec<Assignment>
where
    F: Fn(&GuardId) -> bool,
{
    let mut next: Vec<Assignment> = assignments
        .iter()
        .map(|a| {
            if a.date == date && a.is_at(site_id) && demote(&a.guard_id) {
                Assignment::with_status(a.guard_id.clone(), date, AssignmentStatus::Free)
            } else {
                a.clone()
            }
        })
        .collect();

    if let Some(incoming) = guard_id {
        let placed = AssignmentStatus::Assigned { site_id: site_id.clone() };

        match next
            .iter_mut()
            .find(|a| &a.guard_id == incoming && a.date == date)
        {
            Some(existing) => existing.status = placed,
            None => next.push(Assignment::with_status(incoming.clone(), date, placed)),
        }
    }
    next
}
