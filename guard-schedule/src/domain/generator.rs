use chrono::{Datelike, NaiveDate};

use crate::domain::models::{Assignment, AssignmentStatus, Guard, GuardId, Site};

/// Per-guard seed: second UTF-16 unit of the id.
///
/// `"g1"` -> `'1'` -> 49. `None` for ids shorter than two units.
pub fn hash_seed(guard_id: &GuardId) -> Option<u32> {
    guard_id.as_str().encode_utf16().nth(1).map(u32::from)
}

/// Trailing ASCII digits of the id, `"g10"` -> 10, no digits -> 0
pub fn numeric_suffix(guard_id: &GuardId) -> u32 {
    let id = guard_id.as_str();
    let digits_start = id
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i)
        .unwrap_or(id.len());

    id[digits_start..]
        .chars()
        .fold(0u32, |acc, c| {
            acc.wrapping_mul(10)
                .wrapping_add(c.to_digit(10).unwrap_or(0))
        })
}

/// Status of one guard on one day.
///
/// ```text
/// dice = (seed + day_of_month) % 10
///
///  0 1 | 2 3 4 5  | 6 7 8 | 9
///  off | assigned | free  | leave
/// ```
///
/// A guard without a seed is free every day.
pub fn derive_status(guard: &Guard, day: NaiveDate, sites: &[Site]) -> AssignmentStatus {
    let Some(seed) = hash_seed(&guard.id) else {
        return AssignmentStatus::Free;
    };
    let day_of_month = day.day();
    let dice = (seed + day_of_month) % 10;

    match dice {
        0 | 1 => AssignmentStatus::Off,
        9 => AssignmentStatus::Leave,
        2..=5 if !sites.is_empty() => {
            let site_index = (day_of_month + numeric_suffix(&guard.id)) as usize % sites.len();
            AssignmentStatus::Assigned {
                site_id: sites[site_index].id.clone(),
            }
        }
        _ => AssignmentStatus::Free,
    }
}

/// One assignment per guard per day, days ascending then guards in roster order.
///
/// Pure: same guards, sites and days always give the same list.
pub fn generate_assignments(guards: &[Guard], sites: &[Site], days: &[NaiveDate]) -> Vec<Assignment> {
    let mut assignments = Vec::with_capacity(guards.len() * days.len());

    for day in days {
        for guard in guards {
            assignments.push(Assignment::with_status(
                guard.id.clone(),
                *day,
                derive_status(guard, *day, sites),
            ));
        }
    }
    assignments
}
