//! Property tests for range resolution, generation, indexing and mutation.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use guard_schedule::domain::date_range::{resolve_days, DateRange};
use guard_schedule::domain::filter::{filter_guards, StatusFilter};
use guard_schedule::domain::generator::generate_assignments;
use guard_schedule::domain::index::ScheduleIndex;
use guard_schedule::domain::mutator::{set_assignment, set_slot};
use guard_schedule::{AssignmentStatus, Guard, GuardId, Roster, Site, SiteId};

// ============================================================================
// STRATEGIES
// ============================================================================

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    // 2000-01-01 .. roughly 2040
    (0i64..15_000).prop_map(|offset| NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Duration::days(offset))
}

fn arb_range() -> impl Strategy<Value = DateRange> {
    (arb_date(), 0i64..45).prop_map(|(start, len)| DateRange::new(start, start + Duration::days(len)))
}

fn arb_roster() -> impl Strategy<Value = Roster> {
    (1usize..15, 1usize..6, 1usize..4).prop_map(|(guard_count, site_count, capacity)| {
        let guards = (1..=guard_count)
            .map(|i| Guard::new(&format!("g{i}"), &format!("Guard {i}")))
            .collect();
        let sites = (1..=site_count)
            .map(|i| Site::new(&format!("s{i}"), &format!("Site {i}"), i as u32).with_capacity(capacity))
            .collect();
        Roster::new(guards, sites).unwrap()
    })
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn prop_days_are_contiguous(range in arb_range()) {
        let days = resolve_days(Some(range), range.start);

        prop_assert_eq!(days.len() as i64, (range.end - range.start).num_days() + 1);
        prop_assert_eq!(days[0], range.start);
        prop_assert_eq!(*days.last().unwrap(), range.end);
        for pair in days.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn prop_generator_is_total_and_deterministic(roster in arb_roster(), range in arb_range()) {
        let days = resolve_days(Some(range), range.start);
        let first = generate_assignments(&roster.guards, &roster.sites, &days);
        let second = generate_assignments(&roster.guards, &roster.sites, &days);

        prop_assert_eq!(first.len(), roster.guards.len() * days.len());
        prop_assert_eq!(&first, &second);

        let index = ScheduleIndex::build(&first, &roster);
        prop_assert_eq!(index.guard_day_count(), first.len());
    }

    #[test]
    fn prop_index_mirrors_assignments(roster in arb_roster(), range in arb_range()) {
        let days = resolve_days(Some(range), range.start);
        let list = generate_assignments(&roster.guards, &roster.sites, &days);
        let index = ScheduleIndex::build(&list, &roster);

        for a in &list {
            prop_assert_eq!(index.assignment(&a.guard_id, a.date), Some(a));

            if let AssignmentStatus::Assigned { site_id } = &a.status {
                let hits = index
                    .guards_at(site_id, a.date)
                    .iter()
                    .filter(|g| g.id == a.guard_id)
                    .count();
                prop_assert_eq!(hits, 1);
            }
        }

        let site_entries: usize = roster
            .sites
            .iter()
            .flat_map(|s| days.iter().map(move |d| (s.id.clone(), *d)))
            .map(|(s, d)| index.guards_at(&s, d).len())
            .sum();
        let assigned = list.iter().filter(|a| a.status.site_id().is_some()).count();
        prop_assert_eq!(site_entries, assigned);
    }

    #[test]
    fn prop_set_assignment_is_idempotent(
        roster in arb_roster(),
        range in arb_range(),
        site_pick in any::<prop::sample::Index>(),
        guard_pick in any::<prop::sample::Index>(),
        day_pick in any::<prop::sample::Index>(),
        clear in any::<bool>(),
    ) {
        let days = resolve_days(Some(range), range.start);
        let list = generate_assignments(&roster.guards, &roster.sites, &days);

        let site_id = roster.sites[site_pick.index(roster.sites.len())].id.clone();
        let guard_id = roster.guards[guard_pick.index(roster.guards.len())].id.clone();
        let date = days[day_pick.index(days.len())];
        let guard = if clear { None } else { Some(&guard_id) };

        let once = set_assignment(&list, &roster, &site_id, date, guard).unwrap();
        let twice = set_assignment(&once, &roster, &site_id, date, guard).unwrap();
        prop_assert_eq!(&once, &twice);

        // still one record per guard per day
        prop_assert_eq!(once.len(), list.len());
        let index = ScheduleIndex::build(&once, &roster);
        prop_assert!(index.guards_at(&site_id, date).len() <= 1);
    }

    #[test]
    fn prop_set_slot_never_overbooks(
        roster in arb_roster(),
        date in arb_date(),
        picks in prop::collection::vec((any::<prop::sample::Index>(), any::<prop::sample::Index>()), 1..20),
    ) {
        let site_id: SiteId = roster.sites[0].id.clone();
        let capacity = roster.sites[0].capacity;
        let mut list = Vec::new();

        for (guard_pick, replace_pick) in picks {
            let incoming: GuardId = roster.guards[guard_pick.index(roster.guards.len())].id.clone();
            let occupants: Vec<GuardId> = ScheduleIndex::build(&list, &roster)
                .guards_at(&site_id, date)
                .iter()
                .map(|g| g.id.clone())
                .collect();
            let replacing = if occupants.is_empty() {
                None
            } else {
                Some(occupants[replace_pick.index(occupants.len())].clone())
            };

            if let Ok(next) = set_slot(&list, &roster, &site_id, date, replacing.as_ref(), Some(&incoming)) {
                list = next;
            }
            let index = ScheduleIndex::build(&list, &roster);
            prop_assert!(index.guards_at(&site_id, date).len() <= capacity);
        }
    }

    #[test]
    fn prop_status_all_is_text_filter_only(roster in arb_roster(), range in arb_range(), query in "[a-zA-Z0-9 ]{0,4}") {
        let days = resolve_days(Some(range), range.start);
        let list = generate_assignments(&roster.guards, &roster.sites, &days);

        let by_status = filter_guards(&roster.guards, &list, &range, &query, StatusFilter::All);
        let q = query.trim().to_lowercase();
        let by_text: Vec<&Guard> = roster
            .guards
            .iter()
            .filter(|g| g.name.to_lowercase().contains(&q))
            .collect();
        prop_assert_eq!(by_status, by_text);
    }
}
