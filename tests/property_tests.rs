//! Property tests for the roster invariants.

use std::collections::BTreeSet;

use proptest::collection::vec;
use proptest::prelude::*;
use student_manager::roster::validate_identifier;
use student_manager::{Roster, RosterError, SortKey, StudentRecord};

/// Rosters of 1..=30 records with distinct 4-digit ids and 1..=6 courses.
fn roster_strategy() -> impl Strategy<Value = Roster> {
    (1usize..=6, proptest::collection::btree_set(1000u32..=9999, 1..=30)).prop_flat_map(
        |(courses, ids)| {
            let count = ids.len();
            (
                Just(courses),
                Just(ids.into_iter().collect::<Vec<_>>()),
                vec("[A-Za-z]{1,8}", count),
                vec(vec(0.0f64..=100.0, courses), count),
            )
        },
    )
    .prop_map(|(courses, ids, names, scores)| {
        let mut roster = Roster::new(ids.len(), courses);
        let mut pass = roster.begin_entry();
        for ((id, name), scores) in ids.into_iter().zip(names).zip(scores) {
            pass.push(StudentRecord::new(id, name, scores)).expect("push");
        }
        roster.commit(pass).expect("commit");
        roster
    })
}

fn ids(roster: &Roster) -> Vec<u32> {
    roster.records().iter().map(StudentRecord::id).collect()
}

proptest! {
    /// Identifiers accepted one after another are pairwise distinct.
    #[test]
    fn accepted_identifiers_are_unique(candidates in vec(900i64..10100, 1..60)) {
        let mut accepted: Vec<u32> = Vec::new();
        for candidate in candidates {
            if let Ok(id) = validate_identifier(candidate, &accepted) {
                accepted.push(id);
            }
        }
        let distinct: BTreeSet<u32> = accepted.iter().copied().collect();
        prop_assert_eq!(distinct.len(), accepted.len());
    }

    /// Totals and averages always agree with the scores.
    #[test]
    fn derived_fields_match_scores(roster in roster_strategy()) {
        for record in roster.records() {
            let sum: f64 = record.scores().iter().sum();
            prop_assert!((record.total() - sum).abs() < 1e-9);
            let average = sum / roster.course_count() as f64;
            prop_assert!((record.average() - average).abs() < 1e-9);
        }
    }

    /// Sorting by id after any other ordering gives the same order as sorting by id once.
    #[test]
    fn id_order_is_idempotent(mut roster in roster_strategy()) {
        roster.sort_by_id();
        let once = ids(&roster);
        roster.sort_by_name();
        roster.sort_by_total(true);
        roster.sort_by_id();
        prop_assert_eq!(ids(&roster), once);
    }

    /// Every adjacent pair respects the comparator after sorting.
    #[test]
    fn sorted_rosters_are_ordered(mut roster in roster_strategy()) {
        for key in [SortKey::TotalDescending, SortKey::TotalAscending, SortKey::Id, SortKey::Name] {
            roster.sort(key);
            for pair in roster.records().windows(2) {
                prop_assert_ne!(key.compare(&pair[0], &pair[1]), std::cmp::Ordering::Greater);
            }
        }
    }

    /// Lookup by id finds exactly the record with that id, or nothing.
    #[test]
    fn find_by_id_matches_membership(roster in roster_strategy(), probe in 1000i64..=9999) {
        let present = roster.records().iter().any(|record| i64::from(record.id()) == probe);
        match roster.find_by_id(probe) {
            Ok(record) => {
                prop_assert!(present);
                prop_assert_eq!(i64::from(record.id()), probe);
            }
            Err(err) => {
                prop_assert!(!present);
                prop_assert_eq!(err, RosterError::IdNotFound(probe));
            }
        }
    }

    /// Grade band counts add up to the roster size for every course.
    #[test]
    fn grade_bands_cover_every_record(roster in roster_strategy()) {
        for distribution in roster.all_grade_distributions().expect("distribution") {
            prop_assert_eq!(distribution.total(), roster.len());
        }
    }

    /// Course bounds stay within the observed scores.
    #[test]
    fn course_bounds_come_from_scores(roster in roster_strategy()) {
        for stats in roster.all_course_statistics().expect("statistics") {
            let scores: Vec<f64> = roster
                .records()
                .iter()
                .filter_map(|record| record.score(stats.course))
                .collect();
            let max = scores.iter().copied().fold(f64::MIN, f64::max);
            let min = scores.iter().copied().fold(f64::MAX, f64::min);
            prop_assert_eq!(stats.highest, max);
            prop_assert_eq!(stats.lowest, min);
            prop_assert!(stats.lowest - 1e-9 <= stats.average && stats.average <= stats.highest + 1e-9);
        }
    }
}
