//! Schedule conflict detection
//!
//! Two courses conflict when their full occupied slot sets (primary meetings,
//! labs and practicums) share at least one `(day, hour)` pair. Everything here
//! is a pure function of its inputs; callers recompute on every selection change.

use crate::core::models::{Course, TimeSlot};
use std::collections::BTreeSet;

/// A pair of conflicting courses and the slots they share
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictPair {
    /// Id of the earlier course in selection order
    pub first: String,
    /// Id of the later course in selection order
    pub second: String,
    /// Distinct shared slots, sorted by day then hour
    pub shared_slots: Vec<TimeSlot>,
}

/// Whether `a` and `b` share any occupied slot.
///
/// Symmetric. Comparing a course with itself (same id) is defined as `false`.
#[must_use]
pub fn has_conflict(a: &Course, b: &Course) -> bool {
    if a.id == b.id {
        return false;
    }
    a.occupied_slots()
        .any(|slot| b.occupied_slots().any(|other| other == slot))
}

/// Distinct slots occupied by both courses; empty for the same id.
#[must_use]
pub fn shared_slots(a: &Course, b: &Course) -> Vec<TimeSlot> {
    if a.id == b.id {
        return Vec::new();
    }
    let theirs: BTreeSet<TimeSlot> = b.occupied_slots().copied().collect();
    a.occupied_slots()
        .filter(|slot| theirs.contains(slot))
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Ids of every course that conflicts with at least one other course in `courses`.
///
/// Examines each unordered pair `(i, j)` with `i < j` once.
#[must_use]
pub fn conflicting_ids(courses: &[Course]) -> BTreeSet<String> {
    let mut ids = BTreeSet::new();
    for (i, a) in courses.iter().enumerate() {
        for b in &courses[i + 1..] {
            if has_conflict(a, b) {
                ids.insert(a.id.clone());
                ids.insert(b.id.clone());
            }
        }
    }
    ids
}

/// Whether `candidate` conflicts with any course in `courses`
#[must_use]
pub fn conflicts_with_any(candidate: &Course, courses: &[Course]) -> bool {
    courses.iter().any(|course| has_conflict(course, candidate))
}

/// Every conflicting pair in selection order, with the slots each pair shares
#[must_use]
pub fn conflict_pairs(courses: &[Course]) -> Vec<ConflictPair> {
    let mut pairs = Vec::new();
    for (i, a) in courses.iter().enumerate() {
        for b in &courses[i + 1..] {
            let shared = shared_slots(a, b);
            if !shared.is_empty() {
                pairs.push(ConflictPair {
                    first: a.id.clone(),
                    second: b.id.clone(),
                    shared_slots: shared,
                });
            }
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Day, MeetingBlock};

    fn course(code: &str, slots: &[(Day, u32)]) -> Course {
        let mut course = Course::new(
            code.to_string(),
            format!("{code} name"),
            "Staff".to_string(),
            "DEPT".to_string(),
        );
        course.time = slots.iter().map(|&(d, h)| TimeSlot::new(d, h)).collect();
        course
    }

    fn with_lab(mut course: Course, slots: &[(Day, u32)]) -> Course {
        course.labs.push(MeetingBlock::new(
            "TA".to_string(),
            slots.iter().map(|&(d, h)| TimeSlot::new(d, h)).collect(),
            Vec::new(),
        ));
        course
    }

    fn with_practicum(mut course: Course, slots: &[(Day, u32)]) -> Course {
        course.practicums.push(MeetingBlock::new(
            "TA".to_string(),
            slots.iter().map(|&(d, h)| TimeSlot::new(d, h)).collect(),
            Vec::new(),
        ));
        course
    }

    #[test]
    fn test_disjoint_slots_do_not_conflict() {
        let a = course("A", &[(Day::Monday, 1), (Day::Tuesday, 2)]);
        let b = course("B", &[(Day::Monday, 2), (Day::Wednesday, 1)]);
        assert!(!has_conflict(&a, &b));
        assert!(!has_conflict(&b, &a));
    }

    #[test]
    fn test_shared_slot_conflicts_both_ways() {
        let a = course("A", &[(Day::Monday, 1), (Day::Tuesday, 2)]);
        let b = course("B", &[(Day::Thursday, 5), (Day::Tuesday, 2)]);
        assert!(has_conflict(&a, &b));
        assert!(has_conflict(&b, &a));
    }

    #[test]
    fn test_same_hour_different_day_is_not_a_conflict() {
        let a = course("A", &[(Day::Monday, 3)]);
        let b = course("B", &[(Day::Friday, 3)]);
        assert!(!has_conflict(&a, &b));
    }

    #[test]
    fn test_lab_and_practicum_slots_count() {
        let a = with_lab(course("A", &[(Day::Monday, 1)]), &[(Day::Wednesday, 5)]);
        let b = course("B", &[(Day::Wednesday, 5)]);
        assert!(has_conflict(&a, &b));

        let c = with_practicum(course("C", &[]), &[(Day::Monday, 1)]);
        assert!(has_conflict(&a, &c));
        assert!(!has_conflict(&b, &c));
    }

    #[test]
    fn test_self_comparison_is_false() {
        let a = course("A", &[(Day::Monday, 1)]);
        assert!(!has_conflict(&a, &a));
        assert!(!has_conflict(&a, &a.clone()));
        assert!(shared_slots(&a, &a).is_empty());
    }

    #[test]
    fn test_symmetry_over_a_small_population() {
        let courses = [
            course("A", &[(Day::Monday, 1)]),
            with_lab(course("B", &[(Day::Tuesday, 1)]), &[(Day::Monday, 1)]),
            with_practicum(course("C", &[(Day::Friday, 8)]), &[(Day::Tuesday, 1)]),
            course("D", &[]),
        ];
        for a in &courses {
            for b in &courses {
                assert_eq!(has_conflict(a, b), has_conflict(b, a), "{} vs {}", a.id, b.id);
            }
        }
    }

    #[test]
    fn test_chain_conflicts_include_all_three() {
        let a = course("A", &[(Day::Monday, 1)]);
        let b = course("B", &[(Day::Monday, 1), (Day::Tuesday, 2)]);
        let c = course("C", &[(Day::Tuesday, 2)]);
        assert!(!has_conflict(&a, &c));

        let ids = conflicting_ids(&[a, b, c]);
        let expected: BTreeSet<String> = ["A", "B", "C"].iter().map(ToString::to_string).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_conflicting_ids_empty_cases() {
        assert!(conflicting_ids(&[]).is_empty());
        assert!(conflicting_ids(&[course("A", &[(Day::Monday, 1)])]).is_empty());
    }

    #[test]
    fn test_conflicts_with_any() {
        let added = vec![
            course("A", &[(Day::Monday, 1)]),
            course("B", &[(Day::Tuesday, 2)]),
        ];
        assert!(conflicts_with_any(&course("D", &[(Day::Tuesday, 2)]), &added));
        assert!(!conflicts_with_any(&course("E", &[(Day::Tuesday, 3)]), &added));
        assert!(!conflicts_with_any(&course("F", &[(Day::Monday, 1)]), &[]));
    }

    #[test]
    fn test_conflict_pairs_report_shared_slots() {
        let a = with_lab(
            course("A", &[(Day::Monday, 1), (Day::Monday, 1)]),
            &[(Day::Thursday, 4)],
        );
        let b = course("B", &[(Day::Thursday, 4), (Day::Monday, 1)]);
        let c = course("C", &[(Day::Friday, 2)]);

        let pairs = conflict_pairs(&[a, b, c]);
        assert_eq!(
            pairs,
            vec![ConflictPair {
                first: "A".to_string(),
                second: "B".to_string(),
                shared_slots: vec![
                    TimeSlot::new(Day::Monday, 1),
                    TimeSlot::new(Day::Thursday, 4)
                ],
            }]
        );
    }
}
