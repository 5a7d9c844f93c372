//! Tests for the ordinal engine.

use super::*;

fn siblings(pairs: &[(u64, u32)]) -> Vec<Sibling> {
    pairs
        .iter()
        .map(|&(id, ordinal)| Sibling { id, ordinal })
        .collect()
}

fn apply(snapshot: &[Sibling], changes: &[Sibling]) -> Vec<Sibling> {
    let mut result = snapshot.to_vec();
    for change in changes {
        let slot = result
            .iter_mut()
            .find(|s| s.id == change.id)
            .expect("change refers to a known sibling");
        slot.ordinal = change.ordinal;
    }
    result.sort_by_key(|s| s.ordinal);
    result
}

#[test]
fn test_next_ordinal_empty() {
    assert_eq!(next_ordinal(Vec::new()), 1);
}

#[test]
fn test_next_ordinal_dense() {
    assert_eq!(next_ordinal(vec![1, 2, 3]), 4);
}

#[test]
fn test_next_ordinal_skips_over_gap() {
    // A gap left by deletion is not refilled; the suggestion stays max+1.
    assert_eq!(next_ordinal(vec![1, 3, 4]), 5);
}

#[test]
fn test_reorder_noop_returns_no_changes() {
    let snapshot = siblings(&[(10, 1), (11, 2), (12, 3)]);
    let changes = reorder("reorder exercise", &snapshot, 11, 2).unwrap();
    assert!(changes.is_empty());
}

#[test]
fn test_reorder_first_to_last() {
    // Moving #1 to position 3: #2 -> 1, #3 -> 2, #1 -> 3.
    let snapshot = siblings(&[(10, 1), (11, 2), (12, 3)]);
    let changes = reorder("reorder exercise", &snapshot, 10, 3).unwrap();
    let result = apply(&snapshot, &changes);

    assert_eq!(
        result,
        siblings(&[(11, 1), (12, 2), (10, 3)]),
        "shift-range move, not a swap"
    );
}

#[test]
fn test_reorder_last_to_first() {
    // Moving #4 to position 1: every earlier sibling slides one slot later.
    let snapshot = siblings(&[(20, 1), (21, 2), (22, 3), (23, 4)]);
    let changes = reorder("reorder set", &snapshot, 23, 1).unwrap();
    let result = apply(&snapshot, &changes);

    assert_eq!(result, siblings(&[(23, 1), (20, 2), (21, 3), (22, 4)]));
}

#[test]
fn test_reorder_middle_move_touches_only_range() {
    let snapshot = siblings(&[(1, 1), (2, 2), (3, 3), (4, 4), (5, 5)]);
    let changes = reorder("reorder set", &snapshot, 2, 4).unwrap();

    // Siblings 1 and 5 are outside the shifted range and stay untouched.
    assert!(changes.iter().all(|s| s.id != 1 && s.id != 5));
    let result = apply(&snapshot, &changes);
    assert_eq!(result, siblings(&[(1, 1), (3, 2), (4, 3), (2, 4), (5, 5)]));
}

#[test]
fn test_reorder_yields_dense_unique_ordinals() {
    let snapshot = siblings(&[(1, 1), (2, 2), (3, 3), (4, 4), (5, 5), (6, 6)]);
    for target in 1..=6u32 {
        let changes = reorder("reorder set", &snapshot, 3, target).unwrap();
        let result = apply(&snapshot, &changes);
        let ordinals: Vec<u32> = result.iter().map(|s| s.ordinal).collect();
        assert_eq!(ordinals, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(result.iter().find(|s| s.id == 3).unwrap().ordinal, target);
    }
}

#[test]
fn test_reorder_rejects_zero() {
    let snapshot = siblings(&[(1, 1), (2, 2)]);
    let err = reorder("reorder set", &snapshot, 1, 0).unwrap_err();
    assert!(matches!(err, PlannerError::InvalidStructure { .. }));
}

#[test]
fn test_reorder_rejects_beyond_sibling_count() {
    let snapshot = siblings(&[(1, 1), (2, 2), (3, 3)]);
    let err = reorder("reorder exercise", &snapshot, 1, 4).unwrap_err();
    match err {
        PlannerError::InvalidStructure { operation, reason } => {
            assert_eq!(operation, "reorder exercise");
            assert!(reason.contains('4'));
            assert!(reason.contains('3'));
        }
        other => panic!("Expected InvalidStructure, got {other:?}"),
    }
}

#[test]
fn test_reorder_unknown_sibling() {
    let snapshot = siblings(&[(1, 1), (2, 2)]);
    let err = reorder("reorder set", &snapshot, 99, 1).unwrap_err();
    assert!(matches!(err, PlannerError::InvalidStructure { .. }));
}
