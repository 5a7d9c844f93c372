//! Sibling-ordinal management shared by every level of the plan hierarchy.
//!
//! Weeks within a plan, days within a week, exercises within a day and sets
//! within an exercise all occupy a 1-based ordinal space that is unique among
//! siblings. This module owns the two pieces of logic that manipulate that
//! space: suggesting the next free ordinal for a new child, and recomputing
//! the ordinals of a sibling group when one member is moved to a new
//! position.
//!
//! The functions operate on a plain snapshot of `(id, ordinal)` pairs so the
//! shift algorithm can be tested without a database. The queries layer is
//! responsible for fetching the snapshot and persisting the returned
//! assignments inside a single transaction.

use crate::error::{PlannerError, Result};

#[cfg(test)]
mod tests;

/// One sibling's identity and its current ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sibling {
    pub id: u64,
    pub ordinal: u32,
}

/// Returns the next ordinal for a new child: `max(existing) + 1`, or `1`
/// when the parent has no children yet.
///
/// This is a suggestion, not an enforcement: callers may create a child at
/// any positive ordinal that is not already taken, and a gap left behind by
/// a deletion is skipped over rather than refilled.
pub fn next_ordinal<I>(ordinals: I) -> u32
where
    I: IntoIterator<Item = u32>,
{
    ordinals.into_iter().max().map_or(1, |max| max + 1)
}

/// Computes the ordinal reassignment that moves `moved_id` to `new_ordinal`.
///
/// The shift is a range move, not a swap: when the item moves later, every
/// sibling between its old and new position slides one slot earlier; when it
/// moves earlier, the affected range slides one slot later. Ordinal
/// uniqueness is preserved, and the touched range ends up densely packed.
///
/// Returns only the siblings whose ordinal actually changes (the shifted
/// range plus the moved item), or an empty vector for the no-op case where
/// `new_ordinal` equals the current ordinal. All returned assignments must
/// be persisted in one atomic batch.
///
/// # Errors
///
/// `InvalidStructure` when `new_ordinal` is zero or exceeds the sibling
/// count, or when `moved_id` is not part of the snapshot.
pub fn reorder(
    operation: &'static str,
    siblings: &[Sibling],
    moved_id: u64,
    new_ordinal: u32,
) -> Result<Vec<Sibling>> {
    if new_ordinal == 0 {
        return Err(PlannerError::invalid_structure(
            operation,
            "ordinal must be positive",
        ));
    }

    let count = siblings.len() as u32;
    if new_ordinal > count {
        return Err(PlannerError::invalid_structure(
            operation,
            format!("new position {new_ordinal} exceeds sibling count {count}"),
        ));
    }

    let current_ordinal = siblings
        .iter()
        .find(|s| s.id == moved_id)
        .map(|s| s.ordinal)
        .ok_or_else(|| {
            PlannerError::invalid_structure(operation, format!("item {moved_id} is not a sibling"))
        })?;

    if current_ordinal == new_ordinal {
        return Ok(Vec::new());
    }

    let mut changed = Vec::new();
    for sibling in siblings {
        if sibling.id == moved_id {
            continue;
        }
        let ordinal = sibling.ordinal;
        if current_ordinal < new_ordinal {
            // Moving later: the range (current, new] slides one slot earlier.
            if ordinal > current_ordinal && ordinal <= new_ordinal {
                changed.push(Sibling {
                    id: sibling.id,
                    ordinal: ordinal - 1,
                });
            }
        } else {
            // Moving earlier: the range [new, current) slides one slot later.
            if ordinal >= new_ordinal && ordinal < current_ordinal {
                changed.push(Sibling {
                    id: sibling.id,
                    ordinal: ordinal + 1,
                });
            }
        }
    }

    changed.push(Sibling {
        id: moved_id,
        ordinal: new_ordinal,
    });

    Ok(changed)
}
