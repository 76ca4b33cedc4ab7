//! Ordering rules for images within a shoot.
//!
//! A reorder must name every image of the shoot exactly once; partial
//! lists are rejected so an edit can never silently drop images from
//! the visible order. The transactional position assignment lives in
//! the persistence layer; these checks are pure.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// Direction for a single-step move within the current order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
}

/// Validate that `requested` is a complete permutation of `current`.
///
/// Rejects duplicates, subsets, and supersets. `current` is the shoot's
/// image-id set as read from storage; `requested` is the client's full
/// desired ordering.
pub fn validate_complete_order(current: &[DbId], requested: &[DbId]) -> Result<(), CoreError> {
    let mut seen = HashSet::with_capacity(requested.len());
    for id in requested {
        if !seen.insert(*id) {
            return Err(CoreError::Validation(format!(
                "image_ids contains duplicate id {id}"
            )));
        }
    }

    let current_set: HashSet<DbId> = current.iter().copied().collect();
    if let Some(unknown) = requested.iter().find(|id| !current_set.contains(id)) {
        return Err(CoreError::Validation(format!(
            "image_ids contains id {unknown} that does not belong to this shoot"
        )));
    }
    if requested.len() != current_set.len() {
        return Err(CoreError::Validation(format!(
            "image_ids must list all {} images of the shoot exactly once, got {}",
            current_set.len(),
            requested.len()
        )));
    }
    Ok(())
}

/// Flatten an `{image id -> position}` map into the ordered id list the
/// reorder operation takes. Ties sort by id so the result is
/// deterministic.
pub fn order_from_positions(sequences: &HashMap<DbId, i32>) -> Vec<DbId> {
    let mut pairs: Vec<(i32, DbId)> = sequences.iter().map(|(id, pos)| (*pos, *id)).collect();
    pairs.sort_unstable();
    pairs.into_iter().map(|(_, id)| id).collect()
}
