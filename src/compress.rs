/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Coordinate compression of raw values into dense 1-based ranks.
//!
//! Tree leaves are indexed by rank, not by raw value, so arbitrary (sparse,
//! large) value sets can be handled with a tree sized by the number of
//! distinct values. The mapping is monotonic and must be built once, before
//! any tree operation, because leaf positions encode ranks.

use crate::error::TreeError;

/// Monotonic mapping between raw `i64` values and dense ranks `1..=len`.
#[derive(Debug, Clone)]
pub struct RankMap {
    /// Distinct values in ascending order; `values[rank - 1]` is the value
    /// with that rank.
    values: Vec<i64>,
}

impl RankMap {
    /// Build the table from an arbitrary (unsorted, possibly duplicated)
    /// slice of values.
    pub fn from_values(values: &[i64]) -> Self {
        let mut values = values.to_vec();
        values.sort_unstable();
        values.dedup();
        Self { values }
    }

    /// Number of distinct values, i.e. the tree domain size.
    pub fn len(&self) -> u32 {
        self.values.len() as u32
    }

    /// Returns true if the table holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The 1-based rank of `value`.
    ///
    /// Fails fast with [`TreeError::UnknownValue`] if `value` was not part of
    /// the values the table was built from. Use [`Self::first_rank_at_least`]
    /// or [`Self::last_rank_at_most`] when insertion-point semantics are
    /// wanted instead.
    pub fn rank(&self, value: i64) -> Result<u32, TreeError> {
        self.values
            .binary_search(&value)
            .map(|i| i as u32 + 1)
            .map_err(|_| TreeError::UnknownValue { value })
    }

    /// The raw value holding 1-based rank `rank`.
    pub fn value(&self, rank: u32) -> Result<i64, TreeError> {
        if rank == 0 || rank > self.len() {
            return Err(TreeError::PositionOutOfRange {
                pos: rank,
                domain: self.len(),
            });
        }
        Ok(self.values[rank as usize - 1])
    }

    /// The smallest rank whose value is `>= value`, or `None` if every value
    /// in the table is smaller.
    pub fn first_rank_at_least(&self, value: i64) -> Option<u32> {
        let idx = self.values.partition_point(|&v| v < value);
        (idx < self.values.len()).then(|| idx as u32 + 1)
    }

    /// The largest rank whose value is `<= value`, or `None` if every value
    /// in the table is larger.
    pub fn last_rank_at_most(&self, value: i64) -> Option<u32> {
        let idx = self.values.partition_point(|&v| v <= value);
        (idx > 0).then(|| idx as u32)
    }
}
