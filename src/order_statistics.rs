/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Order statistics over a static array, via prefix versions.
//!
//! [`OrderStatisticsIndex`] bundles the three pieces the pattern needs:
//! a [`RankMap`] compressing values into tree leaf positions, a [`Count`]
//! tree over those positions, and one version per array prefix. Version `i`
//! holds the rank histogram of the first `i` elements, so any sub-array
//! `[l, r]` is the difference between prefix versions `r` and `l - 1` —
//! which is exactly what the k-th descent and range counting consume.

use crate::aggregate::Count;
use crate::compress::RankMap;
use crate::error::TreeError;
use crate::tree::PersistentSegmentTree;
use crate::versions::VersionId;

/// Immutable index answering "k-th smallest in `[l, r]`" and "how many
/// values of `[l, r]` fall in `[lo, hi]`" over a fixed array.
///
/// Positions are 1-based, matching the tree's domain convention.
#[derive(Debug)]
pub struct OrderStatisticsIndex {
    ranks: RankMap,
    tree: PersistentSegmentTree<Count>,
    /// `prefixes[i]` is the version holding the first `i` elements.
    prefixes: Vec<VersionId>,
    /// Array length, cached as `u32` for position validation.
    len: u32,
}

impl OrderStatisticsIndex {
    /// Build the index from the array, in `O(n log n)`.
    ///
    /// Fails with [`TreeError::EmptyDomain`] for an empty array.
    pub fn from_values(values: &[i64]) -> Result<Self, TreeError> {
        if values.is_empty() {
            return Err(TreeError::EmptyDomain);
        }
        let len = u32::try_from(values.len()).map_err(|_| TreeError::CapacityExceeded {
            required: values.len() as u64,
            capacity: u32::MAX as u64,
        })?;

        let ranks = RankMap::from_values(values);
        let mut tree = PersistentSegmentTree::<Count>::new(ranks.len(), len)?;

        let mut prefixes = Vec::with_capacity(values.len() + 1);
        let mut version = VersionId::ZERO;
        prefixes.push(version);
        for &value in values {
            let rank = ranks.rank(value)?;
            version = tree.apply(version, rank, 1)?.version;
            prefixes.push(version);
        }

        Ok(Self {
            ranks,
            tree,
            prefixes,
            len,
        })
    }

    /// Length of the indexed array.
    pub const fn len(&self) -> u32 {
        self.len
    }

    /// Always false: empty arrays are rejected at construction.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct values in the array.
    pub fn num_distinct(&self) -> u32 {
        self.ranks.len()
    }

    /// The k-th smallest value among positions `[l, r]` (1-based, inclusive).
    ///
    /// `k = 1` is the minimum of the sub-array, `k = r - l + 1` the maximum.
    /// Duplicated values occupy one slot per occurrence, so the k-th smallest
    /// of `[5, 5, 5]` is `5` for every valid `k`.
    pub fn kth_smallest(&self, l: u32, r: u32, k: u64) -> Result<i64, TreeError> {
        self.check_span(l, r)?;
        let size = (r - l + 1) as u64;
        if k == 0 || k > size {
            return Err(TreeError::RankOutOfRange { k, size });
        }

        let rank =
            self.tree
                .select_by_difference(self.prefixes[l as usize - 1], self.prefixes[r as usize], k)?;
        self.ranks.value(rank)
    }

    /// How many positions in `[l, r]` hold a value in `[lo, hi]` (inclusive).
    ///
    /// `lo` and `hi` need not be values that occur in the array; they are
    /// clamped to the compression table by insertion point. An empty value
    /// interval returns 0.
    pub fn count_in_range(&self, l: u32, r: u32, lo: i64, hi: i64) -> Result<u64, TreeError> {
        self.check_span(l, r)?;
        if lo > hi {
            return Ok(0);
        }

        let (Some(lo_rank), Some(hi_rank)) = (
            self.ranks.first_rank_at_least(lo),
            self.ranks.last_rank_at_most(hi),
        ) else {
            return Ok(0);
        };
        if lo_rank > hi_rank {
            return Ok(0);
        }

        let up_to_r = self
            .tree
            .query(self.prefixes[r as usize], lo_rank, hi_rank)?;
        let up_to_l = self
            .tree
            .query(self.prefixes[l as usize - 1], lo_rank, hi_rank)?;
        Ok(up_to_r - up_to_l)
    }

    fn check_span(&self, l: u32, r: u32) -> Result<(), TreeError> {
        if l == 0 || l > self.len {
            return Err(TreeError::PositionOutOfRange {
                pos: l,
                domain: self.len,
            });
        }
        if r < l || r > self.len {
            return Err(TreeError::PositionOutOfRange {
                pos: r,
                domain: self.len,
            });
        }
        Ok(())
    }
}
