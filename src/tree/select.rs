/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Two-version difference descent: k-th order statistic.
//!
//! For a [`Count`] tree built over value ranks, the difference between two
//! prefix versions is itself a valid histogram of the positions between
//! them. Descending both versions in lockstep and subtracting left-child
//! counts finds the leaf holding the k-th occurrence without materializing
//! the difference.

use super::PersistentSegmentTree;
use crate::aggregate::Count;
use crate::arena::{NodeArena, NodeId};
use crate::error::TreeError;
use crate::versions::VersionId;

impl PersistentSegmentTree<Count> {
    /// The 1-based rank holding the k-th smallest occurrence between two
    /// prefix versions.
    ///
    /// `lo` is exclusive and `hi` inclusive: for "k-th smallest among array
    /// positions `[l, r]`", pass the prefix versions after `l - 1` and `r`
    /// insertions. `lo` must be an earlier prefix of `hi`; per-rank counts
    /// may never decrease between the two versions.
    ///
    /// `k` outside `[1, total]` (where `total` is the number of occurrences
    /// between the versions) fails fast with [`TreeError::RankOutOfRange`].
    pub fn select_by_difference(
        &self,
        lo: VersionId,
        hi: VersionId,
        k: u64,
    ) -> Result<u32, TreeError> {
        let lo_root = self.root_of(lo)?;
        let hi_root = self.root_of(hi)?;

        let total = self.nodes[hi_root]
            .aggregate()
            .checked_sub(self.nodes[lo_root].aggregate())
            .unwrap_or(0);
        if k == 0 || k > total {
            return Err(TreeError::RankOutOfRange { k, size: total });
        }

        Ok(Self::descend(
            &self.nodes,
            lo_root,
            hi_root,
            1,
            self.domain,
            k,
        ))
    }

    /// Lockstep descent over two versions of the same tree shape.
    fn descend(nodes: &NodeArena<u64>, lo: NodeId, hi: NodeId, l: u32, r: u32, k: u64) -> u32 {
        if l == r {
            return l;
        }

        let mid = l + (r - l) / 2;
        let (lo_left, lo_right) = nodes[lo]
            .children()
            .expect("internal node has both children");
        let (hi_left, hi_right) = nodes[hi]
            .children()
            .expect("internal node has both children");

        let left_count = nodes[hi_left]
            .aggregate()
            .saturating_sub(nodes[lo_left].aggregate());

        if k <= left_count {
            Self::descend(nodes, lo_left, hi_left, l, mid, k)
        } else {
            Self::descend(nodes, lo_right, hi_right, mid + 1, r, k - left_count)
        }
    }
}
