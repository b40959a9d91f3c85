/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Read path: single-version range queries.
//!
//! A query descends one version's tree, returning a node's stored aggregate
//! whenever its range is fully covered by the query and recursing only into
//! children that intersect it. Queries never mutate anything and are safe on
//! any version, however old.

use super::PersistentSegmentTree;
use crate::aggregate::Aggregate;
use crate::arena::{NodeArena, NodeId};
use crate::error::TreeError;
use crate::versions::VersionId;

impl<A: Aggregate> PersistentSegmentTree<A> {
    /// Aggregate over positions `[ql, qr]` of `version`.
    ///
    /// An empty range (`ql > qr`) returns the identity element. Non-empty
    /// ranges must lie inside `[1, domain]`; anything else is
    /// [`TreeError::PositionOutOfRange`]. Runs in `O(log N)`.
    pub fn query(&self, version: VersionId, ql: u32, qr: u32) -> Result<A::Value, TreeError> {
        if ql > qr {
            return Ok(A::identity());
        }
        self.check_position(ql)?;
        self.check_position(qr)?;

        let root = self.root_of(version)?;
        Ok(Self::query_range(&self.nodes, root, 1, self.domain, ql, qr))
    }

    /// Recursive query over the node covering `[l, r]`.
    ///
    /// Invariant: `[l, r]` intersects `[ql, qr]` whenever this is called, so
    /// a leaf reached here is always fully covered.
    fn query_range(
        nodes: &NodeArena<A::Value>,
        node: NodeId,
        l: u32,
        r: u32,
        ql: u32,
        qr: u32,
    ) -> A::Value {
        if ql <= l && r <= qr {
            return nodes[node].aggregate();
        }

        let mid = l + (r - l) / 2;
        let (left, right) = nodes[node]
            .children()
            .expect("internal node has both children");

        let mut acc = A::identity();
        if ql <= mid {
            acc = A::combine(acc, Self::query_range(nodes, left, l, mid, ql, qr));
        }
        if qr > mid {
            acc = A::combine(acc, Self::query_range(nodes, right, mid + 1, r, ql, qr));
        }
        acc
    }
}
