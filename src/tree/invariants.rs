/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Structural invariant checks, compiled only under the `unittest` feature.
//!
//! Called from the build and write paths after every operation. These walk
//! every version from its root, so they are far too slow for production use.

use super::PersistentSegmentTree;
use crate::aggregate::Aggregate;
use crate::arena::NodeId;

impl<A: Aggregate> PersistentSegmentTree<A> {
    /// Verify every version's tree structure and aggregates.
    pub(crate) fn check_tree_invariants(&self) {
        for raw in 0..self.num_versions() {
            let root = self
                .versions
                .root_of_raw(raw)
                .expect("version table indices are dense");
            let (_, leaves) = self.check_subtree(root, 1, self.domain);
            assert_eq!(
                leaves, self.domain as u64,
                "version {raw} does not cover the whole domain"
            );
        }
        assert!(
            self.num_nodes() <= self.capacity(),
            "node pool grew past its pre-sized capacity"
        );
    }

    /// Check the subtree covering `[l, r]`; returns (aggregate, leaf count).
    fn check_subtree(&self, node: NodeId, l: u32, r: u32) -> (A::Value, u64) {
        let n = &self.nodes[node];
        if l == r {
            assert!(n.is_leaf(), "single-position node [{l}, {r}] must be a leaf");
            return (n.aggregate(), 1);
        }

        let (left, right) = n
            .children()
            .expect("multi-position node must have both children");
        let mid = l + (r - l) / 2;
        let (left_agg, left_leaves) = self.check_subtree(left, l, mid);
        let (right_agg, right_leaves) = self.check_subtree(right, mid + 1, r);

        let expected = A::combine(left_agg, right_agg);
        assert_eq!(
            n.aggregate(),
            expected,
            "aggregate mismatch at node covering [{l}, {r}]"
        );
        (expected, left_leaves + right_leaves)
    }
}
