/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Version-0 construction.
//!
//! Builds the initial tree over `[1, N]` recursively, one node per range:
//! exactly `2N - 1` nodes, deterministic for a given domain. The node pool is
//! sized here, once, from the domain and the caller's update budget.

use super::PersistentSegmentTree;
use crate::aggregate::Aggregate;
use crate::arena::{NodeArena, NodeId};
use crate::error::TreeError;
use crate::node::Node;
use crate::versions::VersionTable;

impl<A: Aggregate> PersistentSegmentTree<A> {
    /// Build version 0 over `[1, domain]` with every leaf at the identity
    /// element.
    ///
    /// `update_budget` is the number of point updates the node pool is sized
    /// for; updates beyond the budget fail with
    /// [`TreeError::CapacityExceeded`].
    pub fn new(domain: u32, update_budget: u32) -> Result<Self, TreeError> {
        Self::build(domain, None, update_budget)
    }

    /// Build version 0 with the given initial leaf values.
    ///
    /// The domain size is `leaves.len()`; leaf `i` (0-based) becomes
    /// position `i + 1`.
    pub fn with_leaves(leaves: &[A::Value], update_budget: u32) -> Result<Self, TreeError> {
        let domain = u32::try_from(leaves.len()).map_err(|_| TreeError::CapacityExceeded {
            required: leaves.len() as u64,
            capacity: u32::MAX as u64,
        })?;
        Self::build(domain, Some(leaves), update_budget)
    }

    fn build(
        domain: u32,
        leaves: Option<&[A::Value]>,
        update_budget: u32,
    ) -> Result<Self, TreeError> {
        if domain == 0 {
            return Err(TreeError::EmptyDomain);
        }

        // 2N - 1 nodes for the build, one path per budgeted update.
        let build_nodes = 2 * domain as u64 - 1;
        let required = build_nodes + update_budget as u64 * Self::path_len(domain) as u64;
        let capacity = u32::try_from(required).map_err(|_| TreeError::CapacityExceeded {
            required,
            capacity: u32::MAX as u64,
        })?;

        let mut nodes = NodeArena::with_capacity(capacity);
        let root = Self::build_range(&mut nodes, 1, domain, leaves);

        let mut versions = VersionTable::new();
        versions.push(root);

        let tree = Self {
            domain,
            nodes,
            versions,
        };

        #[cfg(all(feature = "unittest", not(miri)))]
        tree.check_tree_invariants();

        Ok(tree)
    }

    /// Recursively build the node covering `[l, r]`, children first.
    fn build_range(
        nodes: &mut NodeArena<A::Value>,
        l: u32,
        r: u32,
        leaves: Option<&[A::Value]>,
    ) -> NodeId {
        if l == r {
            let value = leaves.map_or_else(A::identity, |vs| vs[l as usize - 1]);
            return nodes.insert(Node::leaf(value));
        }

        let mid = l + (r - l) / 2;
        let left = Self::build_range(nodes, l, mid, leaves);
        let right = Self::build_range(nodes, mid + 1, r, leaves);
        let aggregate = A::combine(nodes[left].aggregate(), nodes[right].aggregate());
        nodes.insert(Node::internal(left, right, aggregate))
    }
}
