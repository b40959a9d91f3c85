/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Write path: path-copying point updates.
//!
//! An update never mutates an existing node. At every level of the descent
//! it allocates one replacement node whose untouched child id is taken
//! verbatim from the base version, so the base version and the new version
//! share every subtree off the updated path.

use super::{PersistentSegmentTree, UpdateResult};
use crate::aggregate::Aggregate;
use crate::arena::{NodeArena, NodeId};
use crate::error::TreeError;
use crate::node::Node;
use crate::versions::VersionId;

impl<A: Aggregate> PersistentSegmentTree<A> {
    /// Accumulate `delta` into position `pos` of version `base`, producing a
    /// new version.
    ///
    /// The leaf aggregate becomes `combine(old, delta)`. This is the
    /// insert/count semantics: applying the same delta twice at the same
    /// position accumulates both. Use [`Self::assign`] for overwrite
    /// semantics.
    pub fn apply(
        &mut self,
        base: VersionId,
        pos: u32,
        delta: A::Value,
    ) -> Result<UpdateResult, TreeError> {
        self.update_leaf(base, pos, |old| A::combine(old, delta))
    }

    /// Overwrite position `pos` of version `base` with `value`, producing a
    /// new version.
    ///
    /// The leaf aggregate becomes `value`, discarding the previous one. Use
    /// [`Self::apply`] for accumulate semantics.
    pub fn assign(
        &mut self,
        base: VersionId,
        pos: u32,
        value: A::Value,
    ) -> Result<UpdateResult, TreeError> {
        self.update_leaf(base, pos, |_| value)
    }

    /// Shared update core: path-copy from `base`'s root down to `pos`,
    /// transforming the leaf aggregate with `f`.
    ///
    /// Everything is validated before the first allocation, so a failed
    /// update leaves the pool untouched.
    fn update_leaf(
        &mut self,
        base: VersionId,
        pos: u32,
        f: impl FnOnce(A::Value) -> A::Value,
    ) -> Result<UpdateResult, TreeError> {
        self.check_position(pos)?;
        let base_root = self.root_of(base)?;

        let path_len = Self::path_len(self.domain);
        if self.nodes.remaining() < path_len {
            return Err(TreeError::CapacityExceeded {
                required: self.nodes.len() as u64 + path_len as u64,
                capacity: self.nodes.capacity() as u64,
            });
        }

        let before = self.nodes.len();
        let new_root = Self::copy_path(&mut self.nodes, base_root, 1, self.domain, pos, f);
        let version = self.versions.push(new_root);

        #[cfg(all(feature = "unittest", not(miri)))]
        self.check_tree_invariants();

        Ok(UpdateResult {
            version,
            new_nodes: self.nodes.len() - before,
        })
    }

    /// Recursively clone the path to `pos`, re-linking untouched siblings.
    fn copy_path(
        nodes: &mut NodeArena<A::Value>,
        node: NodeId,
        l: u32,
        r: u32,
        pos: u32,
        f: impl FnOnce(A::Value) -> A::Value,
    ) -> NodeId {
        if l == r {
            let updated = f(nodes[node].aggregate());
            return nodes.insert(Node::leaf(updated));
        }

        let mid = l + (r - l) / 2;
        let (left, right) = nodes[node]
            .children()
            .expect("internal node has both children");

        if pos <= mid {
            let new_left = Self::copy_path(nodes, left, l, mid, pos, f);
            let aggregate = A::combine(nodes[new_left].aggregate(), nodes[right].aggregate());
            nodes.insert(Node::internal(new_left, right, aggregate))
        } else {
            let new_right = Self::copy_path(nodes, right, mid + 1, r, pos, f);
            let aggregate = A::combine(nodes[left].aggregate(), nodes[new_right].aggregate());
            nodes.insert(Node::internal(left, new_right, aggregate))
        }
    }
}
