/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Persistent segment tree implementation.
//!
//! This module contains the core structure and algorithms, split into
//! sub-modules by concern:
//! - [`build`]: version-0 construction
//! - [`update`]: write path (path-copying point updates)
//! - [`query`]: read path (single-version range queries)
//! - [`select`]: two-version difference descent (k-th order statistic)

mod build;
#[cfg(all(feature = "unittest", not(miri)))]
mod invariants;
mod query;
mod select;
mod update;

use crate::aggregate::Aggregate;
use crate::arena::{NodeArena, NodeId};
use crate::error::TreeError;
use crate::node::Node;
use crate::versions::{VersionId, VersionTable};

/// Result of a point update.
///
/// Captures what the write allocated, mostly so callers (and tests) can
/// observe the path-copying discipline: an update allocates one node per
/// tree level on the root-to-leaf path and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateResult {
    /// The version created by this update.
    pub version: VersionId,
    /// Number of nodes allocated, equal to the depth of the touched leaf
    /// plus one.
    pub new_nodes: u32,
}

/// An append-only forest of versioned segment trees over a fixed domain
/// `[1, N]`.
///
/// Every version is a root into a shared pool of nodes. Updates create a new
/// version by cloning only the `O(log N)` nodes on the touched root-to-leaf
/// path, re-linking every untouched sibling subtree from the base version.
/// Existing versions are never mutated, so querying an old version always
/// reflects that version's logical state.
///
/// # Arena storage
///
/// All nodes live in one append-only arena and reference each other by
/// [`NodeId`].
/// Version DAGs share nodes freely (a node can have many parents across
/// versions), which index-based storage expresses without any ownership
/// gymnastics. The arena is pre-sized at construction: `2N - 1` nodes for the
/// build plus `ceil(log2 N) + 1` per budgeted update. Exhausting the budget
/// is reported as [`TreeError::CapacityExceeded`] before anything is
/// allocated, never mid-operation.
///
/// # Aggregates
///
/// The tree is generic over an [`Aggregate`] monoid: [`Sum`](crate::Sum),
/// [`Count`](crate::Count), [`Min`](crate::Min), [`Max`](crate::Max), or a
/// caller-supplied one. Empty-range queries return the monoid identity.
#[derive(Debug)]
pub struct PersistentSegmentTree<A: Aggregate> {
    /// Domain size `N`; leaves cover positions `1..=domain`.
    domain: u32,
    /// Shared node pool for all versions.
    nodes: NodeArena<A::Value>,
    /// Append-only version-to-root table.
    versions: VersionTable,
}

impl<A: Aggregate> PersistentSegmentTree<A> {
    /// Nodes on one root-to-leaf path of a tree over `domain` leaves.
    ///
    /// This is the exact per-update allocation for the deepest leaves and an
    /// upper bound for shallower ones.
    pub const fn path_len(domain: u32) -> u32 {
        // ceil(log2(domain)) + 1 levels; next_power_of_two().ilog2() is the
        // ceiling log for any domain >= 1.
        domain.next_power_of_two().ilog2() + 1
    }

    /// The domain size `N` this tree was built over.
    pub const fn domain_len(&self) -> u32 {
        self.domain
    }

    /// Total number of nodes allocated so far, across all versions.
    pub fn num_nodes(&self) -> u32 {
        self.nodes.len()
    }

    /// The fixed node-pool capacity.
    pub const fn capacity(&self) -> u32 {
        self.nodes.capacity()
    }

    /// Number of versions created so far (including version 0).
    pub fn num_versions(&self) -> u32 {
        self.versions.len()
    }

    /// The most recently created version.
    pub fn latest_version(&self) -> VersionId {
        self.versions
            .latest()
            .expect("a built tree always has version 0")
    }

    /// Resolve a version to its root node id.
    pub fn root_of(&self, version: VersionId) -> Result<NodeId, TreeError> {
        self.versions
            .root_of(version)
            .ok_or(TreeError::UnknownVersion {
                version: version.as_u32(),
            })
    }

    /// Look up a node by id.
    ///
    /// Useful for structural inspection, e.g. verifying that two versions
    /// share an untouched subtree by comparing child ids.
    pub fn node(&self, id: NodeId) -> &Node<A::Value> {
        &self.nodes[id]
    }

    /// Total memory held by the tree, in bytes.
    pub fn mem_usage(&self) -> usize {
        std::mem::size_of::<Self>() + self.nodes.mem_usage()
    }

    /// Validate a position against the domain.
    fn check_position(&self, pos: u32) -> Result<(), TreeError> {
        if pos == 0 || pos > self.domain {
            return Err(TreeError::PositionOutOfRange {
                pos,
                domain: self.domain,
            });
        }
        Ok(())
    }
}
