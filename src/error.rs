/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Error types for tree operations.

/// Errors returned by tree, compression, and order-statistic operations.
///
/// There is no retry or partial-failure recovery: every variant means the
/// requested operation was rejected up front and no state was changed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The node pool cannot hold the nodes this operation would allocate.
    ///
    /// The pool is pre-sized from the domain size and update budget at
    /// construction time. Running out is not recoverable at runtime; the tree
    /// must be rebuilt with a larger budget.
    #[error("node pool capacity exceeded: {required} nodes required, capacity is {capacity}")]
    CapacityExceeded {
        /// Nodes the operation (or construction) would require in total.
        required: u64,
        /// The pool's fixed capacity.
        capacity: u64,
    },

    /// An index fell outside the tree's domain `[1, domain]`.
    #[error("position {pos} outside domain [1, {domain}]")]
    PositionOutOfRange {
        /// The offending 1-based position.
        pos: u32,
        /// The domain size the tree was built with.
        domain: u32,
    },

    /// A k-th order-statistic query asked for a rank outside `[1, size]`.
    #[error("rank {k} outside [1, {size}]")]
    RankOutOfRange {
        /// The requested rank.
        k: u64,
        /// The number of elements in the queried range.
        size: u64,
    },

    /// A raw value was not part of the coordinate-compression table.
    #[error("value {value} is not in the compression table")]
    UnknownValue {
        /// The raw value that was looked up.
        value: i64,
    },

    /// A version id that this tree never produced.
    #[error("unknown version {version}")]
    UnknownVersion {
        /// The raw version index.
        version: u32,
    },

    /// The tree (or an order-statistics index) was given an empty domain.
    #[error("domain must contain at least one position")]
    EmptyDomain,
}
