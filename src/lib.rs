/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! PersistentSegmentTree - an append-only forest of versioned segment trees.
//!
//! This crate provides a multi-version segment tree over a fixed index
//! domain `[1, N]`. Every point update produces a new immutable version by
//! cloning only the `O(log N)` nodes on the touched root-to-leaf path and
//! sharing every other subtree with the base version. Old versions stay
//! queryable forever, which enables:
//!
//! - Querying "as of" any historical version
//! - Prefix-version subtraction: building one version per array prefix and
//!   answering sub-array questions as differences between two versions
//! - K-th order statistics over a static sub-array in `O(log N)`
//!
//! # Overview
//!
//! All nodes live in one pre-sized, append-only arena addressed by
//! [`NodeId`]; versions are [`NodeId`] roots recorded in an append-only
//! table addressed by [`VersionId`]. The tree is generic over an
//! [`Aggregate`] monoid ([`Sum`], [`Count`], [`Min`], [`Max`], or your own).
//!
//! # Example
//!
//! ```
//! use persistent_segment_tree::{PersistentSegmentTree, Sum, VersionId};
//!
//! let mut tree = PersistentSegmentTree::<Sum>::with_leaves(&[1, 5, 2, 6], 8)?;
//!
//! let v0 = VersionId::ZERO;
//! let v1 = tree.apply(v0, 3, 10)?.version;
//!
//! assert_eq!(tree.query(v1, 1, 4)?, 24);
//! // The old version is untouched.
//! assert_eq!(tree.query(v0, 1, 4)?, 14);
//! assert_eq!(tree.query(v0, 3, 3)?, 2);
//! # Ok::<(), persistent_segment_tree::TreeError>(())
//! ```
//!
//! K-th smallest in a static sub-array, via [`OrderStatisticsIndex`]:
//!
//! ```
//! use persistent_segment_tree::OrderStatisticsIndex;
//!
//! let index = OrderStatisticsIndex::from_values(&[1, 5, 2, 6, 3, 7, 4])?;
//! // Second smallest among positions 2..=5, i.e. of [5, 2, 6, 3].
//! assert_eq!(index.kth_smallest(2, 5, 2)?, 3);
//! # Ok::<(), persistent_segment_tree::TreeError>(())
//! ```

mod aggregate;
mod arena;
mod compress;
mod error;
mod node;
mod order_statistics;
mod tree;
mod versions;

pub use aggregate::{Aggregate, Count, Max, Min, Sum};
pub use arena::NodeId;
pub use compress::RankMap;
pub use error::TreeError;
pub use node::Node;
pub use order_statistics::OrderStatisticsIndex;
pub use tree::{PersistentSegmentTree, UpdateResult};
pub use versions::VersionId;
