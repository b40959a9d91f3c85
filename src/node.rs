/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! A node in the persistent segment tree.

use crate::arena::NodeId;

/// One node of one version's tree, covering a sub-range of the index domain.
///
/// Internal nodes hold both child ids; leaves hold neither. The `aggregate`
/// of an internal node always equals the combination of its children's
/// aggregates; at a leaf it is the raw stored value.
///
/// Nodes are immutable once inserted into the arena. A point update never
/// touches an existing node; it clones the nodes on the root-to-leaf path and
/// re-links the untouched siblings by id, so a node can be referenced from
/// many versions at once.
#[derive(Debug, Clone, Copy)]
pub struct Node<V> {
    left: Option<NodeId>,
    right: Option<NodeId>,
    aggregate: V,
}

impl<V: Copy> Node<V> {
    /// Create a leaf node holding `aggregate`.
    pub(crate) const fn leaf(aggregate: V) -> Self {
        Self {
            left: None,
            right: None,
            aggregate,
        }
    }

    /// Create an internal node with the given children and combined aggregate.
    pub(crate) const fn internal(left: NodeId, right: NodeId, aggregate: V) -> Self {
        Self {
            left: Some(left),
            right: Some(right),
            aggregate,
        }
    }

    /// The aggregate stored at this node.
    pub fn aggregate(&self) -> V {
        self.aggregate
    }

    /// Both child ids, or `None` for a leaf.
    pub fn children(&self) -> Option<(NodeId, NodeId)> {
        self.left.zip(self.right)
    }

    /// The left child id, if this is an internal node.
    pub fn left_id(&self) -> Option<NodeId> {
        self.left
    }

    /// The right child id, if this is an internal node.
    pub fn right_id(&self) -> Option<NodeId> {
        self.right
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none()
    }
}
