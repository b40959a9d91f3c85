/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Arena storage for persistent segment tree nodes.
//!
//! All nodes of every version live in a single append-only arena and are
//! addressed by [`NodeId`] instead of language-level pointers. A node may be
//! referenced by many versions at once (subtrees are shared between
//! versions), which makes unique-ownership pointers a poor fit; index-based
//! sharing sidesteps the lifetime question entirely.
//!
//! The arena is pre-sized when the tree is created and never shrinks. Nodes
//! are never mutated after insertion and never freed.

use std::ops::Index;

use crate::node::Node;

/// Index into the node arena.
///
/// This is a lightweight handle. Ids are dense and allocated in insertion
/// order; an id handed out once stays valid for the lifetime of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Return the raw index value.
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

/// Append-only storage for [`Node`]s.
///
/// A thin wrapper around `Vec<Node<V>>` with a fixed logical capacity. The
/// capacity is chosen up front by the tree from its domain size and update
/// budget, so allocation itself never needs to fail; callers verify
/// [`NodeArena::remaining`] before starting a multi-node operation.
#[derive(Debug)]
pub(crate) struct NodeArena<V> {
    nodes: Vec<Node<V>>,
    capacity: u32,
}

impl<V> NodeArena<V> {
    /// Create an arena with room for exactly `capacity` nodes.
    pub fn with_capacity(capacity: u32) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity as usize),
            capacity,
        }
    }

    /// Number of nodes currently stored.
    pub fn len(&self) -> u32 {
        // Safe to truncate: `insert` never lets the arena grow beyond
        // `self.capacity`, which is a `u32`.
        self.nodes.len() as u32
    }

    /// The fixed logical capacity of the arena.
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Number of nodes that can still be inserted.
    pub fn remaining(&self) -> u32 {
        self.capacity - self.len()
    }

    /// Insert a node, returning its id.
    ///
    /// Callers must have checked [`Self::remaining`] beforehand; the bound is
    /// debug-asserted here.
    pub fn insert(&mut self, node: Node<V>) -> NodeId {
        debug_assert!(
            self.len() < self.capacity,
            "node arena exceeded its pre-sized capacity"
        );
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Memory held by the arena, in bytes.
    pub fn mem_usage(&self) -> usize {
        self.nodes.capacity() * std::mem::size_of::<Node<V>>()
    }
}

impl<V> Index<NodeId> for NodeArena<V> {
    type Output = Node<V>;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0 as usize]
    }
}
