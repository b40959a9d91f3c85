/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Version bookkeeping: the append-only table mapping versions to roots.

use crate::arena::NodeId;

/// Identifier of one immutable snapshot of the tree.
///
/// Version ids are handed out in strictly increasing order: the initial build
/// is [`VersionId::ZERO`], and every update appends exactly one new version.
/// A version id stays valid and queryable for the lifetime of the tree, no
/// matter how many versions are created after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct VersionId(u32);

impl VersionId {
    /// The initial version produced by the build.
    pub const ZERO: VersionId = VersionId(0);

    /// Return the raw version index.
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for VersionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Append-only mapping from [`VersionId`] to root [`NodeId`].
///
/// Entries are never overwritten once pushed.
#[derive(Debug)]
pub(crate) struct VersionTable {
    roots: Vec<NodeId>,
}

impl VersionTable {
    pub const fn new() -> Self {
        Self { roots: Vec::new() }
    }

    /// Record a new root, returning its version id.
    pub fn push(&mut self, root: NodeId) -> VersionId {
        let id = VersionId(self.roots.len() as u32);
        self.roots.push(root);
        id
    }

    /// Resolve a version to its root node, if the version exists.
    pub fn root_of(&self, version: VersionId) -> Option<NodeId> {
        self.roots.get(version.0 as usize).copied()
    }

    /// Resolve a raw version index to its root node.
    #[cfg_attr(
        not(all(feature = "unittest", not(miri))),
        expect(dead_code, reason = "used by invariant checks in unittest feature")
    )]
    pub fn root_of_raw(&self, raw: u32) -> Option<NodeId> {
        self.roots.get(raw as usize).copied()
    }

    /// Number of versions recorded so far.
    pub fn len(&self) -> u32 {
        self.roots.len() as u32
    }

    /// The most recently recorded version.
    ///
    /// The table is never empty once the tree is built, so this only returns
    /// `None` before the initial build has been pushed.
    pub fn latest(&self) -> Option<VersionId> {
        self.roots.len().checked_sub(1).map(|i| VersionId(i as u32))
    }
}
