/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tests for construction, versioning, and the path-copying write path.

use persistent_segment_tree::{PersistentSegmentTree, Sum, TreeError, VersionId};

use crate::helpers::sum_tree;

#[test]
fn test_new_tree() {
    let tree = PersistentSegmentTree::<Sum>::new(8, 4).unwrap();
    assert_eq!(tree.domain_len(), 8);
    // Empty build over N leaves allocates exactly 2N - 1 nodes.
    assert_eq!(tree.num_nodes(), 15);
    assert_eq!(tree.capacity(), 15 + 4 * 4);
    assert_eq!(tree.num_versions(), 1);
    assert_eq!(tree.latest_version(), VersionId::ZERO);
    assert_eq!(tree.query(VersionId::ZERO, 1, 8).unwrap(), 0);
}

#[test]
fn test_with_leaves() {
    let tree = sum_tree(&[3, -1, 4, 1, 5], 0);
    assert_eq!(tree.domain_len(), 5);
    assert_eq!(tree.num_nodes(), 9);
    assert_eq!(tree.query(VersionId::ZERO, 1, 5).unwrap(), 12);
    assert_eq!(tree.query(VersionId::ZERO, 2, 2).unwrap(), -1);
}

#[test]
fn test_empty_domain_rejected() {
    assert_eq!(
        PersistentSegmentTree::<Sum>::new(0, 10).unwrap_err(),
        TreeError::EmptyDomain
    );
    assert_eq!(
        PersistentSegmentTree::<Sum>::with_leaves(&[], 10).unwrap_err(),
        TreeError::EmptyDomain
    );
}

#[test]
fn test_single_position_domain() {
    let mut tree = PersistentSegmentTree::<Sum>::new(1, 1).unwrap();
    assert_eq!(tree.num_nodes(), 1);
    assert_eq!(PersistentSegmentTree::<Sum>::path_len(1), 1);

    let result = tree.apply(VersionId::ZERO, 1, 7).unwrap();
    assert_eq!(result.new_nodes, 1);
    assert_eq!(tree.query(result.version, 1, 1).unwrap(), 7);
    assert_eq!(tree.query(VersionId::ZERO, 1, 1).unwrap(), 0);
}

#[test]
fn test_path_copy_allocates_one_node_per_level() {
    // Power-of-two domain: every leaf sits at the maximum depth, so every
    // update allocates exactly path_len nodes.
    let mut tree = PersistentSegmentTree::<Sum>::new(8, 8).unwrap();
    let path_len = PersistentSegmentTree::<Sum>::path_len(8);
    assert_eq!(path_len, 4);

    let mut version = VersionId::ZERO;
    for pos in 1..=8 {
        let before = tree.num_nodes();
        let result = tree.apply(version, pos, 1).unwrap();
        version = result.version;
        assert_eq!(result.new_nodes, path_len);
        assert_eq!(tree.num_nodes() - before, path_len);
    }
}

#[test]
fn test_untouched_sibling_is_shared() {
    let mut tree = sum_tree(&[1, 2, 3, 4], 2);
    let v0_root = tree.root_of(VersionId::ZERO).unwrap();
    let (v0_left, v0_right) = tree.node(v0_root).children().unwrap();

    // Update position 1: the right half [3, 4] is off the path.
    let v1 = tree.apply(VersionId::ZERO, 1, 10).unwrap().version;
    let v1_root = tree.root_of(v1).unwrap();
    let (v1_left, v1_right) = tree.node(v1_root).children().unwrap();

    assert_ne!(v0_root, v1_root);
    assert_ne!(v0_left, v1_left);
    // Shared by id, not copied.
    assert_eq!(v0_right, v1_right);
}

#[test]
fn test_update_budget_exhausted() {
    let mut tree = PersistentSegmentTree::<Sum>::new(4, 2).unwrap();
    let v1 = tree.apply(VersionId::ZERO, 1, 1).unwrap().version;
    let v2 = tree.apply(v1, 2, 1).unwrap().version;

    let err = tree.apply(v2, 3, 1).unwrap_err();
    assert!(matches!(err, TreeError::CapacityExceeded { .. }));

    // The failed update must not have created a version or touched the pool.
    assert_eq!(tree.num_versions(), 3);
    assert_eq!(tree.num_nodes(), tree.capacity());
    assert_eq!(tree.query(v2, 1, 4).unwrap(), 2);
}

#[test]
fn test_position_out_of_range() {
    let mut tree = PersistentSegmentTree::<Sum>::new(4, 1).unwrap();
    assert_eq!(
        tree.apply(VersionId::ZERO, 0, 1).unwrap_err(),
        TreeError::PositionOutOfRange { pos: 0, domain: 4 }
    );
    assert_eq!(
        tree.apply(VersionId::ZERO, 5, 1).unwrap_err(),
        TreeError::PositionOutOfRange { pos: 5, domain: 4 }
    );
    // Rejected before allocating anything.
    assert_eq!(tree.num_nodes(), 7);
    assert_eq!(tree.num_versions(), 1);
}

#[test]
fn test_version_from_another_tree_rejected() {
    let mut donor = PersistentSegmentTree::<Sum>::new(4, 3).unwrap();
    let mut version = VersionId::ZERO;
    for pos in 1..=3 {
        version = donor.apply(version, pos, 1).unwrap().version;
    }

    let other = PersistentSegmentTree::<Sum>::new(4, 0).unwrap();
    assert_eq!(
        other.query(version, 1, 4).unwrap_err(),
        TreeError::UnknownVersion { version: 3 }
    );
}

#[test]
fn test_apply_accumulates_assign_overwrites() {
    let mut tree = sum_tree(&[10, 20], 4);

    let v1 = tree.apply(VersionId::ZERO, 1, 5).unwrap().version;
    let v2 = tree.apply(v1, 1, 5).unwrap().version;
    assert_eq!(tree.query(v2, 1, 1).unwrap(), 20);

    let v3 = tree.assign(v2, 1, 5).unwrap().version;
    assert_eq!(tree.query(v3, 1, 1).unwrap(), 5);
    assert_eq!(tree.query(v3, 1, 2).unwrap(), 25);
}

#[test]
fn test_versions_branch_from_any_base() {
    let mut tree = sum_tree(&[0, 0, 0], 4);

    // Two independent branches off version 0.
    let a = tree.apply(VersionId::ZERO, 1, 100).unwrap().version;
    let b = tree.apply(VersionId::ZERO, 3, 7).unwrap().version;

    assert_eq!(tree.query(a, 1, 3).unwrap(), 100);
    assert_eq!(tree.query(b, 1, 3).unwrap(), 7);
    assert_eq!(tree.query(VersionId::ZERO, 1, 3).unwrap(), 0);
}

#[test]
fn test_mem_usage_accounts_for_pool() {
    let tree = PersistentSegmentTree::<Sum>::new(16, 100).unwrap();
    assert!(tree.mem_usage() > tree.capacity() as usize);
}
