/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Property-based tests using `proptest`.

use persistent_segment_tree::{
    OrderStatisticsIndex, PersistentSegmentTree, Sum, VersionId,
};

use crate::helpers::{brute_count_in_range, brute_kth};

proptest::proptest! {
    #[test]
    fn prop_kth_smallest_matches_brute_force(
        values in proptest::collection::vec(-1000i64..1000, 1..50),
        l_seed: u32,
        r_seed: u32,
        k_seed: u32,
    ) {
        let n = values.len();
        let l = l_seed as usize % n + 1;
        let r = l + r_seed as usize % (n - l + 1);
        let k = k_seed as usize % (r - l + 1) + 1;

        let index = OrderStatisticsIndex::from_values(&values).unwrap();
        assert_eq!(
            index.kth_smallest(l as u32, r as u32, k as u64).unwrap(),
            brute_kth(&values, l, r, k)
        );
    }

    #[test]
    fn prop_count_in_range_matches_brute_force(
        values in proptest::collection::vec(-100i64..100, 1..40),
        l_seed: u32,
        r_seed: u32,
        lo in -150i64..150,
        span in 0i64..100,
    ) {
        let n = values.len();
        let l = l_seed as usize % n + 1;
        let r = l + r_seed as usize % (n - l + 1);
        let hi = lo + span;

        let index = OrderStatisticsIndex::from_values(&values).unwrap();
        assert_eq!(
            index.count_in_range(l as u32, r as u32, lo, hi).unwrap(),
            brute_count_in_range(&values, l, r, lo, hi)
        );
    }

    #[test]
    fn prop_every_version_keeps_its_own_state(
        initial in proptest::collection::vec(-100i64..100, 1..20),
        updates in proptest::collection::vec((0u32..1000, -100i64..100), 1..60),
    ) {
        let n = initial.len() as u32;
        let mut tree = PersistentSegmentTree::<Sum>::with_leaves(&initial, updates.len() as u32)
            .unwrap();

        // Apply every update on top of the latest version, recording the
        // expected whole-domain sum per version.
        let mut versions = vec![VersionId::ZERO];
        let mut expected = vec![initial.iter().sum::<i64>()];
        let mut version = VersionId::ZERO;
        for &(pos_seed, delta) in &updates {
            let pos = pos_seed % n + 1;
            version = tree.apply(version, pos, delta).unwrap().version;
            versions.push(version);
            expected.push(expected.last().unwrap() + delta);
        }

        // All versions, including ones created long before the last update,
        // must still answer with their own totals.
        for (version, total) in versions.iter().zip(&expected) {
            assert_eq!(tree.query(*version, 1, n).unwrap(), *total);
        }
    }

    #[test]
    fn prop_update_allocations_are_logarithmic(
        domain in 1u32..200,
        pos_seed: u32,
    ) {
        let mut tree = PersistentSegmentTree::<Sum>::new(domain, 1).unwrap();
        let pos = pos_seed % domain + 1;
        let result = tree.apply(VersionId::ZERO, pos, 1).unwrap();
        let path_len = PersistentSegmentTree::<Sum>::path_len(domain);

        // One node per level on the touched path, never more than the
        // deepest path, never fewer than the shallowest.
        assert!(result.new_nodes <= path_len);
        assert!(result.new_nodes >= path_len.saturating_sub(1).max(1));
    }
}
