/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Aggregate semantics for tree nodes.
//!
//! The tree is generic over how leaf values are combined into internal-node
//! aggregates. An [`Aggregate`] is a monoid: an associative `combine` with an
//! `identity` element. The identity is what empty-range queries return, so it
//! must be neutral (`combine(identity, x) == x`).

use std::fmt::Debug;

/// How leaf values roll up into internal-node aggregates.
pub trait Aggregate {
    /// The value stored at every node.
    type Value: Copy + Debug + PartialEq;

    /// The neutral element, returned for empty ranges.
    fn identity() -> Self::Value;

    /// Combine two child aggregates. Must be associative and must treat
    /// [`Self::identity`] as neutral on either side.
    fn combine(a: Self::Value, b: Self::Value) -> Self::Value;
}

/// Sum of `i64` weights.
///
/// Plain two's-complement addition; callers are responsible for keeping the
/// running totals inside `i64` range. Debug builds panic on overflow.
#[derive(Debug)]
pub enum Sum {}

impl Aggregate for Sum {
    type Value = i64;

    fn identity() -> i64 {
        0
    }

    fn combine(a: i64, b: i64) -> i64 {
        a + b
    }
}

/// Count of inserted occurrences, as `u64`.
///
/// This is the aggregate used for order-statistic queries: each leaf counts
/// how many times its rank has been inserted, and prefix-version differences
/// yield per-range occurrence counts.
#[derive(Debug)]
pub enum Count {}

impl Aggregate for Count {
    type Value = u64;

    fn identity() -> u64 {
        0
    }

    fn combine(a: u64, b: u64) -> u64 {
        a + b
    }
}

/// Minimum of `i64` values, with `i64::MAX` as the empty-range sentinel.
#[derive(Debug)]
pub enum Min {}

impl Aggregate for Min {
    type Value = i64;

    fn identity() -> i64 {
        i64::MAX
    }

    fn combine(a: i64, b: i64) -> i64 {
        a.min(b)
    }
}

/// Maximum of `i64` values, with `i64::MIN` as the empty-range sentinel.
#[derive(Debug)]
pub enum Max {}

impl Aggregate for Max {
    type Value = i64;

    fn identity() -> i64 {
        i64::MIN
    }

    fn combine(a: i64, b: i64) -> i64 {
        a.max(b)
    }
}
