// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! fpm-spatial: fixed-point bounds and region trees for deterministic
//! broad-phase queries.
//!
//! This crate provides:
//! - Axis-aligned bounds ([`Bounds2`], [`Bounds3`]) built on `fpm-core`.
//! - A quadtree ([`QuadTree`]) and an octree ([`Octree`]) sharing one
//!   arena-backed implementation ([`SpatialTree`]).
//!
//! Trees return a [`FullId`] from every insertion; that handle is the only
//! way to remove or look up the value later. Queries report candidates whose
//! region overlaps the query; exact testing is left to the caller.
//!
//! The crate logs through `tracing` and installs no subscriber.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::module_name_repetitions,
    clippy::use_self,
    clippy::cast_possible_truncation
)]

pub mod tree;
pub mod types;

pub use tree::{
    Candidates, ConfigError, FullId, IdsExhausted, NodeRef, Octree, QuadTree, Region,
    SpatialTree, TreeConfig, FULL, MAX_TREE_DEPTH, NONE,
};
pub use types::bounds2::Bounds2;
pub use types::bounds3::Bounds3;
