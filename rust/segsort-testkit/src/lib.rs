//! Test utilities and helpers for the segsort crates.
//!
//! This crate provides:
//! - Deterministic synthetic datasets with different amounts of presortedness
//! - Index-tagged values for checking sort stability
//!
//! # Usage
//!
//! This crate is primarily intended for use within the segsort test suites
//! and the benchmarking command of `segsort-cmd`.

pub mod data_gen;
pub mod tagged;

pub use data_gen::{DatasetKind, generate};
pub use tagged::{Tagged, tagged};
