//! Core definitions (error and result types), relied upon by all segsort-* crates.

pub mod error;
pub mod result;

pub use result::Result;

#[cfg(test)]
mod tests;
