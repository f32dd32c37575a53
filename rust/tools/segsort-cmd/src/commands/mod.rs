//! Command implementations for segsort-cmd

use std::io::Read;

use anyhow::{Context, Result};
use segsort_common::error::Error;

use crate::utils;

pub mod bench;
pub mod check;
pub mod runs;
pub mod sort;

/// Reads the whole input from `file`, or from stdin when no file is given.
pub fn read_input(file: Option<&str>) -> Result<String> {
    match file {
        Some(path) => {
            utils::validate_file_exists(path)?;
            std::fs::read_to_string(path)
                .map_err(|e| Error::io(path, e))
                .with_context(|| format!("Failed to read input file: {path}"))
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| Error::io("stdin", e))
                .context("Failed to read input from stdin")?;
            Ok(text)
        }
    }
}

/// Parses integers separated by whitespace and/or commas. Enclosing square
/// brackets are accepted, so `[3, 1, 2]` and `3 1 2` parse the same.
pub fn parse_sequence(text: &str) -> segsort_common::Result<Vec<i64>> {
    text.split(|c: char| c.is_whitespace() || matches!(c, ',' | '[' | ']'))
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|e| Error::invalid_format(token, format!("not an integer: {e}")))
        })
        .collect()
}
