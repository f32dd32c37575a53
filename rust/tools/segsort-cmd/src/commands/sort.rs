//! Sort command implementation

use anyhow::{Context, Result};
use segsort::Strategy;

use crate::{
    commands::{parse_sequence, read_input},
    utils::format_sequence,
};

/// Run the sort command
pub fn run(strategy: Strategy, file: Option<String>) -> Result<()> {
    let text = read_input(file.as_deref())?;
    let values = parse_sequence(&text).context("Failed to parse input sequence")?;
    tracing::info!(strategy = %strategy, len = values.len(), "sorting input");

    let sorted = strategy.sorted(values);
    segsort::verify::verify_sorted(&sorted).context("Sort produced unordered output")?;

    println!("{}", format_sequence(&sorted));
    Ok(())
}
