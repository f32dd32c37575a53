//! Runs command implementation

use anyhow::{Context, Result};
use segsort::{Direction, Run};

use crate::commands::{parse_sequence, read_input};

/// Run the runs command
pub fn run(file: Option<String>) -> Result<()> {
    let text = read_input(file.as_deref())?;
    let values = parse_sequence(&text).context("Failed to parse input sequence")?;
    let runs = segsort::detect_runs(&values);

    for (i, run) in runs.iter().enumerate() {
        println!("{}", describe_run(i, run, &values));
    }
    let sizes: Vec<usize> = runs.iter().map(Run::len).collect();
    println!("Total runs: {}, sizes: {:?}", runs.len(), sizes);
    Ok(())
}

fn describe_run(index: usize, run: &Run, values: &[i64]) -> String {
    let direction = match run.direction {
        Direction::Ascending => "ascending",
        Direction::Descending => "descending",
    };
    format!(
        "  Run {index}: [{}..={}] {direction}, length {} = {:?}",
        run.start,
        run.end,
        run.len(),
        &values[run.start..=run.end]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_run() {
        let values: [i64; 5] = [5, 3, 2, 4, 6];
        let runs = segsort::detect_runs(&values);
        assert_eq!(
            describe_run(0, &runs[0], &values),
            "  Run 0: [0..=2] descending, length 3 = [5, 3, 2]"
        );
        assert_eq!(
            describe_run(1, &runs[1], &values),
            "  Run 1: [3..=4] ascending, length 2 = [4, 6]"
        );
    }
}
