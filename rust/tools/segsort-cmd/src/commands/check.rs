//! Check command implementation
//!
//! Sorts a fixed table of literal inputs and compares each result with its
//! expected ascending sequence. The process exits with status 1 if any case
//! fails.

use std::{io::Write, process::ExitCode};

use anyhow::Result;
use segsort::Strategy;

use crate::utils::format_sequence;

pub struct CheckCase {
    pub name: &'static str,
    pub input: Vec<i32>,
    pub expected: Vec<i32>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CheckSummary {
    pub passed: usize,
    pub failed: usize,
}

impl CheckSummary {
    /// Process status for the run: success only when no case failed.
    pub fn exit_code(&self) -> ExitCode {
        if self.failed > 0 {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }
}

pub fn cases() -> Vec<CheckCase> {
    vec![
        CheckCase {
            name: "Empty array",
            input: vec![],
            expected: vec![],
        },
        CheckCase {
            name: "Single element array",
            input: vec![42],
            expected: vec![42],
        },
        CheckCase {
            name: "Already sorted array",
            input: vec![1, 2, 3, 4, 5, 6, 7, 8, 9],
            expected: vec![1, 2, 3, 4, 5, 6, 7, 8, 9],
        },
        CheckCase {
            name: "Reverse sorted array",
            input: vec![9, 8, 7, 6, 5, 4, 3, 2, 1],
            expected: vec![1, 2, 3, 4, 5, 6, 7, 8, 9],
        },
        CheckCase {
            name: "All identical elements",
            input: vec![3, 3, 3, 3, 3],
            expected: vec![3, 3, 3, 3, 3],
        },
        CheckCase {
            name: "Duplicate elements",
            input: vec![5, 3, 8, 3, 5, 1, 8],
            expected: vec![1, 3, 3, 5, 5, 8, 8],
        },
        CheckCase {
            name: "Typical unsorted array",
            input: vec![5, 3, 2, 4, 6, 8, 7, 19, 10, 12, 13, 14, 17, 18],
            expected: vec![2, 3, 4, 5, 6, 7, 8, 10, 12, 13, 14, 17, 18, 19],
        },
        CheckCase {
            name: "Negative numbers",
            input: vec![-5, 3, -8, 0, -1, 10],
            expected: vec![-8, -5, -1, 0, 3, 10],
        },
        CheckCase {
            name: "Mixed positive and negative with duplicates",
            input: vec![10, -2, 5, -2, 0, 5, 10, -8],
            expected: vec![-8, -2, -2, 0, 5, 5, 10, 10],
        },
        CheckCase {
            name: "Longer random-like array",
            input: vec![31, 41, 59, 26, 53, 58, 97, 93, 23, 84],
            expected: vec![23, 26, 31, 41, 53, 58, 59, 84, 93, 97],
        },
    ]
}

/// Runs `cases` against `strategy`, reporting each case to `out`.
pub fn run_cases(
    strategy: Strategy,
    cases: &[CheckCase],
    out: &mut impl Write,
) -> std::io::Result<CheckSummary> {
    let mut summary = CheckSummary::default();
    writeln!(out, "Running cases for {strategy}...")?;

    for (i, case) in cases.iter().enumerate() {
        let mut values = case.input.clone();
        strategy.sort(&mut values);

        if values == case.expected {
            writeln!(out, "  #{}: {} - PASSED", i + 1, case.name)?;
            summary.passed += 1;
        } else {
            writeln!(out, "  #{}: {} - FAILED", i + 1, case.name)?;
            writeln!(out, "     Expected: {}", format_sequence(&case.expected))?;
            writeln!(out, "     Got:      {}", format_sequence(&values))?;
            tracing::warn!(strategy = %strategy, case = case.name, "check case failed");
            summary.failed += 1;
        }
    }

    Ok(summary)
}

/// Run the check command
pub fn run(strategy: Option<Strategy>) -> Result<ExitCode> {
    let strategies = match strategy {
        Some(strategy) => vec![strategy],
        None => Strategy::ALL.to_vec(),
    };

    let cases = cases();
    let mut stdout = std::io::stdout().lock();
    let mut total = CheckSummary::default();
    for strategy in strategies {
        let summary = run_cases(strategy, &cases, &mut stdout)?;
        total.passed += summary.passed;
        total.failed += summary.failed;
        writeln!(stdout)?;
    }

    writeln!(stdout, "Summary:")?;
    writeln!(stdout, "  {} passed", total.passed)?;
    writeln!(stdout, "  {} failed", total.failed)?;

    Ok(total.exit_code())
}
