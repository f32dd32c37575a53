//! Bench command implementation

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use segsort::Strategy;
use segsort_testkit::{DatasetKind, data_gen};

use crate::utils;

/// An algorithm timed by the bench command.
#[derive(Debug, Clone, Copy)]
enum Contender {
    Segsort(Strategy),
    StdStable,
}

impl Contender {
    const ALL: [Contender; 4] = [
        Contender::Segsort(Strategy::StackBalanced),
        Contender::Segsort(Strategy::KWayHeap),
        Contender::Segsort(Strategy::BlockMerge),
        Contender::StdStable,
    ];

    fn name(&self) -> &'static str {
        match self {
            Contender::Segsort(strategy) => strategy.name(),
            Contender::StdStable => "std-stable",
        }
    }

    fn sort(&self, values: &mut [i32]) {
        match self {
            Contender::Segsort(strategy) => strategy.sort(values),
            Contender::StdStable => values.sort(),
        }
    }
}

/// Timing of one contender over repeated runs.
struct Timing {
    best: Duration,
    mean: Duration,
}

fn time_contender(contender: Contender, input: &[i32], iterations: usize) -> Result<Timing> {
    let mut total = Duration::ZERO;
    let mut best = Duration::MAX;
    for _ in 0..iterations {
        let mut values = input.to_vec();
        let start = Instant::now();
        contender.sort(&mut values);
        let elapsed = start.elapsed();

        segsort::verify::verify_sorted(&values)
            .with_context(|| format!("{} produced unordered output", contender.name()))?;
        total += elapsed;
        best = best.min(elapsed);
    }
    Ok(Timing {
        best,
        mean: mean_duration(total, iterations),
    })
}

fn mean_duration(total: Duration, iterations: usize) -> Duration {
    total.div_f64(iterations as f64)
}

/// Run the bench command
pub fn run(
    size: usize,
    iterations: usize,
    seed: u64,
    dataset: Option<DatasetKind>,
) -> Result<()> {
    segsort_common::verify_arg!(iterations, iterations > 0);

    let kinds = match dataset {
        Some(kind) => vec![kind],
        None => DatasetKind::ALL.to_vec(),
    };

    println!("Benchmark: {size} elements, {iterations} iterations, seed {seed}");
    println!(
        "{:<14} {:>8} {:<16} {:>14} {:>14}",
        "dataset", "runs", "algorithm", "best", "mean"
    );

    for kind in kinds {
        let input = data_gen::generate(kind, size, seed);
        let runs = segsort::detect_runs(&input).len();
        tracing::info!(dataset = %kind, runs, "generated dataset");

        for contender in Contender::ALL {
            let timing = time_contender(contender, &input, iterations)?;
            println!(
                "{:<14} {:>8} {:<16} {:>14} {:>14}",
                kind.name(),
                runs,
                contender.name(),
                utils::format_millis(timing.best),
                utils::format_millis(timing.mean)
            );
        }
    }

    Ok(())
}
