//! Benchmark mode: time repeated URL formatting.
//!
//! Formats the same URL `iterations` times and reports elapsed time,
//! nanoseconds per call, and calls per second.

use anyhow::Result;
use std::hint::black_box;
use std::time::Instant;

use crate::url_model::{self, Url};

/// URL used when the caller does not supply one.
pub const DEFAULT_BENCH_URL: &str = "https://foo.com/go";

/// Result of one benchmark run.
#[derive(Debug, Clone)]
pub struct BenchResult {
    pub iterations: u64,
    pub bytes_per_op: usize,
    pub elapsed_secs: f64,
    pub ns_per_op: f64,
    pub ops_per_sec: f64,
}

/// Formats `url` `iterations` times on the current thread and measures throughput.
pub fn run_format_bench(url: &Url, iterations: u64) -> Result<BenchResult> {
    if iterations == 0 {
        anyhow::bail!("iterations must be at least 1");
    }
    tracing::debug!(iterations, url = %url, "format bench starting");

    let mut bytes_per_op = 0;
    let start = Instant::now();
    for _ in 0..iterations {
        let s = url_model::format(black_box(Some(url)));
        bytes_per_op = black_box(s).len();
    }
    let elapsed_secs = start.elapsed().as_secs_f64();

    let ns_per_op = elapsed_secs * 1e9 / iterations as f64;
    let ops_per_sec = if elapsed_secs > 0.0 {
        iterations as f64 / elapsed_secs
    } else {
        0.0
    };

    tracing::info!(iterations, elapsed_secs, ns_per_op, "format bench finished");
    Ok(BenchResult {
        iterations,
        bytes_per_op,
        elapsed_secs,
        ns_per_op,
        ops_per_sec,
    })
}
