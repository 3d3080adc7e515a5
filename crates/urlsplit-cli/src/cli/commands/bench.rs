//! `urlsplit bench [url]` – time repeated URL formatting.

use anyhow::{Context, Result};
use urlsplit_core::bench::{self, BenchResult};
use urlsplit_core::url_model::{self, SchemePolicy};

fn print_bench_results(r: &BenchResult) {
    println!(
        "  {:>12}  {:>8}  {:>10}  {:>10}  {:>14}",
        "Iterations", "Bytes", "Time(s)", "ns/op", "ops/s"
    );
    println!(
        "  {}  {}  {}  {}  {}",
        "------------", "--------", "----------", "----------", "--------------"
    );
    println!(
        "  {:>12}  {:>8}  {:>10.3}  {:>10.2}  {:>14.0}",
        r.iterations, r.bytes_per_op, r.elapsed_secs, r.ns_per_op, r.ops_per_sec
    );
}

pub fn run_bench(raw: Option<&str>, iterations: u64, policy: SchemePolicy) -> Result<()> {
    let raw = raw.unwrap_or(bench::DEFAULT_BENCH_URL);
    let url = url_model::parse_with(raw, policy).with_context(|| format!("parsing {raw:?}"))?;
    println!("Formatting {url} {iterations} times");
    let result = bench::run_format_bench(&url, iterations)?;
    print_bench_results(&result);
    Ok(())
}
