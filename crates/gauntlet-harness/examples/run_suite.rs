//! Run the Gauntlet suite and print one report per benchmark.
//!
//! ```text
//! cargo run --release --example run_suite -- [--smoke] [--parallel] [NAME...]
//! ```
//!
//! `NAME` is a benchmark label such as `merge_sort`; with none given every
//! benchmark runs. Set `RUST_LOG=gauntlet_harness=debug` for progress logs
//! on stderr.

use std::process::ExitCode;

use gauntlet_core::{BenchmarkId, SystemClock};
use gauntlet_harness::{Suite, SuiteConfig};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}

fn main() -> ExitCode {
    init_tracing();

    let mut config = SuiteConfig::default();
    let mut selected = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--smoke" => config = SuiteConfig {
                parallel: config.parallel,
                ..SuiteConfig::smoke()
            },
            "--parallel" => config.parallel = true,
            name => match BenchmarkId::from_name(name) {
                Some(id) => selected.push(id),
                None => {
                    eprintln!("unknown benchmark: {name}");
                    return ExitCode::FAILURE;
                }
            },
        }
    }

    let suite = match Suite::standard(config) {
        Ok(suite) => suite,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if selected.is_empty() {
        selected = suite.ids().collect();
    }

    let clock = SystemClock::new();
    let mut failed = false;
    for id in selected {
        println!("== {id} ==");
        match suite.run(id, &clock) {
            Ok(report) => println!("{report}"),
            Err(e) => {
                eprintln!("Error: {e}");
                failed = true;
            }
        }
        println!();
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
