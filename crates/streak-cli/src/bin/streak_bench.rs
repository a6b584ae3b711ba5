//! `streak-bench` — time insert/remove batches of growing size.
//!
//! Usage:
//!   streak-bench [--base N] [--steps K]

use streak_cli::{run_bench, BatchTiming, BenchOptions};

fn print_batches(op: &str, batches: &[BatchTiming]) {
    for b in batches {
        println!("{op} n={}: {:?}", b.n, b.elapsed);
    }
    for b in batches.iter().skip(1) {
        println!(
            "{op} n={}: expected ratio {:.3}, measured {:.3} ({})",
            b.n,
            b.expected,
            b.ratio,
            if b.acceptable() {
                "acceptable"
            } else {
                "outside tolerance"
            }
        );
    }
}

fn main() {
    env_logger::init();

    let opts = match BenchOptions::from_args(std::env::args()) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let report = run_bench(&opts);
    print_batches("insert", &report.insert);
    print_batches("remove", &report.remove);
}
