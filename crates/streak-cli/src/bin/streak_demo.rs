//! `streak-demo` — build an index from generated records, remove one, and
//! print the tree before and after.
//!
//! Usage:
//!   streak-demo [--size N] [--seed S] [--json]

use streak_cli::{run_demo, DemoOptions};

fn main() {
    env_logger::init();

    let opts = match DemoOptions::from_args(std::env::args()) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let stdout = std::io::stdout();
    if let Err(e) = run_demo(&opts, &mut stdout.lock()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
