// SPDX-License-Identifier: MIT OR Apache-2.0
//! trialplot CLI binary - throughput error-bar charts from benchmark CSV

use clap::Parser;
use trialplot_cli::{Args, configure_tracing, run};

fn main() {
    let args = Args::parse();
    configure_tracing(args.log_level);

    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
