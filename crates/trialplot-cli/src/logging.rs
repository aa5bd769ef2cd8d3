// SPDX-License-Identifier: MIT OR Apache-2.0
use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Install a compact stderr subscriber.
///
/// `RUST_LOG` directives override `default_level`. Standard output is left
/// alone since it may carry the table and the chart.
pub fn configure_tracing(default_level: LevelFilter) {
    let fmt_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_writer(std::io::stderr);
    let level_filter_layer = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    // A subscriber may already be installed when embedded in tests
    let _ = tracing_subscriber::registry()
        .with(fmt_layer)
        .with(level_filter_layer)
        .try_init();
}
