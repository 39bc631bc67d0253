//! Tracing setup and per-command timing.
//!
//! Commands are annotated with `#[instrument]`; with `--timing` the span
//! close events report how long encoding, rasterising and exporting took.
//! `log` records from the library crates are forwarded into the same
//! subscriber.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    prelude::*,
};

/// Default level when `RUST_LOG` is unset.
fn default_level(verbose: bool, timing: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else if timing {
        // Span close events are logged at INFO.
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    }
}

fn span_events(timing: bool) -> FmtSpan {
    if timing { FmtSpan::CLOSE } else { FmtSpan::NONE }
}

/// Install the global subscriber. Logs go to stderr so a shared PNG on
/// stdout stays intact.
pub fn init_tracing(verbose: bool, timing: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level(verbose, timing).into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(verbose)
                .with_level(true)
                .with_span_events(span_events(timing))
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
