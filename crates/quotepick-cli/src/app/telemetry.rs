//! # Logging
//!
//! Logs are human-readable `tracing` events written to stderr, so stdout only
//! carries picks and can be piped safely.
//!
//! The filter defaults to `info` and can be overridden with `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=quotepick=trace cargo run -- --count 3
//! ```
//!
//! The `quotepick` library emits trace-level spans around each pick, which is
//! the quickest way to see the raw draw behind an index.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_telemetry() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_thread_ids(true)
                .with_line_number(true)
                .with_target(false)
                .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
                .with_file(true),
        )
        .try_init()?;

    Ok(())
}
