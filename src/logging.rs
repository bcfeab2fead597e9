use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use tracing_web::MakeWebConsoleWriter;

/// Log filter for the browser console. There is no environment to read
/// `RUST_LOG` from at runtime, so it is set at build time through
/// `TRIP_TRACKER_LOG`.
pub const LOG_FILTER: &str = match option_env!("TRIP_TRACKER_LOG") {
    Some(filter) => filter,
    None => "info",
};

fn env_filter() -> EnvFilter {
    EnvFilter::try_new(LOG_FILTER).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Route `tracing` events to the browser console.
///
/// Must run before anything that logs, including the catalog load.
pub fn init() {
    // `SystemTime` is unavailable in the browser
    let console = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    tracing_subscriber::registry()
        .with(env_filter())
        .with(console)
        .init();
}
