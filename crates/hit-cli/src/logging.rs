//! stderr log subscriber for library `tracing` events.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `HIT_LOG=hit_lib=trace`.
pub const LOG_ENV: &str = "HIT_LOG";

/// Install the global subscriber. Explicit `-v` wins over `HIT_LOG`.
pub fn init(verbose: u8) {
    let env = std::env::var(LOG_ENV).ok();
    let filter = EnvFilter::try_new(directive(verbose, env.as_deref()))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn directive(verbose: u8, env: Option<&str>) -> String {
    match (verbose, env) {
        (0, Some(env)) if !env.trim().is_empty() => env.to_owned(),
        (0, _) => "warn".to_owned(),
        (1, _) => "debug".to_owned(),
        _ => "trace".to_owned(),
    }
}
