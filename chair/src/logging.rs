use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Crates whose logs the verbosity flag raises; dependencies stay at WARN.
const CRATES: &[&str] = &[
    "chair",
    "chair_codegen",
    "chair_config",
    "chair_core",
    "chair_postgres",
    "chair_schema",
];

/// Initialize tracing to stderr.
///
/// `RUST_LOG` takes precedence. Otherwise the verbosity selects the level:
/// - 0 (default): WARN
/// - 1 (-v): INFO (written output)
/// - 2 (-vv): DEBUG (stage transitions, queries)
/// - 3+ (-vvv): TRACE
pub fn init_tracing(verbose: u8) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(filter) => EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn")),
        Err(_) => EnvFilter::new(default_filter(verbose)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(verbose >= 2)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn default_filter(verbose: u8) -> String {
    let level = match verbose {
        0 => return "warn".to_string(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let mut filter = String::from("warn");
    for krate in CRATES {
        filter.push_str(&format!(",{}={}", krate, level));
    }
    filter
}
