use std::str::FromStr;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global tracing subscriber.
///
/// A bare level such as `"debug"` gets quieter defaults for the HTTP stack;
/// directive strings containing `,` or `=` are used as-is. Calling this twice is a no-op.
pub fn init_logging(log_level: &str, json_format: bool) {
    let normalized = log_level.trim();
    let filter_spec = if normalized.contains(',') || normalized.contains('=') {
        normalized.to_string()
    } else {
        format!(
            "{},h2=info,hyper=info,hyper_util=info,reqwest=info,rustls=info",
            normalized
        )
    };
    let filter = EnvFilter::from_str(&filter_spec).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::registry().with(filter);

    let installed = if json_format {
        let json_layer = fmt::layer()
            .json()
            .with_target(false)
            .with_current_span(false);
        subscriber.with(json_layer).try_init().is_ok()
    } else {
        let fmt_layer = fmt::layer().with_target(true).compact();
        subscriber.with(fmt_layer).try_init().is_ok()
    };

    if installed {
        tracing::info!(
            filter = %filter_spec,
            format = if json_format { "json" } else { "compact" },
            "Logging initialized"
        );
    }
}
