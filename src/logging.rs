//! Tracing setup.
//!
//! Request access logs from actix's `Logger` middleware go through the `log`
//! facade and are picked up by the subscriber installed here.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const DEFAULT_FILTER: &str = "mergington_activities=info,actix_web=info";

/// Builds the filter from `directive`, falling back to [`DEFAULT_FILTER`]
/// when it is absent or does not parse.
pub fn env_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Call once at startup.
pub fn init(directive: Option<&str>) {
    tracing_subscriber::registry()
        .with(env_filter(directive))
        .with(fmt::layer().with_target(true).with_line_number(true))
        .init();
}
