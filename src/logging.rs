use tracing_error::ErrorLayer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, FmtSubscriber};

use crate::formatter;

static SUBSCRIBER_INIT: std::sync::Once = std::sync::Once::new();

/// Installs the global tracing subscriber. Later calls do nothing.
pub fn setup_logging() {
    SUBSCRIBER_INIT.call_once(|| {
        // RUST_LOG overrides; default to info for this crate and warn elsewhere
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("warn,{name}=info", name = env!("CARGO_CRATE_NAME"))));

        let subscriber = FmtSubscriber::builder()
            .with_target(true)
            .with_ansi(true)
            .event_format(formatter::TickFormatter)
            .with_env_filter(filter)
            .finish()
            .with(ErrorLayer::default());

        if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
            eprintln!("Failed to install tracing subscriber: {error}");
        }
    });
}
