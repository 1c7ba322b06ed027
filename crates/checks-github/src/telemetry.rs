//! Tracing initialisation for processes that publish checks.
//!
//! Call [`init_tracing`] once at program start. Later calls are ignored,
//! since the global subscriber can only be set once per process.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::ChecksConfig;

/// Initialise the global tracing subscriber from `config`.
///
/// `RUST_LOG` takes precedence over `config.log_level`. With
/// `config.log_json`, lines are emitted as newline-delimited JSON.
/// Returns `false` when a global subscriber was already installed.
pub fn init_tracing(config: &ChecksConfig) -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level().as_str()));

    let (json_layer, text_layer) = if config.log_json {
        (Some(fmt::layer().with_target(false).json()), None)
    } else {
        (None, Some(fmt::layer().with_target(false)))
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .is_ok()
}
