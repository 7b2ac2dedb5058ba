//! Logging setup
//!
//! The crate logs through the `log` facade; the sweep reports each fill at
//!   `debug` and each span at `trace`. Applications pick a backend, or call
//!   [`init_logging`] for `env_logger`.

use std::sync::Once;

/// Logger configuration
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
///   "scanfill=trace").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initialize the global logger once; later calls are ignored
///
/// Without a filter in `config`, `RUST_LOG` is used, then `info`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }
        builder.write_style(config.write_style);

        // Another logger may already be installed, e.g. by a test harness
        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice() {
        let config = LoggingConfig {
            env_filter: Some("scanfill=trace".to_string()),
            ..LoggingConfig::default()
        };
        init_logging(config);
        init_logging(LoggingConfig::default());
        assert!(log::log_enabled!(target: "scanfill", log::Level::Trace));
    }
}
