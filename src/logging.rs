// Logger setup.
//
// Everything in the crate logs through the `log` facade; this is the only
// place that knows the backend is `env_logger`.

use std::sync::Once;

// Logger configuration.
//
// `env_filter` uses the `env_logger` filter syntax (e.g. "info",
// "glass_clock=debug").
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

// Install the global logger. Only the first call does anything.
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
        // `try_init` so a logger installed by a test harness doesn't abort us.
        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}
