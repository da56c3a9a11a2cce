use std::sync::Once;

use env_logger::{Builder, Env, WriteStyle};

/// Logger settings for a sketch binary.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` directives such as `"warn,sketchkit_engine::scene3d=trace"`.
    /// Takes precedence over `RUST_LOG`.
    pub env_filter: Option<String>,
    pub write_style: WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { env_filter: None, write_style: WriteStyle::Auto }
    }
}

impl LoggingConfig {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self { env_filter: Some(filter.into()), ..Self::default() }
    }
}

static INIT: Once = Once::new();

/// Installs the `env_logger` backend behind the `log` facade.
///
/// Filter precedence: `config.env_filter`, then `RUST_LOG`, then `info`. Only the
/// first call has any effect, and a logger installed by someone else is left alone.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = match &config.env_filter {
            Some(filter) => {
                let mut b = Builder::new();
                b.parse_filters(filter);
                b
            }
            None => Builder::from_env(Env::default().default_filter_or("info")),
        };
        builder.write_style(config.write_style).format_timestamp_millis();

        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}
