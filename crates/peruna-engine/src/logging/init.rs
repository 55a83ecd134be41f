use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` uses `env_logger` filter syntax, e.g. `"peruna_engine=debug,wgpu=warn"`.
/// When unset, `RUST_LOG` is consulted before falling back to `info` for this
/// crate and `warn` for everything else.
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

/// Installs the global logger. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.env_filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                // wgpu is chatty at info.
                builder
                    .filter_level(log::LevelFilter::Warn)
                    .filter_module("peruna_engine", log::LevelFilter::Info)
                    .filter_module("peruna_studio", log::LevelFilter::Info);
            }
        }

        builder.write_style(config.write_style);

        // A logger may already be installed by a test harness or host.
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized");
    });
}
