use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Output format for console logs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl LogFormat {
    /// Reads `LOG_FORMAT` (`compact` or `json`, default `compact`).
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("LOG_FORMAT").unwrap_or_default())
    }

    fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Compact
        }
    }
}

/// Builds the filter from `RUST_LOG`, or from `LOG_LEVEL` for the redisify crates.
fn env_filter() -> EnvFilter {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "redisify={log_level},redisify_cache={log_level},redisify_config={log_level}"
        ))
    })
}

/// Initialize console logging on stderr.
///
/// Stdout is left to the command output, so logs never mix with the
/// generated cache settings.
///
/// # Configuration
///
/// - **Log Level**: Controlled by `LOG_LEVEL` environment variable (default: "warn"),
///   or fully by `RUST_LOG` when set
/// - **Format**: `LOG_FORMAT=json` for one JSON object per line, compact text otherwise
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging() {
    let result = match LogFormat::from_env() {
        LogFormat::Compact => tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_filter(env_filter()),
            )
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_current_span(true)
                    .with_filter(env_filter()),
            )
            .try_init(),
    };

    if result.is_ok() {
        tracing::debug!("Console logging initialized");
    }
}
