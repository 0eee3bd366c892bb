use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};


/// Output format of the `fmt` layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl LogFormat {
    /// Parses a config value; anything other than `pretty` falls back to JSON.
    pub fn from_config(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("pretty") {
            LogFormat::Pretty
        } else {
            LogFormat::Json
        }
    }
}

pub fn initialize_logging_and_tracing<T>(
    package_name: &str,
    package_version: &str,
    format: LogFormat,
    env_filter_customizer: T,
) -> anyhow::Result<()>
where
    T: Fn(EnvFilter) -> EnvFilter,
{
    let fmt_layer = match format {
        LogFormat::Json => fmt::layer().json().boxed(),
        LogFormat::Pretty => fmt::layer().pretty().boxed(),
    };

    let subscriber = Registry::default()
        .with(fmt_layer)
        .with(env_filter_customizer(
            EnvFilter::from_default_env().add_directive(
                "tower_http=debug"
                    .parse()
                    .unwrap_or_default(),
            ),
        ));

    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!(
        service = package_name,
        version = package_version,
        "logging initialized"
    );

    Ok(())
}
