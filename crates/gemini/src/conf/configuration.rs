use std::env;
use std::path::Path;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::config_types::{DatabaseConfiguration, LoggingConfiguration, ServerConfiguration};


pub const DATABASE_URL_ENV: &str = "DATABASE_URL";
pub const ACTIVE_PROFILES_ENV: &str = "RUST_PROFILES_ACTIVE";
pub const RESOURCES_DIR: &str = "resources";

#[derive(Clone, Debug, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub server: ServerConfiguration,
    #[serde(default)]
    pub database: DatabaseConfiguration,
    #[serde(default)]
    pub logging: LoggingConfiguration,
}

impl Configuration {
    /// Loads `resources/application.yml`, the files of every profile named in
    /// `RUST_PROFILES_ACTIVE`, then lets `DATABASE_URL` override the database url.
    pub fn load() -> Result<Self, ConfigError> {
        let profiles_raw_string = env::var(ACTIVE_PROFILES_ENV).unwrap_or_default();
        let active_profiles = parse_profiles(&profiles_raw_string);

        Self::load_from(
            Path::new(RESOURCES_DIR),
            &active_profiles,
            env::var(DATABASE_URL_ENV).ok(),
        )
    }

    pub fn load_from(
        resources_dir: &Path,
        active_profiles: &[&str],
        database_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let base = resources_dir.join("application");
        let mut builder = Config::builder()
            .add_source(File::with_name(&base.to_string_lossy()).required(false));

        for profile in active_profiles {
            let profile_file = resources_dir.join(format!("application-{profile}"));
            builder = builder
                .add_source(File::with_name(&profile_file.to_string_lossy()).required(false));
        }

        builder = builder.set_override_option("database.url", database_url)?;

        let parsed_config: Configuration = builder.build()?.try_deserialize()?;

        if parsed_config.database.url.trim().is_empty() {
            return Err(ConfigError::Message(format!(
                "no database url configured, set {DATABASE_URL_ENV} or database.url"
            )));
        }

        Ok(parsed_config)
    }
}

fn parse_profiles(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect()
}
