use serde::Deserialize;


#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfiguration {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfiguration {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct DatabaseConfiguration {
    /// Connection string, e.g. `postgres://...` or `sqlite://friends.db?mode=rwc`.
    #[serde(default)]
    pub url: String,
    pub max_connections: Option<u32>,
    #[serde(default)]
    pub sqlx_logging: bool,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfiguration {
    pub format: String,
    pub level: LogLevelConfiguration,
}

impl Default for LoggingConfiguration {
    fn default() -> Self {
        Self {
            format: "json".to_string(),
            level: LogLevelConfiguration::default(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct LogLevelConfiguration {
    pub root: Option<String>,
    pub directives: Vec<LoggingDirective>,
}

impl Default for LogLevelConfiguration {
    fn default() -> Self {
        Self {
            root: Some("info".to_string()),
            directives: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct LoggingDirective {
    pub namespace: String,
    pub level: String,
}
