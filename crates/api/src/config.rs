use serde::Deserialize;
use std::net::{AddrParseError, SocketAddr};

/// Environment variables that carry the database target, keyed by the
/// configuration path they override.
pub const DATABASE_ENV_VARS: [(&str, &str); 5] = [
    ("database.username", "POSTGRES_USERNAME"),
    ("database.password", "POSTGRES_PASSWORD"),
    ("database.host", "DB_HOST"),
    ("database.port", "DB_PORT"),
    ("database.name", "DB_NAME"),
];

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

/// Database target, filled from `POSTGRES_USERNAME`, `POSTGRES_PASSWORD`,
/// `DB_HOST`, `DB_PORT` and `DB_NAME`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,

    #[serde(default)]
    pub host: String,

    #[serde(default)]
    pub port: u16,

    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecurityConfig {
    /// Allowed CORS origins. Empty allows any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl From<&DatabaseConfig> for persistence::db::DatabaseConfig {
    fn from(config: &DatabaseConfig) -> Self {
        Self {
            username: config.username.clone(),
            password: config.password.clone(),
            host: config.host.clone(),
            port: config.port,
            name: config.name.clone(),
        }
    }
}

// Default value functions
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    8000
}
fn default_request_timeout() -> u64 {
    30
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

type Builder = config::ConfigBuilder<config::builder::DefaultState>;

/// Applies the database environment variables on top of `builder`.
///
/// `lookup` resolves a variable name to its value; unset variables leave
/// the lower layers untouched.
fn apply_database_env<F>(mut builder: Builder, lookup: F) -> Result<Builder, config::ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    for (key, var) in DATABASE_ENV_VARS {
        builder = builder.set_override_option(key, lookup(var))?;
    }
    Ok(builder)
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Loading order (later sources override earlier):
    /// 1. config/default.toml - base configuration with defaults
    /// 2. config/local.toml - local overrides (optional, not in git)
    /// 3. Environment variables with CONTACTS__ prefix
    /// 4. POSTGRES_USERNAME, POSTGRES_PASSWORD, DB_HOST, DB_PORT, DB_NAME
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("CONTACTS").separator("__"));
        let builder = apply_database_env(builder, |var| std::env::var(var).ok())?;

        let cfg: Self = builder.build()?.try_deserialize()?;
        cfg.validate()
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Ok(cfg)
    }

    /// Load configuration for testing with custom overrides.
    ///
    /// Builds entirely from embedded defaults and overrides, without
    /// touching config files or the process environment.
    #[cfg(test)]
    pub fn load_for_test(overrides: &[(&str, &str)]) -> Result<Self, config::ConfigError> {
        let defaults = r#"
            [server]
            host = "127.0.0.1"
            port = 8000
            request_timeout_secs = 30

            [database]
            username = ""
            password = ""
            host = ""
            port = 0
            name = ""

            [logging]
            level = "info"
            format = "json"

            [security]
            cors_origins = []
        "#;

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(defaults, config::FileFormat::Toml));

        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }

        // Skip validation in tests to allow partial configs
        builder.build()?.try_deserialize()
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), ConfigValidationError> {
        let db = &self.database;
        let required = [
            (db.username.is_empty(), "POSTGRES_USERNAME"),
            (db.password.is_empty(), "POSTGRES_PASSWORD"),
            (db.host.is_empty(), "DB_HOST"),
            (db.port == 0, "DB_PORT"),
            (db.name.is_empty(), "DB_NAME"),
        ];
        if let Some((_, var)) = required.iter().find(|(missing, _)| *missing) {
            return Err(ConfigValidationError::MissingRequired(format!(
                "{} environment variable must be set",
                var
            )));
        }

        if self.server.port == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "Server port cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.server.host, self.server.port).parse()
    }
}
