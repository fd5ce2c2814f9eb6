use serde::Deserialize;

/// Configuration options for the trivia API server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Path to the SQLite database file.
    pub database_url: String,
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

fn default_bind_address() -> String {
    "127.0.0.1:5000".to_string()
}

impl ServerConfig {
    /// Load configuration from an optional `config.yaml` overlaid with
    /// environment variables (`DATABASE_URL`, `BIND_ADDRESS`).
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::default())
            .build()?
            .try_deserialize()
    }
}
