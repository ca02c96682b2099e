use serde::Deserialize;

/// Configuration options specific to the classifieds service.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Interface the HTTP server binds to.
    #[serde(default = "default_address")]
    pub address: String,
    /// Port the HTTP server listens on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Path of the JSON snapshot with categories, plans and subscriptions.
    pub snapshot_path: String,
}

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

#[cfg(feature = "server")]
impl ServerConfig {
    /// Load settings from `config/default.yaml` (optional) and `APP__*`
    /// environment variables, the latter taking precedence.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
