use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3333";
pub const ENV_PREFIX: &str = "TASKBOARD";

/// Client configuration.
///
/// Sources are layered: the built-in default, then the TOML document shipped with the
/// app, then `TASKBOARD_*` environment variables where the platform has them.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClientConfig {
    #[serde(default = "default_api_base_url")]
    api_base_url: String,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let api_base_url = api_base_url.into();
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL of the task backend, without a trailing slash.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Loads the configuration on top of the given TOML document.
    pub fn load(toml: &str) -> anyhow::Result<Self> {
        Self::load_with_env(toml, config::Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(toml: &str, env: config::Environment) -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .set_default("api_base_url", DEFAULT_API_BASE_URL)?
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .add_source(env)
            .build()?;

        let config: ClientConfig = settings.try_deserialize()?;
        Ok(Self::new(config.api_base_url))
    }
}
