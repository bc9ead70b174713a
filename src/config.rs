use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub stub: StubSettings,
    #[serde(default)]
    pub github: GithubSettings,
    #[serde(default)]
    pub cors: CorsSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

/// Bind address for the placeholder stub service
#[derive(Debug, Clone, Deserialize)]
pub struct StubSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_stub_port")]
    pub port: u16,
}

impl Default for StubSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_stub_port(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GithubSettings {
    #[serde(default = "default_github_api_base")]
    pub api_base: String,
    /// Optional API token; unauthenticated requests hit a low rate limit
    pub token: Option<String>,
    #[serde(default = "default_github_timeout_secs")]
    pub timeout_secs: u64,
    /// User-Agent sent on every request; GitHub rejects requests without one
    #[serde(default = "default_github_user_agent")]
    pub user_agent: String,
}

impl Default for GithubSettings {
    fn default() -> Self {
        Self {
            api_base: default_github_api_base(),
            token: None,
            timeout_secs: default_github_timeout_secs(),
            user_agent: default_github_user_agent(),
        }
    }
}

/// CORS policy applied by both services
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
    #[serde(default = "default_allowed_methods")]
    pub allowed_methods: Vec<String>,
    #[serde(default = "default_allowed_headers")]
    pub allowed_headers: Vec<String>,
    #[serde(default = "default_true")]
    pub allow_credentials: bool,
    /// How long browsers may cache a preflight response, in seconds
    #[serde(default = "default_cors_max_age_secs")]
    pub max_age_secs: u64,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
            allowed_methods: default_allowed_methods(),
            allowed_headers: default_allowed_headers(),
            allow_credentials: true,
            max_age_secs: default_cors_max_age_secs(),
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8000 }
fn default_stub_port() -> u16 { 8001 }
fn default_github_api_base() -> String { "https://api.github.com".to_string() }
fn default_github_timeout_secs() -> u64 { 10 }
fn default_github_user_agent() -> String {
    crate::services::github::DEFAULT_USER_AGENT.to_string()
}
fn default_cors_max_age_secs() -> u64 { 3600 }
fn default_allowed_origins() -> Vec<String> { vec!["http://localhost:3000".to_string()] }
fn default_allowed_methods() -> Vec<String> {
    vec!["GET".to_string(), "POST".to_string(), "OPTIONS".to_string()]
}
fn default_allowed_headers() -> Vec<String> {
    vec!["Content-Type".to_string(), "Authorization".to_string()]
}
fn default_true() -> bool { true }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml, then config/local.toml)
    /// 3. Environment variables (prefixed with HIRESMART__)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with HIRESMART__)
            // e.g., HIRESMART__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("HIRESMART")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("HIRESMART")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply well-known environment variable overrides
///
/// `GITHUB_TOKEN` is the conventional variable name; it wins over anything
/// in the config file, and HIRESMART__GITHUB__TOKEN is accepted too.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let github_token = env::var("GITHUB_TOKEN")
        .or_else(|_| env::var("HIRESMART__GITHUB__TOKEN"))
        .ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(token) = github_token {
        builder = builder.set_override("github.token", token)?;
    }

    builder.build()
}
