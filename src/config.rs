use anyhow::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Portal configuration, loaded from CLI/environment and optionally a TOML file
///
/// Example configuration file content
/// # Art&Me portal configuration
///
/// listen_on_port = 8080
/// assets_dir = "./public"
/// secure_cookies = true
///
/// # Auth / database backend
/// supabase_url = "https://project.supabase.co"
/// supabase_anon_key = "eyJhbGciOi..."
///
/// # Inspiration quote (optional, a fallback quote is shown without a key)
/// gemini_api_key = "AIza..."
/// gemini_model = "gemini-3-flash-preview"
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(version, about, long_about = None)]
#[serde(default)]
pub struct Config {
    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    #[serde(default = "default_port")]
    pub listen_on_port: u16,

    /// Configuration file path
    #[arg(short, long)]
    #[serde(skip)]
    pub config: Option<String>,

    /// Base URL of the auth/database backend
    #[arg(long, env = "SUPABASE_URL")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supabase_url: Option<String>,

    /// Public (anon) API key of the auth/database backend
    #[arg(long, env = "SUPABASE_ANON_KEY")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supabase_anon_key: Option<String>,

    /// Gemini API key for the landing page quote
    #[arg(long, env = "GEMINI_API_KEY")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gemini_api_key: Option<String>,

    /// Gemini model used for the landing page quote
    #[arg(long, default_value = "gemini-3-flash-preview")]
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,

    /// Gemini API base URL
    #[arg(long, default_value = "https://generativelanguage.googleapis.com")]
    #[serde(default = "default_gemini_endpoint")]
    pub gemini_endpoint: String,

    /// Timeout for every outbound request, in seconds
    #[arg(long, default_value_t = 10)]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Directory with `images/` and `styles.css`
    #[arg(short, long, default_value = "public")]
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,

    /// Mark session cookies as Secure (serve over https)
    #[arg(long)]
    #[serde(default)]
    pub secure_cookies: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_on_port: default_port(),
            config: None,
            supabase_url: None,
            supabase_anon_key: None,
            gemini_api_key: None,
            gemini_model: default_gemini_model(),
            gemini_endpoint: default_gemini_endpoint(),
            request_timeout_secs: default_request_timeout_secs(),
            assets_dir: default_assets_dir(),
            secure_cookies: false,
        }
    }
}

impl Config {
    /// Load configuration from CLI args, optionally merging with a config file
    pub fn load() -> Result<Self> {
        let mut config = Config::parse();

        if let Some(config_path) = &config.config {
            let file_config = Self::from_file(Path::new(config_path))?;
            config = config.merge_with_file(file_config);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Merge with file config, CLI args take precedence
    fn merge_with_file(mut self, file_config: Config) -> Self {
        // If CLI value is default, use file value
        if self.listen_on_port == default_port() {
            self.listen_on_port = file_config.listen_on_port;
        }
        if self.gemini_model == default_gemini_model() {
            self.gemini_model = file_config.gemini_model;
        }
        if self.gemini_endpoint == default_gemini_endpoint() {
            self.gemini_endpoint = file_config.gemini_endpoint;
        }
        if self.request_timeout_secs == default_request_timeout_secs() {
            self.request_timeout_secs = file_config.request_timeout_secs;
        }
        if self.assets_dir == default_assets_dir() {
            self.assets_dir = file_config.assets_dir;
        }
        self.secure_cookies |= file_config.secure_cookies;

        // For Option fields, CLI takes precedence if Some
        if self.supabase_url.is_none() {
            self.supabase_url = file_config.supabase_url;
        }
        if self.supabase_anon_key.is_none() {
            self.supabase_anon_key = file_config.supabase_anon_key;
        }
        if self.gemini_api_key.is_none() {
            self.gemini_api_key = file_config.gemini_api_key;
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let Some(supabase_url) = self.supabase_url.as_deref().filter(|s| !s.is_empty()) else {
            return Err(anyhow::anyhow!("Backend URL (supabase_url) is required"));
        };
        check_http_url("supabase_url", supabase_url)?;

        if self
            .supabase_anon_key
            .as_ref()
            .map(|s| s.is_empty())
            .unwrap_or(true)
        {
            return Err(anyhow::anyhow!(
                "Backend anon key (supabase_anon_key) is required"
            ));
        }

        check_http_url("gemini_endpoint", &self.gemini_endpoint)?;

        if let Some(key) = &self.gemini_api_key
            && key.is_empty()
        {
            return Err(anyhow::anyhow!("Gemini API key cannot be empty when set"));
        }

        if self.request_timeout_secs == 0 {
            return Err(anyhow::anyhow!("Request timeout must be at least 1 second"));
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn check_http_url(name: &str, url: &str) -> Result<()> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(anyhow::anyhow!(
            "{name} must start with http:// or https://"
        ));
    }
    Ok(())
}

// Default value functions
fn default_port() -> u16 {
    8080
}

fn default_gemini_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_gemini_endpoint() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_assets_dir() -> String {
    "public".to_string()
}
