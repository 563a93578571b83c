use crate::Config;
use crate::quote::QuoteClient;
use crate::supabase::SupabaseClient;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

const IMAGES_DIR: &str = "images";
const STYLESHEET: &str = "styles.css";

#[derive(Clone)]
pub struct AppState {
    pub supabase: Arc<SupabaseClient>,
    pub quotes: Arc<QuoteClient>,
    pub secure_cookies: bool,

    pub assets_dir: PathBuf,
}

impl AppState {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let supabase_url = config
            .supabase_url
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("supabase_url is not configured"))?;
        let anon_key = config
            .supabase_anon_key
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("supabase_anon_key is not configured"))?;

        let supabase = SupabaseClient::new(supabase_url, anon_key, config.request_timeout())?;
        info!(base_url = supabase.base_url(), "Auth/database backend configured");

        if config.gemini_api_key.is_none() {
            warn!("No Gemini API key, the landing page shows the fallback quote");
        }
        let quotes = QuoteClient::new(
            &config.gemini_endpoint,
            &config.gemini_model,
            config.gemini_api_key.clone(),
            config.request_timeout(),
        )?;

        Ok(Self {
            supabase: Arc::new(supabase),
            quotes: Arc::new(quotes),
            secure_cookies: config.secure_cookies,

            assets_dir: PathBuf::from(&config.assets_dir),
        })
    }

    pub fn images_dir(&self) -> PathBuf {
        self.assets_dir.join(IMAGES_DIR)
    }

    pub fn stylesheet(&self) -> PathBuf {
        self.assets_dir.join(STYLESHEET)
    }
}
