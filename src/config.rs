//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! Credentials are handed to the upstream clients explicitly; nothing reads the
//! environment at request time.
//!
//! ## Upstream credentials
//!
//! ```bash
//! export PIXABAY_API_KEY="..."
//! export ANTHROPIC_API_KEY="..."
//! ```
//!
//! A missing credential does not stop the service. It is reported as a warning
//! at startup, by `/health`, and as an upstream failure on the first draw.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `PIXABAY_BASE_URL` - Image search origin (default: `https://pixabay.com`)
//! - `IMAGE_PAGE_SIZE` - Images requested per search (default: 5, range: 3-200)
//! - `ANTHROPIC_BASE_URL` - Text generation origin (default: `https://api.anthropic.com`)
//! - `ANTHROPIC_MODEL` - Model identifier (default: `claude-sonnet-4-20250514`)
//! - `ANTHROPIC_MAX_TOKENS` - Output length cap (default: 800, range: 1-8192)
//! - `FORTUNE_LANGUAGE` - Language of the reading (default: `English`)
//! - `YESNO_BASE_URL` - Yes/no oracle origin (default: `https://yesno.wtf`)
//! - `UPSTREAM_TIMEOUT_SECONDS` - Timeout for each outbound call (default: 30)
//! - `EXPOSE_ERROR_DETAIL` - Include the failure cause in 500 bodies (default: `true`)
//! - `STATIC_DIR` - Directory served under `/static` (default: `static`)

use anyhow::{Context, Result};
use std::env;
use url::Url;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,

    // ── Image search ────────────────────────────────────────────────────────
    pub pixabay_api_key: String,
    pub pixabay_base_url: String,
    /// Number of hits requested per search (`per_page`).
    pub image_page_size: u32,

    // ── Text generation ─────────────────────────────────────────────────────
    pub anthropic_api_key: String,
    pub anthropic_base_url: String,
    pub anthropic_model: String,
    pub anthropic_max_tokens: u32,
    /// Language the model is asked to write the reading in.
    pub fortune_language: String,

    // ── Yes/no oracle ───────────────────────────────────────────────────────
    pub yesno_base_url: String,

    /// Timeout applied to every outbound request, in seconds.
    pub upstream_timeout_seconds: u64,
    /// When false, 500 responses carry only the generic `error` message.
    pub expose_error_detail: bool,
    pub static_dir: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let pixabay_api_key = env::var("PIXABAY_API_KEY").unwrap_or_default();
        let pixabay_base_url =
            env::var("PIXABAY_BASE_URL").unwrap_or_else(|_| "https://pixabay.com".to_string());
        let image_page_size = parse_var("IMAGE_PAGE_SIZE", 5)?;

        let anthropic_api_key = env::var("ANTHROPIC_API_KEY").unwrap_or_default();
        let anthropic_base_url = env::var("ANTHROPIC_BASE_URL")
            .unwrap_or_else(|_| "https://api.anthropic.com".to_string());
        let anthropic_model = env::var("ANTHROPIC_MODEL")
            .unwrap_or_else(|_| "claude-sonnet-4-20250514".to_string());
        let anthropic_max_tokens = parse_var("ANTHROPIC_MAX_TOKENS", 800)?;
        let fortune_language =
            env::var("FORTUNE_LANGUAGE").unwrap_or_else(|_| "English".to_string());

        let yesno_base_url =
            env::var("YESNO_BASE_URL").unwrap_or_else(|_| "https://yesno.wtf".to_string());

        let upstream_timeout_seconds = parse_var("UPSTREAM_TIMEOUT_SECONDS", 30)?;

        let expose_error_detail = env::var("EXPOSE_ERROR_DETAIL")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(true);

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            pixabay_api_key,
            pixabay_base_url,
            image_page_size,
            anthropic_api_key,
            anthropic_base_url,
            anthropic_model,
            anthropic_max_tokens,
            fortune_language,
            yesno_base_url,
            upstream_timeout_seconds,
            expose_error_detail,
            static_dir,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - any upstream base URL is not an absolute http(s) URL
    /// - `image_page_size` or `anthropic_max_tokens` is out of range
    /// - `upstream_timeout_seconds` is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        validate_base_url("PIXABAY_BASE_URL", &self.pixabay_base_url)?;
        validate_base_url("ANTHROPIC_BASE_URL", &self.anthropic_base_url)?;
        validate_base_url("YESNO_BASE_URL", &self.yesno_base_url)?;

        // Pixabay rejects per_page outside 3..=200
        if !(3..=200).contains(&self.image_page_size) {
            anyhow::bail!(
                "IMAGE_PAGE_SIZE must be between 3 and 200, got {}",
                self.image_page_size
            );
        }

        if self.anthropic_max_tokens == 0 || self.anthropic_max_tokens > 8192 {
            anyhow::bail!(
                "ANTHROPIC_MAX_TOKENS must be between 1 and 8192, got {}",
                self.anthropic_max_tokens
            );
        }

        if self.anthropic_model.trim().is_empty() {
            anyhow::bail!("ANTHROPIC_MODEL must not be empty");
        }

        if self.upstream_timeout_seconds == 0 {
            anyhow::bail!("UPSTREAM_TIMEOUT_SECONDS must be greater than 0");
        }

        Ok(())
    }

    /// Returns whether both draw credentials are present.
    pub fn has_draw_credentials(&self) -> bool {
        !self.pixabay_api_key.is_empty() && !self.anthropic_api_key.is_empty()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Image search: {} (key: {}, per_page: {})",
            self.pixabay_base_url,
            mask_secret(&self.pixabay_api_key),
            self.image_page_size
        );
        tracing::info!(
            "  Text generation: {} (key: {}, model: {}, max_tokens: {})",
            self.anthropic_base_url,
            mask_secret(&self.anthropic_api_key),
            self.anthropic_model,
            self.anthropic_max_tokens
        );
        tracing::info!("  Fortune language: {}", self.fortune_language);
        tracing::info!("  Yes/no oracle: {}", self.yesno_base_url);
        tracing::info!("  Upstream timeout: {}s", self.upstream_timeout_seconds);

        if self.pixabay_api_key.is_empty() {
            tracing::warn!("PIXABAY_API_KEY is not set; tarot draws will fail");
        }
        if self.anthropic_api_key.is_empty() {
            tracing::warn!("ANTHROPIC_API_KEY is not set; tarot draws will fail");
        }
    }
}

/// Parses a numeric variable, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a number, got '{}'", name, raw)),
        Err(_) => Ok(default),
    }
}

fn validate_base_url(name: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).with_context(|| format!("{} is not a valid URL", name))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!("{} must start with 'http://' or 'https://', got '{}'", name, value);
    }

    Ok(())
}

/// Masks an API key for logging.
///
/// Keeps the first four characters of keys long enough to stay unguessable:
/// - `sk-ant-abcdef123456` → `sk-a***`
/// - `short` → `***`
/// - `` → `<unset>`
pub fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return "<unset>".to_string();
    }

    if secret.chars().count() < 12 {
        return "***".to_string();
    }

    let prefix: String = secret.chars().take(4).collect();
    format!("{}***", prefix)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
