// InfoExtractor trait and common configuration

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

use crate::picker::errors::ExtractError;
use crate::picker::format_selector::SelectionPolicy;
use crate::picker::models::ExtractionResult;

lazy_static! {
    static ref SOURCE_RE: Regex = Regex::new(r"^https?://\S+$").unwrap();
}

/// Reject sources the extraction tool would choke on anyway
pub(crate) fn validate_source(source: &str) -> Result<(), ExtractError> {
    if SOURCE_RE.is_match(source) {
        Ok(())
    } else {
        Err(ExtractError::InvalidSource(source.to_string()))
    }
}

/// Which external extractor entry point to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtractorMode {
    /// Native yt-dlp binary (faster, no interpreter needed)
    Cli,
    /// `python3 -m yt_dlp` (works wherever only the module is installed)
    Python,
    /// Binary first, module as fallback
    #[default]
    Auto,
}

impl fmt::Display for ExtractorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cli => write!(f, "cli"),
            Self::Python => write!(f, "python"),
            Self::Auto => write!(f, "auto"),
        }
    }
}

impl FromStr for ExtractorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cli" => Ok(Self::Cli),
            "python" => Ok(Self::Python),
            "auto" => Ok(Self::Auto),
            other => Err(format!("unknown extractor mode: {}", other)),
        }
    }
}

/// Configuration for one extraction run
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Backend mode (binary, module, or auto)
    pub mode: ExtractorMode,
    /// Selection policy; decides the format string the tool receives
    pub policy: SelectionPolicy,
    /// Socket timeout in seconds, also bounds the whole tool run
    pub timeout_seconds: u64,
    /// HTTP/SOCKS proxy URL
    pub proxy: Option<String>,
    /// Path to a cookies file in Netscape format
    pub cookies_path: Option<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            mode: ExtractorMode::Auto,
            policy: SelectionPolicy::Combined,
            timeout_seconds: 10,
            proxy: None,
            cookies_path: None,
        }
    }
}

impl ExtractorConfig {
    pub fn with_mode(mut self, mode: ExtractorMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    pub fn with_proxy(mut self, proxy: Option<String>) -> Self {
        self.proxy = proxy;
        self
    }

    pub fn with_cookies_path(mut self, path: Option<String>) -> Self {
        self.cookies_path = path;
        self
    }

    /// Argument list for the extraction tool, shared by both backends.
    /// The policy decides the format string; everything else is plumbing.
    pub(crate) fn tool_args(&self, source: &str) -> Vec<String> {
        let mut args = vec![
            "--dump-json".to_string(),
            "--no-playlist".to_string(),
            "--no-warnings".to_string(),
            "--skip-download".to_string(),
            "--socket-timeout".to_string(),
            self.timeout_seconds.to_string(),
            "--retries".to_string(),
            "2".to_string(),
            "-f".to_string(),
            self.policy.format_spec().to_string(),
        ];

        if let Some(proxy) = &self.proxy {
            args.push("--proxy".to_string());
            args.push(proxy.clone());
        }

        if let Some(path) = &self.cookies_path {
            args.push("--cookies".to_string());
            args.push(path.clone());
        }

        args.push(source.to_string());
        args
    }
}

/// Trait for extraction backends
#[async_trait]
pub trait InfoExtractor: Send + Sync {
    /// Name of the backend (for logging)
    fn name(&self) -> &'static str;

    /// Check if this backend is available on the machine
    fn is_available(&self) -> bool;

    /// Resolve a source into an extraction result (metadata only, no media
    /// bytes are fetched by this crate)
    async fn extract(
        &self,
        source: &str,
        config: &ExtractorConfig,
    ) -> Result<ExtractionResult, ExtractError>;
}
