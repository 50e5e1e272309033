use clap::{ArgAction, Parser};

use crate::picker::extractors::ExtractorMode;

/// Pick the best playable stream URL(s) for a media page.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Media page URL, or a path to an extractor JSON dump with --json
    /// ("-" reads stdin)
    pub source: String,

    /// Select separate video and audio streams for client-side combination
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub adaptive: bool,

    /// Treat SOURCE as an already-extracted JSON document instead of a URL
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Extractor backend (auto|cli|python)
    #[arg(long, default_value = "auto")]
    pub extractor: ExtractorMode,

    /// Socket timeout in seconds for the extractor
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// HTTP/SOCKS proxy URL, e.g. socks5://127.0.0.1:1080
    #[arg(long)]
    pub proxy: Option<String>,

    /// Cookies file in Netscape format
    #[arg(long)]
    pub cookies: Option<String>,
}
