// CLI backend - uses the native `yt-dlp` binary
//
// Fastest option when the binary is installed; no interpreter involved.

use async_trait::async_trait;
use std::process::Command as StdCommand;
use tracing::debug;

use super::traits::{validate_source, ExtractorConfig, InfoExtractor};
use crate::picker::errors::ExtractError;
use crate::picker::models::ExtractionResult;
use crate::picker::utils::run_output_with_timeout;

/// Extractor backend driving the yt-dlp binary
pub struct CliInfoExtractor {
    ytdlp_path: String,
}

impl CliInfoExtractor {
    pub fn new() -> Self {
        Self {
            ytdlp_path: Self::find_ytdlp(),
        }
    }

    /// Find the yt-dlp binary: well-known install locations first, then PATH
    fn find_ytdlp() -> String {
        let common_paths = [
            "/opt/homebrew/bin/yt-dlp",
            "/usr/local/bin/yt-dlp",
            "/usr/bin/yt-dlp",
        ];

        for path in common_paths {
            if std::path::Path::new(path).exists() {
                return path.to_string();
            }
        }

        if let Ok(output) = StdCommand::new("which").arg("yt-dlp").output() {
            if output.status.success() {
                if let Ok(path) = String::from_utf8(output.stdout) {
                    let trimmed = path.trim();
                    if !trimmed.is_empty() {
                        return trimmed.to_string();
                    }
                }
            }
        }

        "yt-dlp".to_string()
    }

    fn has_ytdlp_binary(&self) -> bool {
        match StdCommand::new(&self.ytdlp_path).arg("--version").output() {
            Ok(out) => out.status.success(),
            Err(_) => false,
        }
    }
}

impl Default for CliInfoExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InfoExtractor for CliInfoExtractor {
    fn name(&self) -> &'static str {
        "cli-yt-dlp"
    }

    fn is_available(&self) -> bool {
        self.has_ytdlp_binary()
    }

    async fn extract(
        &self,
        source: &str,
        config: &ExtractorConfig,
    ) -> Result<ExtractionResult, ExtractError> {
        validate_source(source)?;
        if !self.is_available() {
            return Err(ExtractError::ToolNotFound("yt-dlp binary".to_string()));
        }

        let args = config.tool_args(source);
        debug!(tool = %self.ytdlp_path, args = %args.join(" "), "running extraction");

        let output =
            run_output_with_timeout(&self.ytdlp_path, args, config.timeout_seconds).await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExtractError::classify(&stderr));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        ExtractionResult::from_json(&stdout).map_err(|e| ExtractError::Parse(e.to_string()))
    }
}
