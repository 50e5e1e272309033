use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::Read;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use stream_picker::cli::Args;
use stream_picker::picker::extractors::{ExtractorConfig, ExtractorOrchestrator};
use stream_picker::{
    candidate_formats, ExtractionResult, Selection, SelectionPolicy, StreamSelector,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let policy = if args.adaptive {
        SelectionPolicy::Adaptive
    } else {
        SelectionPolicy::Combined
    };

    let info = if args.json {
        load_extraction_dump(&args.source).context("reading extraction dump")?
    } else {
        let config = ExtractorConfig::default()
            .with_mode(args.extractor)
            .with_policy(policy)
            .with_timeout(args.timeout)
            .with_proxy(args.proxy.clone())
            .with_cookies_path(args.cookies.clone());
        ExtractorOrchestrator::new()
            .extract(&args.source, &config)
            .await
            .context("extraction failed")?
    };

    for format in candidate_formats(&info) {
        debug!(%format, "candidate");
    }

    // URLs alone go to stdout; diagnostics stay on stderr.
    match StreamSelector::select(&info, policy)? {
        Selection::Adaptive {
            video_url,
            audio_url,
        } => {
            if video_url.is_none() && audio_url.is_none() {
                bail!("catalog has neither a video nor an audio stream");
            }
            match &video_url {
                Some(url) => println!("video\t{}", url),
                None => warn!("no usable video stream in the catalog"),
            }
            match &audio_url {
                Some(url) => println!("audio\t{}", url),
                None => warn!("no usable audio stream in the catalog"),
            }
        }
        Selection::Combined { url } => println!("{}", url),
    }

    Ok(())
}

fn load_extraction_dump(source: &str) -> Result<ExtractionResult> {
    let mut text = String::new();
    if source == "-" {
        std::io::stdin().read_to_string(&mut text)?;
    } else {
        text = std::fs::read_to_string(source)?;
    }
    Ok(ExtractionResult::from_json(&text)?)
}
