// StreamSelector - picks the best playable stream(s) from a format catalog
//
// Two selection policies:
// - Adaptive: separate best-video and best-audio streams, combined by the
//   downstream player
// - Combined: one stream that already carries both tracks
//
// Ranking is lexicographic over (height, tbr) for video, (channels, abr) for
// audio, and (height, tbr, abr) for combined streams. Missing numbers rank
// as 0. Ties keep the earliest candidate in input order.

use std::cmp::Ordering;

use super::errors::SelectError;
use super::models::{ExtractionResult, FormatDescriptor};
use super::resolver::candidate_formats;

/// Selection policy requested by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPolicy {
    /// Separate best video and best audio streams
    Adaptive,
    /// One best combined stream
    #[default]
    Combined,
}

impl SelectionPolicy {
    /// Format string handed to the extractor for this policy
    pub fn format_spec(&self) -> &'static str {
        match self {
            Self::Adaptive => "bestvideo+bestaudio",
            Self::Combined => "best",
        }
    }
}

/// Outcome of a selection request: opaque URLs for the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Separate halves; either may be absent when the catalog lacks a
    /// matching stream
    Adaptive {
        video_url: Option<String>,
        audio_url: Option<String>,
    },
    /// One stream carrying both tracks
    Combined { url: String },
}

/// Stream selector over a resolved format catalog
pub struct StreamSelector;

impl StreamSelector {
    /// Resolve the catalog and select under the given policy.
    ///
    /// The catalog is built once from `info` and discarded with the call;
    /// nothing is cached.
    pub fn select(
        info: &ExtractionResult,
        policy: SelectionPolicy,
    ) -> Result<Selection, SelectError> {
        let candidates = candidate_formats(info);

        match policy {
            SelectionPolicy::Adaptive => {
                let video_url = Self::select_best_video(&candidates)
                    .and_then(|f| f.url.clone())
                    // no usable video in the catalog: the root object's own
                    // url is the last resort
                    .or_else(|| info.descriptor.url.clone());
                let audio_url =
                    Self::select_best_audio(&candidates).and_then(|f| f.url.clone());
                Ok(Selection::Adaptive {
                    video_url,
                    audio_url,
                })
            }
            SelectionPolicy::Combined => {
                let best = Self::select_best_combined(&candidates)?;
                let url = best.url.clone().ok_or(SelectError::EmptyCatalog)?;
                Ok(Selection::Combined { url })
            }
        }
    }

    /// Best usable video stream: max (height, tbr), or None when the catalog
    /// has no usable video
    pub fn select_best_video<'a>(
        candidates: &[&'a FormatDescriptor],
    ) -> Option<&'a FormatDescriptor> {
        first_max_by(
            candidates.iter().copied().filter(|f| f.is_usable_video()),
            video_rank,
        )
    }

    /// Best usable audio stream: max (channels, abr). When nothing passes
    /// the usability check, relaxes to the first audio-only entry with a
    /// url, ignoring the channel/bitrate signal requirement.
    pub fn select_best_audio<'a>(
        candidates: &[&'a FormatDescriptor],
    ) -> Option<&'a FormatDescriptor> {
        first_max_by(
            candidates.iter().copied().filter(|f| f.is_usable_audio()),
            audio_rank,
        )
        .or_else(|| {
            candidates
                .iter()
                .copied()
                .find(|f| f.vcodec.as_deref() == Some("none") && f.url.is_some())
        })
    }

    /// Best combined stream: both tracks present, playable codec and
    /// transport; relaxes to any entry with a url when the strict tier is
    /// empty. Errs only when even the relaxed tier is empty.
    pub fn select_best_combined<'a>(
        candidates: &[&'a FormatDescriptor],
    ) -> Result<&'a FormatDescriptor, SelectError> {
        let strict: Vec<&FormatDescriptor> = candidates
            .iter()
            .copied()
            .filter(|f| {
                // an absent vcodec is not an explicit "none"
                f.vcodec.as_deref() != Some("none")
                    && f.audio_channels.is_some()
                    && !f.is_av1()
                    && !f.is_segmented()
            })
            .collect();

        let pool = if strict.is_empty() {
            candidates
                .iter()
                .copied()
                .filter(|f| f.url.is_some())
                .collect()
        } else {
            strict
        };

        first_max_by(pool, combined_rank).ok_or(SelectError::EmptyCatalog)
    }
}

fn video_rank(a: &FormatDescriptor, b: &FormatDescriptor) -> Ordering {
    a.height
        .unwrap_or(0)
        .cmp(&b.height.unwrap_or(0))
        .then_with(|| a.tbr.unwrap_or(0.0).total_cmp(&b.tbr.unwrap_or(0.0)))
}

fn audio_rank(a: &FormatDescriptor, b: &FormatDescriptor) -> Ordering {
    a.audio_channels
        .unwrap_or(0)
        .cmp(&b.audio_channels.unwrap_or(0))
        .then_with(|| a.abr.unwrap_or(0.0).total_cmp(&b.abr.unwrap_or(0.0)))
}

fn combined_rank(a: &FormatDescriptor, b: &FormatDescriptor) -> Ordering {
    video_rank(a, b).then_with(|| a.abr.unwrap_or(0.0).total_cmp(&b.abr.unwrap_or(0.0)))
}

/// First maximal element under `rank`. `Iterator::max_by` keeps the LAST
/// maximum; ties here must keep the earliest candidate in input order.
fn first_max_by<'a, I, F>(candidates: I, rank: F) -> Option<&'a FormatDescriptor>
where
    I: IntoIterator<Item = &'a FormatDescriptor>,
    F: Fn(&FormatDescriptor, &FormatDescriptor) -> Ordering,
{
    let mut best: Option<&FormatDescriptor> = None;
    for candidate in candidates {
        match best {
            Some(current) if rank(candidate, current) != Ordering::Greater => {}
            _ => best = Some(candidate),
        }
    }
    best
}
