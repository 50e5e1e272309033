// Data model for the extractor's format catalog
//
// Mirrors the JSON the extraction tool dumps for one media item:
// - FormatDescriptor: one concretely playable encoding
// - ExtractionResult: the root object (playlist, multi-format, or a single
//   format with its url at the top level)
//
// All fields are optional; consumers state their own defaults (0 for ranking
// numbers). Nothing here is mutated after deserialization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Codec prefix the downstream player cannot handle
const AV1_PREFIX: &str = "av01";

/// One candidate encoded stream with codec/protocol/quality metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatDescriptor {
    /// Direct media URL; a descriptor without one is never selectable
    pub url: Option<String>,
    /// Format ID assigned by the extractor (e.g., "137", "140")
    pub format_id: Option<String>,
    /// File extension (mp4, webm, m4a)
    pub ext: Option<String>,
    /// Video codec (avc1, vp9, av01) or "none" for audio-only entries
    pub vcodec: Option<String>,
    /// Audio codec (mp4a, opus) or "none" for video-only entries
    pub acodec: Option<String>,
    /// Number of audio channels
    pub audio_channels: Option<u32>,
    /// Average audio bitrate in kbps
    pub abr: Option<f32>,
    /// Total bitrate in kbps
    pub tbr: Option<f32>,
    /// Video height in pixels
    pub height: Option<u32>,
    /// Video width in pixels
    pub width: Option<u32>,
    /// Frames per second
    pub fps: Option<f32>,
    /// Transport/container identifier (https, m3u8, m3u8_native, ...)
    pub protocol: Option<String>,
    /// Format note (e.g., "1080p", "medium")
    pub format_note: Option<String>,
    /// File size in bytes
    pub filesize: Option<u64>,
    /// Approximate file size (when exact is unknown)
    pub filesize_approx: Option<u64>,
}

impl FormatDescriptor {
    /// Check if the descriptor carries a video track
    pub fn has_video_track(&self) -> bool {
        self.vcodec.as_ref().map_or(false, |v| v != "none")
    }

    /// Check if the video codec belongs to the AV1 family
    pub fn is_av1(&self) -> bool {
        self.vcodec
            .as_ref()
            .map_or(false, |v| v.starts_with(AV1_PREFIX))
    }

    /// Check if the transport is a segmented/playlist-style protocol.
    /// Both manifest markers are treated identically.
    pub fn is_segmented(&self) -> bool {
        self.protocol
            .as_ref()
            .map_or(false, |p| p == "m3u8" || p == "m3u8_native")
    }

    /// Acceptable as the video half of an adaptive pair: has a video track,
    /// not AV1, not delivered over a segmented transport.
    pub fn is_usable_video(&self) -> bool {
        self.has_video_track() && !self.is_av1() && !self.is_segmented()
    }

    /// Acceptable as the audio half of an adaptive pair: no video track, not
    /// segmented, and exposes at least one audio signal (channel count or
    /// average bitrate).
    pub fn is_usable_audio(&self) -> bool {
        !self.has_video_track()
            && !self.is_segmented()
            && (self.audio_channels.is_some() || self.abr.is_some())
    }
}

impl fmt::Display for FormatDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}/{}]",
            self.format_id.as_deref().unwrap_or("?"),
            self.vcodec.as_deref().unwrap_or("?"),
            self.acodec.as_deref().unwrap_or("?"),
        )?;
        if let Some(h) = self.height {
            write!(f, " {}p", h)?;
        }
        if let Some(proto) = &self.protocol {
            write!(f, " via {}", proto)?;
        }
        Ok(())
    }
}

/// Root object returned by the extractor for one source.
///
/// Three shapes reach us: a playlist with nested entries, a multi-format item
/// with `formats` and/or a pre-selected `requested_formats` pair, or a single
/// format whose url and codec metadata sit directly at the top level. The
/// flattened descriptor captures that last shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Media item ID, when the extractor provides one
    pub id: Option<String>,
    /// Title, for diagnostics only
    pub title: Option<String>,
    /// Playlist entries; individual entries may be null
    pub entries: Option<Vec<Option<ExtractionResult>>>,
    /// Extractor-level pre-selection (e.g., best video + best audio),
    /// takes precedence over `formats`
    pub requested_formats: Option<Vec<FormatDescriptor>>,
    /// All formats the extractor found
    pub formats: Option<Vec<FormatDescriptor>>,
    /// Single-format shape: the root object doubles as a descriptor
    #[serde(flatten)]
    pub descriptor: FormatDescriptor,
}

impl ExtractionResult {
    /// Parse an extraction result from the tool's JSON dump
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(vcodec: &str, protocol: Option<&str>) -> FormatDescriptor {
        FormatDescriptor {
            url: Some("http://v".to_string()),
            vcodec: Some(vcodec.to_string()),
            protocol: protocol.map(|p| p.to_string()),
            ..Default::default()
        }
    }

    fn audio(channels: Option<u32>, abr: Option<f32>) -> FormatDescriptor {
        FormatDescriptor {
            url: Some("http://a".to_string()),
            vcodec: Some("none".to_string()),
            audio_channels: channels,
            abr,
            ..Default::default()
        }
    }

    #[test]
    fn video_requires_a_real_codec() {
        assert!(video("avc1.4d401f", None).is_usable_video());
        assert!(!video("none", None).is_usable_video());

        let absent = FormatDescriptor {
            url: Some("http://v".to_string()),
            ..Default::default()
        };
        assert!(!absent.is_usable_video());
    }

    #[test]
    fn av1_family_is_rejected_for_video() {
        assert!(!video("av01.0.08M.08", None).is_usable_video());
        // vp9 and avc1 stay eligible
        assert!(video("vp9", None).is_usable_video());
    }

    #[test]
    fn segmented_transports_are_rejected_for_both_roles() {
        assert!(!video("avc1", Some("m3u8")).is_usable_video());
        assert!(!video("avc1", Some("m3u8_native")).is_usable_video());
        assert!(video("avc1", Some("https")).is_usable_video());

        let mut a = audio(Some(2), None);
        a.protocol = Some("m3u8_native".to_string());
        assert!(!a.is_usable_audio());
    }

    #[test]
    fn audio_needs_a_channel_or_bitrate_signal() {
        assert!(audio(Some(2), None).is_usable_audio());
        assert!(audio(None, Some(128.0)).is_usable_audio());
        assert!(!audio(None, None).is_usable_audio());
    }

    #[test]
    fn audio_rejects_entries_with_a_video_track() {
        let mut f = video("avc1", None);
        f.audio_channels = Some(2);
        assert!(!f.is_usable_audio());

        // absent vcodec counts as "no video track" for the audio role
        let bare = FormatDescriptor {
            url: Some("http://a".to_string()),
            abr: Some(96.0),
            ..Default::default()
        };
        assert!(bare.is_usable_audio());
    }

    #[test]
    fn usable_video_and_usable_audio_are_exclusive() {
        let candidates = [
            video("avc1", None),
            video("av01.0", None),
            audio(Some(2), Some(128.0)),
            audio(None, None),
        ];
        for f in &candidates {
            assert!(!(f.is_usable_video() && f.is_usable_audio()));
        }
    }

    #[test]
    fn descriptor_parses_from_extractor_json() {
        let f: FormatDescriptor = serde_json::from_str(
            r#"{"url":"http://x","format_id":"137","vcodec":"avc1.640028",
                "acodec":"none","height":1080,"tbr":4400.5,"protocol":"https",
                "unknown_key":true}"#,
        )
        .unwrap();
        assert_eq!(f.height, Some(1080));
        assert_eq!(f.format_id.as_deref(), Some("137"));
        assert!(f.is_usable_video());
    }
}
