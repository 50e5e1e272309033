// End-to-end selection over realistic extractor JSON dumps

use stream_picker::{
    candidate_formats, ExtractionResult, SelectError, Selection, SelectionPolicy, StreamSelector,
};

fn parse(json: &str) -> ExtractionResult {
    ExtractionResult::from_json(json).expect("fixture must parse")
}

/// A trimmed multi-format dump: video-only ladder (including an AV1 rung and
/// an HLS rung), audio-only entries, and one progressive format.
fn multi_format_dump() -> ExtractionResult {
    parse(
        r#"{
        "id": "abc123",
        "title": "Sample item",
        "formats": [
            {"format_id": "hls-1080", "url": "http://cdn/hls1080.m3u8",
             "vcodec": "avc1.640028", "acodec": "none", "height": 1080,
             "tbr": 4800.0, "protocol": "m3u8_native"},
            {"format_id": "248", "url": "http://cdn/vp9-1080",
             "vcodec": "vp09.00.40.08", "acodec": "none", "height": 1080,
             "tbr": 2342.5, "protocol": "https"},
            {"format_id": "401", "url": "http://cdn/av1-2160",
             "vcodec": "av01.0.12M.08", "acodec": "none", "height": 2160,
             "tbr": 17557.1, "protocol": "https"},
            {"format_id": "137", "url": "http://cdn/avc-1080",
             "vcodec": "avc1.640028", "acodec": "none", "height": 1080,
             "tbr": 4429.2, "protocol": "https"},
            {"format_id": "18", "url": "http://cdn/progressive-360",
             "vcodec": "avc1.42001E", "acodec": "mp4a.40.2", "height": 360,
             "tbr": 742.7, "audio_channels": 2, "protocol": "https"},
            {"format_id": "251", "url": "http://cdn/opus",
             "vcodec": "none", "acodec": "opus", "abr": 129.4,
             "audio_channels": 2, "protocol": "https"},
            {"format_id": "258", "url": "http://cdn/aac-surround",
             "vcodec": "none", "acodec": "mp4a.40.2", "abr": 384.0,
             "audio_channels": 6, "protocol": "https"}
        ]
    }"#,
    )
}

#[test]
fn adaptive_picks_highest_playable_video_and_richest_audio() {
    let info = multi_format_dump();
    let selection = StreamSelector::select(&info, SelectionPolicy::Adaptive).unwrap();

    // AV1 (2160p) and HLS (1080p) are unusable; avc-1080 beats vp9-1080 on
    // bitrate. Six audio channels beat stereo regardless of bitrate.
    assert_eq!(
        selection,
        Selection::Adaptive {
            video_url: Some("http://cdn/avc-1080".to_string()),
            audio_url: Some("http://cdn/aac-surround".to_string()),
        }
    );
}

#[test]
fn combined_picks_the_progressive_format() {
    let info = multi_format_dump();
    let selection = StreamSelector::select(&info, SelectionPolicy::Combined).unwrap();

    // Only format 18 carries both tracks (audio_channels present).
    assert_eq!(
        selection,
        Selection::Combined {
            url: "http://cdn/progressive-360".to_string(),
        }
    );
}

#[test]
fn requested_formats_round_trip_verbatim() {
    let info = parse(
        r#"{
        "id": "abc123",
        "requested_formats": [
            {"format_id": "V", "url": "http://cdn/v", "vcodec": "avc1",
             "acodec": "none", "height": 1080, "tbr": 4000.0},
            {"format_id": "A", "url": "http://cdn/a", "vcodec": "none",
             "acodec": "opus", "abr": 128.0, "audio_channels": 2}
        ],
        "formats": [
            {"format_id": "other", "url": "http://cdn/other", "vcodec": "avc1"}
        ]
    }"#,
    );

    let candidates = candidate_formats(&info);
    let ids: Vec<_> = candidates
        .iter()
        .map(|f| f.format_id.as_deref().unwrap())
        .collect();
    assert_eq!(ids, ["V", "A"]);

    // The pre-selected pair drives adaptive selection directly.
    let selection = StreamSelector::select(&info, SelectionPolicy::Adaptive).unwrap();
    assert_eq!(
        selection,
        Selection::Adaptive {
            video_url: Some("http://cdn/v".to_string()),
            audio_url: Some("http://cdn/a".to_string()),
        }
    );
}

#[test]
fn playlist_skips_null_entries_and_resolves_the_first_real_one() {
    let info = parse(
        r#"{
        "entries": [
            null,
            {"url": "http://cdn/X",
             "formats": [
                {"url": "http://cdn/Y", "vcodec": "h264",
                 "audio_channels": 2, "height": 720, "tbr": 1500.0}
             ]}
        ]
    }"#,
    );

    let candidates = candidate_formats(&info);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].url.as_deref(), Some("http://cdn/Y"));

    let selection = StreamSelector::select(&info, SelectionPolicy::Combined).unwrap();
    assert_eq!(
        selection,
        Selection::Combined {
            url: "http://cdn/Y".to_string(),
        }
    );
}

#[test]
fn single_format_object_is_its_own_catalog() {
    let info = parse(
        r#"{"id": "solo", "url": "http://cdn/direct",
            "vcodec": "avc1.4d401f", "audio_channels": 2,
            "height": 480, "tbr": 900.0}"#,
    );

    let candidates = candidate_formats(&info);
    assert_eq!(candidates.len(), 1);

    let selection = StreamSelector::select(&info, SelectionPolicy::Combined).unwrap();
    assert_eq!(
        selection,
        Selection::Combined {
            url: "http://cdn/direct".to_string(),
        }
    );
}

#[test]
fn empty_dump_errs_in_combined_mode_only() {
    let info = parse(r#"{"id": "empty"}"#);

    let err = StreamSelector::select(&info, SelectionPolicy::Combined).unwrap_err();
    assert_eq!(err, SelectError::EmptyCatalog);

    // Adaptive mode degrades to soft absence instead.
    let selection = StreamSelector::select(&info, SelectionPolicy::Adaptive).unwrap();
    assert_eq!(
        selection,
        Selection::Adaptive {
            video_url: None,
            audio_url: None,
        }
    );
}

#[test]
fn sparse_audio_metadata_still_yields_an_audio_url() {
    // No channels and no abr anywhere: the usability check fails, the
    // relaxed fallback still returns the first audio-only entry.
    let info = parse(
        r#"{
        "formats": [
            {"format_id": "v", "url": "http://cdn/v", "vcodec": "avc1",
             "acodec": "none", "height": 720, "tbr": 1500.0},
            {"format_id": "a", "url": "http://cdn/a", "vcodec": "none",
             "acodec": "mp4a.40.2"}
        ]
    }"#,
    );

    let selection = StreamSelector::select(&info, SelectionPolicy::Adaptive).unwrap();
    assert_eq!(
        selection,
        Selection::Adaptive {
            video_url: Some("http://cdn/v".to_string()),
            audio_url: Some("http://cdn/a".to_string()),
        }
    );
}
