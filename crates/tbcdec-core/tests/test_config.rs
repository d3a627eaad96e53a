use std::path::PathBuf;

use tbcdec_core::consts::DEFAULT_BATCH_FRAMES;
use tbcdec_core::error::TbcError;
use tbcdec_core::frame::{OutputFormat, VideoSystem};
use tbcdec_core::io::MetadataFile;
use tbcdec_core::pipeline::{DecodeConfig, DecoderKind, PipelineStage};

// ---------------------------------------------------------------------------
// DecodeConfig
// ---------------------------------------------------------------------------

#[test]
fn test_minimal_config_uses_defaults() {
    let config = DecodeConfig::from_toml_str(
        r#"
        input = "capture.tbc"
        output = "capture.yuv"
        "#,
    )
    .unwrap();

    assert_eq!(config.input, PathBuf::from("capture.tbc"));
    assert_eq!(config.decoder, DecoderKind::Mono);
    assert_eq!(config.output_format, OutputFormat::Yuv444p16);
    assert_eq!(config.chroma_gain, 1.0);
    assert_eq!(config.luma_nr_level, 0.0);
    assert_eq!(config.batch_frames, DEFAULT_BATCH_FRAMES);
    assert_eq!(config.start_frame, 0);
    assert_eq!(config.length, None);
    assert_eq!(config.threads, None);
    assert!(config.thread_count() >= 1);
}

#[test]
fn test_full_config() {
    let config = DecodeConfig::from_toml_str(
        r#"
        input = "in.tbc"
        output = "out.rgb"
        metadata = "in.meta.toml"
        decoder = "mono"
        output_format = "rgb48"
        chroma_gain = 1.5
        luma_nr_level = 1.0
        threads = 3
        batch_frames = 4
        start_frame = 10
        length = 20
        "#,
    )
    .unwrap();

    assert_eq!(config.output_format, OutputFormat::Rgb48);
    assert_eq!(config.metadata_path(), PathBuf::from("in.meta.toml"));
    assert_eq!(config.thread_count(), 3);
    assert_eq!(config.batch_frames, 4);
    assert_eq!(config.start_frame, 10);
    assert_eq!(config.length, Some(20));
}

#[test]
fn test_metadata_path_defaults_next_to_input() {
    let config = DecodeConfig::new("/data/tape1.tbc", "/data/tape1.yuv");
    assert_eq!(config.metadata_path(), PathBuf::from("/data/tape1.tbc.toml"));
}

#[test]
fn test_invalid_values_are_rejected() {
    let zero_batch = r#"
        input = "a.tbc"
        output = "a.yuv"
        batch_frames = 0
    "#;
    assert!(matches!(
        DecodeConfig::from_toml_str(zero_batch),
        Err(TbcError::InvalidConfig(_))
    ));

    let negative_gain = r#"
        input = "a.tbc"
        output = "a.yuv"
        chroma_gain = -1.0
    "#;
    assert!(DecodeConfig::from_toml_str(negative_gain).is_err());

    let unknown_format = r#"
        input = "a.tbc"
        output = "a.yuv"
        output_format = "rgb24"
    "#;
    assert!(DecodeConfig::from_toml_str(unknown_format).is_err());

    let mut config = DecodeConfig::new("a.tbc", "a.yuv");
    config.threads = Some(0);
    assert!(config.validate().is_err());
}

#[test]
fn test_display_names() {
    assert_eq!(DecoderKind::Mono.to_string(), "Mono");
    assert_eq!(OutputFormat::Yuv444p16.to_string(), "YUV444P16");
    assert_eq!(OutputFormat::Rgb48.to_string(), "RGB48");
    assert_eq!(PipelineStage::Decoding.to_string(), "Decoding frames");
}

// ---------------------------------------------------------------------------
// Metadata
// ---------------------------------------------------------------------------

const NTSC_METADATA: &str = r#"
[video]
system = "ntsc"
field_width = 910
field_height = 263
active_video_start = 134
active_video_end = 894
first_active_frame_line = 40
last_active_frame_line = 525
black_16b_ire = 15360
white_16b_ire = 51200
white_point_75 = true

[[fields]]
seq_no = 1
is_first_field = true

[[fields]]
seq_no = 2
is_first_field = false
pad = true
"#;

#[test]
fn test_parse_metadata() {
    let metadata = MetadataFile::parse(NTSC_METADATA).unwrap();
    assert_eq!(metadata.video.system, VideoSystem::Ntsc);
    assert_eq!(metadata.video.field_width, 910);
    assert_eq!(metadata.video.frame_height(), 525);
    assert!(metadata.video.white_point_75);
    assert_eq!(metadata.fields.len(), 2);
    assert!(!metadata.fields[0].pad);
    assert!(metadata.fields[1].pad);
}

#[test]
fn test_metadata_survives_serialisation() {
    let metadata = MetadataFile::parse(NTSC_METADATA).unwrap();
    let text = metadata.to_toml_string().unwrap();
    assert_eq!(MetadataFile::parse(&text).unwrap(), metadata);
}

#[test]
fn test_bad_metadata_is_reported() {
    assert!(matches!(
        MetadataFile::parse("[video]\nfield_width = \"wide\""),
        Err(TbcError::Metadata(_))
    ));

    let inconsistent = NTSC_METADATA.replace(
        "last_active_frame_line = 525",
        "last_active_frame_line = 600",
    );
    assert!(matches!(
        MetadataFile::parse(&inconsistent),
        Err(TbcError::InvalidVideoParameters(_))
    ));
}
