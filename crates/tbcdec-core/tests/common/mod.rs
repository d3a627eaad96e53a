#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use tbcdec_core::decoder::{run_decoder, Configuration, Decoder, MonoDecoder};
use tbcdec_core::frame::{DecodedFrame, FieldMetadata, InputField, VideoParameters, VideoSystem};
use tbcdec_core::io::MetadataFile;
use tbcdec_core::pool::MemoryPool;

pub const BLACK: i32 = 16384;
pub const WHITE: i32 = 54016;

/// A small field: 64 samples wide, 40 rows (79-line frames). The active
/// area is already 48 x 64, so the geometry is left as is.
pub fn small_params() -> VideoParameters {
    VideoParameters {
        system: VideoSystem::Pal,
        field_width: 64,
        field_height: 40,
        active_video_start: 8,
        active_video_end: 56,
        first_active_frame_line: 8,
        last_active_frame_line: 72,
        black_16b_ire: BLACK,
        white_16b_ire: WHITE,
        white_point_75: false,
    }
}

/// Typical NTSC capture geometry: 720 x 480 active, already aligned.
pub fn ntsc_params() -> VideoParameters {
    VideoParameters {
        system: VideoSystem::Ntsc,
        field_width: 910,
        field_height: 263,
        active_video_start: 120,
        active_video_end: 840,
        first_active_frame_line: 44,
        last_active_frame_line: 524,
        black_16b_ire: 15360,
        white_16b_ire: 51200,
        white_point_75: true,
    }
}

/// Field filled with a constant level.
pub fn constant_field(params: &VideoParameters, seq_no: usize, level: u16) -> InputField {
    field_from_fn(params, seq_no, |_, _| level)
}

/// Field whose sample at `(row, col)` is `f(row, col)`.
pub fn field_from_fn(
    params: &VideoParameters,
    seq_no: usize,
    f: impl Fn(usize, usize) -> u16,
) -> InputField {
    let width = params.field_width as usize;
    let height = params.field_height as usize;
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push(f(row, col));
        }
    }
    InputField::new(
        FieldMetadata {
            seq_no,
            is_first_field: seq_no % 2 == 0,
            pad: false,
        },
        data,
    )
}

/// `frames` field pairs, frame `n` filled with `level_for(n)`.
pub fn frame_sequence(
    params: &VideoParameters,
    frames: usize,
    level_for: impl Fn(usize) -> u16,
) -> Vec<InputField> {
    (0..frames * 2)
        .map(|n| constant_field(params, n, level_for(n / 2)))
        .collect()
}

/// Write fields as a raw little-endian `.tbc` file.
pub fn write_tbc(path: &Path, fields: &[InputField]) {
    let mut f = std::fs::File::create(path).expect("create tbc file");
    for field in fields {
        for &sample in &field.data {
            f.write_all(&sample.to_le_bytes()).expect("write sample");
        }
    }
    f.flush().expect("flush");
}

/// Write a metadata file for `params` next to `tbc_path` (`<tbc>.toml`).
pub fn write_metadata(tbc_path: &Path, params: &VideoParameters) {
    let metadata = MetadataFile {
        video: params.clone(),
        fields: Vec::new(),
    };
    let contents = metadata.to_toml_string().expect("serialize metadata");
    let mut path = tbc_path.as_os_str().to_owned();
    path.push(".toml");
    std::fs::write(path, contents).expect("write metadata");
}

/// Decode a raw output file back into `u16` samples.
pub fn read_u16_le(path: &Path) -> Vec<u16> {
    let bytes = std::fs::read(path).expect("read output");
    bytes
        .chunks_exact(2)
        .map(|b| u16::from_le_bytes([b[0], b[1]]))
        .collect()
}

/// Run the mono decoder over in-memory fields and return the ordered frames.
pub fn decode_in_memory(
    config: Configuration,
    params: &VideoParameters,
    fields: Vec<InputField>,
    threads: usize,
    batch_frames: usize,
) -> Vec<DecodedFrame> {
    let mut decoder = MonoDecoder::new(config);
    decoder.configure(params).expect("configure");

    let pool = Arc::new(MemoryPool::new(params.clone(), fields, batch_frames));
    let summary = run_decoder(&decoder, pool.clone(), threads).expect("run decoder");
    assert!(!summary.aborted);

    match Arc::try_unwrap(pool) {
        Ok(pool) => pool.into_frames(),
        Err(_) => panic!("pool still shared after the run"),
    }
}
