use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::consts::{C_ZERO, RGB_CHANNEL_COUNT, Y_BLACK};
use crate::error::{Result, TbcError};

/// Colour system of the source, informational only for the mono decoder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoSystem {
    #[default]
    Pal,
    Ntsc,
    PalM,
}

/// Geometry and calibration of the TBC input, as written by the capture
/// metadata. All lines are frame lines (both fields interleaved).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoParameters {
    #[serde(default)]
    pub system: VideoSystem,
    pub field_width: i32,
    pub field_height: i32,
    pub active_video_start: i32,
    pub active_video_end: i32,
    pub first_active_frame_line: i32,
    pub last_active_frame_line: i32,
    pub black_16b_ire: i32,
    pub white_16b_ire: i32,
    /// 7.5 IRE setup with a 75% white point (NTSC convention).
    #[serde(default)]
    pub white_point_75: bool,
}

impl VideoParameters {
    /// Height of an interlaced frame built from two fields.
    pub fn frame_height(&self) -> i32 {
        self.field_height * 2 - 1
    }

    /// Number of samples in one input field.
    pub fn field_len(&self) -> usize {
        self.field_width as usize * self.field_height as usize
    }

    /// Check the bounds relationships the decoders rely on.
    pub fn validate(&self) -> Result<()> {
        if self.field_width <= 0 || self.field_height <= 0 {
            return Err(TbcError::InvalidVideoParameters(format!(
                "field size {}x{} must be positive",
                self.field_width, self.field_height
            )));
        }
        if self.active_video_start < 0
            || self.active_video_start >= self.active_video_end
            || self.active_video_end > self.field_width
        {
            return Err(TbcError::InvalidVideoParameters(format!(
                "active video {}..{} does not fit in field width {}",
                self.active_video_start, self.active_video_end, self.field_width
            )));
        }
        if self.first_active_frame_line < 0
            || self.first_active_frame_line >= self.last_active_frame_line
            || self.last_active_frame_line > self.frame_height()
        {
            return Err(TbcError::InvalidVideoParameters(format!(
                "active lines {}..{} do not fit in frame height {}",
                self.first_active_frame_line,
                self.last_active_frame_line,
                self.frame_height()
            )));
        }
        if self.black_16b_ire >= self.white_16b_ire {
            return Err(TbcError::InvalidVideoParameters(format!(
                "black level {} must be below white level {}",
                self.black_16b_ire, self.white_16b_ire
            )));
        }
        Ok(())
    }
}

/// Per-field record from the capture metadata.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldMetadata {
    pub seq_no: usize,
    pub is_first_field: bool,
    /// Field was synthesised to fill a gap (or a sequence edge).
    #[serde(default)]
    pub pad: bool,
}

/// One field of 16-bit samples, row-major, `field_width * field_height` long.
#[derive(Clone, Debug)]
pub struct InputField {
    pub metadata: FieldMetadata,
    pub data: Vec<u16>,
}

impl InputField {
    pub fn new(metadata: FieldMetadata, data: Vec<u16>) -> Self {
        Self { metadata, data }
    }

    /// A padding field filled with `level`.
    pub fn blank(params: &VideoParameters, seq_no: usize, level: u16) -> Self {
        Self {
            metadata: FieldMetadata {
                seq_no,
                is_first_field: seq_no % 2 == 0,
                pad: true,
            },
            data: vec![level; params.field_len()],
        }
    }

    /// Samples of field row `row`. Shorter than `field_width`, possibly
    /// empty, when the field ends before the row does.
    pub fn line(&self, field_width: usize, row: usize) -> &[u16] {
        let start = (row * field_width).min(self.data.len());
        let end = (start + field_width).min(self.data.len());
        &self.data[start..end]
    }
}

/// Output sample layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Three planar 16-bit planes, Y then U then V.
    #[default]
    Yuv444p16,
    /// Interleaved 16-bit R, G, B.
    Rgb48,
}

impl OutputFormat {
    pub fn is_yuv(&self) -> bool {
        matches!(self, Self::Yuv444p16)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yuv444p16 => write!(f, "YUV444P16"),
            Self::Rgb48 => write!(f, "RGB48"),
        }
    }
}

/// A decoded (or cropped) frame of 16-bit samples.
///
/// Arrays are `(rows, samples_per_row)`; for RGB a row holds
/// `width * 3` interleaved samples.
#[derive(Clone, Debug, PartialEq)]
pub enum DecodedFrame {
    Yuv {
        y: Array2<u16>,
        u: Array2<u16>,
        v: Array2<u16>,
    },
    Rgb(Array2<u16>),
}

impl DecodedFrame {
    /// A frame of `width x height` pixels filled with black.
    pub fn blank(format: OutputFormat, width: usize, height: usize) -> Self {
        match format {
            OutputFormat::Yuv444p16 => Self::Yuv {
                y: Array2::from_elem((height, width), Y_BLACK),
                u: Array2::from_elem((height, width), C_ZERO),
                v: Array2::from_elem((height, width), C_ZERO),
            },
            OutputFormat::Rgb48 => {
                Self::Rgb(Array2::zeros((height, width * RGB_CHANNEL_COUNT)))
            }
        }
    }

    pub fn format(&self) -> OutputFormat {
        match self {
            Self::Yuv { .. } => OutputFormat::Yuv444p16,
            Self::Rgb(_) => OutputFormat::Rgb48,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        match self {
            Self::Yuv { y, .. } => y.ncols(),
            Self::Rgb(rgb) => rgb.ncols() / RGB_CHANNEL_COUNT,
        }
    }

    pub fn height(&self) -> usize {
        match self {
            Self::Yuv { y, .. } => y.nrows(),
            Self::Rgb(rgb) => rgb.nrows(),
        }
    }

    /// Sample planes in output order (Y, U, V or the single RGB plane).
    pub fn planes(&self) -> Vec<&Array2<u16>> {
        match self {
            Self::Yuv { y, u, v } => vec![y, u, v],
            Self::Rgb(rgb) => vec![rgb],
        }
    }
}
