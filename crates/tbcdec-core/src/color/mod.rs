pub mod rgb;
pub mod yiq;
pub mod yuv;

pub use rgb::RgbConverter;
pub use yiq::Yiq;
pub use yuv::YuvConverter;

use crate::frame::OutputFormat;

/// Colorimetry stage for one output format.
#[derive(Clone, Debug)]
pub enum LineConverter {
    Yuv(YuvConverter),
    Rgb(RgbConverter),
}

impl LineConverter {
    pub fn new(
        format: OutputFormat,
        white_ire_level: f64,
        black_ire_level: f64,
        white_point_75: bool,
        chroma_gain: f64,
    ) -> Self {
        match format {
            OutputFormat::Yuv444p16 => Self::Yuv(YuvConverter::new(
                white_ire_level,
                black_ire_level,
                white_point_75,
                chroma_gain,
            )),
            OutputFormat::Rgb48 => Self::Rgb(RgbConverter::new(
                white_ire_level,
                black_ire_level,
                white_point_75,
                chroma_gain,
            )),
        }
    }
}
