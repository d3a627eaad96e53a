use num_traits::clamp;

use crate::consts::{RGB_CHANNEL_COUNT, SAMPLE_MAX, WHITE_POINT_75_GAIN, YIQ_TO_RGB};

use super::yiq::Yiq;

/// Converts YIQ samples to full-range 16-bit RGB.
///
/// Black maps to 0 and white to 65535 on every channel.
#[derive(Clone, Debug)]
pub struct RgbConverter {
    black_ire_level: f64,
    y_scale: f64,
    iq_scale: f64,
}

impl RgbConverter {
    pub fn new(
        white_ire_level: f64,
        black_ire_level: f64,
        white_point_75: bool,
        chroma_gain: f64,
    ) -> Self {
        let mut y_scale = SAMPLE_MAX / (white_ire_level - black_ire_level);
        if white_point_75 {
            y_scale *= WHITE_POINT_75_GAIN;
        }
        let iq_scale = y_scale * chroma_gain;

        Self {
            black_ire_level,
            y_scale,
            iq_scale,
        }
    }

    /// Convert one sample to `[R, G, B]`.
    pub fn convert(&self, yiq: Yiq) -> [u16; 3] {
        let y = (yiq.y - self.black_ire_level) * self.y_scale;
        let i = yiq.i * self.iq_scale;
        let q = yiq.q * self.iq_scale;

        YIQ_TO_RGB.map(|[ky, ki, kq]| {
            let value = ky * y + ki * i + kq * q;
            clamp(value, 0.0, SAMPLE_MAX) as u16
        })
    }

    /// Convert a line of samples into an interleaved RGB row.
    ///
    /// `out` holds three samples per pixel.
    pub fn convert_line(&self, line: &[Yiq], out: &mut [u16]) {
        for (&yiq, px) in line.iter().zip(out.chunks_exact_mut(RGB_CHANNEL_COUNT)) {
            px.copy_from_slice(&self.convert(yiq));
        }
    }
}
