use num_traits::clamp;

use crate::consts::{
    BT601_KB, BT601_KR, COS33, C_ZERO, POYNTON_KB, POYNTON_KR, SAMPLE_MAX, SIN33,
    WHITE_POINT_75_GAIN, Y_BLACK, Y_RANGE,
};

use super::yiq::Yiq;

/// Converts YIQ samples to 16-bit studio-range Y'CbCr.
///
/// Black maps to `16*256`, white to `16*256 + 219*257`, zero chroma to
/// `128*256`. The arithmetic order is fixed: outputs are compared
/// sample-for-sample against reference decodes, and reordering changes the
/// rounding at the truncating cast.
#[derive(Clone, Debug)]
pub struct YuvConverter {
    black_ire_level: f64,
    y_scale: f64,
    iq_scale: f64,
    cb_scale: f64,
    cr_scale: f64,
}

impl YuvConverter {
    /// `white_ire_level`: 16-bit level of 100 IRE.
    /// `black_ire_level`: 16-bit level of 0 or 7.5 IRE.
    /// `white_point_75`: source uses a 75% white point.
    /// `chroma_gain`: gain applied to I and Q.
    pub fn new(
        white_ire_level: f64,
        black_ire_level: f64,
        white_point_75: bool,
        chroma_gain: f64,
    ) -> Self {
        let mut y_scale = Y_RANGE / (white_ire_level - black_ire_level);
        if white_point_75 {
            // 100 IRE lands 25% above the nominal white point; chroma is unaffected.
            y_scale *= WHITE_POINT_75_GAIN;
        }

        // Evaluated left to right: (gain * 229) * 255, not gain * (229 * 255).
        let iq_scale =
            chroma_gain * 229.0 * 255.0 / (white_ire_level - black_ire_level) / SAMPLE_MAX;

        // Poynton, Eq 25.5 & 28.1
        let cb_scale = 112.0 * 256.0 / (BT601_KB * POYNTON_KB);
        let cr_scale = 112.0 * 256.0 / (BT601_KR * POYNTON_KR);

        Self {
            black_ire_level,
            y_scale,
            iq_scale,
            cb_scale,
            cr_scale,
        }
    }

    /// Convert one sample to `(Y, Cb, Cr)`.
    pub fn convert(&self, yiq: Yiq) -> (u16, u16, u16) {
        let y = (yiq.y - self.black_ire_level) * self.y_scale + f64::from(Y_BLACK);
        let y = clamp(y, 0.0, SAMPLE_MAX);

        let i = yiq.i * self.iq_scale;
        let q = yiq.q * self.iq_scale;

        // Rotate 33 degrees onto the U/V axes
        let u = -SIN33 * i + COS33 * q;
        let v = COS33 * i + SIN33 * q;

        let cb = clamp(u * self.cb_scale + f64::from(C_ZERO), 0.0, SAMPLE_MAX);
        let cr = clamp(v * self.cr_scale + f64::from(C_ZERO), 0.0, SAMPLE_MAX);

        (y as u16, cb as u16, cr as u16)
    }

    /// Convert a line of samples into three planar output rows.
    ///
    /// Converts `min(line.len(), out_*.len())` samples.
    pub fn convert_line(
        &self,
        line: &[Yiq],
        out_y: &mut [u16],
        out_u: &mut [u16],
        out_v: &mut [u16],
    ) {
        let outputs = out_y.iter_mut().zip(out_u.iter_mut()).zip(out_v.iter_mut());
        for (&yiq, ((y, u), v)) in line.iter().zip(outputs) {
            (*y, *u, *v) = self.convert(yiq);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_maps_to_top_of_luma_range() {
        let conv = YuvConverter::new(54016.0, 16384.0, false, 1.0);
        let (y, cb, cr) = conv.convert(Yiq::mono(54016.0));
        assert!((i32::from(y) - (16 * 256 + 219 * 257)).abs() <= 1, "y = {y}");
        assert_eq!(cb, C_ZERO);
        assert_eq!(cr, C_ZERO);
    }

    #[test]
    fn test_white_point_75_boosts_luma_only() {
        let normal = YuvConverter::new(54016.0, 16384.0, false, 1.0);
        let boosted = YuvConverter::new(54016.0, 16384.0, true, 1.0);
        assert!((boosted.y_scale / normal.y_scale - 1.25).abs() < 1e-12);
        assert_eq!(boosted.iq_scale, normal.iq_scale);
    }

    #[test]
    fn test_chroma_gain_scales_in_source_order() {
        let conv = YuvConverter::new(54016.0, 16384.0, false, 0.7);
        let expected: f64 = ((0.7 * 229.0) * 255.0) / (54016.0 - 16384.0) / 65535.0;
        assert_eq!(conv.iq_scale.to_bits(), expected.to_bits());
    }
}
