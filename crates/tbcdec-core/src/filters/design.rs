use std::f64::consts::FRAC_PI_2;

use crate::error::{Result, TbcError};

use super::digital::DigitalFilter;

/// First-order FM de-emphasis filter for sample rate `fs` (Hz) and time
/// constant `tau` (seconds), designed with the bilinear transform.
///
/// The analogue prototype is `H(s) = w / (s + w)` with `w = 1 / tau`,
/// prewarped so the digital corner lands at `1 / tau`. Gain at DC is 1.
pub fn fm_deemphasis(fs: f64, tau: f64) -> Result<DigitalFilter> {
    if !(fs > 0.0) || !(tau > 0.0) {
        return Err(TbcError::InvalidFilter(format!(
            "de-emphasis needs positive fs and tau, got fs={fs}, tau={tau}"
        )));
    }

    let w_c = 1.0 / tau;
    let half_angle = w_c / (2.0 * fs);
    if half_angle >= FRAC_PI_2 {
        return Err(TbcError::InvalidFilter(format!(
            "de-emphasis corner {:.0} Hz is above Nyquist for fs={fs}",
            w_c / std::f64::consts::TAU
        )));
    }

    // Prewarped analogue corner
    let w_ca = 2.0 * fs * half_angle.tan();

    let k = -w_ca / (2.0 * fs);
    let z1 = -1.0;
    let p1 = (1.0 + k) / (1.0 - k);
    let b0 = -k / (1.0 - k);

    DigitalFilter::new(vec![b0, b0 * -z1], vec![1.0, -p1])
}
