use super::bank::{filter, FilterRole};
use super::digital::{DigitalFilter, FilterState};

/// Luma noise reduction ("coring").
///
/// The `nr` high-pass isolates the fine detail of a line; the part of it
/// below `limit` is treated as noise and subtracted, larger excursions are
/// clipped to `limit` before subtraction so edges survive.
#[derive(Clone, Debug)]
pub struct LumaNoiseReducer {
    highpass: &'static DigitalFilter,
    delay: usize,
    limit: f64,
}

impl LumaNoiseReducer {
    /// `level_ire`: coring threshold in IRE; `ire_span`: 16-bit distance
    /// from 0 to 100 IRE.
    pub fn new(level_ire: f64, ire_span: f64) -> Self {
        let highpass = filter(FilterRole::Nr);
        Self {
            highpass,
            delay: highpass.b().len() / 2,
            limit: level_ire * ire_span / 100.0,
        }
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    /// Apply to one line of luma samples in place.
    pub fn apply(&self, line: &mut [f64]) {
        let (Some(&first), Some(&last)) = (line.first(), line.last()) else {
            return;
        };

        // Extend by the filter delay so every sample has a centred response.
        let mut extended = Vec::with_capacity(line.len() + self.delay);
        extended.extend_from_slice(line);
        extended.resize(line.len() + self.delay, last);

        let mut state = FilterState::steady_state(self.highpass, first);
        let mut highpass = vec![0.0; extended.len()];
        self.highpass.filter_with_state(&mut state, &extended, &mut highpass);

        for (sample, &hp) in line.iter_mut().zip(&highpass[self.delay..]) {
            let cored = hp.clamp(-self.limit, self.limit);
            *sample -= cored;
        }
    }
}
