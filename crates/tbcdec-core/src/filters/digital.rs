use num_complex::Complex;
use rustfft::FftPlanner;

use crate::error::{Result, TbcError};

/// A linear time-invariant filter given by its transfer-function
/// coefficients: feed-forward `b` and feedback `a`, with `a[0] == 1`.
///
/// The filter itself holds no history. Evaluate it with [`filter`] for a
/// zero-history segment, or carry a [`FilterState`] across calls.
///
/// [`filter`]: DigitalFilter::filter
#[derive(Clone, Debug, PartialEq)]
pub struct DigitalFilter {
    b: Vec<f64>,
    a: Vec<f64>,
}

impl DigitalFilter {
    /// Build a filter, normalizing by `a[0]` when it is not 1.
    pub fn new(b: Vec<f64>, a: Vec<f64>) -> Result<Self> {
        if b.is_empty() {
            return Err(TbcError::InvalidFilter(
                "feed-forward coefficients must not be empty".into(),
            ));
        }
        let a0 = match a.first() {
            Some(&a0) => a0,
            None => {
                return Err(TbcError::InvalidFilter(
                    "feedback coefficients must not be empty".into(),
                ))
            }
        };
        if a0 == 0.0 || !a0.is_finite() {
            return Err(TbcError::InvalidFilter(format!(
                "leading feedback coefficient must be finite and non-zero, got {a0}"
            )));
        }
        if b.iter().chain(a.iter()).any(|c| !c.is_finite()) {
            return Err(TbcError::InvalidFilter("coefficients must be finite".into()));
        }

        if a0 == 1.0 {
            Ok(Self { b, a })
        } else {
            Ok(Self {
                b: b.iter().map(|c| c / a0).collect(),
                a: a.iter().map(|c| c / a0).collect(),
            })
        }
    }

    /// FIR filter (`a = [1]`).
    pub fn fir(b: Vec<f64>) -> Result<Self> {
        Self::new(b, vec![1.0])
    }

    /// Tables that are known to be normalized already.
    pub(crate) fn from_table(b: &[f64], a: &[f64]) -> Self {
        Self {
            b: b.to_vec(),
            a: a.to_vec(),
        }
    }

    pub fn b(&self) -> &[f64] {
        &self.b
    }

    pub fn a(&self) -> &[f64] {
        &self.a
    }

    pub fn is_fir(&self) -> bool {
        self.a.len() == 1
    }

    /// Number of past samples the difference equation looks at.
    pub fn order(&self) -> usize {
        self.b.len().max(self.a.len()) - 1
    }

    /// Delay in samples of a linear-phase FIR filter, `(taps - 1) / 2`.
    /// `None` for IIR filters and asymmetric kernels.
    pub fn group_delay(&self) -> Option<f64> {
        if !self.is_fir() {
            return None;
        }
        let n = self.b.len();
        let symmetric = (0..n / 2).all(|k| {
            let (lo, hi) = (self.b[k], self.b[n - 1 - k]);
            let tol = 1e-9 * lo.abs().max(hi.abs()).max(1e-12);
            (lo - hi).abs() <= tol || (lo + hi).abs() <= tol
        });
        symmetric.then(|| (n - 1) as f64 / 2.0)
    }

    /// Gain at 0 Hz, `sum(b) / sum(a)`.
    pub fn dc_gain(&self) -> f64 {
        self.b.iter().sum::<f64>() / self.a.iter().sum::<f64>()
    }

    /// Step the difference equation by one input sample.
    pub fn feed(&self, state: &mut FilterState, x: f64) -> f64 {
        state.ensure_order(self.order());

        let mut acc = self.b[0] * x;
        for (j, &bj) in self.b.iter().enumerate().skip(1) {
            acc += bj * state.inputs[j - 1];
        }
        for (j, &aj) in self.a.iter().enumerate().skip(1) {
            acc -= aj * state.outputs[j - 1];
        }

        state.push(x, acc);
        acc
    }

    /// Filter `input` starting from zero history.
    pub fn filter(&self, input: &[f64]) -> Vec<f64> {
        let mut state = FilterState::new(self);
        input.iter().map(|&x| self.feed(&mut state, x)).collect()
    }

    /// Filter `input` into `output`, continuing from `state`.
    ///
    /// `output` must be at least as long as `input`; extra samples are left
    /// untouched.
    pub fn filter_with_state(&self, state: &mut FilterState, input: &[f64], output: &mut [f64]) {
        for (out, &x) in output.iter_mut().zip(input) {
            *out = self.feed(state, x);
        }
    }

    /// Filter `input` in place, starting from zero history.
    pub fn filter_in_place(&self, samples: &mut [f64]) {
        let mut state = FilterState::new(self);
        for s in samples.iter_mut() {
            *s = self.feed(&mut state, *s);
        }
    }

    /// Magnitude response |H(e^jw)| at `points` frequencies spaced evenly
    /// over [0, pi).
    pub fn frequency_response(&self, points: usize) -> Vec<f64> {
        if points == 0 {
            return Vec::new();
        }
        let len = points * 2;
        let mut planner = FftPlanner::<f64>::new();
        let fft = planner.plan_fft_forward(len);

        let spectrum = |coeffs: &[f64]| {
            // Folding taps beyond `len` keeps the DFT samples exact.
            let mut buf = vec![Complex::new(0.0, 0.0); len];
            for (k, &c) in coeffs.iter().enumerate() {
                buf[k % len].re += c;
            }
            fft.process(&mut buf);
            buf
        };

        let num = spectrum(&self.b);
        let den = spectrum(&self.a);
        num.iter()
            .zip(den.iter())
            .take(points)
            .map(|(n, d)| (n / d).norm())
            .collect()
    }
}

/// Delay line for one call site of a [`DigitalFilter`].
///
/// Holds the last `order` inputs and outputs, most recent first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterState {
    inputs: Vec<f64>,
    outputs: Vec<f64>,
}

impl FilterState {
    /// Zero history sized for `filter`.
    pub fn new(filter: &DigitalFilter) -> Self {
        let order = filter.order();
        Self {
            inputs: vec![0.0; order],
            outputs: vec![0.0; order],
        }
    }

    /// History of a filter that has been fed `level` forever, so a segment
    /// starting at that level has no start-up transient.
    pub fn steady_state(filter: &DigitalFilter, level: f64) -> Self {
        let order = filter.order();
        let a_sum: f64 = filter.a.iter().sum();
        let out = if a_sum == 0.0 {
            0.0
        } else {
            level * filter.b.iter().sum::<f64>() / a_sum
        };
        Self {
            inputs: vec![level; order],
            outputs: vec![out; order],
        }
    }

    /// Clear the history back to zero.
    pub fn reset(&mut self) {
        self.inputs.iter_mut().for_each(|v| *v = 0.0);
        self.outputs.iter_mut().for_each(|v| *v = 0.0);
    }

    fn ensure_order(&mut self, order: usize) {
        if self.inputs.len() < order {
            self.inputs.resize(order, 0.0);
            self.outputs.resize(order, 0.0);
        }
    }

    fn push(&mut self, x: f64, y: f64) {
        if self.inputs.is_empty() {
            return;
        }
        self.inputs.rotate_right(1);
        self.inputs[0] = x;
        self.outputs.rotate_right(1);
        self.outputs[0] = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_most_recent_first() {
        let f = DigitalFilter::fir(vec![1.0, 0.0, 0.0]).unwrap();
        let mut state = FilterState::new(&f);
        state.push(1.0, 10.0);
        state.push(2.0, 20.0);
        assert_eq!(state.inputs, vec![2.0, 1.0]);
        assert_eq!(state.outputs, vec![20.0, 10.0]);
    }

    #[test]
    fn test_zero_order_filter_has_no_history() {
        let f = DigitalFilter::fir(vec![0.5]).unwrap();
        let mut state = FilterState::new(&f);
        assert_eq!(f.feed(&mut state, 4.0), 2.0);
        assert!(state.inputs.is_empty());
    }
}
