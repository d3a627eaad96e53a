/// One luma / in-phase / quadrature sample, in raw 16-bit signal units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Yiq {
    pub y: f64,
    pub i: f64,
    pub q: f64,
}

impl Yiq {
    pub fn new(y: f64, i: f64, q: f64) -> Self {
        Self { y, i, q }
    }

    /// A sample with luma only.
    pub fn mono(y: f64) -> Self {
        Self { y, i: 0.0, q: 0.0 }
    }
}
