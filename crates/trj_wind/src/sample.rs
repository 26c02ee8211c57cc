/// A single station's wind reading at one hour, fully corrected (unit
/// converted, rotated, speed-scaled). `u`/`v` are meaningless when
/// `present` is `false`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindSample {
    pub u: f64,
    pub v: f64,
    pub present: bool,
}

impl WindSample {
    pub const fn absent() -> Self {
        Self { u: 0.0, v: 0.0, present: false }
    }

    pub const fn new(u: f64, v: f64) -> Self {
        Self { u, v, present: true }
    }
}

impl Default for WindSample {
    fn default() -> Self {
        Self::absent()
    }
}
