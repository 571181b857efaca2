//! Step tables mapping a measured value to points.
//!
//! A table is a list of inclusive upper bounds in strictly increasing order
//! plus the points for everything above the last bound. Band `i` covers
//! `(upper[i-1], upper[i]]`, so every real value lands in exactly one band:
//! there are no gaps and no overlaps.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub upper: f64,
    pub points: u8,
}

#[derive(Debug, Clone, Copy)]
pub struct BandTable {
    bands: &'static [Band],
    above: u8,
}

impl BandTable {
    pub const fn new(bands: &'static [Band], above: u8) -> Self {
        Self { bands, above }
    }

    /// Points for `value`. NaN falls through to the open top band.
    pub fn points(&self, value: f64) -> u8 {
        self.bands
            .iter()
            .find(|band| value <= band.upper)
            .map_or(self.above, |band| band.points)
    }

    pub fn bands(&self) -> &'static [Band] {
        self.bands
    }

    pub fn above(&self) -> u8 {
        self.above
    }

    /// Bounds strictly increase, which is what makes the bands disjoint.
    pub fn is_well_formed(&self) -> bool {
        self.bands.windows(2).all(|w| w[0].upper < w[1].upper)
    }

    /// Largest number of points any value can earn from this table.
    pub fn max_points(&self) -> u8 {
        self.bands
            .iter()
            .map(|b| b.points)
            .chain(std::iter::once(self.above))
            .max()
            .unwrap_or(self.above)
    }
}

pub(crate) const fn band(upper: f64, points: u8) -> Band {
    Band { upper, points }
}
