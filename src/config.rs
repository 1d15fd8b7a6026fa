use crate::error::CutoutError;

/// Fraction of the em used as minimum width and height of a cut-out.
const MIN_SIZE_FRACTION: f64 = 0.01;

/// Fraction of the em a cut-out is shrunk by at least.
const MIN_SHRINK_FRACTION: f64 = 0.015;

/// Fraction of each extent a cut-out is shrunk by.
const SHRINK_FRACTION: f64 = 0.05;

/// Orientation of a contour's point sequence in y-up font space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

/// All cut-out parameters in one struct.
///
/// Derived once from the font's design unit size and handed to the
/// algorithm explicitly.
#[derive(Debug, Clone)]
pub struct CutoutConfig {
    /// Design unit size (units per em).
    pub units_per_em: f64,
    /// Minimum width of a cut-out, before and after shrinking (font units).
    pub min_width: f64,
    /// Minimum height of a cut-out after shrinking (font units).
    pub min_height: f64,
    /// Fraction of the width/height removed from each cut-out.
    pub shrink_fraction: f64,
    /// Lower bound of the shrink amount (font units).
    pub min_shrink: f64,
    /// Winding of the filled (outer) contours. Contours winding the
    /// other way are counters and are ignored.
    pub outer_winding: Winding,
}

impl CutoutConfig {
    /// Derive thresholds from the design unit size.
    ///
    /// Thresholds are truncated to whole font units.
    pub fn for_units_per_em(units_per_em: f64) -> Result<Self, CutoutError> {
        if !units_per_em.is_finite() || units_per_em <= 0.0 {
            return Err(CutoutError::InvalidUnitsPerEm(units_per_em));
        }
        let min_size = (units_per_em * MIN_SIZE_FRACTION).trunc();
        Ok(Self {
            units_per_em,
            min_width: min_size,
            min_height: min_size,
            shrink_fraction: SHRINK_FRACTION,
            min_shrink: (units_per_em * MIN_SHRINK_FRACTION).trunc(),
            outer_winding: Winding::Clockwise,
        })
    }

    /// Same thresholds, other outer winding.
    pub fn with_outer_winding(mut self, winding: Winding) -> Self {
        self.outer_winding = winding;
        self
    }
}

impl Default for CutoutConfig {
    fn default() -> Self {
        Self {
            units_per_em: 1000.0,
            min_width: 10.0,
            min_height: 10.0,
            shrink_fraction: SHRINK_FRACTION,
            min_shrink: 15.0,
            outer_winding: Winding::Clockwise,
        }
    }
}
