//! Single-contour, single-corner rectangle search.
//!
//! An accumulator is fed one row at a time, moving away from its corner.
//! Each row's boundary x is clamped by the outermost x seen so far, which
//! turns the irregular silhouette into a sequence of nested rectangles:
//! every rectangle still avoids all filled area between the corner and its
//! row, so the areas of different rows are comparable.

use kurbo::Rect;

use crate::config::CutoutConfig;
use crate::corner::Corner;

/// Outcome of feeding one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    /// The gap became narrower than the minimum width; the scan for this
    /// corner is over.
    Stopped,
}

/// Best rectangle one contour allows at one corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Inner corner of the best rectangle, if any row produced one.
    pub inner: Option<(i32, i32)>,
    pub area: f64,
    pub rows: usize,
}

impl Candidate {
    /// A candidate without a positive-area rectangle.
    pub fn is_empty(&self) -> bool {
        self.area <= 0.0
    }
}

/// Row-by-row search for the largest rectangle at one corner.
#[derive(Debug, Clone)]
pub struct CornerAccumulator {
    corner: Corner,
    bbox: Rect,
    min_width: f64,
    /// Outermost inner x so far.
    xm: i32,
    best: Option<(i32, i32)>,
    area: f64,
    active: bool,
    rows: usize,
    crossed: bool,
}

impl CornerAccumulator {
    pub fn new(corner: Corner, bbox: Rect, config: &CutoutConfig) -> Self {
        let mut acc = Self {
            corner,
            bbox,
            min_width: config.min_width,
            xm: 0,
            best: None,
            area: 0.0,
            active: true,
            rows: 0,
            crossed: false,
        };
        acc.reset();
        acc
    }

    /// Clear all state. The outermost x starts at the far bbox edge, which
    /// never narrows a row.
    pub fn reset(&mut self) {
        let far = if self.corner.is_east() { self.bbox.x0 } else { self.bbox.x1 };
        self.xm = self.round(far);
        self.best = None;
        self.area = 0.0;
        self.active = true;
        self.rows = 0;
        self.crossed = false;
    }

    pub fn corner(&self) -> Corner {
        self.corner
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Feed the contour boundary `x` at row `y`.
    ///
    /// `crossing` is false for rows the contour does not reach; `x` is then
    /// the far bbox edge.
    pub fn consume_row(&mut self, x: f64, y: i32, crossing: bool) -> Step {
        if crossing && !self.crossed {
            // Rectangles found below or above the contour are superseded
            // by its first row.
            self.crossed = true;
            self.area = 0.0;
        }

        let x = self.round(x);
        let anchor = self.corner.anchor(self.bbox);
        let w = (anchor.x - x as f64) * -self.corner.dx() as f64;
        if w < self.min_width {
            self.active = false;
            return Step::Stopped;
        }

        let x = if self.corner.is_east() { x.max(self.xm) } else { x.min(self.xm) };
        self.xm = x;
        self.rows += 1;

        let (w, h) = self.corner.extent(x as f64, y as f64, self.bbox);
        let area = w * h;
        if area >= self.area {
            self.best = Some((x, y));
            self.area = area;
        }
        Step::Continue
    }

    pub fn finish(&self) -> Candidate {
        Candidate {
            inner: self.best,
            area: self.area,
            rows: self.rows,
        }
    }

    /// Round away from the filled region: up for east corners, down for
    /// west corners.
    fn round(&self, x: f64) -> i32 {
        if self.corner.is_east() {
            x.ceil() as i32
        } else {
            x.floor() as i32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bbox() -> Rect {
        Rect::new(0.0, 0.0, 1000.0, 1000.0)
    }

    #[test]
    fn fresh_accumulator_has_no_rectangle() {
        let acc = CornerAccumulator::new(Corner::SE, bbox(), &CutoutConfig::default());
        assert!(acc.is_active());
        let candidate = acc.finish();
        assert_eq!(candidate.inner, None);
        assert_eq!(candidate.rows, 0);
        assert!(candidate.is_empty());
    }

    #[test]
    fn rounds_outward_from_the_contour() {
        let config = CutoutConfig::default();
        let mut east = CornerAccumulator::new(Corner::SE, bbox(), &config);
        east.consume_row(600.2, 0, true);
        east.consume_row(600.2, 10, true);
        assert_eq!(east.finish().inner, Some((601, 10)));

        let mut west = CornerAccumulator::new(Corner::SW, bbox(), &config);
        west.consume_row(399.8, 0, true);
        west.consume_row(399.8, 10, true);
        assert_eq!(west.finish().inner, Some((399, 10)));
    }

    #[test]
    fn narrow_gap_stops_the_scan() {
        let mut acc = CornerAccumulator::new(Corner::SE, bbox(), &CutoutConfig::default());
        assert_eq!(acc.consume_row(500.0, 0, true), Step::Continue);
        assert_eq!(acc.consume_row(995.0, 1, true), Step::Stopped);
        assert!(!acc.is_active());
        assert_eq!(acc.finish().rows, 1);
    }

    #[test]
    fn constant_gap_keeps_its_width() {
        let mut acc = CornerAccumulator::new(Corner::SW, bbox(), &CutoutConfig::default());
        for y in 0..=300 {
            acc.consume_row(250.0, y, true);
        }
        let candidate = acc.finish();
        assert_eq!(candidate.inner, Some((250, 300)));
        assert_eq!(candidate.area, 250.0 * 300.0);
    }

    #[test]
    fn clamp_keeps_rectangles_nested() {
        // The boundary swings back out after a bulge; the clamp holds the
        // inner x at the bulge so the rectangle never covers it.
        let mut acc = CornerAccumulator::new(Corner::SE, bbox(), &CutoutConfig::default());
        acc.consume_row(500.0, 0, true);
        acc.consume_row(800.0, 1, true);
        acc.consume_row(500.0, 500, true);
        let candidate = acc.finish();
        assert_eq!(candidate.inner, Some((800, 500)));
        assert_eq!(candidate.area, 200.0 * 500.0);
    }

    #[test]
    fn later_row_wins_ties() {
        let mut acc = CornerAccumulator::new(Corner::NE, bbox(), &CutoutConfig::default());
        // 500 wide and 100 high, then 100 wide and 500 high.
        acc.consume_row(500.0, 900, true);
        acc.consume_row(900.0, 500, true);
        assert_eq!(acc.finish().inner, Some((900, 500)));
    }

    #[test]
    fn first_crossing_supersedes_empty_rows() {
        let mut acc = CornerAccumulator::new(Corner::SE, bbox(), &CutoutConfig::default());
        for y in 0..200 {
            acc.consume_row(0.0, y, false);
        }
        acc.consume_row(800.0, 200, true);
        let candidate = acc.finish();
        assert_eq!(candidate.inner, Some((800, 200)));
        assert_eq!(candidate.area, 200.0 * 200.0);
    }
}
