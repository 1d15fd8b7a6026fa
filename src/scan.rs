//! Per-contour scan: south corners bottom-up, then north corners top-down.
//!
//! The north pass never goes below the row at which the south corner on
//! the same side stopped, so north and south rectangles on one side never
//! overlap vertically.

use kurbo::Rect;
use log::trace;

use crate::accumulate::{Candidate, CornerAccumulator, Step};
use crate::config::CutoutConfig;
use crate::contour::ContourScanner;
use crate::corner::Corner;

/// The four corner candidates of one contour.
#[derive(Debug, Clone, Copy)]
pub struct ContourCandidates {
    pub ne: Candidate,
    pub nw: Candidate,
    pub se: Candidate,
    pub sw: Candidate,
}

impl ContourCandidates {
    pub fn get(&self, corner: Corner) -> &Candidate {
        match corner {
            Corner::NE => &self.ne,
            Corner::NW => &self.nw,
            Corner::SE => &self.se,
            Corner::SW => &self.sw,
        }
    }
}

/// Integer rows covered by the bounding box, bottom to top.
pub fn row_range(bbox: Rect) -> (i32, i32) {
    (bbox.y0.ceil() as i32, bbox.y1.floor() as i32)
}

/// Row extent fed to the accumulators: the contour's own extent, or the
/// far bbox edges where the contour does not reach the row.
fn extent_at<C: ContourScanner + ?Sized>(contour: &C, y: i32, bbox: Rect) -> (f64, f64, bool) {
    match contour.x_bounds_at(y) {
        Some((left, right)) => (left, right, true),
        None => (bbox.x1, bbox.x0, false),
    }
}

/// Scan one outer contour for its best rectangle at every corner.
pub fn scan_contour<C: ContourScanner + ?Sized>(
    contour: &C,
    bbox: Rect,
    config: &CutoutConfig,
) -> ContourCandidates {
    let (bottom, top) = row_range(bbox);

    let mut se = CornerAccumulator::new(Corner::SE, bbox, config);
    let mut sw = CornerAccumulator::new(Corner::SW, bbox, config);
    let mut ne = CornerAccumulator::new(Corner::NE, bbox, config);
    let mut nw = CornerAccumulator::new(Corner::NW, bbox, config);

    // Rows at which the south corners stopped; the top when they never did.
    let mut stop_east = top;
    let mut stop_west = top;

    for y in bottom..=top {
        let (left, right, crossing) = extent_at(contour, y, bbox);
        if se.is_active() && se.consume_row(right, y, crossing) == Step::Stopped {
            stop_east = y;
        }
        if sw.is_active() && sw.consume_row(left, y, crossing) == Step::Stopped {
            stop_west = y;
        }
        if !(se.is_active() || sw.is_active()) {
            break;
        }
    }
    trace!("south pass stopped at rows {stop_east} (east), {stop_west} (west)");

    let floor = stop_east.min(stop_west);
    for y in (floor + 1..=top).rev() {
        let (left, right, crossing) = extent_at(contour, y, bbox);
        if ne.is_active() && y > stop_east {
            ne.consume_row(right, y, crossing);
        }
        if nw.is_active() && y > stop_west {
            nw.consume_row(left, y, crossing);
        }
        if !(ne.is_active() || nw.is_active()) {
            break;
        }
    }

    ContourCandidates {
        ne: ne.finish(),
        nw: nw.finish(),
        se: se.finish(),
        sw: sw.finish(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Winding;

    /// A contour given directly by its row extents.
    struct Rows(Vec<(i32, f64, f64)>);

    impl ContourScanner for Rows {
        fn orientation(&self) -> Winding {
            Winding::Clockwise
        }

        fn x_bounds_at(&self, y: i32) -> Option<(f64, f64)> {
            self.0
                .iter()
                .find(|(row, _, _)| *row == y)
                .map(|&(_, left, right)| (left, right))
        }
    }

    #[test]
    fn north_pass_stays_above_south_stop() {
        // Full-width waist at rows 40..=60, narrow stem elsewhere.
        let rows = (0..=100)
            .map(|y| {
                if (40..=60).contains(&y) {
                    (y, 0.0, 100.0)
                } else {
                    (y, 45.0, 55.0)
                }
            })
            .collect();
        let bbox = Rect::new(0.0, 0.0, 100.0, 100.0);
        let config = CutoutConfig::for_units_per_em(100.0).unwrap();
        let candidates = scan_contour(&Rows(rows), bbox, &config);

        assert_eq!(candidates.se.inner, Some((55, 39)));
        assert_eq!(candidates.sw.inner, Some((45, 39)));
        assert_eq!(candidates.ne.inner, Some((55, 61)));
        assert_eq!(candidates.nw.inner, Some((45, 61)));
    }

    #[test]
    fn north_floor_is_each_sides_own_stop() {
        // Full-width rows reach the east edge at 20..=30, the west edge at 60..=70.
        let rows = (0..=100)
            .map(|y| {
                let left = if (60..=70).contains(&y) { 0.0 } else { 45.0 };
                let right = if (20..=30).contains(&y) { 100.0 } else { 55.0 };
                (y, left, right)
            })
            .collect();
        let bbox = Rect::new(0.0, 0.0, 100.0, 100.0);
        let config = CutoutConfig::for_units_per_em(100.0).unwrap();
        let candidates = scan_contour(&Rows(rows), bbox, &config);

        assert_eq!(candidates.se.inner, Some((55, 19)));
        assert_eq!(candidates.sw.inner, Some((45, 59)));
        // The east side scans down past the west stop to just above its own.
        assert_eq!(candidates.ne.inner, Some((55, 31)));
        assert_eq!(candidates.nw.inner, Some((45, 71)));
    }

    #[test]
    fn south_pass_through_the_top_leaves_north_empty() {
        let rows = (0..=100).map(|y| (y, 30.0, 70.0)).collect();
        let bbox = Rect::new(0.0, 0.0, 100.0, 100.0);
        let config = CutoutConfig::for_units_per_em(100.0).unwrap();
        let candidates = scan_contour(&Rows(rows), bbox, &config);

        assert_eq!(candidates.se.inner, Some((70, 100)));
        assert!(candidates.ne.is_empty());
        assert_eq!(candidates.ne.rows, 0);
    }

    #[test]
    fn immediate_stop_gives_no_rectangle() {
        let rows = (0..=100).map(|y| (y, 0.0, 100.0)).collect();
        let bbox = Rect::new(0.0, 0.0, 100.0, 100.0);
        let candidates = scan_contour(&Rows(rows), bbox, &CutoutConfig::default());
        for corner in Corner::ALL {
            assert_eq!(candidates.get(corner).inner, None, "{corner:?}");
        }
    }

    #[test]
    fn row_range_stays_inside_the_box() {
        assert_eq!(row_range(Rect::new(0.0, -250.5, 10.0, 750.5)), (-250, 750));
    }
}
