use kurbo::{BezPath, Shape};

use crate::config::Winding;
use crate::geom;

/// A closed contour the corner scan can query row by row.
pub trait ContourScanner {
    /// Orientation of the contour's point sequence (y-up).
    fn orientation(&self) -> Winding;

    /// Horizontal extent `(left x, right x)` where the contour crosses the
    /// integer row `y`, or `None` when it does not reach that row.
    fn x_bounds_at(&self, y: i32) -> Option<(f64, f64)>;
}

impl ContourScanner for BezPath {
    fn orientation(&self) -> Winding {
        // Positive area is counter-clockwise with y pointing up.
        if self.area() < 0.0 {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }

    fn x_bounds_at(&self, y: i32) -> Option<(f64, f64)> {
        geom::x_bounds_at_y(self, y as f64)
    }
}

impl<T: ContourScanner + ?Sized> ContourScanner for &T {
    fn orientation(&self) -> Winding {
        (**self).orientation()
    }

    fn x_bounds_at(&self, y: i32) -> Option<(f64, f64)> {
        (**self).x_bounds_at(y)
    }
}
