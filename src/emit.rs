//! Cut-out rectangles as closed polygons.
//!
//! The first point is the inner corner and the third point is the bounding
//! box corner; anchor read-back relies on that order.

use kurbo::{BezPath, Point};

use crate::corner::Corner;
use crate::shrink::CutoutRect;

/// The four points of a cut-out, inner corner first.
pub fn polygon_points(rect: &CutoutRect) -> [Point; 4] {
    let inner = Point::new(rect.inner.0 as f64, rect.inner.1 as f64);
    let anchor = rect.anchor;
    let across = Point::new(inner.x, anchor.y);
    let beside = Point::new(anchor.x, inner.y);
    match rect.corner {
        Corner::NE | Corner::SW => [inner, across, anchor, beside],
        Corner::NW | Corner::SE => [inner, beside, anchor, across],
    }
}

/// A closed polygon path for one cut-out.
pub fn to_bezpath(rect: &CutoutRect) -> BezPath {
    let [first, rest @ ..] = polygon_points(rect);
    let mut path = BezPath::new();
    path.move_to(first);
    for point in rest {
        path.line_to(point);
    }
    path.close_path();
    path
}

/// Polygons for all cut-outs, in the given order.
pub fn to_bezpaths(rects: &[CutoutRect]) -> Vec<BezPath> {
    rects.iter().map(to_bezpath).collect()
}

#[cfg(test)]
mod tests {
    use kurbo::{PathEl, Shape};

    use super::*;

    fn rect(corner: Corner, inner: (i32, i32), anchor: (f64, f64)) -> CutoutRect {
        CutoutRect {
            corner,
            inner,
            anchor: anchor.into(),
        }
    }

    #[test]
    fn point_order_per_corner() {
        let ne = polygon_points(&rect(Corner::NE, (800, 800), (1000.0, 1000.0)));
        assert_eq!(
            ne,
            [
                Point::new(800.0, 800.0),
                Point::new(800.0, 1000.0),
                Point::new(1000.0, 1000.0),
                Point::new(1000.0, 800.0),
            ]
        );
        let nw = polygon_points(&rect(Corner::NW, (200, 800), (0.0, 1000.0)));
        assert_eq!(nw[1], Point::new(0.0, 800.0));
        assert_eq!(nw[3], Point::new(200.0, 1000.0));
        let se = polygon_points(&rect(Corner::SE, (800, 200), (1000.0, 0.0)));
        assert_eq!(se[1], Point::new(1000.0, 200.0));
        assert_eq!(se[3], Point::new(800.0, 0.0));
        let sw = polygon_points(&rect(Corner::SW, (200, 200), (0.0, 0.0)));
        assert_eq!(sw[1], Point::new(200.0, 0.0));
        assert_eq!(sw[3], Point::new(0.0, 200.0));
    }

    #[test]
    fn polygons_are_closed_and_clockwise() {
        for (corner, inner, anchor) in [
            (Corner::NE, (800, 800), (1000.0, 1000.0)),
            (Corner::NW, (200, 800), (0.0, 1000.0)),
            (Corner::SE, (800, 200), (1000.0, 0.0)),
            (Corner::SW, (200, 200), (0.0, 0.0)),
        ] {
            let path = to_bezpath(&rect(corner, inner, anchor));
            assert_eq!(path.elements().len(), 5);
            assert_eq!(path.elements().last(), Some(&PathEl::ClosePath));
            assert!((path.area() + 40_000.0).abs() < 1e-9, "{corner:?}");
        }
    }
}
