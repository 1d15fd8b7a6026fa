//! Shared geometry utilities.

use kurbo::{BezPath, Line, ParamCurve, PathEl, PathSeg, Point, Rect, Shape};

use crate::error::CutoutError;

/// Check that a bounding box is finite and not inverted.
pub fn validate_bounds(bbox: Rect) -> Result<Rect, CutoutError> {
    let finite = [bbox.x0, bbox.y0, bbox.x1, bbox.y1]
        .iter()
        .all(|v| v.is_finite());
    if !finite {
        return Err(CutoutError::InvalidBounds(format!("{bbox:?} is not finite")));
    }
    if bbox.x0 > bbox.x1 || bbox.y0 > bbox.y1 {
        return Err(CutoutError::InvalidBounds(format!("{bbox:?} is inverted")));
    }
    Ok(bbox)
}

/// Union of the bounding boxes of all paths, `None` for no paths.
pub fn paths_bbox(paths: &[BezPath]) -> Option<Rect> {
    paths
        .iter()
        .filter(|path| !path.elements().is_empty())
        .map(Shape::bounding_box)
        .reduce(|a, b| a.union(b))
}

/// Horizontal extent `(min x, max x)` of a path at height `y`,
/// or `None` when the path does not reach that height.
///
/// Horizontal line segments lying on `y` contribute both ends.
pub fn x_bounds_at_y(path: &BezPath, y: f64) -> Option<(f64, f64)> {
    let bounds = path.bounding_box();
    if y < bounds.y0 || y > bounds.y1 {
        return None;
    }
    let row_line = Line::new((bounds.x0 - 1.0, y), (bounds.x1 + 1.0, y));

    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut hit = |x: f64| {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
    };

    for seg in path.segments() {
        let (start, end) = (seg.start(), seg.end());
        if start.y == y {
            hit(start.x);
        }
        if end.y == y {
            hit(end.x);
        }
        if let PathSeg::Line(line) = seg {
            if line.p0.y == line.p1.y {
                continue;
            }
        }
        for crossing in seg.intersect_line(row_line) {
            hit(seg.eval(crossing.segment_t).x);
        }
    }

    (min_x <= max_x).then_some((min_x, max_x))
}

/// On-curve points of a path, in order, without the closing duplicate.
pub fn on_curve_points(path: &BezPath) -> Vec<Point> {
    let mut points: Vec<Point> = path
        .elements()
        .iter()
        .filter_map(|el| match *el {
            PathEl::MoveTo(p)
            | PathEl::LineTo(p)
            | PathEl::CurveTo(_, _, p)
            | PathEl::QuadTo(_, p) => Some(p),
            PathEl::ClosePath => None,
        })
        .collect();
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    points
}
