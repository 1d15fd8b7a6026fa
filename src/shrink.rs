//! Safety margin and minimum-size filter for combined rectangles.

use kurbo::{Point, Rect};

use crate::combine::CombinedCorner;
use crate::config::CutoutConfig;
use crate::corner::Corner;

/// An accepted cut-out: the rectangle between `inner` and the bounding box
/// corner `anchor`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutoutRect {
    pub corner: Corner,
    /// Inner corner, always on integer coordinates.
    pub inner: (i32, i32),
    /// The bounding box corner.
    pub anchor: Point,
}

impl CutoutRect {
    pub fn width(&self) -> f64 {
        (self.anchor.x - self.inner.0 as f64).abs()
    }

    pub fn height(&self) -> f64 {
        (self.anchor.y - self.inner.1 as f64).abs()
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn to_rect(&self) -> Rect {
        Rect::from_points((self.inner.0 as f64, self.inner.1 as f64), self.anchor)
    }
}

/// Shrink amounts `(x, y)` for a rectangle of the given extents.
///
/// Whole font units, so integer inner corners stay integer.
pub fn shrink_amount(w: f64, h: f64, config: &CutoutConfig) -> (i32, i32) {
    let by = |extent: f64| (extent * config.shrink_fraction).trunc().max(config.min_shrink) as i32;
    (by(w), by(h))
}

/// Move an inner corner toward its bbox corner by the shrink amount.
///
/// Not idempotent: shrinking twice shrinks twice.
pub fn shrink_inner(corner: Corner, inner: (i32, i32), bbox: Rect, config: &CutoutConfig) -> (i32, i32) {
    let (w, h) = corner.extent(inner.0 as f64, inner.1 as f64, bbox);
    let (sw, sh) = shrink_amount(w, h, config);
    (inner.0 - sw * corner.dx(), inner.1 - sh * corner.dy())
}

/// Shrink a combined corner and keep it only if it is still large enough.
pub fn finish(
    corner: Corner,
    combined: CombinedCorner,
    bbox: Rect,
    config: &CutoutConfig,
) -> Option<CutoutRect> {
    let (x, y) = combined.inner()?;
    let (w, h) = corner.extent(x as f64, y as f64, bbox);
    let (sw, sh) = shrink_amount(w, h, config);
    if w - (sw as f64) < config.min_width || h - (sh as f64) < config.min_height {
        return None;
    }
    Some(CutoutRect {
        corner,
        inner: shrink_inner(corner, (x, y), bbox, config),
        anchor: corner.anchor(bbox),
    })
}
