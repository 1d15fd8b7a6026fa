//! The four bounding box corners.

use kurbo::{Point, Rect};

/// A bounding box corner a cut-out is anchored at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Corner {
    NE,
    NW,
    SE,
    SW,
}

impl Corner {
    /// All corners, in emission order.
    pub const ALL: [Corner; 4] = [Corner::NE, Corner::NW, Corner::SE, Corner::SW];

    /// Horizontal sign: -1 for east corners, 1 for west corners.
    ///
    /// Moving the inner corner by `-dx` goes toward the anchoring edge.
    pub fn dx(self) -> i32 {
        match self {
            Corner::NE | Corner::SE => -1,
            Corner::NW | Corner::SW => 1,
        }
    }

    /// Vertical sign: -1 for north corners, 1 for south corners.
    pub fn dy(self) -> i32 {
        match self {
            Corner::NE | Corner::NW => -1,
            Corner::SE | Corner::SW => 1,
        }
    }

    pub fn is_east(self) -> bool {
        self.dx() < 0
    }

    pub fn is_north(self) -> bool {
        self.dy() < 0
    }

    /// The south corner on the same side.
    pub fn south(self) -> Corner {
        if self.is_east() {
            Corner::SE
        } else {
            Corner::SW
        }
    }

    /// The bounding box corner point.
    pub fn anchor(self, bbox: Rect) -> Point {
        let x = if self.is_east() { bbox.x1 } else { bbox.x0 };
        let y = if self.is_north() { bbox.y1 } else { bbox.y0 };
        Point::new(x, y)
    }

    /// Width and height of the rectangle spanned by an inner corner and
    /// this bounding box corner.
    pub fn extent(self, x: f64, y: f64, bbox: Rect) -> (f64, f64) {
        let anchor = self.anchor(bbox);
        ((anchor.x - x) * -self.dx() as f64, (anchor.y - y) * -self.dy() as f64)
    }

    /// Whether `a` is a more restrictive (smaller rectangle) inner x than `b`.
    pub fn x_tighter(self, a: i32, b: i32) -> bool {
        if self.is_east() {
            a > b
        } else {
            a < b
        }
    }

    /// Whether `a` is a more restrictive inner y than `b`.
    pub fn y_tighter(self, a: i32, b: i32) -> bool {
        if self.is_north() {
            a > b
        } else {
            a < b
        }
    }

    /// Anchor key used in SMuFL glyph metadata, e.g. `cutOutNE`.
    pub fn anchor_name(self) -> &'static str {
        match self {
            Corner::NE => "cutOutNE",
            Corner::NW => "cutOutNW",
            Corner::SE => "cutOutSE",
            Corner::SW => "cutOutSW",
        }
    }
}
