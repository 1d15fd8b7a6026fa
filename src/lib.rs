//! glyph-cutout: largest empty corner rectangles of glyph outlines.
//!
//! For each corner of a glyph's bounding box, finds the largest
//! axis-aligned rectangle anchored at that corner that stays outside the
//! filled outline, shrinks it by a safety margin and drops it when it
//! gets too small. The rectangles feed the `cutOut*` anchors of SMuFL
//! glyph metadata.
//!
//! # Example
//!
//! ```
//! use glyph_cutout::{cut_out, CutoutConfig};
//! use kurbo::{BezPath, Rect};
//!
//! // A clockwise plus sign filling its box.
//! let mut plus = BezPath::new();
//! for (i, p) in [
//!     (400.0, 0.0), (400.0, 400.0), (0.0, 400.0), (0.0, 600.0),
//!     (400.0, 600.0), (400.0, 1000.0), (600.0, 1000.0), (600.0, 600.0),
//!     (1000.0, 600.0), (1000.0, 400.0), (600.0, 400.0), (600.0, 0.0),
//! ]
//! .into_iter()
//! .enumerate()
//! {
//!     if i == 0 { plus.move_to(p) } else { plus.line_to(p) }
//! }
//! plus.close_path();
//!
//! let bbox = Rect::new(0.0, 0.0, 1000.0, 1000.0);
//! let rects = cut_out(&[plus], bbox, &CutoutConfig::default())?;
//! assert_eq!(rects.len(), 4);
//! # Ok::<(), glyph_cutout::CutoutError>(())
//! ```
//!
//! Glyphs with overlapping contours or several separate outer contours
//! may get a smaller rectangle than possible, or one that touches a
//! contour: candidates are merged per axis, not intersected as shapes.

#![forbid(unsafe_code)]

mod accumulate;
mod combine;
mod config;
mod contour;
mod corner;
mod geom;
mod scan;
mod shrink;

pub mod anchors;
pub mod emit;
pub mod error;

#[cfg(feature = "ufo")]
pub mod ufo;

// Re-export kurbo so downstream users get the same version
// used for contours and bounding boxes.
pub use kurbo;

pub use accumulate::{Candidate, CornerAccumulator, Step};
pub use combine::{CombinedCorner, Combiner};
pub use config::{CutoutConfig, Winding};
pub use contour::ContourScanner;
pub use corner::Corner;
pub use error::CutoutError;
pub use geom::paths_bbox;
pub use scan::{scan_contour, ContourCandidates};
pub use shrink::{shrink_inner, CutoutRect};

use kurbo::{BezPath, Rect};
use log::debug;

/// Full computation for one glyph: bounding box + contours → cut-outs.
///
/// Only contours winding as `config.outer_winding` are scanned. Returns
/// zero to four rectangles in NE, NW, SE, SW order.
pub fn cut_out<C: ContourScanner>(
    contours: &[C],
    bbox: Rect,
    config: &CutoutConfig,
) -> Result<Vec<CutoutRect>, CutoutError> {
    let bbox = geom::validate_bounds(bbox)?;

    let mut combiner = Combiner::new(bbox);
    let mut scanned = 0usize;
    for contour in contours.iter().filter(|c| c.orientation() == config.outer_winding) {
        combiner.add(&scan_contour(contour, bbox, config));
        scanned += 1;
    }

    let rects: Vec<CutoutRect> = Corner::ALL
        .into_iter()
        .filter_map(|corner| shrink::finish(corner, combiner.get(corner), bbox, config))
        .collect();
    debug!(
        "{} of {} contours scanned, {} cut-outs",
        scanned,
        contours.len(),
        rects.len(),
    );
    Ok(rects)
}

/// Convenience: cut-outs of a glyph given as paths, using the union of
/// the paths' bounding boxes.
///
/// A glyph without contours has no cut-outs.
pub fn cut_out_paths(paths: &[BezPath], config: &CutoutConfig) -> Result<Vec<CutoutRect>, CutoutError> {
    match paths_bbox(paths) {
        Some(bbox) => cut_out(paths, bbox, config),
        None => Ok(Vec::new()),
    }
}
