//! Reading cut-outs back as glyph metadata anchors.
//!
//! Cut-out polygons may be edited by hand after they were generated, so
//! metadata is taken from the drawn contours, not from the computation:
//! only the first point (inner corner) and the third point (bbox corner)
//! of each contour count.

use std::collections::BTreeMap;

use kurbo::{BezPath, Point, Rect};
use serde::Serialize;

use crate::config::CutoutConfig;
use crate::corner::Corner;
use crate::geom::on_curve_points;

/// A `cutOut*` anchor, relative to the bbox's south-west corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutoutAnchor {
    pub corner: Corner,
    pub x: f64,
    pub y: f64,
}

/// Anchors keyed by name, e.g. `{"cutOutNE": [x, y]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AnchorTable(BTreeMap<String, [f64; 2]>);

impl AnchorTable {
    pub fn from_anchors(anchors: &[CutoutAnchor]) -> Self {
        Self(
            anchors
                .iter()
                .map(|a| (a.corner.anchor_name().to_string(), [a.x, a.y]))
                .collect(),
        )
    }

    /// Same anchors in staff spaces (a quarter em), rounded to 3 decimals.
    pub fn in_staff_spaces(&self, units_per_em: f64) -> Self {
        Self(
            self.0
                .iter()
                .map(|(name, [x, y])| {
                    (name.clone(), [staff_spaces(*x, units_per_em), staff_spaces(*y, units_per_em)])
                })
                .collect(),
        )
    }

    pub fn get(&self, corner: Corner) -> Option<[f64; 2]> {
        self.0.get(corner.anchor_name()).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Convert font units to staff spaces.
pub fn staff_spaces(value: f64, units_per_em: f64) -> f64 {
    let staff_space = units_per_em / 4.0;
    (value / staff_space * 1000.0).round() / 1000.0
}

/// Extract cut-out anchors from the on-curve points of cut-out contours.
///
/// A contour counts for the corner its third point sits on, provided its
/// first point lies at least the minimum width and height inside the box.
pub fn read_anchors<P: AsRef<[Point]>>(
    contours: &[P],
    bbox: Rect,
    config: &CutoutConfig,
) -> Vec<CutoutAnchor> {
    let mut anchors = Vec::new();
    for points in contours {
        let points = points.as_ref();
        if points.len() < 3 {
            continue;
        }
        let (inner, third) = (points[0], points[2]);
        for corner in Corner::ALL {
            if third != corner.anchor(bbox) {
                continue;
            }
            let (w, h) = corner.extent(inner.x, inner.y, bbox);
            if w >= config.min_width && h >= config.min_height {
                anchors.push(CutoutAnchor {
                    corner,
                    x: inner.x - bbox.x0,
                    y: inner.y - bbox.y0,
                });
            }
        }
    }
    anchors
}

/// Same as [`read_anchors`], for contours given as paths.
pub fn read_path_anchors(paths: &[BezPath], bbox: Rect, config: &CutoutConfig) -> Vec<CutoutAnchor> {
    let contours: Vec<Vec<Point>> = paths.iter().map(on_curve_points).collect();
    read_anchors(&contours, bbox, config)
}
