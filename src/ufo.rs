//! UFO fonts: read glyph outlines, write cut-outs into a layer.

use std::collections::BTreeMap;
use std::path::Path;

use kurbo::{BezPath, PathEl, Point, Rect};
use log::{debug, warn};
use norad::{Contour, ContourPoint, Font, Glyph, PointType};
use rayon::prelude::*;

use crate::anchors::{read_anchors, AnchorTable};
use crate::config::CutoutConfig;
use crate::emit;
use crate::error::CutoutError;
use crate::geom::paths_bbox;
use crate::shrink::CutoutRect;

/// Load a UFO font.
pub fn load(path: impl AsRef<Path>) -> Result<Font, CutoutError> {
    Ok(Font::load(path)?)
}

/// Save a UFO font, replacing the package at `path`.
pub fn save(font: &Font, path: impl AsRef<Path>) -> Result<(), CutoutError> {
    Ok(font.save(path)?)
}

/// Layer cut-outs are drawn into.
pub const CUTOUT_LAYER: &str = "Cutout";

/// Units per em used when `fontinfo.plist` has none.
const DEFAULT_UNITS_PER_EM: f64 = 1000.0;

/// Cut-outs computed for one glyph of the default layer.
#[derive(Debug, Clone)]
pub struct GlyphCutouts {
    pub name: String,
    pub width: f64,
    pub bbox: Rect,
    pub rects: Vec<CutoutRect>,
}

/// The font's design unit size.
pub fn units_per_em(font: &Font) -> f64 {
    font.font_info
        .units_per_em
        .as_ref()
        .map(|upm| upm.as_f64())
        .unwrap_or(DEFAULT_UNITS_PER_EM)
}

/// Thresholds derived from the font's units per em.
pub fn config_for_font(font: &Font) -> Result<CutoutConfig, CutoutError> {
    CutoutConfig::for_units_per_em(units_per_em(font))
}

/// A glyph's contours as kurbo paths.
///
/// Components are not resolved: a glyph's bounding box, and so its
/// cut-outs and anchors, covers its own contours only. For glyphs mixing
/// components and contours this box can be smaller than the one font
/// editors report.
pub fn glyph_paths(glyph: &Glyph) -> Result<Vec<BezPath>, CutoutError> {
    glyph
        .contours
        .iter()
        .map(|contour| {
            contour.to_kurbo().map_err(|source| CutoutError::ContourConvert {
                glyph: glyph.name().to_string(),
                source,
            })
        })
        .collect()
}

/// Compute cut-outs for glyphs of the default layer.
///
/// `names` selects glyphs; `None` means all. Glyphs without contours, and
/// glyphs whose contours cannot be converted, are skipped with a log
/// message. Bounding boxes ignore components (see [`glyph_paths`]).
/// Glyphs are processed in parallel; the result is sorted by name.
pub fn compute(
    font: &Font,
    names: Option<&[String]>,
    config: &CutoutConfig,
) -> Result<Vec<GlyphCutouts>, CutoutError> {
    let layer = font.default_layer();
    let glyphs: Vec<&Glyph> = match names {
        Some(names) => names
            .iter()
            .filter_map(|name| {
                let glyph = layer.get_glyph(name.as_str());
                if glyph.is_none() {
                    warn!("glyph '{name}' not found in the default layer");
                }
                glyph
            })
            .collect(),
        None => layer.iter().collect(),
    };

    let mut results = glyphs
        .par_iter()
        .map(|glyph| compute_glyph(glyph, config))
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();
    results.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(results)
}

fn compute_glyph(glyph: &Glyph, config: &CutoutConfig) -> Result<Option<GlyphCutouts>, CutoutError> {
    let paths = match glyph_paths(glyph) {
        Ok(paths) => paths,
        Err(e) => {
            warn!("{e}, skipped");
            return Ok(None);
        }
    };
    let Some(bbox) = paths_bbox(&paths) else {
        debug!("{}: no contours, skipped", glyph.name());
        return Ok(None);
    };
    let rects = crate::cut_out(&paths, bbox, config)?;
    debug!("{}: {} cut-outs", glyph.name(), rects.len());
    Ok(Some(GlyphCutouts {
        name: glyph.name().to_string(),
        width: glyph.width,
        bbox,
        rects,
    }))
}

/// Write computed cut-outs into `layer_name`, creating the layer if needed.
///
/// Each glyph's previous cut-outs are replaced; a glyph without cut-outs
/// is removed from the layer. Returns the number of rectangles written.
pub fn write_layer(
    font: &mut Font,
    layer_name: &str,
    results: &[GlyphCutouts],
) -> Result<usize, CutoutError> {
    if font.layers.get(layer_name).is_none() {
        font.layers
            .new_layer(layer_name)
            .map_err(|e| CutoutError::Layer(e.to_string()))?;
    }
    let layer = font
        .layers
        .get_mut(layer_name)
        .ok_or_else(|| CutoutError::Layer(format!("layer '{layer_name}' missing")))?;

    let mut written = 0;
    for result in results {
        layer.remove_glyph(&result.name);
        if result.rects.is_empty() {
            continue;
        }
        layer.insert_glyph(to_glyph(result)?);
        written += result.rects.len();
    }
    Ok(written)
}

/// A cut-out layer glyph holding one contour per rectangle.
pub fn to_glyph(result: &GlyphCutouts) -> Result<Glyph, CutoutError> {
    let mut glyph = Glyph::new(&result.name);
    glyph.width = result.width;
    for path in emit::to_bezpaths(&result.rects) {
        glyph.contours.push(polygon_to_contour(&path)?);
    }
    Ok(glyph)
}

/// Convert a closed polygon `BezPath` to a `norad::Contour`.
///
/// UFO contours are cyclic: the MoveTo point becomes the first point, a
/// line point closing the contour.
pub fn polygon_to_contour(path: &BezPath) -> Result<Contour, CutoutError> {
    let elements = path.elements();
    if elements.is_empty() {
        return Err(CutoutError::EmptyContour);
    }

    let mut points = Vec::with_capacity(elements.len());
    for el in elements {
        match *el {
            PathEl::MoveTo(p) if points.is_empty() => points.push(line_point(p)),
            PathEl::LineTo(p) => points.push(line_point(p)),
            PathEl::ClosePath => {}
            PathEl::MoveTo(_) => {
                return Err(CutoutError::InvalidPath("unexpected MoveTo mid-path".into()))
            }
            PathEl::QuadTo(..) | PathEl::CurveTo(..) => {
                return Err(CutoutError::InvalidPath("cut-outs are polygons".into()))
            }
        }
    }
    if points.is_empty() {
        return Err(CutoutError::InvalidPath("path must start with MoveTo".into()));
    }

    Ok(Contour::new(points, None, None))
}

fn line_point(p: Point) -> ContourPoint {
    ContourPoint::new(p.x, p.y, PointType::Line, false, None, None, None)
}

/// On-curve points of each contour, in stored order.
///
/// Taken from the UFO points directly: the first point of a cut-out
/// contour is its inner corner.
fn on_curve_points(glyph: &Glyph) -> Vec<Vec<Point>> {
    glyph
        .contours
        .iter()
        .map(|contour| {
            contour
                .points
                .iter()
                .filter(|p| p.typ != PointType::OffCurve)
                .map(|p| Point::new(p.x, p.y))
                .collect()
        })
        .collect()
}

/// Read `cutOut*` anchors back from a cut-out layer.
///
/// Bounding boxes come from the glyph outlines in the default layer.
pub fn read_layer_anchors(
    font: &Font,
    layer_name: &str,
    config: &CutoutConfig,
) -> Result<BTreeMap<String, AnchorTable>, CutoutError> {
    let layer = font
        .layers
        .get(layer_name)
        .ok_or_else(|| CutoutError::Layer(format!("layer '{layer_name}' missing")))?;
    let outlines = font.default_layer();

    let mut tables = BTreeMap::new();
    for glyph in layer.iter() {
        let Some(outline) = outlines.get_glyph(glyph.name()) else {
            warn!("{}: cut-outs without an outline glyph", glyph.name());
            continue;
        };
        let paths = match glyph_paths(outline) {
            Ok(paths) => paths,
            Err(e) => {
                warn!("{e}, skipped");
                continue;
            }
        };
        let Some(bbox) = paths_bbox(&paths) else {
            continue;
        };
        let anchors = read_anchors(&on_curve_points(glyph), bbox, config);
        if !anchors.is_empty() {
            tables.insert(glyph.name().to_string(), AnchorTable::from_anchors(&anchors));
        }
    }
    Ok(tables)
}
