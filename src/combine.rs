//! Merging per-contour candidates into one rectangle per glyph corner.
//!
//! The most restrictive candidate wins on each axis, so the combined
//! rectangle avoids every contour that was scanned.

use kurbo::Rect;

use crate::accumulate::Candidate;
use crate::corner::Corner;
use crate::scan::{row_range, ContourCandidates};

/// Inner corner of a glyph corner's rectangle, merged across contours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CombinedCorner {
    /// No contour has constrained this corner yet.
    #[default]
    Unset,
    Rect { x: i32, y: i32 },
}

impl CombinedCorner {
    /// Merge one contour's inner corner for `corner`.
    pub fn merge(self, corner: Corner, x: i32, y: i32) -> Self {
        match self {
            CombinedCorner::Unset => CombinedCorner::Rect { x, y },
            CombinedCorner::Rect { x: cx, y: cy } => CombinedCorner::Rect {
                x: if corner.x_tighter(x, cx) { x } else { cx },
                y: if corner.y_tighter(y, cy) { y } else { cy },
            },
        }
    }

    pub fn inner(self) -> Option<(i32, i32)> {
        match self {
            CombinedCorner::Unset => None,
            CombinedCorner::Rect { x, y } => Some((x, y)),
        }
    }
}

/// Per-corner merge state for one glyph.
#[derive(Debug, Clone, Copy)]
pub struct Combiner {
    bbox: Rect,
    ne: CombinedCorner,
    nw: CombinedCorner,
    se: CombinedCorner,
    sw: CombinedCorner,
}

impl Combiner {
    pub fn new(bbox: Rect) -> Self {
        Self {
            bbox,
            ne: CombinedCorner::Unset,
            nw: CombinedCorner::Unset,
            se: CombinedCorner::Unset,
            sw: CombinedCorner::Unset,
        }
    }

    /// Fold in the candidates of one contour.
    pub fn add(&mut self, candidates: &ContourCandidates) {
        for corner in Corner::ALL {
            let Some((x, y)) = self.contour_inner(corner, candidates) else {
                continue;
            };
            let slot = self.slot_mut(corner);
            *slot = slot.merge(corner, x, y);
        }
    }

    pub fn get(&self, corner: Corner) -> CombinedCorner {
        match corner {
            Corner::NE => self.ne,
            Corner::NW => self.nw,
            Corner::SE => self.se,
            Corner::SW => self.sw,
        }
    }

    /// The inner corner a contour contributes.
    ///
    /// A north corner whose scan found no rectangle (typically because the
    /// south scan already reached the top) takes the south corner's x down
    /// to the bottom row instead of staying unconstrained.
    fn contour_inner(&self, corner: Corner, candidates: &ContourCandidates) -> Option<(i32, i32)> {
        let candidate: &Candidate = candidates.get(corner);
        if corner.is_north() && candidate.is_empty() {
            let (bottom, _) = row_range(self.bbox);
            return candidates
                .get(corner.south())
                .inner
                .map(|(x, _)| (x, bottom));
        }
        candidate.inner
    }

    fn slot_mut(&mut self, corner: Corner) -> &mut CombinedCorner {
        match corner {
            Corner::NE => &mut self.ne,
            Corner::NW => &mut self.nw,
            Corner::SE => &mut self.se,
            Corner::SW => &mut self.sw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(inner: Option<(i32, i32)>, area: f64) -> Candidate {
        Candidate {
            inner,
            area,
            rows: usize::from(inner.is_some()),
        }
    }

    fn candidates(ne: Candidate, nw: Candidate, se: Candidate, sw: Candidate) -> ContourCandidates {
        ContourCandidates { ne, nw, se, sw }
    }

    #[test]
    fn more_restrictive_candidate_wins() {
        let bbox = Rect::new(0.0, 0.0, 1000.0, 1000.0);
        let mut combiner = Combiner::new(bbox);
        let none = candidate(None, 0.0);
        combiner.add(&candidates(
            candidate(Some((700, 700)), 90_000.0),
            none,
            candidate(Some((600, 400)), 160_000.0),
            none,
        ));
        combiner.add(&candidates(
            candidate(Some((600, 800)), 80_000.0),
            none,
            candidate(Some((800, 300)), 60_000.0),
            none,
        ));
        assert_eq!(combiner.get(Corner::NE), CombinedCorner::Rect { x: 700, y: 800 });
        assert_eq!(combiner.get(Corner::SE), CombinedCorner::Rect { x: 800, y: 300 });
        assert_eq!(combiner.get(Corner::SW), CombinedCorner::Unset);
    }

    #[test]
    fn empty_north_falls_back_to_south_x() {
        let bbox = Rect::new(0.0, -200.0, 1000.0, 800.0);
        let mut combiner = Combiner::new(bbox);
        let none = candidate(None, 0.0);
        combiner.add(&candidates(
            none,
            none,
            candidate(Some((750, 800)), 250_000.0),
            candidate(Some((250, 800)), 250_000.0),
        ));
        assert_eq!(combiner.get(Corner::NE), CombinedCorner::Rect { x: 750, y: -200 });
        assert_eq!(combiner.get(Corner::NW), CombinedCorner::Rect { x: 250, y: -200 });
    }

    #[test]
    fn fallback_without_south_rectangle_adds_nothing() {
        let bbox = Rect::new(0.0, 0.0, 1000.0, 1000.0);
        let mut combiner = Combiner::new(bbox);
        let none = candidate(None, 0.0);
        combiner.add(&candidates(none, none, none, none));
        for corner in Corner::ALL {
            assert_eq!(combiner.get(corner), CombinedCorner::Unset);
        }
    }

    #[test]
    fn merge_is_per_axis() {
        let merged = CombinedCorner::Unset
            .merge(Corner::SW, 300, 100)
            .merge(Corner::SW, 200, 400);
        assert_eq!(merged, CombinedCorner::Rect { x: 200, y: 100 });
    }
}
