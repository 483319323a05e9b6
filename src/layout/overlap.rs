//! Overlap tests with signed slack diagnostics.
//!
//! Two spans that merely touch (share exactly one coordinate) do NOT
//! overlap: both slack comparisons are strict. The placement engine sits
//! tiles exactly edge-to-edge against placed ones, so a `>=` anywhere in
//! this file would reject every adjacent candidate.

use std::fmt;

use crate::types::{Span, Tile};

/// Result of a 1D overlap test between two spans.
///
/// The slacks are signed distances: how far the second span would have to
/// move toward lower or higher coordinates to clear the first. Negative
/// slack means there is already clearance on that side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpanOverlap {
    pub overlaps: bool,
    /// Move required toward lower coordinates to clear (negative: clearance)
    pub low_slack: i64,
    /// Move required toward higher coordinates to clear (negative: clearance)
    pub high_slack: i64,
}

/// Test two spans for overlap along one axis.
pub fn span_overlap(a: Span, b: Span) -> SpanOverlap {
    let low_slack = b.hi - a.lo;
    let high_slack = a.hi - b.lo;
    let overlaps = low_slack > 0 && high_slack > 0;
    SpanOverlap {
        overlaps,
        low_slack,
        high_slack,
    }
}

/// Result of a 2D overlap test between two tiles.
///
/// Overlap requires overlap on both axes. The four slack values say how far
/// the second tile would have to travel in each direction to clear the
/// first; they are kept for diagnostics and are not consumed by placement
/// decisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileOverlap {
    pub overlaps: bool,
    pub overlaps_in_x: bool,
    pub overlaps_in_y: bool,
    /// Distance the second tile must move left to clear the first
    pub clear_left: i64,
    /// Distance the second tile must move right to clear the first
    pub clear_right: i64,
    /// Distance the second tile must move up to clear the first
    pub clear_up: i64,
    /// Distance the second tile must move down to clear the first
    pub clear_down: i64,
}

/// Test two tiles for overlap on both axes.
pub fn tile_overlap(first: &Tile, second: &Tile) -> TileOverlap {
    let x = span_overlap(first.span_x(), second.span_x());
    let y = span_overlap(first.span_y(), second.span_y());
    TileOverlap {
        overlaps: x.overlaps && y.overlaps,
        overlaps_in_x: x.overlaps,
        overlaps_in_y: y.overlaps,
        clear_left: x.low_slack,
        clear_right: x.high_slack,
        clear_up: y.low_slack,
        clear_down: y.high_slack,
    }
}

impl fmt::Display for TileOverlap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "overlapping: {} (x: {}, y: {}), clear left: {}, right: {}, up: {}, down: {}",
            self.overlaps,
            self.overlaps_in_x,
            self.overlaps_in_y,
            self.clear_left,
            self.clear_right,
            self.clear_up,
            self.clear_down
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile_at(x: i64, y: i64, width: i64, height: i64) -> Tile {
        let mut tile = Tile::new(width, height, "test");
        tile.x = x;
        tile.y = y;
        tile
    }

    // ==================== span tests ====================

    #[test]
    fn separated_spans_do_not_overlap() {
        let result = span_overlap(Span::new(0, 10), Span::new(20, 30));
        assert!(!result.overlaps);
        // clearance shows up as negative high slack
        assert_eq!(result.high_slack, -10);
        assert_eq!(result.low_slack, 30);
    }

    #[test]
    fn touching_spans_do_not_overlap() {
        // share exactly the coordinate 10
        let result = span_overlap(Span::new(0, 10), Span::new(10, 30));
        assert!(!result.overlaps);
        assert_eq!(result.high_slack, 0);
    }

    #[test]
    fn nested_spans_overlap() {
        let result = span_overlap(Span::new(0, 100), Span::new(25, 75));
        assert!(result.overlaps);
        assert_eq!(result.low_slack, 75);
        assert_eq!(result.high_slack, 75);
    }

    #[test]
    fn one_unit_of_overlap_counts() {
        let result = span_overlap(Span::new(0, 10), Span::new(9, 20));
        assert!(result.overlaps);
        assert_eq!(result.high_slack, 1);
    }

    // ==================== tile tests ====================

    #[test]
    fn edge_sharing_tiles_do_not_overlap() {
        let a = tile_at(0, 0, 100, 100);
        let b = tile_at(100, 0, 50, 50);
        let result = tile_overlap(&a, &b);
        assert!(!result.overlaps);
        assert!(!result.overlaps_in_x);
        assert!(result.overlaps_in_y);
    }

    #[test]
    fn corner_sharing_tiles_do_not_overlap() {
        let a = tile_at(0, 0, 100, 100);
        let b = tile_at(100, 100, 50, 50);
        let result = tile_overlap(&a, &b);
        assert!(!result.overlaps);
        assert!(!result.overlaps_in_x);
        assert!(!result.overlaps_in_y);
    }

    #[test]
    fn overlapping_tiles_report_all_four_slacks() {
        let a = tile_at(0, 0, 100, 100);
        let b = tile_at(80, 90, 50, 50);
        let result = tile_overlap(&a, &b);
        assert!(result.overlaps);
        assert_eq!(result.clear_left, 130); // (80+50) - 0
        assert_eq!(result.clear_right, 20); // 100 - 80
        assert_eq!(result.clear_up, 140); // (90+50) - 0
        assert_eq!(result.clear_down, 10); // 100 - 90
    }

    #[test]
    fn overlap_test_is_symmetric_on_the_verdict() {
        let a = tile_at(0, 0, 100, 100);
        let b = tile_at(50, 50, 100, 100);
        assert_eq!(tile_overlap(&a, &b).overlaps, tile_overlap(&b, &a).overlaps);
    }
}
