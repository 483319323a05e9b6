//! Candidate position generation for an incoming tile.
//!
//! Anchors come first: the canvas centroid, then three per placed tile in
//! insertion order. Candidates are the full cross product of anchor x
//! values against anchor y values, x-source outer and y-source inner.
//! That order is observable — the placement engine keeps the first of any
//! cost tie — so nothing here may reorder, deduplicate, or filter.

use crate::types::{Centroid, PlanePoint, Tile};

/// The three anchor points one placed tile contributes for an incoming
/// tile: sitting above-left of it, centre-aligned with it, and below-right
/// of it.
pub(crate) fn tile_anchors(placed: &Tile, incoming: &Tile) -> [PlanePoint; 3] {
    let above_left = PlanePoint::new(placed.x - incoming.width, placed.y - incoming.height);

    let centered = PlanePoint::new(
        placed.x + placed.width / 2 - incoming.width / 2,
        placed.y + placed.height / 2 - incoming.height / 2,
    );

    let below_right = PlanePoint::new(placed.x + placed.width, placed.y + placed.height);

    [above_left, centered, below_right]
}

/// All anchor points for placing `incoming`: the position that centres it
/// on the canvas centroid, then `tile_anchors` for every placed tile.
/// Yields `3N + 1` points for a canvas of `N` tiles.
pub(crate) fn anchor_points(tiles: &[Tile], centroid: Centroid, incoming: &Tile) -> Vec<PlanePoint> {
    let mut anchors = Vec::with_capacity(tiles.len() * 3 + 1);

    anchors.push(PlanePoint::new(
        centroid.x - incoming.width / 2,
        centroid.y - incoming.height / 2,
    ));

    for placed in tiles {
        anchors.extend(tile_anchors(placed, incoming));
    }

    anchors
}

/// Cross every anchor's x against every anchor's y, including an anchor
/// against itself. Broadens the search well beyond the literal anchor
/// positions; duplicates are retained.
pub(crate) fn candidate_positions(anchors: &[PlanePoint]) -> Vec<PlanePoint> {
    let mut candidates = Vec::with_capacity(anchors.len() * anchors.len());
    for x_source in anchors {
        for y_source in anchors {
            candidates.push(PlanePoint::new(x_source.x, y_source.y));
        }
    }
    candidates
}
