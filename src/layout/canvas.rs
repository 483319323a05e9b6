//! The growing, mutually non-overlapping tile collection and its
//! placement engine.
//!
//! A `Canvas` is one logical session: seed one tile, place the rest one by
//! one, rescale once at the end. It owns its tiles exclusively; the
//! no-overlap invariant holds after every successful call.

use crate::errors::LayoutError;
use crate::types::{Centroid, PlanePoint, Tile, Viewport};

use super::anchors;
use super::defaults;
use super::overlap::tile_overlap;
use super::rescale;

/// Tunable parameters for a placement session.
#[derive(Clone, Debug)]
pub struct LayoutConfig {
    /// Weight on the vertical term of the placement cost
    /// (`dx² + vertical_bias·dy²`). Values above 1 bias the layout toward
    /// horizontal spread.
    pub vertical_bias: i64,
    /// Centre coordinate of the notional plane used when seeding the first
    /// tile of a session.
    pub plane_center: i64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            vertical_bias: defaults::VERTICAL_BIAS,
            plane_center: defaults::PLANE_CENTER,
        }
    }
}

/// An insertion-ordered collection of placed, pairwise non-overlapping
/// tiles on an unbounded plane.
#[derive(Clone, Debug, Default)]
pub struct Canvas {
    tiles: Vec<Tile>,
    config: LayoutConfig,
}

impl Canvas {
    pub fn new() -> Canvas {
        Canvas::default()
    }

    pub fn with_config(config: LayoutConfig) -> Canvas {
        Canvas {
            tiles: Vec::new(),
            config,
        }
    }

    /// The placed tiles, in placement order.
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Mutable access stays crate-internal: arbitrary external mutation
    /// could break the no-overlap invariant.
    pub(crate) fn tiles_mut(&mut self) -> &mut [Tile] {
        &mut self.tiles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Mass-weighted centroid of the whole canvas, recomputed from scratch.
    ///
    /// Truncating integer division throughout. Errors with
    /// [`LayoutError::DegenerateCanvas`] when the total mass is zero, which
    /// for a canvas built through `seed`/`place` means it is empty.
    pub fn centroid(&self) -> Result<Centroid, LayoutError> {
        let mut weighted_x: i64 = 0;
        let mut weighted_y: i64 = 0;
        let mut total_mass: i64 = 0;

        for tile in &self.tiles {
            let c = tile.centroid();
            weighted_x += c.mass * c.x;
            weighted_y += c.mass * c.y;
            total_mass += c.mass;
        }

        if total_mass == 0 {
            return Err(LayoutError::DegenerateCanvas);
        }

        Ok(Centroid {
            x: weighted_x / total_mass,
            y: weighted_y / total_mass,
            mass: total_mass,
        })
    }

    /// Does `tile`, at its current position, overlap anything already
    /// placed? Early-exits on the first hit.
    pub fn collides(&self, tile: &Tile) -> bool {
        self.tiles
            .iter()
            .any(|placed| tile_overlap(placed, tile).overlaps)
    }

    /// Axis-aligned bounding box over all placed tiles, as
    /// `(top-left, bottom-right)`. `None` when the canvas is empty.
    pub fn bounds(&self) -> Option<(PlanePoint, PlanePoint)> {
        let first = self.tiles.first()?;
        let mut min = PlanePoint::new(first.x, first.y);
        let mut max = PlanePoint::new(first.x + first.width, first.y + first.height);

        for tile in &self.tiles[1..] {
            min.x = min.x.min(tile.x);
            min.y = min.y.min(tile.y);
            max.x = max.x.max(tile.x + tile.width);
            max.y = max.y.max(tile.y + tile.height);
        }

        Some((min, max))
    }

    /// Append a tile at the position it already carries, skipping the
    /// candidate search. This is how a session fixes its first tile on the
    /// plane; it is also useful for callers reconstructing a known layout.
    pub fn seed(&mut self, tile: Tile) -> Result<(), LayoutError> {
        validate(&tile)?;
        self.tiles.push(tile);
        Ok(())
    }

    /// Place `tile`: generate candidate positions from the current canvas,
    /// drop every candidate that overlaps a placed tile, keep the survivor
    /// closest to the centroid, assign that position and append.
    ///
    /// Returns the chosen position. The canvas is left untouched on error.
    ///
    /// Ties on cost go to the earliest-generated candidate (strict `<`
    /// against the running best). Work grows steeply with canvas size —
    /// O(N²) anchors, O(N⁴) candidates, O(N) overlap tests each — which is
    /// comfortable for the tens of photos a collage holds.
    pub fn place(&mut self, mut tile: Tile) -> Result<PlanePoint, LayoutError> {
        validate(&tile)?;
        let centroid = self.centroid()?;

        let anchor_list = anchors::anchor_points(&self.tiles, centroid, &tile);
        let candidates = anchors::candidate_positions(&anchor_list);
        crate::log::debug!(
            "placing {:?}: centroid ({},{}) mass {}, {} candidate positions",
            tile.source,
            centroid.x,
            centroid.y,
            centroid.mass,
            candidates.len()
        );

        let position = self.best_position(&mut tile, centroid, &candidates)?;
        tile.x = position.x;
        tile.y = position.y;
        crate::log::debug!("placed {}", tile);

        self.tiles.push(tile);
        Ok(position)
    }

    /// Score every non-colliding candidate by squared distance between its
    /// centre and the canvas centroid, the vertical term weighted by
    /// `vertical_bias`, and keep the first minimum.
    fn best_position(
        &self,
        tile: &mut Tile,
        centroid: Centroid,
        candidates: &[PlanePoint],
    ) -> Result<PlanePoint, LayoutError> {
        let mut best: Option<(i64, PlanePoint)> = None;

        for &position in candidates {
            tile.x = position.x;
            tile.y = position.y;
            if self.collides(tile) {
                continue;
            }

            let center = tile.center();
            let dx = centroid.x - center.x;
            let dy = centroid.y - center.y;
            let cost = dx * dx + self.config.vertical_bias * dy * dy;

            // strict < keeps the earliest-generated candidate on ties
            if best.is_none_or(|(best_cost, _)| cost < best_cost) {
                best = Some((cost, position));
            }
        }

        match best {
            Some((_, position)) => Ok(position),
            None => Err(LayoutError::NoValidPlacement {
                tile: tile.source.clone(),
            }),
        }
    }

    /// Fit the finished canvas into `viewport`, preserving aspect ratio and
    /// centring the slack axis. Mutates positions and sizes in place; meant
    /// to run exactly once, after the last placement.
    pub fn rescale_to(&mut self, viewport: Viewport) -> Result<(), LayoutError> {
        rescale::rescale_to_viewport(self, viewport)
    }
}

fn validate(tile: &Tile) -> Result<(), LayoutError> {
    if tile.width <= 0 || tile.height <= 0 {
        return Err(LayoutError::InvalidTile {
            width: tile.width,
            height: tile.height,
            tile: tile.source.clone(),
        });
    }
    Ok(())
}
