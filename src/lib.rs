//! Centroid-gravity rectangle placement.
//!
//! Given a sequence of photo tiles (a width, a height, and an opaque
//! source tag), `gravitile` assigns each one a non-overlapping position on
//! an unbounded plane, pulling every new tile toward the mass centroid of
//! everything placed so far, then rescales the finished arrangement into a
//! target viewport while preserving aspect ratio.
//!
//! Fetching, decoding, and drawing the photos is the caller's business;
//! this crate only moves rectangles.
//!
//! ```
//! use gravitile::{LayoutConfig, Tile, Viewport, compose};
//!
//! let tiles = vec![
//!     Tile::new(400, 300, "alpha.jpg"),
//!     Tile::new(640, 480, "beta.jpg"),
//!     Tile::new(300, 300, "gamma.jpg"),
//! ];
//! let viewport = Viewport::try_new(1200, 800)?;
//! let canvas = compose(tiles, viewport, LayoutConfig::default())?;
//! assert_eq!(canvas.len(), 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod errors;
pub mod layout;
pub mod log;
pub mod types;

pub use errors::LayoutError;
pub use layout::{Canvas, LayoutConfig};
pub use types::{Centroid, DimensionError, PlanePoint, Span, Tile, Viewport};

/// Lay out `tiles` on the plane without rescaling.
///
/// Seeds the first tile centred on the configured plane centre, then
/// places the rest in input order. The returned canvas is in plane
/// coordinates; use [`Canvas::rescale_to`] (or [`compose`]) to bring it
/// into a viewport.
pub fn arrange(tiles: Vec<Tile>, config: LayoutConfig) -> Result<Canvas, LayoutError> {
    let mut queue = tiles.into_iter();
    let Some(mut first) = queue.next() else {
        return Err(LayoutError::DegenerateCanvas);
    };

    let mut canvas = Canvas::with_config(config);
    let center = canvas.config().plane_center;
    first.x = center - first.width / 2;
    first.y = center - first.height / 2;
    canvas.seed(first)?;

    for tile in queue {
        canvas.place(tile)?;
    }
    crate::log::info!("arranged {} tiles", canvas.len());

    Ok(canvas)
}

/// Run one whole placement session: arrange `tiles` on the plane, then
/// rescale the arrangement into `viewport`.
///
/// Returns the finished canvas in viewport coordinates, or the first error
/// encountered. Tiles are never silently dropped or repositioned to a
/// fallback — a tile that cannot be placed fails the session.
pub fn compose(
    tiles: Vec<Tile>,
    viewport: Viewport,
    config: LayoutConfig,
) -> Result<Canvas, LayoutError> {
    let mut canvas = arrange(tiles, config)?;
    canvas.rescale_to(viewport)?;
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrange_seeds_the_first_tile_on_the_plane_center() {
        let config = LayoutConfig {
            plane_center: 500,
            ..LayoutConfig::default()
        };
        let canvas = arrange(vec![Tile::new(100, 80, "seed")], config).unwrap();
        let seed = &canvas.tiles()[0];
        assert_eq!((seed.x, seed.y), (450, 460));
    }

    #[test]
    fn arrange_of_nothing_is_degenerate() {
        assert!(matches!(
            arrange(Vec::new(), LayoutConfig::default()),
            Err(LayoutError::DegenerateCanvas)
        ));
    }

    #[test]
    fn compose_runs_the_whole_session() {
        let tiles = vec![
            Tile::new(400, 300, "a"),
            Tile::new(640, 480, "b"),
            Tile::new(300, 300, "c"),
        ];
        let canvas = compose(tiles, Viewport::default(), LayoutConfig::default()).unwrap();
        assert_eq!(canvas.len(), 3);
    }

    #[test]
    fn compose_surfaces_a_bad_tile_instead_of_guessing() {
        let tiles = vec![Tile::new(400, 300, "a"), Tile::new(0, 300, "broken")];
        let err = compose(tiles, Viewport::default(), LayoutConfig::default()).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidTile { .. }));
    }
}
