//! Final pass: fit a finished canvas into a viewport.
//!
//! The tighter axis sets the gain so aspect ratio survives; the other axis
//! gets a centred leftover margin. Rounding is deliberately asymmetric:
//! positions round up, sizes round down, so lossy integer scaling keeps
//! each tile strictly inside its allotted cell instead of encroaching on a
//! neighbour.

use glam::dvec2;

use crate::errors::LayoutError;
use crate::types::Viewport;

use super::canvas::Canvas;

pub(crate) fn rescale_to_viewport(
    canvas: &mut Canvas,
    viewport: Viewport,
) -> Result<(), LayoutError> {
    let (min, max) = canvas.bounds().ok_or(LayoutError::DegenerateCanvas)?;

    // extent is positive on both axes: every tile on a canvas passed
    // dimension validation at insertion
    let extent = dvec2((max.x - min.x) as f64, (max.y - min.y) as f64);
    let target = dvec2(viewport.width() as f64, viewport.height() as f64);
    let gains = target / extent;

    let (gain, leftover_x, leftover_y) = if gains.x > gains.y {
        let gain = gains.y;
        (gain, (viewport.width() - (extent.x * gain) as i64) / 2, 0)
    } else {
        let gain = gains.x;
        (gain, 0, (viewport.height() - (extent.y * gain) as i64) / 2)
    };
    crate::log::debug!(
        "rescaling {} tiles to {}: gain {}, margins ({},{})",
        canvas.len(),
        viewport,
        gain,
        leftover_x,
        leftover_y
    );

    for tile in canvas.tiles_mut() {
        tile.x = ((tile.x - min.x) as f64 * gain).ceil() as i64 + leftover_x;
        tile.y = ((tile.y - min.y) as f64 * gain).ceil() as i64 + leftover_y;
        tile.width = (gain * tile.width as f64).floor() as i64;
        tile.height = (gain * tile.height as f64).floor() as i64;
        if tile.width == 0 || tile.height == 0 {
            crate::log::warn!("{} collapsed to zero size at gain {}", tile, gain);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tile;

    fn canvas_with(tiles: &[(i64, i64, i64, i64)]) -> Canvas {
        let mut canvas = Canvas::new();
        for (i, &(x, y, w, h)) in tiles.iter().enumerate() {
            let mut tile = Tile::new(w, h, format!("tile-{i}"));
            tile.x = x;
            tile.y = y;
            canvas.seed(tile).unwrap();
        }
        canvas
    }

    #[test]
    fn wide_arrangement_centers_vertically() {
        // 200x100 bounding box into a 100x100 viewport: gain 0.5, the x
        // axis is tight (no margin), the y axis gets 25 on each side.
        let mut canvas = canvas_with(&[(0, 0, 100, 100), (100, 0, 100, 100)]);
        canvas.rescale_to(Viewport::try_new(100, 100).unwrap()).unwrap();

        let a = &canvas.tiles()[0];
        assert_eq!((a.x, a.y, a.width, a.height), (0, 25, 50, 50));
        let b = &canvas.tiles()[1];
        assert_eq!((b.x, b.y, b.width, b.height), (50, 25, 50, 50));
    }

    #[test]
    fn tall_arrangement_centers_horizontally() {
        let mut canvas = canvas_with(&[(0, 0, 100, 100), (0, 100, 100, 100)]);
        canvas.rescale_to(Viewport::try_new(100, 100).unwrap()).unwrap();

        let a = &canvas.tiles()[0];
        assert_eq!((a.x, a.y, a.width, a.height), (25, 0, 50, 50));
        let b = &canvas.tiles()[1];
        assert_eq!((b.x, b.y, b.width, b.height), (25, 50, 50, 50));
    }

    #[test]
    fn positions_round_up_and_sizes_round_down() {
        // gain = 100/201: fractional everywhere. The right-hand tile's
        // position ceils to 51 while its width floors to 49, so it ends
        // exactly at the viewport edge instead of one unit past it.
        let mut canvas = canvas_with(&[(0, 0, 100, 100), (101, 0, 100, 100)]);
        canvas.rescale_to(Viewport::try_new(100, 100).unwrap()).unwrap();

        let a = &canvas.tiles()[0];
        assert_eq!((a.x, a.y, a.width, a.height), (0, 25, 49, 49));
        let b = &canvas.tiles()[1];
        assert_eq!((b.x, b.y, b.width, b.height), (51, 25, 49, 49));
        assert_eq!(b.x + b.width, 100);
    }

    #[test]
    fn origin_moves_to_the_viewport_frame() {
        // a canvas living far from the origin comes back to [0, viewport)
        let mut canvas = canvas_with(&[(4950, 4950, 100, 100)]);
        canvas.rescale_to(Viewport::try_new(100, 100).unwrap()).unwrap();

        let a = &canvas.tiles()[0];
        assert_eq!((a.x, a.y, a.width, a.height), (0, 0, 100, 100));
    }

    #[test]
    fn rescaling_an_empty_canvas_is_degenerate() {
        let mut canvas = Canvas::new();
        assert!(matches!(
            canvas.rescale_to(Viewport::default()),
            Err(LayoutError::DegenerateCanvas)
        ));
    }
}
