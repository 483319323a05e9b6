//! Error types for layout failures.
//!
//! Every variant is a recoverable condition reported back to the caller;
//! nothing in the engine terminates the process on bad input. Placement is
//! deterministic given its inputs, so there are no retries — recovery means
//! the caller skips the offending tile or changes the session parameters.

use miette::Diagnostic;
use thiserror::Error;

/// Errors produced while building or rescaling a canvas
#[derive(Error, Diagnostic, Debug)]
pub enum LayoutError {
    /// The canvas has zero total mass, so its centroid (and any bounding
    /// box derived from it) is undefined.
    #[error("canvas has zero total mass")]
    #[diagnostic(
        code(gravitile::layout::degenerate_canvas),
        help("seed the canvas with at least one tile before placing or rescaling")
    )]
    DegenerateCanvas,

    /// A tile with a non-positive width or height was handed to the canvas.
    #[error("tile {tile:?} has invalid dimensions {width}x{height}")]
    #[diagnostic(
        code(gravitile::layout::invalid_tile),
        help("tile width and height must both be positive")
    )]
    InvalidTile {
        width: i64,
        height: i64,
        tile: String,
    },

    /// No candidate position cleared every tile already on the canvas.
    #[error("no non-overlapping position found for tile {tile:?}")]
    #[diagnostic(code(gravitile::layout::no_valid_placement))]
    NoValidPlacement { tile: String },
}
