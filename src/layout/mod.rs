//! Plane layout: the centroid-gravity placement engine.
//!
//! This module is organized into submodules:
//! - `defaults`: Default session settings
//! - `overlap`: 1D/2D overlap tests with signed slack diagnostics
//! - `anchors`: Candidate position generation for an incoming tile
//! - `canvas`: The growing non-overlapping tile collection and `place`
//! - `rescale`: Final pass fitting a finished canvas into a viewport

pub mod canvas;
pub mod defaults;
pub mod overlap;
pub mod rescale;

pub(crate) mod anchors;

// Re-export commonly used items
pub use canvas::{Canvas, LayoutConfig};
pub use overlap::{SpanOverlap, TileOverlap, span_overlap, tile_overlap};
