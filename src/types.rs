//! Plane-space value types shared across the layout engine.
//!
//! Coordinates are signed integers on an unbounded plane; all division is
//! Rust's truncating integer division. Floating point only appears in the
//! rescale pass.

use std::fmt;

use crate::layout::defaults;

/// Error type for invalid viewport dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionError {
    /// Dimension is zero
    Zero,
    /// Dimension is negative
    Negative,
}

impl fmt::Display for DimensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimensionError::Zero => write!(f, "dimension is zero"),
            DimensionError::Negative => write!(f, "dimension is negative"),
        }
    }
}

impl std::error::Error for DimensionError {}

/// A 1D span along one axis (the projection of a tile).
///
/// `lo <= hi` is assumed, not enforced; spans are built from tiles whose
/// dimensions were validated at insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub lo: i64,
    pub hi: i64,
}

impl Span {
    #[inline]
    pub const fn new(lo: i64, hi: i64) -> Span {
        Span { lo, hi }
    }
}

/// A position on the plane (a prospective or final tile top-left corner).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlanePoint {
    pub x: i64,
    pub y: i64,
}

impl PlanePoint {
    #[inline]
    pub const fn new(x: i64, y: i64) -> PlanePoint {
        PlanePoint { x, y }
    }
}

impl fmt::Display for PlanePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// The mass-weighted centre of one tile or of a whole canvas.
///
/// Mass is area; the centroid of a canvas is recomputed on demand and never
/// stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Centroid {
    pub x: i64,
    pub y: i64,
    pub mass: i64,
}

/// One placeable rectangle: a photo's dimensions plus its assigned position.
///
/// `x,y` is the top-left corner in the shared plane. The engine overwrites
/// the position when placing and both position and size during the final
/// rescale; it never interprets `source`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    /// Opaque identifier (file path, URL) carried through for the caller.
    pub source: String,
}

impl Tile {
    /// Create a tile at the origin. Dimensions are validated when the tile
    /// enters a canvas, not here.
    pub fn new(width: i64, height: i64, source: impl Into<String>) -> Tile {
        Tile {
            x: 0,
            y: 0,
            width,
            height,
            source: source.into(),
        }
    }

    /// Projection onto the x axis.
    #[inline]
    pub fn span_x(&self) -> Span {
        Span::new(self.x, self.x + self.width)
    }

    /// Projection onto the y axis.
    #[inline]
    pub fn span_y(&self) -> Span {
        Span::new(self.y, self.y + self.height)
    }

    /// Area, used as mass in centroid computations.
    #[inline]
    pub fn mass(&self) -> i64 {
        self.width * self.height
    }

    /// Centre point (truncating division).
    #[inline]
    pub fn center(&self) -> PlanePoint {
        PlanePoint::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// This tile's own centroid: its centre weighted by its area.
    pub fn centroid(&self) -> Centroid {
        let center = self.center();
        Centroid {
            x: center.x,
            y: center.y,
            mass: self.mass(),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} ({},{})->({},{})",
            self.source,
            self.x,
            self.y,
            self.x + self.width,
            self.y + self.height
        )
    }
}

/// A validated target size for the rescale pass.
///
/// Construction rejects non-positive dimensions so the rescaler never has
/// to re-check them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    width: i64,
    height: i64,
}

impl Viewport {
    /// Create a Viewport with validation (rejects zero or negative sizes)
    pub fn try_new(width: i64, height: i64) -> Result<Viewport, DimensionError> {
        if width == 0 || height == 0 {
            Err(DimensionError::Zero)
        } else if width < 0 || height < 0 {
            Err(DimensionError::Negative)
        } else {
            Ok(Viewport { width, height })
        }
    }

    #[inline]
    pub fn width(&self) -> i64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i64 {
        self.height
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            width: defaults::VIEWPORT_WIDTH,
            height: defaults::VIEWPORT_HEIGHT,
        }
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
