//! Default session settings (plane coordinates are dimensionless integers)

/// Centre coordinate of the notional plane the first tile is seeded on.
/// Large enough that sessions of hundreds of photos never walk past zero,
/// small enough that squared distances stay far from overflow.
pub const PLANE_CENTER: i64 = 5000;

/// Weight on the vertical term of the placement cost. 2 biases layouts
/// toward horizontal spread over vertical spread.
pub const VERTICAL_BIAS: i64 = 2;

/// Default viewport width in output units.
pub const VIEWPORT_WIDTH: i64 = 1200;

/// Default viewport height in output units.
pub const VIEWPORT_HEIGHT: i64 = 800;
