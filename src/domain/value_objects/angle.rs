//! Fixed-point angles in 1/64-degree units
//!
//! Slices are stored the way X11 arcs are: integer angles where 64 units make
//! one degree, measured counter-clockwise from the positive x axis. Divisions
//! truncate, so a circle split into a count that does not divide `FULL_TURN`
//! loses the remainder in each start boundary.

use std::f64::consts::PI;

/// Units per degree
pub const UNITS_PER_DEGREE: i32 = 64;

/// One full turn (360 degrees)
pub const FULL_TURN: i32 = 360 * UNITS_PER_DEGREE;

/// Half a turn, used for radian conversion
const HALF_TURN: f64 = (180 * UNITS_PER_DEGREE) as f64;

/// An angle in 1/64-degree units
pub type Angle = i32;

/// Wrap an angle into `[0, FULL_TURN)`
pub fn wrap(angle: Angle) -> Angle {
    angle.rem_euclid(FULL_TURN)
}

/// Convert to radians
pub fn to_radians(angle: Angle) -> f64 {
    f64::from(angle) * PI / HALF_TURN
}

/// Convert radians to a wrapped fixed-point angle, truncating toward zero
pub fn from_radians(radians: f64) -> Angle {
    wrap((radians * HALF_TURN / PI) as i32)
}

/// Unwrapped centre of slice `index` when a circle is divided into `count`
/// slices. Slice 0 is centred on 0 degrees.
pub fn slice_center(index: usize, count: usize) -> Angle {
    if count == 0 {
        return 0;
    }
    ((i64::from(FULL_TURN) * index as i64) / count as i64) as Angle
}

/// Whether `angle` falls inside `[start, start + span)` modulo a full turn
pub fn in_slice(angle: Angle, start: Angle, span: Angle) -> bool {
    wrap(angle - start) < span
}
