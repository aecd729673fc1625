// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

// Pi
/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

// Frac Pi 2
/// π/2
#[cfg(feature = "f32")]
pub const FRAC_PI_2: Real = core::f32::consts::FRAC_PI_2;
/// π/2
#[cfg(feature = "f64")]
pub const FRAC_PI_2: Real = core::f64::consts::FRAC_PI_2;

// Tau
/// The full circle constant (τ)
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
/// The full circle constant (τ)
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;

/// Grid spacing used to bucket lengths (metres) and angles (radians).
///
/// Changing it changes which measurements merge into one class, so reports
/// produced with different resolutions are not comparable.
pub const DEFAULT_RESOLUTION: Real = 1e-4;

/// Relative distance to a grid line under which a quotient is considered to
/// sit exactly on it.
#[cfg(feature = "f32")]
pub const GRID_SNAP: Real = 1e-5;
/// Relative distance to a grid line under which a quotient is considered to
/// sit exactly on it.
#[cfg(feature = "f64")]
pub const GRID_SNAP: Real = 1e-9;

/// Convert radians to degrees.
#[inline]
pub fn to_degrees(radians: Real) -> Real {
    radians * 180.0 / PI
}

/// Convert degrees to radians.
#[inline]
pub fn to_radians(degrees: Real) -> Real {
    degrees * PI / 180.0
}
