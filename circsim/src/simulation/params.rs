//! Physical parameters for the simulation
//!
//! `Parameters` is passed explicitly into the stepper:
//! - world extents (`width`, `height`), the static boundary box,
//! - gravity along +y and the restitution `bounce_factor`,
//! - `max_dt`, the upper clamp applied to frame deltas by the driver

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub width: f64,         // boundary extent along x
    pub height: f64,        // boundary extent along y (floor)
    pub gravity: f64,       // acceleration along +y
    pub bounce_factor: f64, // restitution in (0, 1]
    pub max_dt: f64,        // largest delta a single step may see
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            gravity: 980.0,
            bounce_factor: 0.7,
            max_dt: 0.1,
        }
    }
}

impl Parameters {
    /// Clamp a measured frame delta into `[0, max_dt]`. NaN becomes 0.
    /// The result is never negative, even for a hand-built negative `max_dt`.
    pub fn clamp_dt(&self, dt: f64) -> f64 {
        if dt.is_nan() {
            return 0.0;
        }
        dt.min(self.max_dt).max(0.0)
    }
}
