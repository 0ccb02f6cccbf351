//! The physics stepper
//!
//! One call advances the whole registry by one frame:
//! 1. integrate + resolve boundaries for each body (`integrator`)
//! 2. sweep all unordered pairs once (`collision`)
//!
//! The caller is expected to have clamped `dt` (see `Parameters::clamp_dt`).

use super::collision::{resolve_pairs, PairStats};
use super::integrator::euler_integrator;
use super::params::Parameters;
use super::states::System;

/// Advance `sys` by one frame of length `dt`
pub fn step(sys: &mut System, params: &Parameters, dt: f64) {
    step_with_stats(sys, params, dt);
}

/// Same as [`step`], also reporting what the pairwise sweep did
pub fn step_with_stats(sys: &mut System, params: &Parameters, dt: f64) -> PairStats {
    debug_assert!(dt.is_finite() && dt >= 0.0, "dt must be finite and non-negative, got {dt}");

    euler_integrator(sys, params, dt);
    resolve_pairs(sys, params.bounce_factor)
}
