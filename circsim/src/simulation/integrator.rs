//! Per-body time integration and boundary response
//!
//! Semi-implicit Euler: gravity kicks the velocity first, then the
//! position drifts with the updated velocity. Each body is then pushed
//! back inside the `width x height` box, one wall at a time.

use super::params::Parameters;
use super::states::{Body, System};

/// Advance every body of `sys` by `dt`, then resolve its boundary contacts
pub fn euler_integrator(sys: &mut System, params: &Parameters, dt: f64) {
    for b in sys.iter_mut() {
        integrate_body(b, params, dt);
        resolve_boundaries(b, params);
    }
    sys.t += dt;
}

/// Kick then drift:
/// v_n+1 = v_n + dt * g
/// x_n+1 = x_n + dt * v_n+1
pub fn integrate_body(b: &mut Body, params: &Parameters, dt: f64) {
    b.v.y += params.gravity * dt;
    b.x += dt * b.v;
}

/// Clamp the body so its edge is tangent to any wall it touched or crossed
/// and reflect that axis of the velocity, scaled by the bounce factor.
///
/// Checks run floor, ceiling, left, right. They are independent: a corner
/// hit clamps both axes in the same call, and each check only writes its
/// own axis.
///
/// Touching counts as crossing, so a body lying exactly tangent to a wall
/// is reflected even on a zero-length frame; a resting body moving away
/// from the floor gets turned back into it at reduced speed.
pub fn resolve_boundaries(b: &mut Body, params: &Parameters) {
    let r = b.radius();
    let bounce = params.bounce_factor;

    // Floor
    if b.x.y + r >= params.height {
        b.x.y = params.height - r;
        b.v.y = -b.v.y * bounce;
    }
    // Ceiling
    if b.x.y - r <= 0.0 {
        b.x.y = r;
        b.v.y = -b.v.y * bounce;
    }
    // Left wall
    if b.x.x - r <= 0.0 {
        b.x.x = r;
        b.v.x = -b.v.x * bounce;
    }
    // Right wall
    if b.x.x + r >= params.width {
        b.x.x = params.width - r;
        b.v.x = -b.v.x * bounce;
    }
}
