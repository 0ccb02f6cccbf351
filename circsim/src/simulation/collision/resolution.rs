//! Positional correction and impulse response for overlapping pairs.

use bevy::log::debug;

use super::detection::{detect, Contact, Detection};
use crate::simulation::states::{Body, System};

/// Counters for one sweep over all pairs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairStats {
    pub contacts: usize,   // overlapping pairs that were separated
    pub impulses: usize,   // contacts that were approaching and got an impulse
    pub coincident: usize, // pairs skipped because their centers coincide
}

/// Move `a` by `+offset` and `b` by `-offset`, splitting the correction
/// evenly regardless of mass
pub fn separate(a: &mut Body, b: &mut Body, contact: &Contact) {
    let offset = contact.offset();
    a.x += offset;
    b.x -= offset;
}

/// Apply a restitution impulse along the contact normal.
///
/// Returns `false` and leaves both velocities untouched when the pair is
/// already separating along the normal.
pub fn apply_impulse(a: &mut Body, b: &mut Body, contact: &Contact, bounce_factor: f64) -> bool {
    let normal = contact.normal();
    let relative_velocity = b.v - a.v;
    let velocity_along_normal = relative_velocity.dot(&normal);

    if velocity_along_normal > 0.0 {
        return false;
    }

    // j = -(1 + e) * v_n / (1/m_a + 1/m_b)
    let j = -(1.0 + bounce_factor) * velocity_along_normal / (a.inv_mass() + b.inv_mass());
    let impulse = j * normal;

    a.v -= a.inv_mass() * impulse;
    b.v += b.inv_mass() * impulse;
    true
}

/// Detect, separate and resolve one pair
pub fn resolve_pair(a: &mut Body, b: &mut Body, bounce_factor: f64, stats: &mut PairStats) {
    match detect(a, b) {
        Detection::Apart => {}
        Detection::Coincident => stats.coincident += 1,
        Detection::Overlapping(contact) => {
            stats.contacts += 1;
            separate(a, b, &contact);
            if apply_impulse(a, b, &contact, bounce_factor) {
                stats.impulses += 1;
            }
        }
    }
}

/// Sweep every unordered pair `(i, j)`, `i < j`, in registry order
pub fn resolve_pairs(sys: &mut System, bounce_factor: f64) -> PairStats {
    let mut stats = PairStats::default();
    let bodies = sys.bodies_mut();
    let n = bodies.len();

    for i in 0..n {
        // Split so body i and every later body can be borrowed mutably together
        let (head, tail) = bodies.split_at_mut(i + 1);
        let bi = &mut head[i];

        for bj in tail.iter_mut() {
            resolve_pair(bi, bj, bounce_factor, &mut stats);
        }
    }

    if stats.coincident > 0 {
        debug!("skipped {} pair(s) with coincident centers", stats.coincident);
    }

    stats
}
