//! Circle-circle overlap detection.

use crate::simulation::states::{Body, NVec2};

/// Geometry of one overlapping pair, measured from body `a` to body `b`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub delta: NVec2,      // b.x - a.x
    pub distance: f64,     // |delta|, strictly positive
    pub min_distance: f64, // a.radius + b.radius
}

impl Contact {
    /// Unit vector from `a` toward `b`
    pub fn normal(&self) -> NVec2 {
        self.delta / self.distance
    }

    /// Half the signed gap between the edges; negative while overlapping
    pub fn overlap(&self) -> f64 {
        0.5 * (self.distance - self.min_distance)
    }

    /// Displacement applied to `a` (and negated for `b`) that makes the
    /// edges exactly tangent
    pub fn offset(&self) -> NVec2 {
        self.delta * (self.overlap() / self.distance)
    }
}

/// Outcome of testing one pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Detection {
    /// Edges do not overlap
    Apart,
    /// Centers coincide exactly; the contact normal is undefined
    Coincident,
    Overlapping(Contact),
}

pub fn detect(a: &Body, b: &Body) -> Detection {
    let delta = b.x - a.x;
    let distance = delta.norm();
    let min_distance = a.radius() + b.radius();

    if distance >= min_distance {
        return Detection::Apart;
    }
    if distance == 0.0 {
        return Detection::Coincident;
    }

    Detection::Overlapping(Contact {
        delta,
        distance,
        min_distance,
    })
}
