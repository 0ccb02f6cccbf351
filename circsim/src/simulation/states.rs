//! Core state types for the circle simulation.
//!
//! - `Body`   one rigid circle (position, velocity, radius, color)
//! - `System` the body registry: an append-only, ordered list of bodies
//!   plus the accumulated simulation time `t`
//!
//! Coordinates are screen-like: x grows to the right, y grows downward,
//! so gravity is positive along y and the floor sits at `y = height`.

use nalgebra::Vector2;
use rand::Rng;

pub type NVec2 = Vector2<f64>;

/// Display color carried through the physics untouched
pub type Rgb = [u8; 3];

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec2, // center position
    pub v: NVec2, // velocity
    radius: f64,  // fixed for the lifetime of the body
    pub color: Rgb,
}

impl Body {
    pub fn new(x: NVec2, v: NVec2, radius: f64, color: Rgb) -> Self {
        debug_assert!(radius > 0.0, "body radius must be positive, got {radius}");
        Self { x, v, radius, color }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Mass is the radius; never zero for a valid body
    pub fn mass(&self) -> f64 {
        self.radius
    }

    pub fn inv_mass(&self) -> f64 {
        self.radius.recip()
    }
}

/// Index of a body in registry order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub usize);

impl BodyHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Half-open uniform bounds for a freshly spawned body's velocity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityRange {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl Default for VelocityRange {
    fn default() -> Self {
        Self {
            x: (-200.0, 200.0),
            y: (-100.0, 100.0),
        }
    }
}

impl VelocityRange {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> NVec2 {
        NVec2::new(uniform(rng, self.x), uniform(rng, self.y))
    }
}

fn uniform<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
    if lo < hi {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    [rng.gen_range(0..255), rng.gen_range(0..255), rng.gen_range(0..255)]
}

/// The body registry. Bodies are only ever appended; identity is the index.
#[derive(Debug, Clone, Default)]
pub struct System {
    bodies: Vec<Body>,
    pub t: f64, // accumulated simulation time
}

impl System {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bodies(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    /// Append a body at `(x, y)` with a random velocity inside `velocity`
    /// and a random color. Always succeeds.
    pub fn spawn<R: Rng + ?Sized>(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        velocity: &VelocityRange,
        rng: &mut R,
    ) -> BodyHandle {
        let v = velocity.sample(rng);
        let color = random_color(rng);
        self.insert(Body::new(NVec2::new(x, y), v, radius, color))
    }

    /// Append a fully specified body
    pub fn insert(&mut self, body: Body) -> BodyHandle {
        self.bodies.push(body);
        BodyHandle(self.bodies.len() - 1)
    }

    pub fn get(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.get(handle.0)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.bodies.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Body> {
        self.bodies.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Handle of the most recently inserted body
    pub fn last(&self) -> Option<BodyHandle> {
        self.bodies.len().checked_sub(1).map(BodyHandle)
    }
}

impl<'a> IntoIterator for &'a System {
    type Item = &'a Body;
    type IntoIter = std::slice::Iter<'a, Body>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.iter()
    }
}
