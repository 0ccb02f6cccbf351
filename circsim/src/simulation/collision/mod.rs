//! Pairwise circle collisions.
//!
//! - **Detection**: overlap test between two circles, producing a `Contact`
//! - **Resolution**: equal positional split along the normal, then a single
//!   restitution impulse weighted by inverse mass
//!
//! Every unordered pair `(i, j)` with `i < j` is visited once per frame in
//! registry order. There is no broad phase and no second pass: a pair
//! resolved early is not revisited after a later pair moves one of its
//! bodies again.

pub mod detection;
pub mod resolution;

pub use detection::*;
pub use resolution::*;
