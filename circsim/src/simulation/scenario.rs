//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! containing:
//! - physical parameters (`Parameters`)
//! - the body registry (`System`), explicit bodies first, then the random
//!   initial population
//! - the random source and ranges used for every later spawn
//!
//! The scenario is inserted into Bevy as a `Resource`; the viewer drives it
//! through `advance` and `spawn`.

use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::{BodyConfig, PopulationConfig, ScenarioConfig};
use crate::simulation::engine::step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{random_color, Body, BodyHandle, NVec2, System, VelocityRange};

#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub velocity: VelocityRange, // bounds for spawned bodies' velocity
    pub spawn_radius: f64,       // radius used by interactive spawns
    rng: StdRng,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        let rng = match cfg.population.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::build_with_rng(cfg, rng)
    }

    /// Build with an explicit random source, ignoring any configured seed
    pub fn build_with_rng(cfg: ScenarioConfig, mut rng: StdRng) -> Self {
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            width: cfg.world.width,
            height: cfg.world.height,
            gravity: p_cfg.gravity,
            bounce_factor: p_cfg.bounce_factor,
            max_dt: p_cfg.max_dt,
        };

        let pop = cfg.population;
        let velocity = VelocityRange {
            x: (pop.velocity_x[0], pop.velocity_x[1]),
            y: (pop.velocity_y[0], pop.velocity_y[1]),
        };

        // Explicit bodies keep their configured velocity
        let mut system = System::new();
        for bc in &cfg.bodies {
            system.insert(explicit_body(bc, &mut rng));
        }

        populate(&mut system, &pop, &parameters, &velocity, &mut rng);

        Self {
            parameters,
            system,
            velocity,
            spawn_radius: pop.spawn_radius,
            rng,
        }
    }

    /// Insert a body at `(x, y)` with a random velocity and color
    pub fn spawn(&mut self, x: f64, y: f64, radius: f64) -> BodyHandle {
        self.system.spawn(x, y, radius, &self.velocity, &mut self.rng)
    }

    /// Advance by exactly `dt`; the caller has already clamped it
    pub fn step(&mut self, dt: f64) {
        step(&mut self.system, &self.parameters, dt);
    }

    /// Advance by a measured frame delta, clamped to `[0, max_dt]`.
    /// Returns the delta actually simulated.
    pub fn advance(&mut self, elapsed: f64) -> f64 {
        let dt = self.parameters.clamp_dt(elapsed);
        self.step(dt);
        dt
    }
}

fn explicit_body<R: Rng + ?Sized>(bc: &BodyConfig, rng: &mut R) -> Body {
    let color = bc.color.unwrap_or_else(|| random_color(rng));
    Body::new(
        NVec2::new(bc.x[0], bc.x[1]),
        NVec2::new(bc.v[0], bc.v[1]),
        bc.radius,
        color,
    )
}

/// Scatter `pop.count` bodies over the upper half of the world.
/// Radius is uniform in `[r_min, r_max)`, x in `[r, width - r]`,
/// y in `[r, height / 2]`.
pub fn populate<R: Rng + ?Sized>(
    sys: &mut System,
    pop: &PopulationConfig,
    params: &Parameters,
    velocity: &VelocityRange,
    rng: &mut R,
) {
    let [r_min, r_max] = pop.radius;

    for _ in 0..pop.count {
        let r = if r_min < r_max { rng.gen_range(r_min..r_max) } else { r_min };
        let x = span(rng, r, params.width - r);
        let y = span(rng, r, 0.5 * params.height);
        sys.spawn(x, y, r, velocity, rng);
    }
}

fn span<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if lo < hi {
        rng.gen_range(lo..=hi)
    } else {
        lo
    }
}
