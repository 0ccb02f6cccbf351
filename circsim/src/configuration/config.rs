//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`WorldConfig`]      – boundary box extents
//! - [`ParametersConfig`] – gravity, restitution and the delta clamp
//! - [`PopulationConfig`] – how many random bodies to create and their ranges
//! - [`BodyConfig`]       – optional explicit bodies
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! world:
//!   width: 800.0
//!   height: 600.0
//!
//! parameters:
//!   gravity: 980.0          # acceleration along +y (screen down)
//!   bounce_factor: 0.7      # restitution in (0, 1]
//!   max_dt: 0.1             # largest frame delta passed to the stepper
//!
//! population:
//!   count: 60
//!   radius: [10.0, 30.0]
//!   velocity_x: [-200.0, 200.0]
//!   velocity_y: [-100.0, 100.0]
//!   spawn_radius: 15.0      # radius of bodies added by clicking
//!   seed: 42                # optional, entropy when absent
//!
//! bodies:
//!   - x: [100.0, 100.0]
//!     v: [50.0, 0.0]
//!     radius: 10.0
//!     color: [255, 0, 0]    # optional
//! ```
//!
//! Every section but `world` may be omitted.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::Deserialize;

/// Extents of the boundary box
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
}

/// Physical constants for the stepper
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    pub gravity: f64,
    pub bounce_factor: f64,
    pub max_dt: f64,
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            gravity: 980.0,
            bounce_factor: 0.7,
            max_dt: 0.1,
        }
    }
}

/// Random initial population and click-spawn settings
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PopulationConfig {
    pub count: usize,
    pub radius: [f64; 2],     // half-open [min, max)
    pub velocity_x: [f64; 2], // half-open [min, max)
    pub velocity_y: [f64; 2], // half-open [min, max)
    pub spawn_radius: f64,
    pub seed: Option<u64>,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            count: 60,
            radius: [10.0, 30.0],
            velocity_x: [-200.0, 200.0],
            velocity_y: [-100.0, 100.0],
            spawn_radius: 15.0,
            seed: None,
        }
    }
}

/// Configuration for a single explicit body
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub x: [f64; 2], // center position
    #[serde(default)]
    pub v: [f64; 2], // initial velocity
    pub radius: f64,
    pub color: Option<[u8; 3]>, // random when absent
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    pub world: WorldConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub population: PopulationConfig,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    /// Parse and validate a scenario from YAML text
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let cfg: ScenarioConfig = serde_yaml::from_str(text).context("malformed scenario YAML")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a scenario file
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open scenario {}", path.display()))?;
        let cfg: ScenarioConfig = serde_yaml::from_reader(BufReader::new(file))
            .with_context(|| format!("malformed scenario {}", path.display()))?;
        cfg.validate()
            .with_context(|| format!("invalid scenario {}", path.display()))?;
        Ok(cfg)
    }

    /// Reject values the physics core treats as preconditions
    pub fn validate(&self) -> Result<()> {
        let w = &self.world;
        ensure!(
            positive(w.width) && positive(w.height),
            "world extents must be positive and finite, got {} x {}",
            w.width,
            w.height
        );

        let p = &self.parameters;
        ensure!(p.gravity.is_finite(), "gravity must be finite, got {}", p.gravity);
        ensure!(
            p.bounce_factor > 0.0 && p.bounce_factor <= 1.0,
            "bounce_factor must lie in (0, 1], got {}",
            p.bounce_factor
        );
        ensure!(positive(p.max_dt), "max_dt must be positive and finite, got {}", p.max_dt);

        let pop = &self.population;
        let [r_min, r_max] = pop.radius;
        ensure!(
            positive(r_min) && positive(r_max) && r_min <= r_max,
            "radius range must be positive, finite and ordered, got [{r_min}, {r_max}]"
        );
        if pop.count > 0 {
            ensure!(
                2.0 * r_max <= w.width && 2.0 * r_max <= 0.5 * w.height,
                "radius range [{r_min}, {r_max}] does not fit the upper half of a {} x {} world",
                w.width,
                w.height
            );
        }
        ensure!(ordered(pop.velocity_x), "velocity_x range must be finite and ordered, got {:?}", pop.velocity_x);
        ensure!(ordered(pop.velocity_y), "velocity_y range must be finite and ordered, got {:?}", pop.velocity_y);
        ensure!(positive(pop.spawn_radius), "spawn_radius must be positive and finite, got {}", pop.spawn_radius);

        for (i, b) in self.bodies.iter().enumerate() {
            ensure!(positive(b.radius), "body {i} needs a positive finite radius, got {}", b.radius);
            ensure!(b.x.iter().all(|c| c.is_finite()), "body {i} has a non-finite position {:?}", b.x);
            ensure!(b.v.iter().all(|c| c.is_finite()), "body {i} has a non-finite velocity {:?}", b.v);
        }

        Ok(())
    }
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn ordered([lo, hi]: [f64; 2]) -> bool {
    lo.is_finite() && hi.is_finite() && lo <= hi && (hi - lo).is_finite()
}
