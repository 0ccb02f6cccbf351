pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, BodyHandle, System, NVec2, Rgb, VelocityRange};
pub use simulation::params::Parameters;
pub use simulation::engine::{step, step_with_stats};
pub use simulation::collision::{detect, Contact, Detection, PairStats};
pub use simulation::scenario::Scenario;

pub use configuration::config::{WorldConfig, ParametersConfig, PopulationConfig, BodyConfig, ScenarioConfig};

pub use visualization::circsim_vis2d::run_2d;

pub use benchmark::benchmark::bench_step;
