use std::time::Instant;

use crate::simulation::engine::step_with_stats;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// Deterministic registry of `n` bodies spread over the world, no rand needed
pub fn bench_system(n: usize, params: &Parameters) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        let radius = 4.0 + (i_f * 0.29).sin().abs() * 6.0;
        let x = NVec2::new(
            0.5 * params.width + (i_f * 0.37).sin() * (0.5 * params.width - radius),
            0.5 * params.height + (i_f * 0.13).cos() * (0.5 * params.height - radius),
        );
        let v = NVec2::new((i_f * 0.71).cos() * 150.0, (i_f * 0.53).sin() * 150.0);

        bodies.push(Body::new(x, v, radius, [255, 255, 255]));
    }

    System::with_bodies(bodies)
}

pub fn bench_step() {
    // Brute-force pair sweep: expect roughly 4x per doubling
    let ns = [50, 100, 200, 400, 800, 1600];
    let steps = 60; // one second of frames at 60 Hz
    let params = Parameters::default();
    let dt = 1.0 / 60.0;

    for n in ns {
        let mut sys = bench_system(n, &params);

        // Warm up
        step_with_stats(&mut sys, &params, dt);

        let mut contacts = 0;
        let t0 = Instant::now();
        for _ in 0..steps {
            contacts += step_with_stats(&mut sys, &params, dt).contacts;
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, step = {:10.6} s, contacts/step = {:8.1}", per_step, contacts as f64 / steps as f64);
    }
}
