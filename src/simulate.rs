//! Fixed-timestep simulation loop.

use na::Vector3;

use crate::system::SpringMassSystem;
use crate::types::Float;

/// Step the system from 0 to final_time with a fixed timestep. Returns the
/// mass positions after every tick, the initial state included.
pub fn simulate(
    system: &mut SpringMassSystem,
    final_time: Float,
    dt: Float,
) -> Vec<Vec<Vector3<Float>>> {
    let mut trajectory = vec![system.positions()];

    let mut t = 0.0;
    while t < final_time {
        system.step(dt);
        trajectory.push(system.positions());
        t += dt;
    }

    trajectory
}
