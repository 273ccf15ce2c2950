//! Semi-implicit Euler integration with anchor and floor constraints.

use na::Vector3;

use crate::mass::Mass;
use crate::types::Float;

/// Advance every mass by one timestep:
///     v(k+1) = v(k) + dt * a
///     p(k+1) = p(k) + dt * v(k+1)
/// Fixed masses keep their velocity and position. With a floor active, a
/// mass ending the tick below it is clamped onto the plane and its vertical
/// velocity zeroed (inelastic contact; horizontal velocity is preserved).
/// Every acceleration is reset to zero for the next tick's force pass,
/// anchors included.
pub fn semi_implicit_euler(masses: &mut [Mass], floor: Option<Float>, dt: Float) {
    for mass in masses.iter_mut() {
        if !mass.fixed {
            mass.velocity += mass.acceleration * dt;
            mass.position += mass.velocity * dt;

            if let Some(floor) = floor {
                if mass.position.y < floor {
                    mass.position.y = floor;
                    mass.velocity.y = 0.0;
                }
            }
        }
        mass.acceleration = Vector3::zeros();
    }
}
