//! Per-tick force accumulation.

use na::vector;

use crate::mass::Mass;
use crate::spring::Spring;
use crate::types::Float;

/// Add every spring's Hooke-law contribution to its endpoints'
/// accelerations. Contributions from several springs on one mass sum, so
/// accelerations must be zero when this pass begins; the integrator resets
/// them at the end of the previous tick.
pub fn accumulate_spring_forces(masses: &mut [Mass], springs: &[Spring]) {
    for spring in springs {
        let delta = masses[spring.b].position - masses[spring.a].position;
        let length = delta.norm();
        let unit = delta / length;

        // hooke = -k (x - x0), along the a-to-b direction
        let hooke = -spring.stiffness * (length - spring.rest_length) * unit;

        // Both halves of the action-reaction pair are scaled by b's
        // inertia. Inert for uniform-mass bodies.
        let acc_b = hooke / masses[spring.b].mass;
        masses[spring.b].acceleration += acc_b;
        masses[spring.a].acceleration -= acc_b;
    }
}

/// Add gravity and velocity-proportional damping to every mass, fixed ones
/// included; anchors accumulate acceleration that the integrator simply
/// never applies.
pub fn apply_gravity_and_damping(masses: &mut [Mass], gravity: Float, damping: Float) {
    for mass in masses.iter_mut() {
        let drag = -damping * mass.velocity / mass.mass;
        mass.acceleration += vector![0.0, -gravity, 0.0] + drag;
    }
}
