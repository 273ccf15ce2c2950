//! Mechanical energy diagnostics for tests and demos.

use crate::system::SpringMassSystem;
use crate::types::Float;

/// Total kinetic energy, 1/2 m v².
pub fn kinetic_energy(system: &SpringMassSystem) -> Float {
    system
        .masses
        .iter()
        .map(|m| 0.5 * m.mass * m.velocity.norm_squared())
        .sum()
}

/// Elastic energy stored in the springs, 1/2 k (l - l0)².
pub fn elastic_potential_energy(system: &SpringMassSystem) -> Float {
    system
        .springs
        .iter()
        .map(|s| {
            let stretch = s.length(&system.masses) - s.rest_length;
            0.5 * s.stiffness * stretch * stretch
        })
        .sum()
}

/// Gravitational potential energy, m g h, measured from y = 0.
pub fn gravitational_potential_energy(system: &SpringMassSystem) -> Float {
    system
        .masses
        .iter()
        .map(|m| m.mass * system.gravity * m.position.y)
        .sum()
}

/// Total mechanical energy of the system.
pub fn total_energy(system: &SpringMassSystem) -> Float {
    kinetic_energy(system) + elastic_potential_energy(system) + gravitational_potential_energy(system)
}
