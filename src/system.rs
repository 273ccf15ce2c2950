//! The simulation driver: owns the mass and spring collections for the
//! active preset and advances them tick by tick.

use na::Vector3;

use crate::dynamics::{accumulate_spring_forces, apply_gravity_and_damping};
use crate::helpers::build_preset;
use crate::integrators::semi_implicit_euler;
use crate::mass::Mass;
use crate::spring::Spring;
use crate::types::Float;
use crate::{DAMPING, GRAVITY};

/// The four body topologies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    SingleSpring,
    Chain,
    Cube,
    Cloth,
}

/// A deformable body: point masses joined by springs, plus the physical
/// configuration the passes read. The system is the sole mutator of its
/// collections; the presentation layer only ever sees them read-only
/// between ticks.
pub struct SpringMassSystem {
    pub preset: Preset,
    pub masses: Vec<Mass>,
    pub springs: Vec<Spring>,

    /// Gravity magnitude, applied along -y.
    pub gravity: Float,
    /// Velocity-proportional damping coefficient.
    pub damping: Float,
    /// Floor plane height; masses are clamped onto it when set.
    pub floor: Option<Float>,
}

impl SpringMassSystem {
    pub fn new(
        preset: Preset,
        masses: Vec<Mass>,
        springs: Vec<Spring>,
        floor: Option<Float>,
    ) -> Self {
        for spring in &springs {
            assert!(
                spring.a < masses.len() && spring.b < masses.len(),
                "spring ({}, {}) out of bounds for {} masses",
                spring.a,
                spring.b,
                masses.len()
            );
        }

        SpringMassSystem {
            preset,
            masses,
            springs,
            gravity: GRAVITY,
            damping: DAMPING,
            floor,
        }
    }

    /// Advance the system by one fixed timestep: accumulate every spring
    /// force over pre-step positions, add gravity and damping, then
    /// integrate all masses. Springs are never interleaved with
    /// integration within a tick.
    pub fn step(&mut self, dt: Float) {
        accumulate_spring_forces(&mut self.masses, &self.springs);
        apply_gravity_and_damping(&mut self.masses, self.gravity, self.damping);
        semi_implicit_euler(&mut self.masses, self.floor, dt);
    }

    /// Swap in another preset's body. Masses, springs, floor policy and the
    /// preset tag are replaced in one assignment, between ticks, so no pass
    /// ever sees a half-rebuilt body. Gravity and damping tuning carries
    /// over.
    pub fn load_preset(&mut self, preset: Preset) {
        let gravity = self.gravity;
        let damping = self.damping;

        *self = build_preset(preset);

        self.gravity = gravity;
        self.damping = damping;
    }

    /// Current mass positions, in mass order: the point-mesh input of a
    /// renderer.
    pub fn positions(&self) -> Vec<Vector3<Float>> {
        self.masses.iter().map(|m| m.position).collect()
    }

    /// Endpoint index pairs of all springs: the line-mesh input of a
    /// renderer.
    pub fn spring_indices(&self) -> Vec<[usize; 2]> {
        self.springs.iter().map(|s| [s.a, s.b]).collect()
    }
}

#[cfg(test)]
mod system_tests {
    use itertools::izip;
    use na::{vector, Vector3};
    use rand::rng;

    use crate::helpers::{build_chain, build_cloth, build_cube, build_single_spring, CUBE_FLOOR};
    use crate::util::test_utils::random_vector;
    use crate::{assert_close, assert_vec_close, TIMESTEP};

    use super::*;

    /// One tick of the single-spring preset, checked against the
    /// hand-computed Hooke + gravity + damping update.
    #[test]
    fn single_spring_one_tick_literal() {
        let mut system = build_single_spring();

        system.step(TIMESTEP);

        // delta = (2, -1.5, 0), length 2.5, unit = (0.8, -0.6, 0)
        // hooke = -25 (2.5 - 1) unit = (-30, 22.5, 0)
        // acc   = hooke + gravity = (-30, 12.69, 0)
        // v1    = acc * dt        = (-0.3, 0.1269, 0)
        // p1    = p0 + v1 * dt    = (1.997, 2.001269, 0)
        let free = &system.masses[1];
        assert_vec_close!(free.velocity, vector![-0.3, 0.1269, 0.0], 1e-6);
        assert_vec_close!(free.position, vector![1.997, 2.001269, 0.0], 1e-6);

        // anchor untouched
        assert_eq!(system.masses[0].position, vector![0.0, 3.5, 0.0]);
        assert_eq!(system.masses[0].velocity, Vector3::zeros());

        // scratch accumulators cleared for the next tick
        for mass in &system.masses {
            assert_eq!(mass.acceleration, Vector3::zeros());
        }
    }

    /// Two identically-built systems stay bit-identical over many ticks.
    #[test]
    fn determinism() {
        let mut rng = rng();
        let kick = random_vector(&mut rng, 1.0);

        let mut a = build_cloth(5, 6);
        let mut b = build_cloth(5, 6);
        a.masses[12].velocity = kick;
        b.masses[12].velocity = kick;

        for _ in 0..1000 {
            a.step(TIMESTEP);
            b.step(TIMESTEP);
        }

        for (ma, mb) in izip!(a.masses.iter(), b.masses.iter()) {
            assert_eq!(ma.position, mb.position);
            assert_eq!(ma.velocity, mb.velocity);
        }
    }

    /// A displaced spring oscillates and settles back to rest length as
    /// damping bleeds energy off.
    #[test]
    fn single_spring_settles_to_rest_length() {
        let mut system = build_single_spring();
        system.gravity = 0.0; // isolate the spring from gravity sag

        let final_time = 30.0;
        let num_steps = (final_time / TIMESTEP) as usize;
        let mut lengths = vec![system.springs[0].length(&system.masses)];
        for _ in 0..num_steps {
            system.step(TIMESTEP);
            lengths.push(system.springs[0].length(&system.masses));
        }

        // underdamped: the length overshoots rest length on the way
        assert!(lengths.iter().any(|l| *l < 1.0));
        // convergence
        assert_close!(*lengths.last().unwrap(), 1.0, 1e-2);
    }

    /// Fixed masses are immune to any number of ticks.
    #[test]
    fn anchors_hold_through_simulation() {
        let mut system = build_chain();
        for _ in 0..500 {
            system.step(TIMESTEP);
        }

        assert_eq!(system.masses[0].position, vector![0.0, 3.5, 0.0]);
        assert_eq!(system.masses[0].velocity, Vector3::zeros());
    }

    /// The chain hangs: after settling, every free mass sits below the
    /// anchor.
    #[test]
    fn chain_hangs_below_anchor() {
        let mut system = build_chain();
        let final_time = 20.0;
        let num_steps = (final_time / TIMESTEP) as usize;
        for _ in 0..num_steps {
            system.step(TIMESTEP);
        }

        let anchor_y = system.masses[0].position.y;
        for mass in &system.masses[1..] {
            assert!(
                mass.position.y < anchor_y,
                "free mass above anchor: {}",
                mass.position.y
            );
            assert!(
                mass.position.y.is_finite(),
                "simulation produced a non-finite position"
            );
        }
    }

    /// Preset switch replaces the whole body at once.
    #[test]
    fn load_preset_replaces_wholesale() {
        let mut system = build_single_spring();
        for _ in 0..100 {
            system.step(TIMESTEP);
        }

        system.load_preset(Preset::Cloth);
        assert_eq!(system.preset, Preset::Cloth);
        assert_eq!(system.masses.len(), 30);
        assert_eq!(system.springs.len(), 89);
        assert_eq!(system.floor, None);

        system.load_preset(Preset::Cube);
        assert_eq!(system.preset, Preset::Cube);
        assert_eq!(system.masses.len(), 27);
        assert_eq!(system.floor, Some(CUBE_FLOOR));
    }

    /// The cube falls, lands on the floor plane and comes to rest above it.
    #[test]
    fn cube_comes_to_rest_on_floor() {
        let mut system = build_cube(3);

        let final_time = 8.0;
        let num_steps = (final_time / TIMESTEP) as usize;
        for _ in 0..num_steps {
            system.step(TIMESTEP);
        }

        for mass in &system.masses {
            assert!(
                mass.position.y >= CUBE_FLOOR - 1e-5,
                "mass below floor: {}",
                mass.position.y
            );
            assert!(
                mass.velocity.norm() < 0.05,
                "still moving at {}",
                mass.velocity.norm()
            );
        }
    }

    /// The renderer views match the collections element for element.
    #[test]
    fn render_views_mirror_state() {
        let system = build_cloth(5, 6);

        let positions = system.positions();
        assert_eq!(positions.len(), system.masses.len());
        assert_eq!(positions[0], system.masses[0].position);

        let indices = system.spring_indices();
        assert_eq!(indices.len(), system.springs.len());
        assert_eq!(indices[0], [system.springs[0].a, system.springs[0].b]);
    }
}
