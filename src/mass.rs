use na::Vector3;

use crate::types::Float;

/// A point particle with scalar mass and a fixed/free flag.
///
/// `acceleration` is per-tick scratch: the force pass sums into it and the
/// integrator consumes it and zeroes it, so it is zero between ticks.
#[derive(Clone, Debug, PartialEq)]
pub struct Mass {
    pub mass: Float,
    pub fixed: bool,

    pub position: Vector3<Float>,
    pub velocity: Vector3<Float>,
    pub acceleration: Vector3<Float>,
}

impl Mass {
    /// A free mass at rest at the given position.
    pub fn new(mass: Float, position: Vector3<Float>) -> Self {
        assert!(mass > 0.0, "mass must be positive, got {}", mass);
        Mass {
            mass,
            fixed: false,
            position,
            velocity: Vector3::zeros(),
            acceleration: Vector3::zeros(),
        }
    }

    /// A fixed anchor. It accumulates acceleration like any other mass, but
    /// the integrator never applies it.
    pub fn anchor(mass: Float, position: Vector3<Float>) -> Self {
        let mut m = Mass::new(mass, position);
        m.fixed = true;
        m
    }
}

#[cfg(test)]
mod mass_tests {
    use na::vector;

    use super::*;

    #[test]
    fn new_mass_starts_at_rest() {
        let m = Mass::new(0.5, vector![1.0, 2.0, 3.0]);
        assert!(!m.fixed);
        assert_eq!(m.velocity, Vector3::zeros());
        assert_eq!(m.acceleration, Vector3::zeros());
    }

    #[test]
    fn anchor_is_fixed() {
        let m = Mass::anchor(1.0, vector![0.0, 3.5, 0.0]);
        assert!(m.fixed);
    }

    #[test]
    #[should_panic(expected = "mass must be positive")]
    fn zero_mass_is_rejected() {
        Mass::new(0.0, Vector3::zeros());
    }
}
