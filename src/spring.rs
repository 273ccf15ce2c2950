use crate::mass::Mass;
use crate::types::Float;

/// A Hooke-law spring between two masses, referenced by index into the
/// owning system's mass collection. Indices cannot dangle because masses
/// and springs are only ever replaced together, wholesale.
#[derive(Clone, Debug, PartialEq)]
pub struct Spring {
    pub a: usize,
    pub b: usize,
    pub stiffness: Float,
    pub rest_length: Float,
}

impl Spring {
    pub fn new(a: usize, b: usize, stiffness: Float, rest_length: Float) -> Self {
        assert!(a != b, "spring endpoints must differ, got {} twice", a);
        Spring {
            a,
            b,
            stiffness,
            rest_length,
        }
    }

    /// A spring whose rest length is the current distance between its
    /// endpoints. The rest length is computed once here and never
    /// recomputed.
    pub fn at_rest(a: usize, b: usize, stiffness: Float, masses: &[Mass]) -> Self {
        let rest_length = (masses[b].position - masses[a].position).norm();
        Spring::new(a, b, stiffness, rest_length)
    }

    /// Current length of the spring.
    pub fn length(&self, masses: &[Mass]) -> Float {
        (masses[self.b].position - masses[self.a].position).norm()
    }
}
