//! Generic lattice topology generation.
//!
//! Every grid-like body is a configuration of one generator: masses laid
//! out on a regular grid, springs created from a set of neighbor relations.
//! A relation is an index-offset triple; for each node, a spring is created
//! to the node one relation-offset away when that node exists. The relation
//! set never contains both an offset and its negation, so each physical
//! edge gets exactly one spring.

use itertools::iproduct;
use na::Vector3;

use crate::mass::Mass;
use crate::spring::Spring;
use crate::types::Float;

/// Axis-aligned neighbor relations plus the six face diagonals, two per
/// axis plane. The diagonals resist shear, the axis springs resist stretch.
pub const CUBE_RELATIONS: [[i32; 3]; 9] = [
    // axis
    [1, 0, 0],
    [0, 1, 0],
    [0, 0, 1],
    // face diagonals in the x = const planes
    [0, 1, 1],
    [0, 1, -1],
    // face diagonals in the y = const planes
    [1, 0, 1],
    [1, 0, -1],
    // face diagonals in the z = const planes
    [1, 1, 0],
    [1, -1, 0],
];

/// Horizontal, vertical and both diagonal relations of a planar grid in
/// the xz-plane.
pub const CLOTH_RELATIONS: [[i32; 3]; 4] = [[1, 0, 0], [0, 0, 1], [1, 0, 1], [1, 0, -1]];

/// A regular grid of point masses.
pub struct Lattice {
    /// Node counts along x, y, z. Planar grids set one of them to 1.
    pub dims: [usize; 3],
    /// Signed world-space step per index increment along each axis.
    pub spacing: Vector3<Float>,
    /// World-space position of node (0, 0, 0).
    pub origin: Vector3<Float>,
    pub node_mass: Float,
    pub stiffness: Float,
    /// Index-offset triples selecting which neighbor pairs get a spring.
    pub relations: &'static [[i32; 3]],
}

impl Lattice {
    /// Flat index of a grid node; x varies fastest, then y, then z.
    fn index(&self, ix: usize, iy: usize, iz: usize) -> usize {
        ix + self.dims[0] * (iy + self.dims[1] * iz)
    }

    fn position(&self, ix: usize, iy: usize, iz: usize) -> Vector3<Float> {
        self.origin
            + Vector3::new(
                ix as Float * self.spacing.x,
                iy as Float * self.spacing.y,
                iz as Float * self.spacing.z,
            )
    }
}

/// Build the mass and spring collections for a lattice. `is_fixed` selects
/// anchor nodes by grid coordinate. Adjacency is resolved in integer index
/// space, so float drift in positions can never drop or double an edge.
/// Rest lengths are the initial endpoint distances, which keeps generated
/// springs non-degenerate as long as the spacing components a relation
/// touches are non-zero.
pub fn build_lattice(
    lattice: &Lattice,
    is_fixed: impl Fn([usize; 3]) -> bool,
) -> (Vec<Mass>, Vec<Spring>) {
    let [nx, ny, nz] = lattice.dims;

    let mut masses = Vec::with_capacity(nx * ny * nz);
    for (iz, iy, ix) in iproduct!(0..nz, 0..ny, 0..nx) {
        let position = lattice.position(ix, iy, iz);
        let mass = if is_fixed([ix, iy, iz]) {
            Mass::anchor(lattice.node_mass, position)
        } else {
            Mass::new(lattice.node_mass, position)
        };
        masses.push(mass);
    }

    let mut springs = vec![];
    for (iz, iy, ix, relation) in iproduct!(0..nz, 0..ny, 0..nx, lattice.relations.iter()) {
        let jx = ix as i32 + relation[0];
        let jy = iy as i32 + relation[1];
        let jz = iz as i32 + relation[2];
        if jx < 0 || jx >= nx as i32 || jy < 0 || jy >= ny as i32 || jz < 0 || jz >= nz as i32 {
            continue;
        }

        let a = lattice.index(ix, iy, iz);
        let b = lattice.index(jx as usize, jy as usize, jz as usize);
        springs.push(Spring::at_rest(a, b, lattice.stiffness, &masses));
    }

    (masses, springs)
}
