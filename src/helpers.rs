use na::vector;

use crate::builders::lattice_builder::{build_lattice, Lattice, CLOTH_RELATIONS, CUBE_RELATIONS};
use crate::mass::Mass;
use crate::spring::Spring;
use crate::system::{Preset, SpringMassSystem};
use crate::types::Float;

/// Floor plane height for the jello cube.
pub const CUBE_FLOOR: Float = -2.0;

/// Build a single stiff spring: a fixed anchor and one free mass hanging
/// off it, stretched well past rest length.
pub fn build_single_spring() -> SpringMassSystem {
    let masses = vec![
        Mass::anchor(1.0, vector![0.0, 3.5, 0.0]),
        Mass::new(1.0, vector![2.0, 2.0, 0.0]),
    ];
    let springs = vec![Spring::new(0, 1, 25.0, 1.0)];

    SpringMassSystem::new(Preset::SingleSpring, masses, springs, None)
}

/// Build a chain pendulum: four masses in a short zig-zag hanging from a
/// fixed anchor, springs forming a path.
pub fn build_chain() -> SpringMassSystem {
    let masses = vec![
        Mass::anchor(1.0, vector![0.0, 3.5, 0.0]),
        Mass::new(0.5, vector![0.0, 3.0, 0.0]),
        Mass::new(0.5, vector![0.5, 3.5, 0.0]),
        Mass::new(1.5, vector![1.0, 3.5, 0.0]),
    ];
    let springs = vec![
        Spring::new(0, 1, 25.0, 1.0),
        Spring::new(1, 2, 25.0, 1.0),
        Spring::new(2, 3, 25.0, 1.0),
    ];

    SpringMassSystem::new(Preset::Chain, masses, springs, None)
}

/// Build an n·n·n jello cube of free masses with axis and shear springs,
/// dropped onto an inelastic floor at `CUBE_FLOOR`.
pub fn build_cube(n: usize) -> SpringMassSystem {
    assert!(n >= 2, "cube needs at least 2 nodes per axis, got {}", n);

    let lattice = Lattice {
        dims: [n, n, n],
        spacing: vector![1.0, -1.0, -1.0],
        origin: vector![-0.9, 3.5, 0.0],
        node_mass: 0.3,
        stiffness: 1000.0,
        relations: &CUBE_RELATIONS,
    };
    let (masses, springs) = build_lattice(&lattice, |_| false);

    SpringMassSystem::new(Preset::Cube, masses, springs, Some(CUBE_FLOOR))
}

/// Build a hanging cloth: cols x rows masses in the xz-plane, pinned at
/// every second mass of the first row.
pub fn build_cloth(cols: usize, rows: usize) -> SpringMassSystem {
    assert!(
        cols >= 2 && rows >= 2,
        "cloth needs at least a 2x2 grid, got {}x{}",
        cols,
        rows
    );

    let lattice = Lattice {
        dims: [cols, 1, rows],
        spacing: vector![1.0, 1.0, -1.0],
        origin: vector![-2.0, 3.5, 0.0],
        node_mass: 0.5,
        stiffness: 25.0,
        relations: &CLOTH_RELATIONS,
    };
    let (masses, springs) = build_lattice(&lattice, |[ix, _, iz]| iz == 0 && ix % 2 == 0);

    SpringMassSystem::new(Preset::Cloth, masses, springs, None)
}

/// Build the reference body for a preset.
pub fn build_preset(preset: Preset) -> SpringMassSystem {
    match preset {
        Preset::SingleSpring => build_single_spring(),
        Preset::Chain => build_chain(),
        Preset::Cube => build_cube(3),
        Preset::Cloth => build_cloth(5, 6),
    }
}
