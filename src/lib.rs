#![allow(non_snake_case)]

use types::Float;
pub extern crate nalgebra as na;

pub mod builders;
pub mod dynamics;
pub mod energy;
pub mod helpers;
pub mod integrators;
pub mod mass;
pub mod simulate;
pub mod spring;
pub mod system;
pub mod types;
pub mod util;

// Wasm bindings
pub mod interface;

/// Gravity magnitude, applied along -y.
pub const GRAVITY: Float = 9.81;

/// Velocity-proportional damping coefficient.
pub const DAMPING: Float = 0.8;

/// Reference fixed timestep in seconds.
pub const TIMESTEP: Float = 0.01;
