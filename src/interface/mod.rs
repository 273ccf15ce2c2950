//! Wasm bindings exposing the simulation to a renderer.
//!
//! The boundary is read-only data: flattened mass positions for a point
//! mesh, spring endpoint indices for a line mesh. Colors, matrices and GPU
//! buffers stay on the Javascript side.

use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::js_sys::{Float32Array, Uint32Array};

use crate::helpers::build_preset;
use crate::system::{Preset, SpringMassSystem};
use crate::types::Float;
use crate::{toJsFloat32Array, toJsUint32Array};

pub mod util;

#[wasm_bindgen]
pub struct InterfaceSpringMass {
    pub(crate) inner: SpringMassSystem,
}

#[wasm_bindgen]
impl InterfaceSpringMass {
    /// Mass positions flattened to [x0, y0, z0, x1, y1, z1, ...].
    pub fn positions(&self) -> Float32Array {
        toJsFloat32Array!(self
            .inner
            .masses
            .iter()
            .flat_map(|m| [m.position.x, m.position.y, m.position.z]))
    }

    /// Spring endpoint indices flattened to [a0, b0, a1, b1, ...].
    pub fn springs(&self) -> Uint32Array {
        toJsUint32Array!(self.inner.springs.iter().flat_map(|s| [s.a, s.b]))
    }

    pub fn step(&mut self, dt: Float) {
        self.inner.step(dt);
    }

    /// Swap in another preset, keyed 0..=3. Panics on anything else: an
    /// out-of-range selector is a caller bug, not a runtime condition.
    pub fn loadPreset(&mut self, preset: u32) {
        self.inner.load_preset(preset_from_key(preset));
    }
}

fn preset_from_key(key: u32) -> Preset {
    match key {
        0 => Preset::SingleSpring,
        1 => Preset::Chain,
        2 => Preset::Cube,
        3 => Preset::Cloth,
        _ => panic!("unknown preset key: {}", key),
    }
}

#[wasm_bindgen]
pub fn createSpringMass(preset: u32) -> InterfaceSpringMass {
    console_error_panic_hook::set_once();

    InterfaceSpringMass {
        inner: build_preset(preset_from_key(preset)),
    }
}
