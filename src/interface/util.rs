/// Collect an iterator of scalars into a Javascript Float32Array.
#[macro_export]
macro_rules! toJsFloat32Array {
    ($q:expr) => {
        Float32Array::from($q.map(|qi| qi as f32).collect::<Vec<f32>>().as_slice())
    };
}

/// Collect an iterator of indices into a Javascript Uint32Array.
#[macro_export]
macro_rules! toJsUint32Array {
    ($q:expr) => {
        Uint32Array::from($q.map(|qi| qi as u32).collect::<Vec<u32>>().as_slice())
    };
}
