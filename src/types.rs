use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "f64")] {
        /// Scalar type used throughout the simulation.
        pub type Float = f64;
    } else {
        /// Scalar type used throughout the simulation.
        pub type Float = f32;
    }
}
