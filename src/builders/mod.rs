pub mod lattice_builder;
