//! Surface sampling and meshing.

/// Shaded quad mesh built from a sampled grid.
pub mod mesh;
/// Height-field sampling on a regular grid.
pub mod sampler;
