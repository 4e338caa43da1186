//! Frame rendering: projection, depth sorting and CPU rasterization.

/// Renderer trait, settings and frame type.
pub mod backend;
/// Orthographic orbit camera.
pub mod camera;
/// Height colormap.
pub mod colormap;
/// `vello_cpu` backend.
pub mod cpu;
/// Backend-agnostic frame plans and viewport fitting.
pub mod plan;
