//! spinplot renders the surface `z = exp(-0.1 (x² + y²))` from an orbiting camera and encodes the
//! frames as a looping animated GIF.
//!
//! The public API is session-oriented:
//!
//! - Describe an orbit with [`AnimationParams`] (or a [`SequencePlan`])
//! - Create a [`RenderSession`], which samples the surface and builds its mesh once
//! - Render single frames or stream the whole orbit into a [`FrameSink`] such as [`GifSink`]
//!
//! [`generate_animation`] runs all of this in one call, and [`shell`] serves it over HTTP.
//!
//! # Pipeline overview
//!
//! 1. **Sample**: evaluate the height field on a 100×100 grid over `[-5, 5]²`
//! 2. **Mesh**: downsample into shaded, colour-mapped quads inside a fixed plot box
//! 3. **Plan**: project and depth-sort the quads for one viewpoint (`FramePlan`)
//! 4. **Render**: rasterize the plan with `vello_cpu` (`FrameRGBA`, premultiplied RGBA8)
//! 5. **Encode**: quantize and concatenate the frames into a GIF
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Encoding sinks.
pub mod encode;
/// Animation parameters and slider limits.
pub mod params;
/// One-call generation of an encoded animation.
pub mod pipeline;
/// Frame rendering.
pub mod render;
/// Session-oriented rendering API.
pub mod session;
/// Interactive HTTP shell.
pub mod shell;
/// Surface sampling and meshing.
pub mod surface;

pub use crate::foundation::core::{Canvas, FrameIndex, Point, Rect, Vec3, Viewpoint};
pub use crate::foundation::error::{SpinError, SpinResult};

pub use crate::encode::gif::{GIF_FILE_NAME, GIF_MIME, GifOpts, GifSink, encode_gif};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::params::{AnimationParams, ControlLimits, ControlRange};
pub use crate::pipeline::{AnimationArtifact, generate_animation};
pub use crate::render::backend::{BackendKind, FrameRGBA, RenderBackend, RenderSettings};
pub use crate::render::cpu::CpuBackend;
pub use crate::session::render_session::{
    RenderSession, RenderStats, SequencePlan, azimuth_for_frame,
};
pub use crate::surface::mesh::{MeshOpts, SurfaceMesh};
pub use crate::surface::sampler::{Grid, sample_surface, surface_height};
