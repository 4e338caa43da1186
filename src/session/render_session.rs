use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
use crate::foundation::core::{Canvas, FrameIndex, Rect, Viewpoint};
use crate::foundation::error::{SpinError, SpinResult};
use crate::render::backend::{
    BackendKind, FrameRGBA, RenderBackend, RenderSettings, create_backend,
};
use crate::render::camera::Camera;
use crate::render::plan::{Viewport, compile_frame, projected_bounds};
use crate::surface::mesh::SurfaceMesh;
use crate::surface::sampler::{Grid, sample_surface};

/// Azimuth in degrees of frame `index` when the camera advances `step_deg` per frame.
///
/// Always in `[0, 360)`.
pub fn azimuth_for_frame(index: u32, step_deg: f64) -> f64 {
    let a = (f64::from(index) * step_deg).rem_euclid(360.0);
    if a >= 360.0 { 0.0 } else { a }
}

/// Orbit of the camera over one animation: a fixed elevation and a constant azimuth step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SequencePlan {
    /// Number of frames; must be at least 1.
    pub frame_count: u32,
    /// Elevation shared by every frame, in degrees.
    pub elevation_deg: f64,
    /// Azimuth increment per frame, in degrees.
    pub azimuth_step_deg: f64,
}

impl SequencePlan {
    /// Create a validated plan.
    pub fn new(frame_count: u32, elevation_deg: f64, azimuth_step_deg: f64) -> SpinResult<Self> {
        let plan = Self {
            frame_count,
            elevation_deg,
            azimuth_step_deg,
        };
        plan.validate()?;
        Ok(plan)
    }

    /// Reject plans that cannot produce a sequence.
    pub fn validate(&self) -> SpinResult<()> {
        if self.frame_count == 0 {
            return Err(SpinError::validation(
                "frame sequence needs at least one frame",
            ));
        }
        if !self.elevation_deg.is_finite() || !self.azimuth_step_deg.is_finite() {
            return Err(SpinError::validation("sequence angles must be finite"));
        }
        Ok(())
    }

    /// Viewpoint of frame `idx`.
    pub fn viewpoint(&self, idx: FrameIndex) -> Viewpoint {
        Viewpoint {
            elevation_deg: self.elevation_deg,
            azimuth_deg: azimuth_for_frame(idx.0, self.azimuth_step_deg),
        }
    }

    /// Every frame's viewpoint, in render order.
    pub fn viewpoints(&self) -> impl Iterator<Item = (FrameIndex, Viewpoint)> + use<> {
        let plan = *self;
        (0..plan.frame_count).map(move |i| (FrameIndex(i), plan.viewpoint(FrameIndex(i))))
    }
}

/// Sequence render statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames pushed to the sink.
    pub frames_rendered: u32,
    /// Canvas shared by every frame.
    pub canvas: Canvas,
}

/// Render session for one generation.
///
/// A session samples the surface and builds its mesh once, then owns the backend and its drawing
/// surface for as long as it lives. Sessions are never shared; concurrent generations each create
/// their own.
pub struct RenderSession {
    grid: Grid,
    mesh: SurfaceMesh,
    settings: RenderSettings,
    backend: Box<dyn RenderBackend>,
}

impl RenderSession {
    /// Construct a session using the built-in CPU backend.
    pub fn new(settings: RenderSettings) -> SpinResult<Self> {
        Self::with_backend(settings, create_backend(BackendKind::Cpu)?)
    }

    /// Construct a session around an explicit backend.
    #[tracing::instrument(skip(backend))]
    pub fn with_backend(
        settings: RenderSettings,
        backend: Box<dyn RenderBackend>,
    ) -> SpinResult<Self> {
        settings.validate()?;
        let grid = sample_surface();
        let mesh = SurfaceMesh::build(&grid, settings.mesh)?;
        Ok(Self {
            grid,
            mesh,
            settings,
            backend,
        })
    }

    /// The sampled surface.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The shaded mesh drawn for every frame.
    pub fn mesh(&self) -> &SurfaceMesh {
        &self.mesh
    }

    /// Settings this session was created with.
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Viewport that tightly contains the surface as seen from every viewpoint in `viewpoints`.
    pub fn viewport_for(
        &self,
        viewpoints: impl IntoIterator<Item = Viewpoint>,
    ) -> SpinResult<Viewport> {
        let bounds = viewpoints
            .into_iter()
            .map(|vp| projected_bounds(&self.mesh, &Camera::from_viewpoint(vp)))
            .reduce(|acc: Rect, b| acc.union(b))
            .ok_or_else(|| SpinError::validation("no viewpoints to fit"))?;
        Viewport::fit(bounds, self.settings.max_edge_px)
    }

    /// Render a single frame cropped tightly to its own content.
    pub fn render_frame(&mut self, vp: Viewpoint) -> SpinResult<FrameRGBA> {
        let vp = Viewpoint::new(vp.elevation_deg, vp.azimuth_deg)?;
        let viewport = self.viewport_for([vp])?;
        self.render_frame_in(vp, &viewport)
    }

    /// Render a single frame onto an explicit viewport.
    pub fn render_frame_in(&mut self, vp: Viewpoint, viewport: &Viewport) -> SpinResult<FrameRGBA> {
        let camera = Camera::from_viewpoint(vp);
        let plan = compile_frame(&self.mesh, &camera, viewport, self.settings.clear_rgba);
        self.backend.render_plan(&plan)
    }

    /// Render every frame of `plan` into `sink`, in index order.
    ///
    /// All frames share one viewport fitted to the whole orbit. The first failure aborts the
    /// sequence; `sink.end()` is only called after every frame was pushed.
    #[tracing::instrument(skip(self, sink))]
    pub fn render_sequence(
        &mut self,
        plan: &SequencePlan,
        sink: &mut dyn FrameSink,
    ) -> SpinResult<RenderStats> {
        plan.validate()?;
        let viewport = self.viewport_for(plan.viewpoints().map(|(_, vp)| vp))?;
        let canvas = viewport.canvas;

        sink.begin(SinkConfig {
            width: canvas.width,
            height: canvas.height,
            frame_count: plan.frame_count,
        })?;

        for (idx, vp) in plan.viewpoints() {
            let frame = self.render_frame_in(vp, &viewport)?;
            tracing::debug!(frame = idx.0, azimuth = vp.azimuth_deg, "rendered frame");
            sink.push_frame(idx, frame)?;
        }
        sink.end()?;

        tracing::info!(
            frames = plan.frame_count,
            width = canvas.width,
            height = canvas.height,
            "rendered frame sequence"
        );
        Ok(RenderStats {
            frames_rendered: plan.frame_count,
            canvas,
        })
    }

    /// Render every frame of `plan` and collect them in order.
    pub fn build_sequence(&mut self, plan: &SequencePlan) -> SpinResult<Vec<FrameRGBA>> {
        let mut sink = InMemorySink::new();
        self.render_sequence(plan, &mut sink)?;
        Ok(sink.into_frames())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/render_session.rs"]
mod tests;
