use crate::foundation::core::Canvas;
use crate::foundation::error::{SpinError, SpinResult};
use crate::foundation::math::mul_div255_u16;
use crate::render::plan::FramePlan;
use crate::surface::mesh::MeshOpts;

/// A rendered frame as RGBA8 pixels.
///
/// Frames produced by the CPU backend are **premultiplied alpha**; the `premultiplied` flag keeps
/// that explicit at API boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Canvas covered by this frame.
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// RGBA of pixel `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Straight-alpha, fully opaque copy composited over `bg_rgba`.
    pub fn to_opaque_rgba8(&self, bg_rgba: [u8; 4]) -> SpinResult<Vec<u8>> {
        let mut out = vec![0u8; self.data.len()];
        flatten_to_opaque_rgba8(&mut out, &self.data, self.premultiplied, bg_rgba)?;
        Ok(out)
    }
}

/// A renderer that executes a compiled [`FramePlan`] into a [`FrameRGBA`].
pub trait RenderBackend {
    /// Clear the target, draw every polygon in order and read back the frame.
    fn render_plan(&mut self, plan: &FramePlan) -> SpinResult<FrameRGBA>;
}

/// Available backend kinds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackendKind {
    /// CPU raster backend powered by `vello_cpu`.
    #[default]
    Cpu,
}

/// Settings shared by every frame of one generation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Longer canvas edge in pixels; the shorter edge follows the content's aspect ratio.
    pub max_edge_px: u32,
    /// Opaque background colour.
    pub clear_rgba: [u8; 4],
    /// Face budget for the surface mesh.
    pub mesh: MeshOpts,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            max_edge_px: 400,
            clear_rgba: [255, 255, 255, 255],
            mesh: MeshOpts::default(),
        }
    }
}

impl RenderSettings {
    /// Return settings with a different longer canvas edge.
    pub fn with_max_edge_px(mut self, max_edge_px: u32) -> Self {
        self.max_edge_px = max_edge_px;
        self
    }

    /// Reject settings no frame could be rendered with.
    pub fn validate(&self) -> SpinResult<()> {
        if self.max_edge_px == 0 || self.max_edge_px > u32::from(u16::MAX) {
            return Err(SpinError::validation(format!(
                "max_edge_px must be in 1..={}, got {}",
                u16::MAX,
                self.max_edge_px
            )));
        }
        if self.clear_rgba[3] != 255 {
            return Err(SpinError::validation("clear colour must be opaque"));
        }
        Ok(())
    }
}

/// Create a rendering backend implementation.
pub fn create_backend(kind: BackendKind) -> SpinResult<Box<dyn RenderBackend>> {
    match kind {
        BackendKind::Cpu => Ok(Box::new(crate::render::cpu::CpuBackend::new())),
    }
}

pub(crate) fn flatten_to_opaque_rgba8(
    dst: &mut [u8],
    src: &[u8],
    src_is_premul: bool,
    bg_rgba: [u8; 4],
) -> SpinResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(SpinError::validation(
            "flatten_to_opaque_rgba8 expects equal-length rgba8 buffers",
        ));
    }

    let bg_r = bg_rgba[0] as u16;
    let bg_g = bg_rgba[1] as u16;
    let bg_b = bg_rgba[2] as u16;

    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let a = s[3] as u16;
        if a == 255 {
            d.copy_from_slice(s);
            continue;
        }

        let inv = 255u16 - a;

        let (r, g, b) = if src_is_premul {
            (
                s[0] as u16 + mul_div255_u16(bg_r, inv),
                s[1] as u16 + mul_div255_u16(bg_g, inv),
                s[2] as u16 + mul_div255_u16(bg_b, inv),
            )
        } else {
            (
                mul_div255_u16(s[0] as u16, a) + mul_div255_u16(bg_r, inv),
                mul_div255_u16(s[1] as u16, a) + mul_div255_u16(bg_g, inv),
                mul_div255_u16(s[2] as u16, a) + mul_div255_u16(bg_b, inv),
            )
        };

        d[0] = r.min(255) as u8;
        d[1] = g.min(255) as u8;
        d[2] = b.min(255) as u8;
        d[3] = 255;
    }

    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
