use crate::foundation::core::{Canvas, Point};
use crate::foundation::error::SpinResult;
use crate::render::backend::{FrameRGBA, RenderBackend};
use crate::render::plan::FramePlan;

/// CPU backend powered by `vello_cpu`.
///
/// The render context and target pixmap are kept between frames and only reallocated when the
/// canvas size changes. Every frame resets the context and repaints the full background, so no
/// pixels survive from the previous frame.
pub struct CpuBackend {
    ctx: Option<vello_cpu::RenderContext>,
    target: Option<(Canvas, vello_cpu::Pixmap)>,
}

impl CpuBackend {
    /// Create a backend with no drawing surface allocated yet.
    pub fn new() -> Self {
        Self {
            ctx: None,
            target: None,
        }
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut vello_cpu::RenderContext) -> SpinResult<R>,
    ) -> SpinResult<R> {
        let mut ctx = match self.ctx.take() {
            None => vello_cpu::RenderContext::new(width, height),
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            Some(_) => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(&mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }

    fn take_target(&mut self, canvas: Canvas, width: u16, height: u16) -> vello_cpu::Pixmap {
        match self.target.take() {
            Some((c, pixmap)) if c == canvas => pixmap,
            _ => vello_cpu::Pixmap::new(width, height),
        }
    }
}

impl Default for CpuBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderBackend for CpuBackend {
    fn render_plan(&mut self, plan: &FramePlan) -> SpinResult<FrameRGBA> {
        let (w, h) = plan.canvas.to_u16()?;
        let mut pixmap = self.take_target(plan.canvas, w, h);

        self.with_ctx_mut(w, h, |ctx| {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);

            let [r, g, b, a] = plan.clear_rgba;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(w),
                f64::from(h),
            ));

            for poly in &plan.polygons {
                let [r, g, b, a] = poly.rgba;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
                ctx.fill_path(&polygon_to_cpu(&poly.points));
            }

            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
            Ok(())
        })?;

        let frame = FrameRGBA {
            width: plan.canvas.width,
            height: plan.canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        };
        self.target = Some((plan.canvas, pixmap));
        Ok(frame)
    }
}

fn polygon_to_cpu(points: &[Point]) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    let mut iter = points.iter();
    if let Some(p) = iter.next() {
        out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y));
        for p in iter {
            out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y));
        }
        out.close_path();
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
