use crate::foundation::core::{Canvas, Point, Rect};
use crate::foundation::error::{SpinError, SpinResult};
use crate::render::camera::Camera;
use crate::surface::mesh::SurfaceMesh;

/// Mapping from projected screen space onto a pixel canvas.
///
/// The longer side of `bounds` fills `max_edge_px`; the shorter side is rounded up. There is no
/// padding, so the rendered content touches the canvas edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Screen-space rectangle that is mapped onto the canvas.
    pub bounds: Rect,
    /// Pixels per screen-space unit.
    pub scale: f64,
    /// Output canvas.
    pub canvas: Canvas,
}

impl Viewport {
    /// Fit `bounds` into a canvas whose longer edge is `max_edge_px`.
    pub fn fit(bounds: Rect, max_edge_px: u32) -> SpinResult<Self> {
        if max_edge_px == 0 {
            return Err(SpinError::validation("max_edge_px must be non-zero"));
        }
        let (bw, bh) = (bounds.width(), bounds.height());
        if !(bw.is_finite() && bh.is_finite()) || bw.max(bh) <= f64::EPSILON {
            return Err(SpinError::render(format!(
                "cannot fit degenerate bounds {bounds:?}"
            )));
        }

        let scale = f64::from(max_edge_px) / bw.max(bh);
        let edge = |len: f64| ((len * scale).ceil() as u32).clamp(1, max_edge_px);
        let canvas = Canvas::new(edge(bw), edge(bh))?;
        Ok(Self {
            bounds,
            scale,
            canvas,
        })
    }

    /// Pixel position of a screen-space point; pixel y grows downwards.
    pub fn to_pixel(&self, p: Point) -> Point {
        Point::new(
            (p.x - self.bounds.x0) * self.scale,
            (self.bounds.y1 - p.y) * self.scale,
        )
    }
}

/// Screen-space bounding rectangle of every mesh vertex seen through `camera`.
pub fn projected_bounds(mesh: &SurfaceMesh, camera: &Camera) -> Rect {
    let mut pts = mesh
        .faces()
        .iter()
        .flat_map(|f| f.corners)
        .map(|p| camera.project(p));
    let Some(first) = pts.next() else {
        return Rect::ZERO;
    };
    pts.fold(Rect::from_points(first, first), |r, p| r.union_pt(p))
}

/// One filled polygon in pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawPolygon {
    /// Corners in pixel coordinates.
    pub points: [Point; 4],
    /// Fill colour, straight alpha.
    pub rgba: [u8; 4],
}

/// Backend-agnostic description of one frame: a background fill followed by polygons in paint
/// order (back to front).
#[derive(Clone, Debug)]
pub struct FramePlan {
    /// Output canvas.
    pub canvas: Canvas,
    /// Opaque background the whole canvas is cleared to.
    pub clear_rgba: [u8; 4],
    /// Polygons, farthest first.
    pub polygons: Vec<DrawPolygon>,
}

/// Face indices sorted farthest first. The sort is stable, so equal depths keep grid order.
pub(crate) fn paint_order(mesh: &SurfaceMesh, camera: &Camera) -> Vec<usize> {
    let mut keyed: Vec<(f64, usize)> = mesh
        .faces()
        .iter()
        .enumerate()
        .map(|(i, f)| (camera.depth(f.centroid), i))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    keyed.into_iter().map(|(_, i)| i).collect()
}

/// Project, depth-sort and place every face of `mesh`.
pub fn compile_frame(
    mesh: &SurfaceMesh,
    camera: &Camera,
    viewport: &Viewport,
    clear_rgba: [u8; 4],
) -> FramePlan {
    let faces = mesh.faces();
    let polygons = paint_order(mesh, camera)
        .into_iter()
        .map(|i| {
            let f = &faces[i];
            DrawPolygon {
                points: f.corners.map(|p| viewport.to_pixel(camera.project(p))),
                rgba: f.rgba,
            }
        })
        .collect();

    FramePlan {
        canvas: viewport.canvas,
        clear_rgba,
        polygons,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/plan.rs"]
mod tests;
