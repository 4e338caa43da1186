use crate::foundation::core::Vec3;
use crate::foundation::error::{SpinError, SpinResult};
use crate::foundation::math::scale_u8;
use crate::render::colormap::viridis;
use crate::surface::sampler::Grid;

/// Half-height of the plot box. X and Y span `[-1, 1]`, so the box aspect is 4:4:3.
pub const BOX_Z_HALF: f64 = 0.75;

const LIGHT_AZIMUTH_DEG: f64 = 225.0;
const LIGHT_ALTITUDE_DEG: f64 = 19.4712;
const MIN_SHADE: f64 = 0.3;

/// Upper bounds on the number of faces along each grid axis.
///
/// Dense grids are subsampled with a uniform stride; the last row and column are always kept so the
/// mesh reaches the domain edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MeshOpts {
    /// Maximum faces along the row (y) axis.
    pub row_count: usize,
    /// Maximum faces along the column (x) axis.
    pub col_count: usize,
}

impl Default for MeshOpts {
    fn default() -> Self {
        Self {
            row_count: 50,
            col_count: 50,
        }
    }
}

/// One quad of the surface, positioned in plot-box space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Face {
    /// Corners in drawing order.
    pub corners: [Vec3; 4],
    /// Mean of the corners; used as the depth-sort key.
    pub centroid: Vec3,
    /// Colormapped and shaded fill colour, straight alpha.
    pub rgba: [u8; 4],
}

/// Colormapped, lit quad mesh. Colours do not depend on the camera, so one mesh serves every frame.
#[derive(Clone, Debug)]
pub struct SurfaceMesh {
    faces: Vec<Face>,
}

struct RawFace {
    corners: [Vec3; 4],
    mean_z: f64,
    normal: Vec3,
}

impl SurfaceMesh {
    /// Build the mesh for `grid`.
    #[tracing::instrument(skip(grid), fields(rows = grid.rows(), cols = grid.cols()))]
    pub fn build(grid: &Grid, opts: MeshOpts) -> SpinResult<Self> {
        let (rows, cols) = (grid.rows(), grid.cols());
        if rows < 2 || cols < 2 {
            return Err(SpinError::validation(format!(
                "surface mesh needs at least 2x2 samples, got {rows}x{cols}"
            )));
        }
        if opts.row_count == 0 || opts.col_count == 0 {
            return Err(SpinError::validation("mesh face counts must be non-zero"));
        }

        let row_idx = stride_indices(rows, opts.row_count);
        let col_idx = stride_indices(cols, opts.col_count);

        let (x_lo, x_hi) = grid.x_range();
        let (y_lo, y_hi) = grid.y_range();
        let (z_lo, z_hi) = grid.z_range();
        let to_box = |r: usize, c: usize| {
            Vec3::new(
                unit_axis(grid.x(r, c), x_lo, x_hi),
                unit_axis(grid.y(r, c), y_lo, y_hi),
                unit_axis(grid.z(r, c), z_lo, z_hi) * BOX_Z_HALF,
            )
        };
        let to_data = |r: usize, c: usize| Vec3::new(grid.x(r, c), grid.y(r, c), grid.z(r, c));

        let mut raw = Vec::with_capacity((row_idx.len() - 1) * (col_idx.len() - 1));
        for rw in row_idx.windows(2) {
            for cw in col_idx.windows(2) {
                let order = [(rw[0], cw[0]), (rw[0], cw[1]), (rw[1], cw[1]), (rw[1], cw[0])];
                let data = order.map(|(r, c)| to_data(r, c));
                // Diagonal cross product; points up for this winding.
                let normal = (data[2] - data[0]).cross(data[3] - data[1]);
                let mean_z = data.iter().map(|p| p.z).sum::<f64>() / 4.0;
                raw.push(RawFace {
                    corners: order.map(|(r, c)| to_box(r, c)),
                    mean_z,
                    normal,
                });
            }
        }

        let (m_lo, m_hi) = raw
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), f| {
                (lo.min(f.mean_z), hi.max(f.mean_z))
            });
        let light = light_direction();

        let faces: Vec<Face> = raw
            .into_iter()
            .map(|f| {
                let t = if m_hi - m_lo > f64::EPSILON {
                    (f.mean_z - m_lo) / (m_hi - m_lo)
                } else {
                    0.5
                };
                let [r, g, b] = viridis(t);
                let k = shade_intensity(f.normal, light);
                let centroid = f
                    .corners
                    .iter()
                    .fold(Vec3::default(), |acc, &p| acc + p)
                    * 0.25;
                Face {
                    corners: f.corners,
                    centroid,
                    rgba: [scale_u8(r, k), scale_u8(g, k), scale_u8(b, k), 255],
                }
            })
            .collect();

        tracing::debug!(faces = faces.len(), "built surface mesh");
        Ok(Self { faces })
    }

    /// Faces in grid order (row-major).
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Number of faces.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Return `true` when the mesh has no faces.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

/// Direction towards the fixed light source.
pub fn light_direction() -> Vec3 {
    let az = (90.0 - LIGHT_AZIMUTH_DEG).to_radians();
    let alt = LIGHT_ALTITUDE_DEG.to_radians();
    Vec3::new(az.cos() * alt.cos(), az.sin() * alt.cos(), alt.sin())
}

/// Brightness factor in `[0.3, 1.0]` for a face with `normal` lit from `light`.
pub fn shade_intensity(normal: Vec3, light: Vec3) -> f64 {
    let s = normal.normalized().dot(light).clamp(-1.0, 1.0);
    MIN_SHADE + (1.0 - MIN_SHADE) * (s + 1.0) / 2.0
}

fn stride_indices(n: usize, max_faces: usize) -> Vec<usize> {
    let stride = n.div_ceil(max_faces).max(1);
    let mut idx: Vec<usize> = (0..n - 1).step_by(stride).collect();
    idx.push(n - 1);
    idx
}

fn unit_axis(v: f64, lo: f64, hi: f64) -> f64 {
    if hi - lo <= f64::EPSILON {
        return 0.0;
    }
    (v - lo) / (hi - lo) * 2.0 - 1.0
}

#[cfg(test)]
#[path = "../../tests/unit/surface/mesh.rs"]
mod tests;
