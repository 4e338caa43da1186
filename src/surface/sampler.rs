/// Half-width of the square sampling domain, `[-5, 5]` on both axes.
pub const DOMAIN_HALF_EXTENT: f64 = 5.0;
/// Samples per axis.
pub const GRID_RESOLUTION: usize = 100;

/// The plotted height field: a radially symmetric Gaussian bump.
pub fn surface_height(x: f64, y: f64) -> f64 {
    (-0.1 * (x * x + y * y)).exp()
}

/// `n` evenly spaced samples over `[start, stop]`, both ends included.
///
/// The final sample is exactly `stop`. `n == 1` yields `[start]`.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            out[n - 1] = stop;
            out
        }
    }
}

/// Sampling layout for [`sample_grid`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct GridSpec {
    pub(crate) half_extent: f64,
    pub(crate) resolution: usize,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            half_extent: DOMAIN_HALF_EXTENT,
            resolution: GRID_RESOLUTION,
        }
    }
}

/// Equal-shaped X, Y and Z arrays in row-major order.
///
/// Rows step along y, columns along x: `x(r, c) == xs[c]`, `y(r, c) == ys[r]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
}

impl Grid {
    /// Number of rows (samples along y).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (samples along x).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// X coordinate of sample `(r, c)`.
    pub fn x(&self, r: usize, c: usize) -> f64 {
        self.x[r * self.cols + c]
    }

    /// Y coordinate of sample `(r, c)`.
    pub fn y(&self, r: usize, c: usize) -> f64 {
        self.y[r * self.cols + c]
    }

    /// Height of sample `(r, c)`.
    pub fn z(&self, r: usize, c: usize) -> f64 {
        self.z[r * self.cols + c]
    }

    /// All heights, row-major.
    pub fn z_values(&self) -> &[f64] {
        &self.z
    }

    /// `(min, max)` over the X coordinates.
    pub fn x_range(&self) -> (f64, f64) {
        min_max(&self.x)
    }

    /// `(min, max)` over the Y coordinates.
    pub fn y_range(&self) -> (f64, f64) {
        min_max(&self.y)
    }

    /// `(min, max)` over the heights.
    pub fn z_range(&self) -> (f64, f64) {
        min_max(&self.z)
    }
}

fn min_max(v: &[f64]) -> (f64, f64) {
    v.iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        })
}

/// Sample [`surface_height`] over `[-5, 5]²` at 100×100.
pub fn sample_surface() -> Grid {
    sample_grid(GridSpec::default())
}

pub(crate) fn sample_grid(spec: GridSpec) -> Grid {
    let n = spec.resolution;
    let axis = linspace(-spec.half_extent, spec.half_extent, n);

    let mut x = Vec::with_capacity(n * n);
    let mut y = Vec::with_capacity(n * n);
    let mut z = Vec::with_capacity(n * n);
    for &yv in &axis {
        for &xv in &axis {
            x.push(xv);
            y.push(yv);
            z.push(surface_height(xv, yv));
        }
    }

    Grid {
        rows: n,
        cols: n,
        x,
        y,
        z,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/sampler.rs"]
mod tests;
