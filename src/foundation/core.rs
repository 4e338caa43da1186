use crate::foundation::error::{SpinError, SpinResult};

pub use kurbo::{Point, Rect};

/// 0-based position of a frame within a rendered sequence.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u32);

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a validated canvas. Both edges must be non-zero and fit the rasterizer's `u16` limit.
    pub fn new(width: u32, height: u32) -> SpinResult<Self> {
        if width == 0 || height == 0 {
            return Err(SpinError::validation("canvas width/height must be non-zero"));
        }
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            return Err(SpinError::validation(format!(
                "canvas {width}x{height} exceeds the {} px edge limit",
                u16::MAX
            )));
        }
        Ok(Self { width, height })
    }

    /// Number of bytes in a tightly packed RGBA8 buffer of this size.
    pub fn rgba_len(self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(4)
    }

    /// Edges as `u16`, as required by the rasterizer and the GIF container.
    pub fn to_u16(self) -> SpinResult<(u16, u16)> {
        let w = u16::try_from(self.width)
            .map_err(|_| SpinError::validation("canvas width exceeds u16"))?;
        let h = u16::try_from(self.height)
            .map_err(|_| SpinError::validation("canvas height exceeds u16"))?;
        Ok((w, h))
    }
}

/// Camera angles in degrees.
///
/// Elevation is measured up from the x/y plane, azimuth counter-clockwise around +z from +x.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewpoint {
    /// Elevation in degrees. Values outside 0..=90 are accepted as-is.
    pub elevation_deg: f64,
    /// Azimuth in degrees.
    pub azimuth_deg: f64,
}

impl Viewpoint {
    /// Create a viewpoint, rejecting non-finite angles.
    pub fn new(elevation_deg: f64, azimuth_deg: f64) -> SpinResult<Self> {
        if !elevation_deg.is_finite() || !azimuth_deg.is_finite() {
            return Err(SpinError::validation("viewpoint angles must be finite"));
        }
        Ok(Self {
            elevation_deg,
            azimuth_deg,
        })
    }
}

/// Point or direction in 3D space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3 {
    /// Build a vector from components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Dot product.
    pub fn dot(self, o: Self) -> f64 {
        self.x * o.x + self.y * o.y + self.z * o.z
    }

    /// Cross product.
    pub fn cross(self, o: Self) -> Self {
        Self {
            x: self.y * o.z - self.z * o.y,
            y: self.z * o.x - self.x * o.z,
            z: self.x * o.y - self.y * o.x,
        }
    }

    /// Euclidean length.
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction. Near-zero vectors map to `+z`.
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len < 1e-15 {
            return Self::new(0.0, 0.0, 1.0);
        }
        self * (1.0 / len)
    }
}

impl std::ops::Add for Vec3 {
    type Output = Self;

    fn add(self, o: Self) -> Self {
        Self::new(self.x + o.x, self.y + o.y, self.z + o.z)
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Self;

    fn sub(self, o: Self) -> Self {
        Self::new(self.x - o.x, self.y - o.y, self.z - o.z)
    }
}

impl std::ops::Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
