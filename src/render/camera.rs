use crate::foundation::core::{Point, Viewpoint, Vec3};

/// Orthographic camera orbiting the plot box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    eye: Vec3,
    right: Vec3,
    up: Vec3,
}

impl Camera {
    /// Camera looking at the origin from `vp`.
    pub fn from_viewpoint(vp: Viewpoint) -> Self {
        let (sa, ca) = vp.azimuth_deg.to_radians().sin_cos();
        let (se, ce) = vp.elevation_deg.to_radians().sin_cos();
        Self {
            eye: Vec3::new(ce * ca, ce * sa, se),
            right: Vec3::new(-sa, ca, 0.0),
            up: Vec3::new(-ca * se, -sa * se, ce),
        }
    }

    /// Unit vector from the origin towards the viewer.
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Screen-space position with y pointing up.
    pub fn project(&self, p: Vec3) -> Point {
        Point::new(p.dot(self.right), p.dot(self.up))
    }

    /// Signed distance towards the viewer; larger values are closer.
    pub fn depth(&self, p: Vec3) -> f64 {
        p.dot(self.eye)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/camera.rs"]
mod tests;
