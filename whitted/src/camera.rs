use crate::{math::vec::Vec3, ray::Ray};

/// Projection mode for primary rays.
#[derive(Debug, Clone, Copy)]
pub enum Projection {
    /// Parallel rays along the view axis; ray origins sweep the image plane.
    Orthographic,
    /// Rays fan out from the camera origin through an image plane
    /// `distance` units along the view axis.
    Perspective { distance: f32 },
}

/// Generates one primary ray per pixel from an orthonormal camera basis.
pub struct Camera {
    pub width: u32,
    pub height: u32,
    pub origin: Vec3,
    pub projection: Projection,
    u: Vec3,
    v: Vec3,
    w: Vec3,
}

impl Camera {
    /// Builds the basis `w = -look`, `u = up x w`, `v = w x u`, all
    /// normalized. `look` and `up` must be non-zero and non-parallel.
    pub fn new(
        origin: Vec3,
        look: Vec3,
        up: Vec3,
        width: u32,
        height: u32,
        projection: Projection,
    ) -> Self {
        let w = (-look).normalize();
        let u = up.cross(w).normalize();
        let v = w.cross(u).normalize();
        Self {
            width,
            height,
            origin,
            projection,
            u,
            v,
            w,
        }
    }

    /// Primary ray through pixel `(i, j)`. Row 0 is the bottom of the
    /// image; pixel centers map to [-1, 1] device coordinates and are
    /// spread over a half-width/half-height image plane.
    pub fn ray(&self, i: u32, j: u32) -> Ray {
        let u_scale = 2.0 * (i as f32 + 0.5) / self.width as f32 - 1.0;
        let v_scale = 2.0 * (j as f32 + 0.5) / self.height as f32 - 1.0;
        let span = u_scale * (self.width as f32 / 2.0) * self.u
            + v_scale * (self.height as f32 / 2.0) * self.v;

        match self.projection {
            Projection::Orthographic => Ray::new(self.origin + span, -self.w),
            Projection::Perspective { distance } => {
                Ray::new(self.origin, -distance * self.w + span)
            }
        }
    }
}
