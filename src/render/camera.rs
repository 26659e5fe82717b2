//! Fixed perspective camera.

use glam::{Mat4, Vec3};

use crate::config::ViewConfig;

/// Perspective camera looking at a target point.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// World-space eye position.
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Width over height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    home: Vec3,
}

impl Camera {
    /// A camera on the +Z axis at `distance`, looking at the origin.
    pub fn new(distance: f32, fov_degrees: f32, near: f32, far: f32) -> Self {
        let home = Vec3::new(0.0, 0.0, distance);
        Self {
            position: home,
            target: Vec3::ZERO,
            fov_y: fov_degrees.to_radians(),
            aspect: 1.0,
            near,
            far,
            home,
        }
    }

    pub fn from_view(view: &ViewConfig) -> Self {
        Self::new(view.camera_distance, view.fov_degrees, view.near, view.far)
    }

    /// Update the aspect ratio for a surface of `width` x `height`.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    /// Move back to the starting position, looking at the origin.
    pub fn reset(&mut self) {
        self.position = self.home;
        self.target = Vec3::ZERO;
    }

    /// Calculate the view matrix for rendering.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    /// Calculate the projection matrix for rendering.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_view(&ViewConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_looks_down_negative_z() {
        let camera = Camera::default();
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, 50.0));
        let origin = camera.view_matrix().transform_point3(Vec3::ZERO);
        assert!((origin - Vec3::new(0.0, 0.0, -50.0)).length() < 1e-4);
    }

    #[test]
    fn viewport_clamps_zero() {
        let mut camera = Camera::default();
        camera.set_viewport(0, 0);
        assert_eq!(camera.aspect, 1.0);
        camera.set_viewport(1920, 1080);
        assert!((camera.aspect - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn reset_restores_home() {
        let mut camera = Camera::default();
        camera.position = Vec3::new(3.0, 4.0, 5.0);
        camera.target = Vec3::ONE;
        camera.reset();
        assert_eq!(camera, Camera { aspect: camera.aspect, ..Camera::default() });
    }
}
