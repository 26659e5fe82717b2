//! Drawing the particle cloud.
//!
//! [`RenderAdapter`] owns everything view-related that is independent of
//! the graphics API: the camera, the accumulated group rotation, the
//! surface size and the point appearance. It hands a finished
//! [`FrameUniforms`] block and the position buffer to a [`PointRenderer`],
//! which does the actual drawing. [`GpuRenderer`] is the wgpu
//! implementation used by the window.

mod camera;
mod gpu;
mod shader;

use bytemuck::{Pod, Zeroable};
use glam::{EulerRot, Mat4};

use crate::config::ViewConfig;
use crate::error::RenderError;

pub use camera::Camera;
pub use gpu::GpuRenderer;
pub use shader::POINT_SHADER;

/// Uniform block shared with the point shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct FrameUniforms {
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub point_size: f32,
    pub fog_density: f32,
    pub _padding: [f32; 2],
}

/// Something that can draw N points from a flat `x, y, z` buffer.
pub trait PointRenderer {
    /// Replace the point positions drawn by the next [`draw`](Self::draw).
    fn upload_positions(&mut self, positions: &[f32]);

    /// The output surface changed size. Both dimensions are at least 1.
    fn resize_surface(&mut self, width: u32, height: u32);

    /// Draw one frame.
    fn draw(&mut self, uniforms: &FrameUniforms) -> Result<(), RenderError>;
}

/// Rotation of the whole particle group, in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GroupRotation {
    pub x: f32,
    pub y: f32,
}

impl GroupRotation {
    /// Spin by `speed` around Y and half that around X.
    pub fn advance(&mut self, speed: f32) {
        self.y += speed;
        self.x += speed * 0.5;
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.x, self.y, 0.0)
    }
}

pub struct RenderAdapter<R> {
    renderer: R,
    camera: Camera,
    rotation: GroupRotation,
    size: (u32, u32),
    color: [f32; 4],
    point_size: f32,
    fog_density: f32,
}

impl<R: PointRenderer> RenderAdapter<R> {
    pub fn new(renderer: R, view: &ViewConfig, width: u32, height: u32) -> Self {
        let [r, g, b] = view.color;
        let mut adapter = Self {
            renderer,
            camera: Camera::from_view(view),
            rotation: GroupRotation::default(),
            size: (0, 0),
            color: [r, g, b, view.opacity],
            point_size: view.point_size,
            fog_density: view.fog_density,
        };
        adapter.resize(width, height);
        adapter
    }

    /// Upload `positions`, advance the group rotation by `rotation_speed`
    /// and draw.
    pub fn render_frame(&mut self, positions: &[f32], rotation_speed: f32) -> Result<(), RenderError> {
        self.renderer.upload_positions(positions);
        self.rotation.advance(rotation_speed);
        let uniforms = self.uniforms();
        self.renderer.draw(&uniforms)
    }

    /// Resize the output. Zero dimensions are clamped to 1.
    pub fn resize(&mut self, width: u32, height: u32) {
        let size = (width.max(1), height.max(1));
        self.size = size;
        self.camera.set_viewport(size.0, size.1);
        self.renderer.resize_surface(size.0, size.1);
        log::debug!("Resized to {}x{}", size.0, size.1);
    }

    /// Restore the camera and zero the rotation. Particles are untouched.
    pub fn reset(&mut self) {
        self.camera.reset();
        self.rotation = GroupRotation::default();
    }

    /// Uniforms for the current camera, rotation and appearance.
    pub fn uniforms(&self) -> FrameUniforms {
        FrameUniforms {
            view: self.camera.view_matrix().to_cols_array_2d(),
            proj: self.camera.projection_matrix().to_cols_array_2d(),
            model: self.rotation.matrix().to_cols_array_2d(),
            color: self.color,
            point_size: self.point_size,
            fog_density: self.fog_density,
            _padding: [0.0; 2],
        }
    }

    #[inline]
    pub fn rotation(&self) -> GroupRotation {
        self.rotation
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[inline]
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    #[inline]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
