//! Error types for particle-morph.
//!
//! Only startup can fail fatally: window and GPU creation, and loading a
//! configuration file. Everything that happens inside the frame loop
//! degrades visually instead of returning an error.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during GPU initialization.
#[derive(Debug, Error)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    #[error("Failed to create GPU surface: {0}")]
    SurfaceCreation(#[from] wgpu::CreateSurfaceError),

    /// No compatible GPU adapter found.
    #[error("No compatible GPU adapter found. Ensure your system has a GPU with WebGPU/Vulkan/Metal/DX12 support.")]
    NoAdapter,

    /// Failed to create GPU device.
    #[error("Failed to create GPU device: {0}")]
    DeviceCreation(#[from] wgpu::RequestDeviceError),

    /// The surface reported no usable texture format.
    #[error("GPU surface reports no supported texture formats")]
    NoSurfaceFormat,
}

/// Errors that can occur while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the file from disk.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid configuration JSON.
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A value parsed but makes no sense for the simulation.
    #[error("Invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Errors that can occur when running the interactive window.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to create event loop.
    #[error("Failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// Failed to create window.
    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    /// GPU initialization failed.
    #[error("GPU error: {0}")]
    Gpu(#[from] GpuError),
}

/// Errors that can occur while drawing a frame.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The surface could not provide a texture to draw into.
    #[error("Surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}

impl RenderError {
    /// Whether the frame loop should give up rather than try the next frame.
    pub fn is_fatal(&self) -> bool {
        matches!(self, RenderError::Surface(wgpu::SurfaceError::OutOfMemory))
    }
}
