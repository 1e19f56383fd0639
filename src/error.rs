//! Error types
//!
//! Control rejections are returned by the simulation and swallowed (logged)
//! at the JS boundary, so the page keeps its ignore-while-kicking behavior.

use thiserror::Error;

use crate::sim::Side;

/// A control request that could not be applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ControlError {
    /// The football is away from its resting spot
    #[error("{side} football is in flight")]
    BallInFlight { side: Side },
}

/// WebGPU initialization failures
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no suitable adapter: {0}")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to create device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("surface reports no supported formats")]
    NoSurfaceFormat,
}
