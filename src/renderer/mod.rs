//! WebGPU rendering module
//!
//! Draws the static scene plus the two footballs with simple directional lighting.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;
