/// Wirecube Core Library - Shared geometry, projection, and render loop logic
///
/// This library provides the host-agnostic core of the rotating wireframe:
/// the cube model, the rotation state, the perspective projector, and the
/// frame-step engine that draws through the `Surface` trait.

pub mod engine;
pub mod geometry;
pub mod projection;
pub mod transform;

// Re-export commonly used types
pub use engine::{Engine, Surface, SCALE, SPIN_RATE};
pub use geometry::{Edge, Wireframe};
pub use projection::{Projector, CAMERA_DISTANCE};
pub use transform::RotationState;
