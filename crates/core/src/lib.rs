//! customcolour-core: Gradients, transforms and the gradient registry.
//!
//! This crate contains the `Gradient` value type, the pure transforms
//! (grayscale, invert, color blending), the built-in gradient data and the
//! `Registry` that resolves gradients by name.

pub mod blend;
pub mod builtin;
pub mod custom;
mod error;
mod gradient;
pub mod lightness;
mod lut;
mod registry;
pub mod transform;

pub use blend::{add_black, add_rgba, add_white, blend_rgba};
pub use builtin::{builtin_gradients, DEFAULT_N};
pub use custom::{custom_maps, WIRIDIS};
pub use error::{CmapError, Result};
pub use gradient::Gradient;
pub use lightness::{lightness, lightness_all};
pub use lut::linspace;
pub use registry::{default_registry, global_registry, GradientSource, Registry};
pub use transform::{grayscale, invert};

// Re-export types used in function signatures for convenience
pub use customcolour_types::{BlendLocation, BlendSpec, Color, ColorStop, SegmentAnchor, SegmentData};
