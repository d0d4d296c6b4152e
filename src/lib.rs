//! customcolour: custom colormaps and colormap transformations
//!
//! This library provides:
//! - Built-in named gradients and a registry to resolve them by name
//! - Grayscale conversion and channel inversion
//! - Blending a solid color into a gradient at the start, end or middle
//! - Custom gradients (`wiridis`) and user gradients loaded from JSON

pub mod config;

// Re-export commonly used types
pub use config::{CmapConfig, CustomGradientConfig, GradientOp, SourceSpec};
pub use customcolour_core::{
    add_black, add_rgba, add_white, blend_rgba, custom_maps, default_registry, global_registry,
    grayscale, invert, lightness, lightness_all, CmapError, Gradient, GradientSource, Registry,
    DEFAULT_N, WIRIDIS,
};
pub use customcolour_types::{
    BlendLocation, BlendSpec, Color, ColorStop, SegmentAnchor, SegmentData, DEFAULT_NBLEND,
};
