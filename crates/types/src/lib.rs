//! customcolour-types: Shared data types for customcolour.
//!
//! This crate contains pure data types (colors, gradient stops, segment
//! anchors, blend settings) shared by the core transforms and the
//! configuration layer. Nothing in here samples or transforms a gradient.

pub mod blend;
pub mod color;
pub mod location;
pub mod segment;

// Re-export commonly used types at the crate root for convenience
pub use blend::{BlendSpec, DEFAULT_NBLEND};
pub use color::{Color, ColorStop};
pub use location::{BlendLocation, LocationError};
pub use segment::{SegmentAnchor, SegmentData};
