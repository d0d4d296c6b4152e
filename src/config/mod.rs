//! Configuration management

mod settings;

pub use settings::{CmapConfig, CustomGradientConfig, GradientOp, SourceSpec};
