//! Registry of named gradients

use customcolour_types::{BlendSpec, Color};
use log::debug;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::ops::Index;

use crate::blend::{add_black, add_rgba, add_white};
use crate::builtin::builtin_gradients;
use crate::error::{CmapError, Result};
use crate::gradient::Gradient;
use crate::transform::{grayscale, invert};

/// A gradient given either by name or as a value.
///
/// Every operation that takes a gradient accepts this, so callers can pass
/// `"jet"` or a `&Gradient` they already hold.
#[derive(Debug, Clone, Copy)]
pub enum GradientSource<'a> {
    Name(&'a str),
    Gradient(&'a Gradient),
}

impl<'a> From<&'a str> for GradientSource<'a> {
    fn from(name: &'a str) -> Self {
        GradientSource::Name(name)
    }
}

impl<'a> From<&'a String> for GradientSource<'a> {
    fn from(name: &'a String) -> Self {
        GradientSource::Name(name.as_str())
    }
}

impl<'a> From<&'a Gradient> for GradientSource<'a> {
    fn from(gradient: &'a Gradient) -> Self {
        GradientSource::Gradient(gradient)
    }
}

/// Registry for named gradients
///
/// Built-in gradients (and their `_r` reversals) are registered up front,
/// custom gradients are added afterwards. Entries are never replaced.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    gradients: HashMap<String, Gradient>,
}

impl Registry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            gradients: HashMap::new(),
        }
    }

    /// Registry holding every built-in gradient and its reversed variant
    pub fn with_builtins() -> Result<Self> {
        let mut registry = Self::new();
        for gradient in builtin_gradients()? {
            let reversed = gradient.reversed();
            registry.gradients.insert(reversed.name().to_string(), reversed);
            registry.gradients.insert(gradient.name().to_string(), gradient);
        }
        debug!("Registered {} built-in gradients", registry.len());
        Ok(registry)
    }

    /// Register a gradient under its own name
    pub fn register(&mut self, gradient: Gradient) -> Result<()> {
        if self.gradients.contains_key(gradient.name()) {
            return Err(CmapError::AlreadyRegistered {
                name: gradient.name().to_string(),
            });
        }
        debug!("Registering gradient '{}' ({} samples)", gradient.name(), gradient.len());
        self.gradients.insert(gradient.name().to_string(), gradient);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Gradient> {
        self.gradients.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.gradients.contains_key(name)
    }

    /// List all registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.gradients.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.gradients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gradients.is_empty()
    }

    /// Resolve a name to its registered gradient; a gradient value is
    /// returned as is.
    pub fn resolve<'a>(&'a self, source: impl Into<GradientSource<'a>>) -> Result<&'a Gradient> {
        match source.into() {
            GradientSource::Gradient(gradient) => Ok(gradient),
            GradientSource::Name(name) => self.get(name).ok_or_else(|| CmapError::UnknownGradient {
                name: name.to_string(),
            }),
        }
    }

    pub fn grayscale<'a>(
        &'a self,
        source: impl Into<GradientSource<'a>>,
        ncolor: Option<usize>,
    ) -> Result<Gradient> {
        grayscale(self.resolve(source)?, ncolor)
    }

    pub fn invert<'a>(
        &'a self,
        source: impl Into<GradientSource<'a>>,
        ncolor: Option<usize>,
    ) -> Result<Gradient> {
        invert(self.resolve(source)?, ncolor)
    }

    pub fn add_rgba<'a>(
        &'a self,
        source: impl Into<GradientSource<'a>>,
        rgba: Color,
        spec: &BlendSpec,
    ) -> Result<Gradient> {
        add_rgba(self.resolve(source)?, rgba, spec)
    }

    pub fn add_white<'a>(
        &'a self,
        source: impl Into<GradientSource<'a>>,
        spec: &BlendSpec,
    ) -> Result<Gradient> {
        add_white(self.resolve(source)?, spec)
    }

    pub fn add_black<'a>(
        &'a self,
        source: impl Into<GradientSource<'a>>,
        spec: &BlendSpec,
    ) -> Result<Gradient> {
        add_black(self.resolve(source)?, spec)
    }
}

impl Index<&str> for Registry {
    type Output = Gradient;

    /// Panics if `name` is not registered
    fn index(&self, name: &str) -> &Gradient {
        &self.gradients[name]
    }
}

/// Fresh registry with built-in and custom gradients
pub fn default_registry() -> Result<Registry> {
    let mut registry = Registry::with_builtins()?;
    registry.register_custom_maps()?;
    Ok(registry)
}

static GLOBAL_REGISTRY: Lazy<Registry> =
    Lazy::new(|| default_registry().expect("built-in gradient data is valid"));

/// Process-wide registry, built on first use and read-only afterwards.
///
/// Tests and callers that need isolation should build their own
/// `Registry` instead.
pub fn global_registry() -> &'static Registry {
    &GLOBAL_REGISTRY
}
