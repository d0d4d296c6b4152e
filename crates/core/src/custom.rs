//! Custom gradients built from the built-ins.
//!
//! Custom gradients include:
//! - `wiridis`: reversed viridis blended with white at the start.

use customcolour_types::BlendSpec;
use log::debug;
use once_cell::sync::Lazy;

use crate::blend::add_white;
use crate::error::Result;
use crate::gradient::Gradient;
use crate::registry::{global_registry, Registry};

/// Builds every custom gradient from gradients found in `registry`
pub fn custom_maps(registry: &Registry) -> Result<Vec<Gradient>> {
    let wiridis = add_white(registry.resolve("viridis_r")?, &BlendSpec::default())?;
    Ok(vec![wiridis.renamed("wiridis")])
}

impl Registry {
    /// Adds the custom gradients to this registry
    pub fn register_custom_maps(&mut self) -> Result<()> {
        for gradient in custom_maps(self)? {
            debug!("Adding custom gradient '{}'", gradient.name());
            self.register(gradient)?;
        }
        Ok(())
    }
}

/// Reversed viridis with white blended in at the start
pub static WIRIDIS: Lazy<Gradient> = Lazy::new(|| global_registry()["wiridis"].clone());
