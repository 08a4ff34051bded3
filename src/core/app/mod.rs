//! Application initialization
//!
//! Split into the builder (resources and window setup) and plugin groups.

mod builder;
mod plugins;

pub use builder::create_app;
pub use plugins::{configure_default_plugins, configure_logging, EffectPluginGroup};
