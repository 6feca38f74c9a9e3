//! Infrastructure: settings ports and the sources that implement them.

pub mod ports;
pub mod settings_loader;
pub mod settings_source;
