//! Configuration for the Ontology WASM SDK
//!
//! Settings are plain serde structs loaded from TOML; every field has a
//! default so a partial file, or no file at all, is valid.

mod network;
mod settings;

pub use network::NetworkType;
pub use settings::{ConfigError, SdkSettings};
