//! Project configuration
//!
//! - `ProjectOptions`: raw selections handed over by the CLI or a preset file
//! - `Configuration`: the resolved, immutable record every component reads

pub mod options;
pub mod preset;

pub use options::{Configuration, FeatureFlags, PackageManager, ProjectOptions};
pub use preset::load_preset;
