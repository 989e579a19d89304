//! Configuration module for household-split
//!
//! - Config directory resolution
//! - Read-only user settings (currency display, custom expense catalog)

pub mod paths;
pub mod settings;

pub use paths::SplitPaths;
pub use settings::Settings;
