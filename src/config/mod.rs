//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::Settings;
