//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::FleetPaths;
pub use settings::Settings;
