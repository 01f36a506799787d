//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::StacksPaths;
pub use settings::Settings;
