pub mod loader;
pub mod types;

pub use loader::ConfigError;
pub use types::{Config, NumbersConfig, Screen, UiConfig, VideosConfig, MAX_ROW_COUNT};
