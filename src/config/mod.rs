pub mod env;
mod loader;

pub use env::{AppConfig, DirectoryConfig, OpenAiConfig, WebContentConfig};
pub use loader::load_config;
