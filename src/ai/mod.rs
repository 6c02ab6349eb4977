pub mod client;
pub mod error;
pub mod inference;

pub use client::OpenAiClient;
pub use error::LlmError;
