pub mod gemini_provider;
pub mod types;

pub use gemini_provider::GeminiProvider;
pub use types::*;
