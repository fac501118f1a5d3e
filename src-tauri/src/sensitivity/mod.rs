pub mod gemini;
pub mod generator;
pub mod prompts;
pub mod types;

pub use gemini::{CompletionClient, GeminiClient};
pub use generator::{generate, FALLBACK_RECORD};
pub use types::{GenerationOutcome, PlayStyle, SensitivityRecord};
