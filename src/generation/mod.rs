//! Text generation trait and the Gemini implementation.

pub mod gemini;

pub use gemini::GeminiClient;

use async_trait::async_trait;

use crate::error::SkycastError;

/// Core trait implemented by text-completion providers.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a reply for the given prompt (non-streaming, single shot).
    async fn generate(&self, prompt: &str) -> Result<String, SkycastError>;
}
