use async_trait::async_trait;

use crate::error::Result;

/// A generative text service: one prompt in, free-form text out.
///
/// [`crate::GeminiClient`] is the production implementation; tests plug in
/// canned or failing generators.
#[async_trait]
pub trait TextGenerator: Send + Sync + std::fmt::Debug {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String>;
}
