pub mod extraction;
pub mod fallback;
pub mod gemini_client;
pub mod prompts;
pub mod style;
