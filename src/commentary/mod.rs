//! Flavor commentary for moves.
//!
//! The commentator is an external collaborator behind a narrow async
//! interface. Nothing here can affect game state: generation runs after a
//! move commits, failures are replaced by [`FALLBACK_COMMENTARY`], and the
//! result only lands in the game's [`CommentarySlot`].
//!
//! ## Implementations
//!
//! - [`GeminiCommentator`]: Gemini REST API
//! - [`CannedCommentator`]: offline fixed lines

pub mod dispatch;
pub mod gemini;
pub mod generator;
pub mod slot;

use std::sync::Arc;

pub use dispatch::CommentaryDispatcher;
pub use gemini::{CommentaryConfig, GeminiCommentator};
pub use generator::{CannedCommentator, CommentaryGenerator, CommentaryRequest};
pub use slot::CommentarySlot;

use crate::error::CommentaryError;

/// Text used when the commentator fails.
pub const FALLBACK_COMMENTARY: &str = "The Grid pulses with your arrival.";

/// Text used when the commentator answers with nothing.
pub const EMPTY_REPLY_COMMENTARY: &str = "Status update: Movement sequence completed.";

/// Ask `generator` for commentary, substituting [`FALLBACK_COMMENTARY`] on
/// any failure.
pub async fn commentary_or_fallback(
    generator: &dyn CommentaryGenerator,
    request: &CommentaryRequest,
) -> String {
    match generator.generate(request).await {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(
                generator = generator.name(),
                kind = %request.kind,
                error = %err,
                "commentary.fallback"
            );
            FALLBACK_COMMENTARY.to_string()
        }
    }
}

/// Gemini when an API key is configured, the canned commentator otherwise.
pub fn generator_from_env() -> Arc<dyn CommentaryGenerator> {
    match CommentaryConfig::from_env().and_then(GeminiCommentator::new) {
        Ok(gemini) => {
            tracing::info!(model = %gemini.config().model, "commentary.gemini");
            Arc::new(gemini)
        }
        Err(CommentaryError::MissingApiKey) => {
            tracing::info!("commentary.canned: no API key configured");
            Arc::new(CannedCommentator)
        }
        Err(err) => {
            tracing::warn!(error = %err, "commentary.canned: Gemini setup failed");
            Arc::new(CannedCommentator)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::core::EventKind;

    struct Broken;

    #[async_trait]
    impl CommentaryGenerator for Broken {
        async fn generate(&self, _: &CommentaryRequest) -> Result<String, CommentaryError> {
            Err(CommentaryError::Status(429))
        }

        fn name(&self) -> &'static str {
            "broken"
        }
    }

    #[tokio::test]
    async fn test_fallback_on_error() {
        let req = CommentaryRequest::new(EventKind::Normal, 1, 4, "Glitch");
        assert_eq!(commentary_or_fallback(&Broken, &req).await, FALLBACK_COMMENTARY);
    }

    #[tokio::test]
    async fn test_passthrough_on_success() {
        let req = CommentaryRequest::new(EventKind::Normal, 1, 4, "Glitch");
        let text = commentary_or_fallback(&CannedCommentator, &req).await;
        assert_ne!(text, FALLBACK_COMMENTARY);
        assert!(text.contains("Glitch"));
    }
}
