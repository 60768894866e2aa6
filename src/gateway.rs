//! Generation gateway: one prompt in, one text out.
//!
//! Sends a single user turn with fixed parameters, waits for the full
//! response, and returns the first text block. No retries, no streaming.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::providers::{CompletionRequest, LlmProvider, Message, ProviderError, StopReason};

/// Failures surfaced by [`GenerationGateway::generate`].
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The caller passed an empty prompt; nothing was sent.
    #[error("prompt is empty")]
    EmptyPrompt,
    /// The provider answered but no content block had type `text`.
    #[error("provider response contained no text content")]
    NoTextContent,
    /// Transport, authentication, or provider-side failure.
    #[error("generation failed: {0}")]
    GenerationFailed(#[from] ProviderError),
}

/// Adapter between composed prompts and an [`LlmProvider`].
#[derive(Clone)]
pub struct GenerationGateway {
    provider: Arc<dyn LlmProvider>,
    max_tokens: u32,
}

impl std::fmt::Debug for GenerationGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationGateway")
            .field("model", &self.provider.model_id())
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl GenerationGateway {
    /// Create a gateway with a fixed output token budget.
    pub fn new(provider: Arc<dyn LlmProvider>, max_tokens: u32) -> Self {
        Self {
            provider,
            max_tokens,
        }
    }

    /// Model identifier of the underlying provider.
    pub fn model_id(&self) -> &str {
        self.provider.model_id()
    }

    /// Send `prompt` and return the first text block of the reply.
    ///
    /// # Errors
    ///
    /// - [`GatewayError::EmptyPrompt`] if `prompt` is blank
    /// - [`GatewayError::NoTextContent`] if the reply has no text block
    /// - [`GatewayError::GenerationFailed`] for any provider failure
    pub async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        if prompt.trim().is_empty() {
            return Err(GatewayError::EmptyPrompt);
        }

        let request = CompletionRequest {
            messages: vec![Message::user(prompt)],
            max_tokens: Some(self.max_tokens),
        };

        let response = self.provider.complete(request).await?;
        debug!(
            model = %response.model,
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            blocks = response.content.len(),
            "completion received"
        );
        if response.stop_reason == StopReason::MaxTokens {
            warn!(
                max_tokens = self.max_tokens,
                output_tokens = response.usage.output_tokens,
                "completion hit the token budget and may be truncated"
            );
        }

        response
            .first_text()
            .map(str::to_owned)
            .ok_or(GatewayError::NoTextContent)
    }
}
