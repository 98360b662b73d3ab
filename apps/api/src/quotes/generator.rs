//! Quote model seam — trait-based access to the generative backend.
//!
//! Default: `GeminiQuoteModel` (real Gemini calls via `llm_client`).
//! Tests stub the trait to exercise handlers without network access.
//!
//! `AppState` holds an `Arc<dyn QuoteModel>`.

use async_trait::async_trait;

use crate::llm_client::GeminiClient;
use crate::quotes::prompts::SYSTEM_INSTRUCTION;

/// Result of one model invocation. This layer never fails at the type
/// level: provider-side errors (network, auth, quota, malformed request)
/// are converted into `ProviderError` so the handler can surface them as a
/// soft 200 instead of a 5xx, and so the parser never sees error text
/// disguised as a reply.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelOutcome {
    /// The raw completion text, shape not guaranteed by the provider.
    Reply(String),
    /// Human-readable description of an upstream failure.
    ProviderError(String),
}

/// The quote model trait. Implement this to swap backends without touching
/// the endpoint, handler, or parser code.
#[async_trait]
pub trait QuoteModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> ModelOutcome;
}

/// Gemini-backed quote model. Opens a fresh stateless conversation per call
/// with the fixed system instruction.
pub struct GeminiQuoteModel {
    client: GeminiClient,
}

impl GeminiQuoteModel {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl QuoteModel for GeminiQuoteModel {
    async fn generate(&self, prompt: &str) -> ModelOutcome {
        match self.client.call(prompt, SYSTEM_INSTRUCTION).await {
            Ok(text) => ModelOutcome::Reply(text),
            Err(e) => {
                tracing::error!("Quote generation failed: {e}");
                ModelOutcome::ProviderError(format!(
                    "An error occurred while generating the quote: {e}"
                ))
            }
        }
    }
}
