use std::sync::Arc;

use crate::quotes::generator::QuoteModel;

/// Shared application state injected into all route handlers via Axum
/// extractors. Read-only after startup — there is no per-request mutation.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable quote model. Default: GeminiQuoteModel. Tests stub this.
    pub model: Arc<dyn QuoteModel>,
}
