//! Axum route handlers for the Quotes API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::quotes::generator::ModelOutcome;
use crate::quotes::parser::{parse_reply, Category, QuoteResponse};
use crate::quotes::prompts::build_quote_prompt;
use crate::state::AppState;

/// Request body for `POST /generate-quote`. All four fields are required
/// by the JSON schema but otherwise free-form.
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub category: String,
    pub preference: String,
    pub profession: String,
    pub interest: String,
}

/// POST /generate-quote
///
/// Builds the templated prompt, invokes the model, and parses the free-text
/// reply per category. Provider failures and malformed replies are soft 200
/// responses carrying an `error` field — never a 5xx.
pub async fn handle_generate_quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, AppError> {
    debug!("Received quote request for category '{}'", request.category);

    let prompt = build_quote_prompt(
        &request.category,
        &request.preference,
        &request.profession,
        &request.interest,
    );

    match state.model.generate(&prompt).await {
        ModelOutcome::ProviderError(message) => Ok(Json(QuoteResponse::provider_error(message))),
        ModelOutcome::Reply(text) => {
            Ok(Json(parse_reply(Category::parse(&request.category), &text)))
        }
    }
}
