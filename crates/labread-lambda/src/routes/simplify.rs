use axum::Json;
use axum::extract::State;
use tracing::{debug, warn};

use labread_bedrock::narrative::{build_prompt, NarrativeSource};
use labread_core::models::interpretation::InterpretationResult;
use labread_core::models::request::{ReportInput, SimplifyRequest};

use crate::error::ApiError;
use crate::state::AppState;

/// Interpret a lab report, optionally enriched with a generated narrative.
///
/// Narrative failures never fail the request; the structured result is
/// returned with `narrativeUsed = false`.
pub async fn simplify(
    State(state): State<AppState>,
    Json(req): Json<SimplifyRequest>,
) -> Result<Json<InterpretationResult>, ApiError> {
    let input = req.validate(Some(state.max_input_bytes))?;

    let mut result = state.interpreter.interpret(&input.text, input.level);

    if input.use_narrative {
        match &state.narrator {
            Some(narrator) => narrate(&state, narrator.as_ref(), &input, &mut result).await,
            None => debug!("narrative requested but no model is configured"),
        }
    }

    Ok(Json(result))
}

async fn narrate(
    state: &AppState,
    narrator: &dyn NarrativeSource,
    input: &ReportInput,
    result: &mut InterpretationResult,
) {
    let prompt = build_prompt(&input.text, input.level);

    match tokio::time::timeout(state.narrative_timeout, narrator.complete(&prompt)).await {
        Ok(Ok(text)) => {
            if !state.interpreter.attach_narrative(result, &text) {
                warn!("narrative response was blank, using generated questions");
            }
        }
        Ok(Err(e)) => warn!(error = %e, "narrative generation failed"),
        Err(_) => warn!(
            timeout_ms = state.narrative_timeout.as_millis() as u64,
            "narrative generation timed out"
        ),
    }
}
