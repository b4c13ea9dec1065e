//! Axum route handlers for the Outreach API.

use axum::{extract::State, Json};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::errors::AppError;
use crate::outreach::assembler::{OutreachPack, OutreachPackRequest};
use crate::state::AppState;

/// POST /outreach-pack
///
/// Builds a fresh pack for one athlete/sponsor pair. 404 when either id is
/// unknown; generative-model failures never surface here.
pub async fn handle_outreach_pack(
    State(state): State<AppState>,
    Json(request): Json<OutreachPackRequest>,
) -> Result<Json<OutreachPack>, AppError> {
    let mut rng = StdRng::from_entropy();
    let pack = state.assembler.build(&request, &mut rng).await?;
    Ok(Json(pack))
}
