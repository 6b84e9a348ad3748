// ============================================================================
// Player Routes
// ============================================================================
//
// Endpoints:
// - GET /player - Details for the configured featured player
//
// ============================================================================

use axum::{Json, extract::State, response::IntoResponse};
use std::sync::Arc;

use crate::coc::encode_tag;
use crate::context::AppContext;
use crate::envelope::Envelope;
use crate::error::AppError;

/// GET /player
/// Fetches the featured player by their configured tag
pub async fn player(State(ctx): State<Arc<AppContext>>) -> Result<impl IntoResponse, AppError> {
    let path = format!("/players/{}", encode_tag(&ctx.config.featured_player_tag));

    match ctx.coc.fetch_envelope(&path, &[]).await {
        Envelope {
            status: true,
            data: Some(data),
            ..
        } => Ok(Json(Envelope::ok(
            "Player details fetched successfully",
            data,
        ))),
        Envelope { msg, .. } => Err(AppError::upstream(msg)),
    }
}
