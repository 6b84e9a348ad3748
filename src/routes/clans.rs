// ============================================================================
// Clan Routes
// ============================================================================
//
// Endpoints:
// - GET /findClan - Info for the configured featured clan
// - GET /fwaClans - Clans in the FWA location
// - GET /indClans - Clans in the India location
//
// ============================================================================

use axum::{Json, extract::State, response::IntoResponse};
use std::sync::Arc;

use crate::coc::encode_tag;
use crate::context::AppContext;
use crate::envelope::Envelope;
use crate::error::AppError;

/// GET /findClan
/// Fetches the featured clan by its configured tag
pub async fn find_clan(
    State(ctx): State<Arc<AppContext>>,
) -> Result<impl IntoResponse, AppError> {
    let path = format!("/clans/{}", encode_tag(&ctx.config.featured_clan_tag));

    match ctx.coc.fetch_envelope(&path, &[]).await {
        Envelope {
            status: true,
            data: Some(data),
            ..
        } => Ok(Json(Envelope::ok("Coc info fetched successfully", data))),
        Envelope { msg, .. } => Err(AppError::upstream(msg)),
    }
}

/// GET /fwaClans
/// Lists clans registered in the FWA location
pub async fn fwa_clans(
    State(ctx): State<Arc<AppContext>>,
) -> Result<impl IntoResponse, AppError> {
    let query = [("locationId", ctx.config.fwa_location_id.to_string())];

    match ctx.coc.fetch_envelope("/clans", &query).await {
        Envelope {
            status: true,
            data: Some(data),
            ..
        } => Ok(Json(Envelope::ok("FWA Clans Listed Successfully", data))),
        Envelope { msg, .. } => Err(AppError::upstream(msg)),
    }
}

/// GET /indClans
/// Lists clans registered in the India location
pub async fn ind_clans(
    State(ctx): State<Arc<AppContext>>,
) -> Result<impl IntoResponse, AppError> {
    let query = [("locationId", ctx.config.india_location_id.to_string())];

    match ctx.coc.fetch_envelope("/clans", &query).await {
        Envelope {
            status: true,
            data: Some(data),
            ..
        } => Ok(Json(Envelope::ok("Indian Clans Listed Successfully", data))),
        Envelope { msg, .. } => Err(AppError::upstream(msg)),
    }
}
