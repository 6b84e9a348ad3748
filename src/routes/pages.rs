// ============================================================================
// HTML Page Routes
// ============================================================================
//
// Endpoints:
// - GET / - Clan list for the FWA location
// - GET /:tag - Detail page for a single clan
//
// Failures respond with the same HTTP 500 JSON envelope as the API
// endpoints.
//
// ============================================================================

use axum::{
    extract::{Path, State},
    response::Html,
};
use serde_json::Value;
use std::sync::Arc;

use crate::coc::encode_tag;
use crate::context::AppContext;
use crate::envelope::Envelope;
use crate::error::AppError;
use crate::html;

/// GET /
/// Renders the clan list page from the FWA location listing
pub async fn home(State(ctx): State<Arc<AppContext>>) -> Result<Html<String>, AppError> {
    let query = [("locationId", ctx.config.fwa_location_id.to_string())];

    match ctx.coc.fetch_envelope("/clans", &query).await {
        Envelope {
            status: true,
            data: Some(data),
            ..
        } => {
            let empty = Vec::new();
            let items = data
                .get("items")
                .and_then(Value::as_array)
                .unwrap_or(&empty);
            Ok(Html(html::clan_list(items)))
        }
        Envelope { msg, .. } => Err(AppError::upstream(msg)),
    }
}

/// GET /:tag
/// Renders the detail page for one clan. The tag is normalized and
/// percent-encoded exactly once before it reaches the upstream, so
/// `/RJ0J9JCG`, `/rj0j9jcg` and `/%23RJ0J9JCG` all resolve to the same
/// clan.
pub async fn clan_page(
    State(ctx): State<Arc<AppContext>>,
    Path(tag): Path<String>,
) -> Result<Html<String>, AppError> {
    let path = format!("/clans/{}", encode_tag(&tag));

    match ctx.coc.fetch_envelope(&path, &[]).await {
        Envelope {
            status: true,
            data: Some(data),
            ..
        } => Ok(Html(html::clan_detail(&data))),
        Envelope { msg, .. } => Err(AppError::upstream(msg)),
    }
}
