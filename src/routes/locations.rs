// ============================================================================
// Location Routes
// ============================================================================
//
// Endpoints:
// - GET /all-locations - Every location known to the upstream API
//
// ============================================================================

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::Value;
use std::sync::Arc;

use crate::context::AppContext;
use crate::envelope::Envelope;
use crate::error::AppError;

/// GET /all-locations
/// Lists all locations. The response data is the upstream `items` array
/// rather than the full paging wrapper.
pub async fn all_locations(
    State(ctx): State<Arc<AppContext>>,
) -> Result<impl IntoResponse, AppError> {
    match ctx.coc.fetch_envelope("/locations", &[]).await {
        Envelope {
            status: true,
            data: Some(data),
            ..
        } => {
            let items = data
                .get("items")
                .cloned()
                .unwrap_or_else(|| Value::Array(vec![]));
            Ok(Json(Envelope::ok("Locations fetched successfully", items)))
        }
        Envelope { msg, .. } => Err(AppError::upstream(msg)),
    }
}
