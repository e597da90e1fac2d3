use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::router::ResourceRouter;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResp {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Salud",
    responses((status = 200, body = HealthResp))
)]
pub async fn health(State(ctx): State<AppContext>) -> Json<HealthResp> {
    let status = if ctx.health().is_healthy().await {
        "ok"
    } else {
        "degraded"
    };
    Json(HealthResp {
        status: status.to_string(),
    })
}

pub fn routes() -> ResourceRouter {
    ResourceRouter::new("health", "/health", "Salud").get("", health)
}
