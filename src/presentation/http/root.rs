use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::presentation::http::router::ResourceRouter;

pub const WELCOME_MESSAGE: &str = "Bienvenido a la API Isekai de otro mundo";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WelcomeResponse {
    pub message: String,
}

/// Ruta raíz
///
/// Liveness check; does not touch the database.
#[utoipa::path(get, path = "/", tag = "Información base",
    responses((status = 200, body = WelcomeResponse)))]
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}

pub fn routes() -> ResourceRouter {
    ResourceRouter::new("root", "", "Información base").get("/", root)
}
