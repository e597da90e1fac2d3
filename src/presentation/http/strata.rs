use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::dto::catalog::StratumInput;
use crate::application::use_cases::strata::create_stratum::CreateStratum;
use crate::application::use_cases::strata::delete_stratum::DeleteStratum;
use crate::application::use_cases::strata::get_stratum::GetStratum;
use crate::application::use_cases::strata::list_strata::ListStrata;
use crate::application::use_cases::strata::update_stratum::UpdateStratum;
use crate::bootstrap::app_context::AppContext;
use crate::domain::catalog::stratum::Stratum;
use crate::presentation::http::error::ApiError;
use crate::presentation::http::extract::{ListParams, ValidJson, ValidPath, ValidQuery};
use crate::presentation::http::router::ResourceRouter;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StratumResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// 0 is the most privileged stratum
    pub rank: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Stratum> for StratumResponse {
    fn from(s: Stratum) -> Self {
        StratumResponse {
            id: s.id,
            name: s.name,
            description: s.description,
            rank: s.rank,
            created_at: s.created_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct StratumRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub rank: i32,
}

impl From<StratumRequest> for StratumInput {
    fn from(r: StratumRequest) -> Self {
        StratumInput {
            name: r.name,
            description: r.description,
            rank: r.rank,
        }
    }
}

#[utoipa::path(get, path = "/strata", tag = "Estratos sociales",
    params(ListParams),
    responses((status = 200, description = "Ordered by rank", body = [StratumResponse])))]
pub async fn list_strata(
    State(ctx): State<AppContext>,
    ValidQuery(params): ValidQuery<ListParams>,
) -> Result<Json<Vec<StratumResponse>>, ApiError> {
    let repo = ctx.stratum_repo();
    let uc = ListStrata {
        repo: repo.as_ref(),
    };
    let items = uc.execute(&params.into()).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

#[utoipa::path(get, path = "/strata/{id}", tag = "Estratos sociales",
    params(("id" = i32, Path, description = "Stratum id")),
    responses(
        (status = 200, body = StratumResponse),
        (status = 404, body = crate::presentation::http::error::ErrorBody)
    ))]
pub async fn get_stratum(
    State(ctx): State<AppContext>,
    ValidPath(id): ValidPath<i32>,
) -> Result<Json<StratumResponse>, ApiError> {
    let repo = ctx.stratum_repo();
    let uc = GetStratum {
        repo: repo.as_ref(),
    };
    uc.execute(id)
        .await?
        .map(|s| Json(s.into()))
        .ok_or_else(|| ApiError::not_found("stratum", id))
}

#[utoipa::path(post, path = "/strata", tag = "Estratos sociales", request_body = StratumRequest,
    responses(
        (status = 201, body = StratumResponse),
        (status = 409, body = crate::presentation::http::error::ErrorBody),
        (status = 422, body = crate::presentation::http::error::ErrorBody)
    ))]
pub async fn create_stratum(
    State(ctx): State<AppContext>,
    ValidJson(req): ValidJson<StratumRequest>,
) -> Result<(StatusCode, Json<StratumResponse>), ApiError> {
    let repo = ctx.stratum_repo();
    let uc = CreateStratum {
        repo: repo.as_ref(),
    };
    let created = uc.execute(req.into()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(put, path = "/strata/{id}", tag = "Estratos sociales", request_body = StratumRequest,
    params(("id" = i32, Path, description = "Stratum id")),
    responses(
        (status = 200, body = StratumResponse),
        (status = 404, body = crate::presentation::http::error::ErrorBody),
        (status = 409, body = crate::presentation::http::error::ErrorBody),
        (status = 422, body = crate::presentation::http::error::ErrorBody)
    ))]
pub async fn update_stratum(
    State(ctx): State<AppContext>,
    ValidPath(id): ValidPath<i32>,
    ValidJson(req): ValidJson<StratumRequest>,
) -> Result<Json<StratumResponse>, ApiError> {
    let repo = ctx.stratum_repo();
    let uc = UpdateStratum {
        repo: repo.as_ref(),
    };
    uc.execute(id, req.into())
        .await?
        .map(|s| Json(s.into()))
        .ok_or_else(|| ApiError::not_found("stratum", id))
}

#[utoipa::path(delete, path = "/strata/{id}", tag = "Estratos sociales",
    params(("id" = i32, Path, description = "Stratum id")),
    responses(
        (status = 204),
        (status = 404, body = crate::presentation::http::error::ErrorBody),
        (status = 409, body = crate::presentation::http::error::ErrorBody)
    ))]
pub async fn delete_stratum(
    State(ctx): State<AppContext>,
    ValidPath(id): ValidPath<i32>,
) -> Result<StatusCode, ApiError> {
    let repo = ctx.stratum_repo();
    let uc = DeleteStratum {
        repo: repo.as_ref(),
    };
    if uc.execute(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("stratum", id))
    }
}

pub fn routes() -> ResourceRouter {
    ResourceRouter::new("strata", "/strata", "Estratos sociales")
        .get("", list_strata)
        .post("", create_stratum)
        .get("/:id", get_stratum)
        .put("/:id", update_stratum)
        .delete("/:id", delete_stratum)
}
