use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::dto::catalog::GenderInput;
use crate::application::use_cases::genders::create_gender::CreateGender;
use crate::application::use_cases::genders::delete_gender::DeleteGender;
use crate::application::use_cases::genders::get_gender::GetGender;
use crate::application::use_cases::genders::list_genders::ListGenders;
use crate::application::use_cases::genders::update_gender::UpdateGender;
use crate::bootstrap::app_context::AppContext;
use crate::domain::catalog::gender::Gender;
use crate::presentation::http::error::ApiError;
use crate::presentation::http::extract::{ListParams, ValidJson, ValidPath, ValidQuery};
use crate::presentation::http::router::ResourceRouter;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenderResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Gender> for GenderResponse {
    fn from(g: Gender) -> Self {
        GenderResponse {
            id: g.id,
            name: g.name,
            description: g.description,
            created_at: g.created_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct GenderRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<GenderRequest> for GenderInput {
    fn from(r: GenderRequest) -> Self {
        GenderInput {
            name: r.name,
            description: r.description,
        }
    }
}

#[utoipa::path(get, path = "/genders", tag = "Géneros",
    params(ListParams),
    responses((status = 200, body = [GenderResponse])))]
pub async fn list_genders(
    State(ctx): State<AppContext>,
    ValidQuery(params): ValidQuery<ListParams>,
) -> Result<Json<Vec<GenderResponse>>, ApiError> {
    let repo = ctx.gender_repo();
    let uc = ListGenders {
        repo: repo.as_ref(),
    };
    let items = uc.execute(&params.into()).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

#[utoipa::path(get, path = "/genders/{id}", tag = "Géneros",
    params(("id" = i32, Path, description = "Gender id")),
    responses(
        (status = 200, body = GenderResponse),
        (status = 404, body = crate::presentation::http::error::ErrorBody)
    ))]
pub async fn get_gender(
    State(ctx): State<AppContext>,
    ValidPath(id): ValidPath<i32>,
) -> Result<Json<GenderResponse>, ApiError> {
    let repo = ctx.gender_repo();
    let uc = GetGender {
        repo: repo.as_ref(),
    };
    uc.execute(id)
        .await?
        .map(|g| Json(g.into()))
        .ok_or_else(|| ApiError::not_found("gender", id))
}

#[utoipa::path(post, path = "/genders", tag = "Géneros", request_body = GenderRequest,
    responses(
        (status = 201, body = GenderResponse),
        (status = 409, body = crate::presentation::http::error::ErrorBody),
        (status = 422, body = crate::presentation::http::error::ErrorBody)
    ))]
pub async fn create_gender(
    State(ctx): State<AppContext>,
    ValidJson(req): ValidJson<GenderRequest>,
) -> Result<(StatusCode, Json<GenderResponse>), ApiError> {
    let repo = ctx.gender_repo();
    let uc = CreateGender {
        repo: repo.as_ref(),
    };
    let created = uc.execute(req.into()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(put, path = "/genders/{id}", tag = "Géneros", request_body = GenderRequest,
    params(("id" = i32, Path, description = "Gender id")),
    responses(
        (status = 200, body = GenderResponse),
        (status = 404, body = crate::presentation::http::error::ErrorBody),
        (status = 409, body = crate::presentation::http::error::ErrorBody),
        (status = 422, body = crate::presentation::http::error::ErrorBody)
    ))]
pub async fn update_gender(
    State(ctx): State<AppContext>,
    ValidPath(id): ValidPath<i32>,
    ValidJson(req): ValidJson<GenderRequest>,
) -> Result<Json<GenderResponse>, ApiError> {
    let repo = ctx.gender_repo();
    let uc = UpdateGender {
        repo: repo.as_ref(),
    };
    uc.execute(id, req.into())
        .await?
        .map(|g| Json(g.into()))
        .ok_or_else(|| ApiError::not_found("gender", id))
}

#[utoipa::path(delete, path = "/genders/{id}", tag = "Géneros",
    params(("id" = i32, Path, description = "Gender id")),
    responses(
        (status = 204),
        (status = 404, body = crate::presentation::http::error::ErrorBody),
        (status = 409, body = crate::presentation::http::error::ErrorBody)
    ))]
pub async fn delete_gender(
    State(ctx): State<AppContext>,
    ValidPath(id): ValidPath<i32>,
) -> Result<StatusCode, ApiError> {
    let repo = ctx.gender_repo();
    let uc = DeleteGender {
        repo: repo.as_ref(),
    };
    if uc.execute(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("gender", id))
    }
}

pub fn routes() -> ResourceRouter {
    ResourceRouter::new("genders", "/genders", "Géneros")
        .get("", list_genders)
        .post("", create_gender)
        .get("/:id", get_gender)
        .put("/:id", update_gender)
        .delete("/:id", delete_gender)
}
