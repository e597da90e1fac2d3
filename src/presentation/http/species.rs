use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::dto::catalog::SpeciesInput;
use crate::application::use_cases::species::create_species::CreateSpecies;
use crate::application::use_cases::species::delete_species::DeleteSpecies;
use crate::application::use_cases::species::get_species::GetSpecies;
use crate::application::use_cases::species::list_species::ListSpecies;
use crate::application::use_cases::species::update_species::UpdateSpecies;
use crate::bootstrap::app_context::AppContext;
use crate::domain::catalog::species::Species;
use crate::presentation::http::error::ApiError;
use crate::presentation::http::extract::{ListParams, ValidJson, ValidPath, ValidQuery};
use crate::presentation::http::router::ResourceRouter;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SpeciesResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Years
    pub average_lifespan: Option<i32>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Species> for SpeciesResponse {
    fn from(s: Species) -> Self {
        SpeciesResponse {
            id: s.id,
            name: s.name,
            description: s.description,
            average_lifespan: s.average_lifespan,
            created_at: s.created_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SpeciesRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub average_lifespan: Option<i32>,
}

impl From<SpeciesRequest> for SpeciesInput {
    fn from(r: SpeciesRequest) -> Self {
        SpeciesInput {
            name: r.name,
            description: r.description,
            average_lifespan: r.average_lifespan,
        }
    }
}

#[utoipa::path(get, path = "/species", tag = "Especies",
    params(ListParams),
    responses((status = 200, body = [SpeciesResponse])))]
pub async fn list_species(
    State(ctx): State<AppContext>,
    ValidQuery(params): ValidQuery<ListParams>,
) -> Result<Json<Vec<SpeciesResponse>>, ApiError> {
    let repo = ctx.species_repo();
    let uc = ListSpecies {
        repo: repo.as_ref(),
    };
    let items = uc.execute(&params.into()).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

#[utoipa::path(get, path = "/species/{id}", tag = "Especies",
    params(("id" = i32, Path, description = "Species id")),
    responses(
        (status = 200, body = SpeciesResponse),
        (status = 404, body = crate::presentation::http::error::ErrorBody)
    ))]
pub async fn get_species(
    State(ctx): State<AppContext>,
    ValidPath(id): ValidPath<i32>,
) -> Result<Json<SpeciesResponse>, ApiError> {
    let repo = ctx.species_repo();
    let uc = GetSpecies {
        repo: repo.as_ref(),
    };
    uc.execute(id)
        .await?
        .map(|s| Json(s.into()))
        .ok_or_else(|| ApiError::not_found("species", id))
}

#[utoipa::path(post, path = "/species", tag = "Especies", request_body = SpeciesRequest,
    responses(
        (status = 201, body = SpeciesResponse),
        (status = 409, body = crate::presentation::http::error::ErrorBody),
        (status = 422, body = crate::presentation::http::error::ErrorBody)
    ))]
pub async fn create_species(
    State(ctx): State<AppContext>,
    ValidJson(req): ValidJson<SpeciesRequest>,
) -> Result<(StatusCode, Json<SpeciesResponse>), ApiError> {
    let repo = ctx.species_repo();
    let uc = CreateSpecies {
        repo: repo.as_ref(),
    };
    let created = uc.execute(req.into()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(put, path = "/species/{id}", tag = "Especies", request_body = SpeciesRequest,
    params(("id" = i32, Path, description = "Species id")),
    responses(
        (status = 200, body = SpeciesResponse),
        (status = 404, body = crate::presentation::http::error::ErrorBody),
        (status = 409, body = crate::presentation::http::error::ErrorBody),
        (status = 422, body = crate::presentation::http::error::ErrorBody)
    ))]
pub async fn update_species(
    State(ctx): State<AppContext>,
    ValidPath(id): ValidPath<i32>,
    ValidJson(req): ValidJson<SpeciesRequest>,
) -> Result<Json<SpeciesResponse>, ApiError> {
    let repo = ctx.species_repo();
    let uc = UpdateSpecies {
        repo: repo.as_ref(),
    };
    uc.execute(id, req.into())
        .await?
        .map(|s| Json(s.into()))
        .ok_or_else(|| ApiError::not_found("species", id))
}

#[utoipa::path(delete, path = "/species/{id}", tag = "Especies",
    params(("id" = i32, Path, description = "Species id")),
    responses(
        (status = 204),
        (status = 404, body = crate::presentation::http::error::ErrorBody),
        (status = 409, body = crate::presentation::http::error::ErrorBody)
    ))]
pub async fn delete_species(
    State(ctx): State<AppContext>,
    ValidPath(id): ValidPath<i32>,
) -> Result<StatusCode, ApiError> {
    let repo = ctx.species_repo();
    let uc = DeleteSpecies {
        repo: repo.as_ref(),
    };
    if uc.execute(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("species", id))
    }
}

pub fn routes() -> ResourceRouter {
    ResourceRouter::new("species", "/species", "Especies")
        .get("", list_species)
        .post("", create_species)
        .get("/:id", get_species)
        .put("/:id", update_species)
        .delete("/:id", delete_species)
}
