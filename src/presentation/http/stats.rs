use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::dto::stats::{CategoryShare, PopulationSummaryDto, SpeciesBreakdown};
use crate::application::use_cases::stats::get_distribution::{Dimension, GetDistribution};
use crate::application::use_cases::stats::get_species_breakdown::GetSpeciesBreakdown;
use crate::application::use_cases::stats::get_summary::GetPopulationSummary;
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::error::ApiError;
use crate::presentation::http::extract::ValidPath;
use crate::presentation::http::router::ResourceRouter;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PopulationSummary {
    pub genders: i64,
    pub species: i64,
    pub strata: i64,
    pub inhabitants: i64,
    pub average_age: Option<f64>,
}

impl From<PopulationSummaryDto> for PopulationSummary {
    fn from(d: PopulationSummaryDto) -> Self {
        PopulationSummary {
            genders: d.genders,
            species: d.species,
            strata: d.strata,
            inhabitants: d.inhabitants,
            average_age: d.average_age,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ShareItem {
    pub id: i32,
    pub name: String,
    pub count: i64,
    pub percentage: f64,
}

impl From<CategoryShare> for ShareItem {
    fn from(s: CategoryShare) -> Self {
        ShareItem {
            id: s.id,
            name: s.name,
            count: s.count,
            percentage: s.percentage,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SpeciesBreakdownResponse {
    pub species_id: i32,
    pub species_name: String,
    pub total: i64,
    pub average_age: Option<f64>,
    pub by_gender: Vec<ShareItem>,
    pub by_stratum: Vec<ShareItem>,
}

impl From<SpeciesBreakdown> for SpeciesBreakdownResponse {
    fn from(b: SpeciesBreakdown) -> Self {
        SpeciesBreakdownResponse {
            species_id: b.species_id,
            species_name: b.species_name,
            total: b.total,
            average_age: b.average_age,
            by_gender: b.by_gender.into_iter().map(Into::into).collect(),
            by_stratum: b.by_stratum.into_iter().map(Into::into).collect(),
        }
    }
}

async fn distribution(ctx: &AppContext, dimension: Dimension) -> Result<Vec<ShareItem>, ApiError> {
    let repo = ctx.stats_repo();
    let uc = GetDistribution {
        repo: repo.as_ref(),
    };
    let shares = uc.execute(dimension).await?;
    Ok(shares.into_iter().map(Into::into).collect())
}

#[utoipa::path(get, path = "/stats", tag = "Estadísticas",
    responses((status = 200, body = PopulationSummary)))]
pub async fn get_summary(
    State(ctx): State<AppContext>,
) -> Result<Json<PopulationSummary>, ApiError> {
    let repo = ctx.stats_repo();
    let uc = GetPopulationSummary {
        repo: repo.as_ref(),
    };
    Ok(Json(uc.execute().await?.into()))
}

#[utoipa::path(get, path = "/stats/genders", tag = "Estadísticas",
    responses((status = 200, body = [ShareItem])))]
pub async fn population_by_gender(
    State(ctx): State<AppContext>,
) -> Result<Json<Vec<ShareItem>>, ApiError> {
    Ok(Json(distribution(&ctx, Dimension::Gender).await?))
}

#[utoipa::path(get, path = "/stats/species", tag = "Estadísticas",
    responses((status = 200, body = [ShareItem])))]
pub async fn population_by_species(
    State(ctx): State<AppContext>,
) -> Result<Json<Vec<ShareItem>>, ApiError> {
    Ok(Json(distribution(&ctx, Dimension::Species).await?))
}

#[utoipa::path(get, path = "/stats/strata", tag = "Estadísticas",
    responses((status = 200, body = [ShareItem])))]
pub async fn population_by_stratum(
    State(ctx): State<AppContext>,
) -> Result<Json<Vec<ShareItem>>, ApiError> {
    Ok(Json(distribution(&ctx, Dimension::Stratum).await?))
}

#[utoipa::path(get, path = "/stats/species/{id}", tag = "Estadísticas",
    params(("id" = i32, Path, description = "Species id")),
    responses(
        (status = 200, body = SpeciesBreakdownResponse),
        (status = 404, body = crate::presentation::http::error::ErrorBody)
    ))]
pub async fn species_breakdown(
    State(ctx): State<AppContext>,
    ValidPath(id): ValidPath<i32>,
) -> Result<Json<SpeciesBreakdownResponse>, ApiError> {
    let repo = ctx.stats_repo();
    let uc = GetSpeciesBreakdown {
        repo: repo.as_ref(),
    };
    uc.execute(id)
        .await?
        .map(|b| Json(b.into()))
        .ok_or_else(|| ApiError::not_found("species", id))
}

pub fn routes() -> ResourceRouter {
    ResourceRouter::new("stats", "/stats", "Estadísticas")
        .get("", get_summary)
        .get("/genders", population_by_gender)
        .get("/species", population_by_species)
        .get("/strata", population_by_stratum)
        .get("/species/:id", species_breakdown)
}
