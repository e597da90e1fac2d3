use utoipa::OpenApi;

use crate::presentation::http::{error, genders, health, root, species, stats, strata};

#[derive(OpenApi)]
#[openapi(
        paths(
            root::root,
            health::health,
            genders::list_genders,
            genders::get_gender,
            genders::create_gender,
            genders::update_gender,
            genders::delete_gender,
            species::list_species,
            species::get_species,
            species::create_species,
            species::update_species,
            species::delete_species,
            strata::list_strata,
            strata::get_stratum,
            strata::create_stratum,
            strata::update_stratum,
            strata::delete_stratum,
            stats::get_summary,
            stats::population_by_gender,
            stats::population_by_species,
            stats::population_by_stratum,
            stats::species_breakdown,
        ),
        components(schemas(
            error::ErrorBody,
            root::WelcomeResponse,
            health::HealthResp,
            genders::GenderResponse,
            genders::GenderRequest,
            species::SpeciesResponse,
            species::SpeciesRequest,
            strata::StratumResponse,
            strata::StratumRequest,
            stats::PopulationSummary,
            stats::ShareItem,
            stats::SpeciesBreakdownResponse,
        )),
        tags(
            (name = "Información base", description = "Bienvenida y verificación del servicio"),
            (name = "Géneros", description = "Géneros de los habitantes"),
            (name = "Especies", description = "Especies del mundo"),
            (name = "Estratos sociales", description = "Estratos sociales"),
            (name = "Estadísticas", description = "Estadísticas de población"),
            (name = "Salud", description = "Estado de la base de datos")
        )
    )]
pub struct ApiDoc;
