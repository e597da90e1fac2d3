use std::sync::Arc;

use crate::application::ports::gender_repository::GenderRepository;
use crate::application::ports::health_probe::HealthProbe;
use crate::application::ports::species_repository::SpeciesRepository;
use crate::application::ports::stats_repository::StatsRepository;
use crate::application::ports::stratum_repository::StratumRepository;
use crate::bootstrap::config::Config;
use crate::infrastructure::db::Database;
use crate::infrastructure::db::repositories::gender_repository_sqlx::SqlxGenderRepository;
use crate::infrastructure::db::repositories::species_repository_sqlx::SqlxSpeciesRepository;
use crate::infrastructure::db::repositories::stats_repository_sqlx::SqlxStatsRepository;
use crate::infrastructure::db::repositories::stratum_repository_sqlx::SqlxStratumRepository;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

#[derive(Clone)]
pub struct AppServices {
    gender_repo: Arc<dyn GenderRepository>,
    species_repo: Arc<dyn SpeciesRepository>,
    stratum_repo: Arc<dyn StratumRepository>,
    stats_repo: Arc<dyn StatsRepository>,
    health: Arc<dyn HealthProbe>,
}

impl AppServices {
    pub fn new(
        gender_repo: Arc<dyn GenderRepository>,
        species_repo: Arc<dyn SpeciesRepository>,
        stratum_repo: Arc<dyn StratumRepository>,
        stats_repo: Arc<dyn StatsRepository>,
        health: Arc<dyn HealthProbe>,
    ) -> Self {
        Self {
            gender_repo,
            species_repo,
            stratum_repo,
            stats_repo,
            health,
        }
    }

    /// Wires every port to its sqlx implementation over the shared pool owner.
    pub fn sqlx(db: Arc<Database>) -> Self {
        Self::new(
            Arc::new(SqlxGenderRepository::new(db.clone())),
            Arc::new(SqlxSpeciesRepository::new(db.clone())),
            Arc::new(SqlxStratumRepository::new(db.clone())),
            Arc::new(SqlxStatsRepository::new(db.clone())),
            db,
        )
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn gender_repo(&self) -> Arc<dyn GenderRepository> {
        self.services.gender_repo.clone()
    }

    pub fn species_repo(&self) -> Arc<dyn SpeciesRepository> {
        self.services.species_repo.clone()
    }

    pub fn stratum_repo(&self) -> Arc<dyn StratumRepository> {
        self.services.stratum_repo.clone()
    }

    pub fn stats_repo(&self) -> Arc<dyn StatsRepository> {
        self.services.stats_repo.clone()
    }

    pub fn health(&self) -> Arc<dyn HealthProbe> {
        self.services.health.clone()
    }
}
