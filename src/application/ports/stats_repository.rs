use async_trait::async_trait;

use crate::domain::stats::population::{CategoryCount, PopulationTotals};

#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesHeadcount {
    pub name: String,
    pub total: i64,
    pub average_age: Option<f64>,
}

/// Aggregate queries over the inhabitants table. Count listings include
/// categories with no inhabitants.
#[async_trait]
pub trait StatsRepository: Send + Sync {
    async fn totals(&self) -> anyhow::Result<PopulationTotals>;

    async fn count_by_gender(&self, species_id: Option<i32>) -> anyhow::Result<Vec<CategoryCount>>;

    async fn count_by_species(&self) -> anyhow::Result<Vec<CategoryCount>>;

    async fn count_by_stratum(&self, species_id: Option<i32>)
    -> anyhow::Result<Vec<CategoryCount>>;

    async fn species_headcount(&self, species_id: i32) -> anyhow::Result<Option<SpeciesHeadcount>>;
}
