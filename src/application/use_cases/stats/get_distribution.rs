use crate::application::ports::stats_repository::StatsRepository;
use crate::application::services::population::compute_shares;
use crate::domain::stats::population::CategoryShare;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Gender,
    Species,
    Stratum,
}

/// Population split along one catalog dimension.
pub struct GetDistribution<'a, R: StatsRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: StatsRepository + ?Sized> GetDistribution<'a, R> {
    pub async fn execute(&self, dimension: Dimension) -> anyhow::Result<Vec<CategoryShare>> {
        let counts = match dimension {
            Dimension::Gender => self.repo.count_by_gender(None).await?,
            Dimension::Species => self.repo.count_by_species().await?,
            Dimension::Stratum => self.repo.count_by_stratum(None).await?,
        };
        Ok(compute_shares(counts))
    }
}
