use crate::application::ports::stats_repository::StatsRepository;
use crate::application::services::population::{compute_shares, round2};
use crate::domain::stats::population::SpeciesBreakdown;

pub struct GetSpeciesBreakdown<'a, R: StatsRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: StatsRepository + ?Sized> GetSpeciesBreakdown<'a, R> {
    /// None when the species does not exist.
    pub async fn execute(&self, species_id: i32) -> anyhow::Result<Option<SpeciesBreakdown>> {
        let Some(head) = self.repo.species_headcount(species_id).await? else {
            return Ok(None);
        };
        let by_gender = compute_shares(self.repo.count_by_gender(Some(species_id)).await?);
        let by_stratum = compute_shares(self.repo.count_by_stratum(Some(species_id)).await?);
        Ok(Some(SpeciesBreakdown {
            species_id,
            species_name: head.name,
            total: head.total,
            average_age: head.average_age.map(round2),
            by_gender,
            by_stratum,
        }))
    }
}
