use crate::application::dto::stats::PopulationSummaryDto;
use crate::application::ports::stats_repository::StatsRepository;
use crate::application::services::population::round2;

pub struct GetPopulationSummary<'a, R: StatsRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: StatsRepository + ?Sized> GetPopulationSummary<'a, R> {
    pub async fn execute(&self) -> anyhow::Result<PopulationSummaryDto> {
        let t = self.repo.totals().await?;
        Ok(PopulationSummaryDto {
            genders: t.genders,
            species: t.species,
            strata: t.strata,
            inhabitants: t.inhabitants,
            average_age: t.average_age.map(round2),
        })
    }
}
