use crate::application::dto::catalog::ListFilter;
use crate::application::ports::species_repository::SpeciesRepository;
use crate::domain::catalog::species::Species;

pub struct ListSpecies<'a, R: SpeciesRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: SpeciesRepository + ?Sized> ListSpecies<'a, R> {
    pub async fn execute(&self, filter: &ListFilter) -> anyhow::Result<Vec<Species>> {
        self.repo.list(filter).await
    }
}
