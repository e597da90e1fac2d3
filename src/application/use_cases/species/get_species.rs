use crate::application::ports::species_repository::SpeciesRepository;
use crate::domain::catalog::species::Species;

pub struct GetSpecies<'a, R: SpeciesRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: SpeciesRepository + ?Sized> GetSpecies<'a, R> {
    pub async fn execute(&self, id: i32) -> anyhow::Result<Option<Species>> {
        self.repo.get_by_id(id).await
    }
}
