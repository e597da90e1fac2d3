use crate::application::ports::species_repository::SpeciesRepository;

pub struct DeleteSpecies<'a, R: SpeciesRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: SpeciesRepository + ?Sized> DeleteSpecies<'a, R> {
    pub async fn execute(&self, id: i32) -> anyhow::Result<bool> {
        self.repo.delete(id).await
    }
}
