use crate::application::dto::catalog::SpeciesInput;
use crate::application::ports::species_repository::SpeciesRepository;
use crate::application::use_cases::species::create_species::validate;
use crate::domain::catalog::species::Species;

pub struct UpdateSpecies<'a, R: SpeciesRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: SpeciesRepository + ?Sized> UpdateSpecies<'a, R> {
    pub async fn execute(&self, id: i32, input: SpeciesInput) -> anyhow::Result<Option<Species>> {
        let input = validate(input)?;
        self.repo.update(id, &input).await
    }
}
