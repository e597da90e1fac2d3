use crate::application::dto::catalog::SpeciesInput;
use crate::application::ports::species_repository::SpeciesRepository;
use crate::application::validation::{ValidationError, normalize_description, normalize_name};
use crate::domain::catalog::species::Species;

pub struct CreateSpecies<'a, R: SpeciesRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: SpeciesRepository + ?Sized> CreateSpecies<'a, R> {
    pub async fn execute(&self, input: SpeciesInput) -> anyhow::Result<Species> {
        let input = validate(input)?;
        self.repo.create(&input).await
    }
}

pub fn validate(input: SpeciesInput) -> Result<SpeciesInput, ValidationError> {
    if let Some(years) = input.average_lifespan.filter(|y| *y <= 0) {
        return Err(ValidationError::new(
            "average_lifespan",
            format!("must be positive, got {years}"),
        ));
    }
    Ok(SpeciesInput {
        name: normalize_name(&input.name)?,
        description: normalize_description(input.description.as_deref())?,
        average_lifespan: input.average_lifespan,
    })
}
