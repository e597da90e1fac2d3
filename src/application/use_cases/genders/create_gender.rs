use crate::application::dto::catalog::GenderInput;
use crate::application::ports::gender_repository::GenderRepository;
use crate::application::validation::{ValidationError, normalize_description, normalize_name};
use crate::domain::catalog::gender::Gender;

pub struct CreateGender<'a, R: GenderRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: GenderRepository + ?Sized> CreateGender<'a, R> {
    pub async fn execute(&self, input: GenderInput) -> anyhow::Result<Gender> {
        let input = validate(input)?;
        self.repo.create(&input).await
    }
}

pub fn validate(input: GenderInput) -> Result<GenderInput, ValidationError> {
    Ok(GenderInput {
        name: normalize_name(&input.name)?,
        description: normalize_description(input.description.as_deref())?,
    })
}
