use crate::application::dto::catalog::GenderInput;
use crate::application::ports::gender_repository::GenderRepository;
use crate::application::use_cases::genders::create_gender::validate;
use crate::domain::catalog::gender::Gender;

pub struct UpdateGender<'a, R: GenderRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: GenderRepository + ?Sized> UpdateGender<'a, R> {
    pub async fn execute(&self, id: i32, input: GenderInput) -> anyhow::Result<Option<Gender>> {
        let input = validate(input)?;
        self.repo.update(id, &input).await
    }
}
