use crate::application::ports::gender_repository::GenderRepository;
use crate::domain::catalog::gender::Gender;

pub struct GetGender<'a, R: GenderRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: GenderRepository + ?Sized> GetGender<'a, R> {
    pub async fn execute(&self, id: i32) -> anyhow::Result<Option<Gender>> {
        self.repo.get_by_id(id).await
    }
}
