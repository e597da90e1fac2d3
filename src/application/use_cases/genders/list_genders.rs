use crate::application::dto::catalog::ListFilter;
use crate::application::ports::gender_repository::GenderRepository;
use crate::domain::catalog::gender::Gender;

pub struct ListGenders<'a, R: GenderRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: GenderRepository + ?Sized> ListGenders<'a, R> {
    pub async fn execute(&self, filter: &ListFilter) -> anyhow::Result<Vec<Gender>> {
        self.repo.list(filter).await
    }
}
