use crate::application::ports::gender_repository::GenderRepository;

pub struct DeleteGender<'a, R: GenderRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: GenderRepository + ?Sized> DeleteGender<'a, R> {
    pub async fn execute(&self, id: i32) -> anyhow::Result<bool> {
        self.repo.delete(id).await
    }
}
