use crate::application::ports::stratum_repository::StratumRepository;

pub struct DeleteStratum<'a, R: StratumRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: StratumRepository + ?Sized> DeleteStratum<'a, R> {
    pub async fn execute(&self, id: i32) -> anyhow::Result<bool> {
        self.repo.delete(id).await
    }
}
