use crate::application::ports::stratum_repository::StratumRepository;
use crate::domain::catalog::stratum::Stratum;

pub struct GetStratum<'a, R: StratumRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: StratumRepository + ?Sized> GetStratum<'a, R> {
    pub async fn execute(&self, id: i32) -> anyhow::Result<Option<Stratum>> {
        self.repo.get_by_id(id).await
    }
}
