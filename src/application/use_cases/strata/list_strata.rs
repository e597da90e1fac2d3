use crate::application::dto::catalog::ListFilter;
use crate::application::ports::stratum_repository::StratumRepository;
use crate::domain::catalog::stratum::Stratum;

pub struct ListStrata<'a, R: StratumRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: StratumRepository + ?Sized> ListStrata<'a, R> {
    pub async fn execute(&self, filter: &ListFilter) -> anyhow::Result<Vec<Stratum>> {
        self.repo.list(filter).await
    }
}
