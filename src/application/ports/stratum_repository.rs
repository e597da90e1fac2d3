use async_trait::async_trait;

use crate::application::dto::catalog::{ListFilter, StratumInput};
use crate::domain::catalog::stratum::Stratum;

/// Strata are listed by rank, most privileged first.
#[async_trait]
pub trait StratumRepository: Send + Sync {
    async fn list(&self, filter: &ListFilter) -> anyhow::Result<Vec<Stratum>>;

    async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Stratum>>;

    async fn create(&self, input: &StratumInput) -> anyhow::Result<Stratum>;

    async fn update(&self, id: i32, input: &StratumInput) -> anyhow::Result<Option<Stratum>>;

    async fn delete(&self, id: i32) -> anyhow::Result<bool>;
}
