use async_trait::async_trait;

use crate::application::dto::catalog::{ListFilter, SpeciesInput};
use crate::domain::catalog::species::Species;

#[async_trait]
pub trait SpeciesRepository: Send + Sync {
    async fn list(&self, filter: &ListFilter) -> anyhow::Result<Vec<Species>>;

    async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Species>>;

    async fn create(&self, input: &SpeciesInput) -> anyhow::Result<Species>;

    async fn update(&self, id: i32, input: &SpeciesInput) -> anyhow::Result<Option<Species>>;

    async fn delete(&self, id: i32) -> anyhow::Result<bool>;
}
