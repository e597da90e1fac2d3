use async_trait::async_trait;

use crate::application::dto::catalog::{GenderInput, ListFilter};
use crate::domain::catalog::gender::Gender;

#[async_trait]
pub trait GenderRepository: Send + Sync {
    async fn list(&self, filter: &ListFilter) -> anyhow::Result<Vec<Gender>>;

    async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Gender>>;

    async fn create(&self, input: &GenderInput) -> anyhow::Result<Gender>;

    // None when no row has this id
    async fn update(&self, id: i32, input: &GenderInput) -> anyhow::Result<Option<Gender>>;

    async fn delete(&self, id: i32) -> anyhow::Result<bool>;
}
