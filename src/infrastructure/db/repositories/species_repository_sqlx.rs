use std::sync::Arc;

use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::dto::catalog::{ListFilter, SpeciesInput};
use crate::application::ports::species_repository::SpeciesRepository;
use crate::domain::catalog::species::Species;
use crate::infrastructure::db::Database;

pub struct SqlxSpeciesRepository {
    pub db: Arc<Database>,
}

impl SqlxSpeciesRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

fn map_row(r: &PgRow) -> Result<Species, sqlx::Error> {
    Ok(Species {
        id: r.try_get("id")?,
        name: r.try_get("name")?,
        description: r.try_get("description")?,
        average_lifespan: r.try_get("average_lifespan")?,
        created_at: r.try_get("created_at")?,
    })
}

#[async_trait]
impl SpeciesRepository for SqlxSpeciesRepository {
    async fn list(&self, filter: &ListFilter) -> anyhow::Result<Vec<Species>> {
        let pool = self.db.pool()?;
        let rows = sqlx::query(
            r#"SELECT id, name, description, average_lifespan, created_at
               FROM species
               WHERE $1::TEXT IS NULL OR name ILIKE '%' || $1 || '%'
               ORDER BY name ASC
               LIMIT $2 OFFSET $3"#,
        )
        .bind(filter.name_contains.as_deref())
        .bind(filter.limit)
        .bind(filter.offset)
        .fetch_all(&pool)
        .await?;
        Ok(rows.iter().map(map_row).collect::<Result<_, _>>()?)
    }

    async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Species>> {
        let pool = self.db.pool()?;
        let row = sqlx::query(
            r#"SELECT id, name, description, average_lifespan, created_at
               FROM species WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&pool)
        .await?;
        Ok(row.as_ref().map(map_row).transpose()?)
    }

    async fn create(&self, input: &SpeciesInput) -> anyhow::Result<Species> {
        let pool = self.db.pool()?;
        let row = sqlx::query(
            r#"INSERT INTO species (name, description, average_lifespan)
               VALUES ($1, $2, $3)
               RETURNING id, name, description, average_lifespan, created_at"#,
        )
        .bind(&input.name)
        .bind(input.description.as_deref())
        .bind(input.average_lifespan)
        .fetch_one(&pool)
        .await?;
        Ok(map_row(&row)?)
    }

    async fn update(&self, id: i32, input: &SpeciesInput) -> anyhow::Result<Option<Species>> {
        let pool = self.db.pool()?;
        let row = sqlx::query(
            r#"UPDATE species
               SET name = $2, description = $3, average_lifespan = $4
               WHERE id = $1
               RETURNING id, name, description, average_lifespan, created_at"#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(input.description.as_deref())
        .bind(input.average_lifespan)
        .fetch_optional(&pool)
        .await?;
        Ok(row.as_ref().map(map_row).transpose()?)
    }

    async fn delete(&self, id: i32) -> anyhow::Result<bool> {
        let pool = self.db.pool()?;
        let res = sqlx::query("DELETE FROM species WHERE id = $1")
            .bind(id)
            .execute(&pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
