use std::sync::Arc;

use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::dto::catalog::{GenderInput, ListFilter};
use crate::application::ports::gender_repository::GenderRepository;
use crate::domain::catalog::gender::Gender;
use crate::infrastructure::db::Database;

pub struct SqlxGenderRepository {
    pub db: Arc<Database>,
}

impl SqlxGenderRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

fn map_row(r: &PgRow) -> Result<Gender, sqlx::Error> {
    Ok(Gender {
        id: r.try_get("id")?,
        name: r.try_get("name")?,
        description: r.try_get("description")?,
        created_at: r.try_get("created_at")?,
    })
}

#[async_trait]
impl GenderRepository for SqlxGenderRepository {
    async fn list(&self, filter: &ListFilter) -> anyhow::Result<Vec<Gender>> {
        let pool = self.db.pool()?;
        let rows = sqlx::query(
            r#"SELECT id, name, description, created_at
               FROM genders
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

    async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Gender>> {
        let pool = self.db.pool()?;
        let row = sqlx::query("SELECT id, name, description, created_at FROM genders WHERE id = $1")
            .bind(id)
            .fetch_optional(&pool)
            .await?;
        Ok(row.as_ref().map(map_row).transpose()?)
    }

    async fn create(&self, input: &GenderInput) -> anyhow::Result<Gender> {
        let pool = self.db.pool()?;
        let row = sqlx::query(
            r#"INSERT INTO genders (name, description)
               VALUES ($1, $2)
               RETURNING id, name, description, created_at"#,
        )
        .bind(&input.name)
        .bind(input.description.as_deref())
        .fetch_one(&pool)
        .await?;
        Ok(map_row(&row)?)
    }

    async fn update(&self, id: i32, input: &GenderInput) -> anyhow::Result<Option<Gender>> {
        let pool = self.db.pool()?;
        let row = sqlx::query(
            r#"UPDATE genders SET name = $2, description = $3
               WHERE id = $1
               RETURNING id, name, description, created_at"#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(input.description.as_deref())
        .fetch_optional(&pool)
        .await?;
        Ok(row.as_ref().map(map_row).transpose()?)
    }

    async fn delete(&self, id: i32) -> anyhow::Result<bool> {
        let pool = self.db.pool()?;
        let res = sqlx::query("DELETE FROM genders WHERE id = $1")
            .bind(id)
            .execute(&pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
