use std::sync::Arc;

use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::dto::catalog::{ListFilter, StratumInput};
use crate::application::ports::stratum_repository::StratumRepository;
use crate::domain::catalog::stratum::Stratum;
use crate::infrastructure::db::Database;

pub struct SqlxStratumRepository {
    pub db: Arc<Database>,
}

impl SqlxStratumRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

fn map_row(r: &PgRow) -> Result<Stratum, sqlx::Error> {
    Ok(Stratum {
        id: r.try_get("id")?,
        name: r.try_get("name")?,
        description: r.try_get("description")?,
        rank: r.try_get("rank")?,
        created_at: r.try_get("created_at")?,
    })
}

#[async_trait]
impl StratumRepository for SqlxStratumRepository {
    async fn list(&self, filter: &ListFilter) -> anyhow::Result<Vec<Stratum>> {
        let pool = self.db.pool()?;
        let rows = sqlx::query(
            r#"SELECT id, name, description, rank, created_at
               FROM strata
               WHERE $1::TEXT IS NULL OR name ILIKE '%' || $1 || '%'
               ORDER BY rank ASC, name ASC
               LIMIT $2 OFFSET $3"#,
        )
        .bind(filter.name_contains.as_deref())
        .bind(filter.limit)
        .bind(filter.offset)
        .fetch_all(&pool)
        .await?;
        Ok(rows.iter().map(map_row).collect::<Result<_, _>>()?)
    }

    async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Stratum>> {
        let pool = self.db.pool()?;
        let row =
            sqlx::query("SELECT id, name, description, rank, created_at FROM strata WHERE id = $1")
                .bind(id)
                .fetch_optional(&pool)
                .await?;
        Ok(row.as_ref().map(map_row).transpose()?)
    }

    async fn create(&self, input: &StratumInput) -> anyhow::Result<Stratum> {
        let pool = self.db.pool()?;
        let row = sqlx::query(
            r#"INSERT INTO strata (name, description, rank)
               VALUES ($1, $2, $3)
               RETURNING id, name, description, rank, created_at"#,
        )
        .bind(&input.name)
        .bind(input.description.as_deref())
        .bind(input.rank)
        .fetch_one(&pool)
        .await?;
        Ok(map_row(&row)?)
    }

    async fn update(&self, id: i32, input: &StratumInput) -> anyhow::Result<Option<Stratum>> {
        let pool = self.db.pool()?;
        let row = sqlx::query(
            r#"UPDATE strata SET name = $2, description = $3, rank = $4
               WHERE id = $1
               RETURNING id, name, description, rank, created_at"#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(input.description.as_deref())
        .bind(input.rank)
        .fetch_optional(&pool)
        .await?;
        Ok(row.as_ref().map(map_row).transpose()?)
    }

    async fn delete(&self, id: i32) -> anyhow::Result<bool> {
        let pool = self.db.pool()?;
        let res = sqlx::query("DELETE FROM strata WHERE id = $1")
            .bind(id)
            .execute(&pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
