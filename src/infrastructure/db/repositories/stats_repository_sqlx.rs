use std::sync::Arc;

use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::ports::stats_repository::{SpeciesHeadcount, StatsRepository};
use crate::domain::stats::population::{CategoryCount, PopulationTotals};
use crate::infrastructure::db::Database;

pub struct SqlxStatsRepository {
    pub db: Arc<Database>,
}

impl SqlxStatsRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

fn map_count(r: &PgRow) -> Result<CategoryCount, sqlx::Error> {
    Ok(CategoryCount {
        id: r.try_get("id")?,
        name: r.try_get("name")?,
        count: r.try_get("count")?,
    })
}

#[async_trait]
impl StatsRepository for SqlxStatsRepository {
    async fn totals(&self) -> anyhow::Result<PopulationTotals> {
        let pool = self.db.pool()?;
        let r = sqlx::query(
            r#"SELECT (SELECT COUNT(*) FROM genders)::BIGINT     AS genders,
                      (SELECT COUNT(*) FROM species)::BIGINT     AS species,
                      (SELECT COUNT(*) FROM strata)::BIGINT      AS strata,
                      (SELECT COUNT(*) FROM inhabitants)::BIGINT AS inhabitants,
                      (SELECT AVG(age) FROM inhabitants)::FLOAT8 AS average_age"#,
        )
        .fetch_one(&pool)
        .await?;
        Ok(PopulationTotals {
            genders: r.try_get("genders")?,
            species: r.try_get("species")?,
            strata: r.try_get("strata")?,
            inhabitants: r.try_get("inhabitants")?,
            average_age: r.try_get("average_age")?,
        })
    }

    async fn count_by_gender(&self, species_id: Option<i32>) -> anyhow::Result<Vec<CategoryCount>> {
        let pool = self.db.pool()?;
        let rows = sqlx::query(
            r#"SELECT g.id, g.name, COUNT(i.id)::BIGINT AS count
               FROM genders g
               LEFT JOIN inhabitants i
                 ON i.gender_id = g.id AND ($1::INT IS NULL OR i.species_id = $1)
               GROUP BY g.id, g.name
               ORDER BY g.name ASC"#,
        )
        .bind(species_id)
        .fetch_all(&pool)
        .await?;
        Ok(rows.iter().map(map_count).collect::<Result<_, _>>()?)
    }

    async fn count_by_species(&self) -> anyhow::Result<Vec<CategoryCount>> {
        let pool = self.db.pool()?;
        let rows = sqlx::query(
            r#"SELECT s.id, s.name, COUNT(i.id)::BIGINT AS count
               FROM species s
               LEFT JOIN inhabitants i ON i.species_id = s.id
               GROUP BY s.id, s.name
               ORDER BY s.name ASC"#,
        )
        .fetch_all(&pool)
        .await?;
        Ok(rows.iter().map(map_count).collect::<Result<_, _>>()?)
    }

    async fn count_by_stratum(
        &self,
        species_id: Option<i32>,
    ) -> anyhow::Result<Vec<CategoryCount>> {
        let pool = self.db.pool()?;
        let rows = sqlx::query(
            r#"SELECT st.id, st.name, COUNT(i.id)::BIGINT AS count
               FROM strata st
               LEFT JOIN inhabitants i
                 ON i.stratum_id = st.id AND ($1::INT IS NULL OR i.species_id = $1)
               GROUP BY st.id, st.name, st.rank
               ORDER BY st.rank ASC"#,
        )
        .bind(species_id)
        .fetch_all(&pool)
        .await?;
        Ok(rows.iter().map(map_count).collect::<Result<_, _>>()?)
    }

    async fn species_headcount(&self, species_id: i32) -> anyhow::Result<Option<SpeciesHeadcount>> {
        let pool = self.db.pool()?;
        let row = sqlx::query(
            r#"SELECT s.name, COUNT(i.id)::BIGINT AS total, AVG(i.age)::FLOAT8 AS average_age
               FROM species s
               LEFT JOIN inhabitants i ON i.species_id = s.id
               WHERE s.id = $1
               GROUP BY s.id, s.name"#,
        )
        .bind(species_id)
        .fetch_optional(&pool)
        .await?;
        let Some(r) = row else {
            return Ok(None);
        };
        Ok(Some(SpeciesHeadcount {
            name: r.try_get("name")?,
            total: r.try_get("total")?,
            average_age: r.try_get("average_age")?,
        }))
    }
}
