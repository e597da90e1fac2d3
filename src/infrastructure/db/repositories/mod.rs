pub mod gender_repository_sqlx;
pub mod species_repository_sqlx;
pub mod stats_repository_sqlx;
pub mod stratum_repository_sqlx;
