pub mod gender_repository;
pub mod health_probe;
pub mod species_repository;
pub mod stats_repository;
pub mod stratum_repository;
