pub mod gender;
pub mod species;
pub mod stratum;
