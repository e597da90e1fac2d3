pub mod error;
pub mod extract;
pub mod genders;
pub mod health;
pub mod openapi;
pub mod root;
pub mod router;
pub mod species;
pub mod stats;
pub mod strata;
