pub mod genders;
pub mod species;
pub mod stats;
pub mod strata;
