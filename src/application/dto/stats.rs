pub use crate::domain::stats::population::{CategoryShare, SpeciesBreakdown};

#[derive(Debug, Clone, PartialEq)]
pub struct PopulationSummaryDto {
    pub genders: i64,
    pub species: i64,
    pub strata: i64,
    pub inhabitants: i64,
    pub average_age: Option<f64>,
}
