pub mod get_distribution;
pub mod get_species_breakdown;
pub mod get_summary;
