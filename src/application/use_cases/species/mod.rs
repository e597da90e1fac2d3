pub mod create_species;
pub mod delete_species;
pub mod get_species;
pub mod list_species;
pub mod update_species;
