pub mod create_stratum;
pub mod delete_stratum;
pub mod get_stratum;
pub mod list_strata;
pub mod update_stratum;
