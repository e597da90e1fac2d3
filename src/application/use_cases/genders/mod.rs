pub mod create_gender;
pub mod delete_gender;
pub mod get_gender;
pub mod list_genders;
pub mod update_gender;
