pub mod app_context;
pub mod application;
pub mod config;
