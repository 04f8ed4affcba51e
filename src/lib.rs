// Library interface, exists to allow integration tests to work

pub mod api_model;
pub mod command_line_interface;
pub mod constants;
pub mod database_migrate_refinery;
pub mod error;
pub mod internal_api;
pub mod warp_api;
