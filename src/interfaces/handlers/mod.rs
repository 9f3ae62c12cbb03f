pub mod auth;
pub mod contact;
pub mod json_error;
pub mod resources;
pub mod system;
