pub mod admin;
pub mod memory;
pub mod mongo;
pub mod resource;
