pub mod achievement;
pub mod admin;
pub mod contact;
pub mod project;
pub mod resource;
pub mod token;
