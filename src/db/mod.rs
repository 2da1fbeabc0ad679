pub mod auth_token;
pub mod database_service;
pub mod memory;
pub mod repository;
pub mod user;
