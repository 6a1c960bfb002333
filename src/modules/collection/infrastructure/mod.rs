pub mod models;
pub mod persistence;
