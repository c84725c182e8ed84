//! Business logic services

pub mod catalog;
pub mod seeder;

pub use catalog::CatalogService;
