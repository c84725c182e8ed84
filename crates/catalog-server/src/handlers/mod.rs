//! HTTP handlers

pub mod admin;
pub mod error;
pub mod health;
pub mod items;
pub mod process;

pub use error::ApiError;
pub use health::{health, root};
