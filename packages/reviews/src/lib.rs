pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod models;
pub mod services;
pub mod users;

pub use error::StoreError;
pub use services::{GigService, ReviewService};
pub use users::{UserDirectory, UserProfile, UserTable};
