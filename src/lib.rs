// Library Crate Root
// lib.rs

pub mod api;
pub mod database;
pub mod datasource;
pub mod models;
pub mod utils;

// re-export at crate root
pub use api::{create_router, DatabaseState};
pub use datasource::{KibotClient, PricingClient, PricingError};
pub use models::{Bar, DailySeries};
