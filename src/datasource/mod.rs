//! External Data Sources
//!
//! This module contains the outbound HTTP clients:
//! - `pricing` - pass-through client for the live pricing provider
//! - `kibot` - historical daily bar fetch and CSV parse

pub mod kibot;
pub mod pricing;

pub use kibot::KibotClient;
pub use pricing::{PricingClient, PricingError};
