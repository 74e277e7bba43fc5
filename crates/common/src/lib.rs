//! Common utilities and shared types for fanout-rs.
//!
//! This crate provides the foundational components used across the
//! fanout-rs crates:
//!
//! - **Configuration**: delivery settings via [`Config`]
//! - **Error handling**: unified error types via [`AppError`] and [`AppResult`]
//!
//! # Example
//!
//! ```no_run
//! use fanout_common::{AppResult, Config};
//!
//! fn example() -> AppResult<()> {
//!     let config = Config::load()?;
//!     println!("delivery depth budget: {}", config.delivery.max_delivery_depth);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;

pub use config::{Config, DeliveryConfig};
pub use error::{AppError, AppResult};
