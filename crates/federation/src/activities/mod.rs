//! Activity construction helpers.

pub mod create;

pub use create::wrap_in_create;
