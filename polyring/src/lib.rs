#![deny(clippy::shadow_unrelated)]
pub mod config;
pub mod error;
pub mod math;
pub mod prelude;
