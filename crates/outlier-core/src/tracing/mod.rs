//! Observability for Outlier.
//! `tracing` crate with `EnvFilter`, per-crate log levels.

pub mod setup;

pub use setup::{env_filter, init_tracing};
