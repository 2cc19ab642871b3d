//! Shared command line configuration for the logic schema tools.

pub mod config;

pub use config::Config;
