//! Side-effecting concerns: path guarding and configuration.

pub mod config;
pub mod paths;
