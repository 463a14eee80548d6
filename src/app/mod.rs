pub mod cli;
pub mod commands;
pub mod config;
mod environment;
pub mod logging;

pub use environment::Environment;
