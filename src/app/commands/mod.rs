pub mod paths;
pub mod setup;
