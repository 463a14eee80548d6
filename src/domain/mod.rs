pub mod config;
pub mod error;
pub mod paths;
pub mod rewrite;
pub mod step;
pub mod variables;

pub use config::{PathOverrides, PathsConfig};
pub use error::AppError;
pub use paths::InstancePaths;
pub use step::{SetupReport, Step, StepOutcome, StepReport};
pub use variables::Variables;
