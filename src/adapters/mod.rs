pub mod instance_templates;
pub mod local_filesystem;
pub mod staged_filesystem;

pub use instance_templates::{InstanceTemplate, InstanceTemplates};
pub use local_filesystem::LocalFilesystem;
pub use staged_filesystem::StagedFilesystem;
