//! Pure text transformations, one module per setup concern.
//!
//! Every function here takes the current file content plus parameters and
//! returns the new content. None of them touch the filesystem.

pub mod buildout;
pub mod cors;
pub mod listen_address;
pub mod pack_keep_old;
pub mod zeo_client;
pub mod zeopack;

pub use buildout::BuildoutSettings;
pub use cors::CorsPolicy;
pub use listen_address::{DEFAULT_ZEO_BIND, rewrite_http_port, rewrite_zeo_bind};
pub use pack_keep_old::{disable_pack_keep_old, is_falsy};
pub use zeo_client::{ZeoClientSettings, replace_blobstorage};
pub use zeopack::{ZeoAddress, point_zeopack};
