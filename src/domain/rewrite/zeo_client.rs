use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use crate::domain::variables::{Variables, names};

/// Opening tag of the stock storage block. Its absence means the client block
/// has already been swapped in.
pub const BLOBSTORAGE_MARKER: &str = "<blobstorage>";

static BLOBSTORAGE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<blobstorage>.+</blobstorage>").expect("valid regex"));

/// Fields of the `<zeoclient>` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZeoClientSettings {
    pub server: String,
    pub read_only: String,
    pub read_only_fallback: String,
    pub shared_blob_dir: String,
    pub storage: String,
    pub cache_size: String,
}

impl ZeoClientSettings {
    pub fn from_variables(server: &str, vars: &Variables) -> Self {
        Self {
            server: server.to_string(),
            read_only: vars.get_or(names::ZEO_READ_ONLY, "false").to_string(),
            read_only_fallback: vars
                .get_or(names::ZEO_CLIENT_READ_ONLY_FALLBACK, "false")
                .to_string(),
            shared_blob_dir: vars.get_or(names::ZEO_SHARED_BLOB_DIR, "off").to_string(),
            storage: vars.get_or(names::ZEO_STORAGE, "1").to_string(),
            cache_size: vars.get_or(names::ZEO_CLIENT_CACHE_SIZE, "128MB").to_string(),
        }
    }
}

/// Replace everything from the first `<blobstorage>` to the last
/// `</blobstorage>` with `client_block`.
///
/// Text without a complete block is returned as is. Callers check
/// [`BLOBSTORAGE_MARKER`] to tell a configured file from a stock one.
pub fn replace_blobstorage(config: &str, client_block: &str) -> String {
    BLOBSTORAGE_BLOCK.replace_all(config, NoExpand(client_block)).into_owned()
}
