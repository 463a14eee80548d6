use std::sync::LazyLock;

use regex::{NoExpand, Regex};

/// Port assumed when `ZEO_ADDRESS` carries no explicit port.
pub const DEFAULT_ZEO_PORT: &str = "8080";

static ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"address\s*=\s*".*?""#).expect("valid regex"));
static HOST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"host\s*=\s*".*?""#).expect("valid regex"));
static PORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"port\s*=\s*".*?""#).expect("valid regex"));

/// `ZEO_ADDRESS` split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZeoAddress {
    pub server: String,
    pub host: String,
    pub port: String,
}

impl ZeoAddress {
    /// Split on the last colon so bracketed IPv6 hosts keep their own colons.
    pub fn parse(server: &str) -> Self {
        let (host, port) = server.rsplit_once(':').unwrap_or((server, DEFAULT_ZEO_PORT));
        Self { server: server.to_string(), host: host.to_string(), port: port.to_string() }
    }
}

/// Point the quoted `address`, `host` and `port` assignments of the zeopack
/// helper at `address`. Everything else is left untouched.
pub fn point_zeopack(script: &str, address: &ZeoAddress) -> String {
    let text = ADDRESS.replace_all(script, NoExpand(&format!(r#"address = "{}""#, address.server)));
    let text = HOST.replace_all(&text, NoExpand(&format!(r#"host = "{}""#, address.host)));
    PORT.replace_all(&text, NoExpand(&format!(r#"port = "{}""#, address.port))).into_owned()
}
