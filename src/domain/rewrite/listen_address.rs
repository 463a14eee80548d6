//! Line-oriented rewrites of `address` / `http-address` listener directives.
//!
//! Recognized forms (each optionally with `=` after the key on the HTTP side):
//!
//! ```text
//! address 8080
//! address 127.0.0.1:8080
//! address [::]:8080
//! http-address = 0.0.0.0:8080
//! ```

use std::sync::LazyLock;

use regex::{Captures, Regex};

pub const DEFAULT_ZEO_BIND: &str = "127.0.0.1";

static ZEO_ADDRESS_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)(^\s*address\s+)(?:([0-9a-fA-F.:\[\]]+):)?(\d+)\s*$").expect("valid regex")
});
static ANY_ZEO_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*address\s+").expect("valid regex"));

static HTTP_ADDRESS_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)(^\s*http-address\s*=?\s*)(?:([0-9a-fA-F.:\[\]]+):)?(\d+)\s*$")
        .expect("valid regex")
});
static GENERIC_ADDRESS_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)(^\s*address\s*=?\s*)(?:([0-9a-fA-F.:\[\]]+):)?(\d+)\s*$")
        .expect("valid regex")
});

/// Rewrite every ZEO server `address` line to `bind:port`.
///
/// Any host already on the line is replaced by `bind`. When the text has no
/// `address` line at all, one is appended.
pub fn rewrite_zeo_bind(config: &str, bind: &str, port: &str) -> String {
    let mut text = ZEO_ADDRESS_LINE
        .replace_all(config, |caps: &Captures| format!("{}{}:{}", &caps[1], bind, port))
        .into_owned();

    if !ANY_ZEO_ADDRESS.is_match(&text) {
        text.push_str(&format!("\n  address {bind}:{port}\n"));
    }
    text
}

/// Replace the port of every `http-address` and `address` line, keeping any host.
pub fn rewrite_http_port(config: &str, port: &str) -> String {
    let keep_host = |caps: &Captures| match caps.get(2) {
        Some(host) => format!("{}{}:{}", &caps[1], host.as_str(), port),
        None => format!("{}{}", &caps[1], port),
    };

    let text = HTTP_ADDRESS_LINE.replace_all(config, keep_host);
    GENERIC_ADDRESS_LINE.replace_all(&text, keep_host).into_owned()
}
