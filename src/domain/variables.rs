//! Variable source consulted by every setup step.
//!
//! Steps never read the process environment directly. The binary snapshots it
//! once with [`Variables::from_process`]; tests build a `Variables` from pairs.

use std::collections::BTreeMap;
use std::ffi::OsString;

/// Recognized variable names.
pub mod names {
    // ZEO client
    pub const ZEO_ADDRESS: &str = "ZEO_ADDRESS";
    pub const ZEO_READ_ONLY: &str = "ZEO_READ_ONLY";
    pub const ZEO_CLIENT_READ_ONLY_FALLBACK: &str = "ZEO_CLIENT_READ_ONLY_FALLBACK";
    pub const ZEO_SHARED_BLOB_DIR: &str = "ZEO_SHARED_BLOB_DIR";
    pub const ZEO_STORAGE: &str = "ZEO_STORAGE";
    pub const ZEO_CLIENT_CACHE_SIZE: &str = "ZEO_CLIENT_CACHE_SIZE";

    // ZEO server
    pub const ZEO_PACK_KEEP_OLD: &str = "ZEO_PACK_KEEP_OLD";
    pub const ZEO_PORT: &str = "ZEO_PORT";
    pub const ZEO_BIND: &str = "ZEO_BIND";

    // Instance
    pub const HTTP_PORT: &str = "HTTP_PORT";

    // CORS
    pub const CORS_PREFIX: &str = "CORS_";
    pub const CORS_ALLOW_ORIGIN: &str = "CORS_ALLOW_ORIGIN";
    pub const CORS_ALLOW_METHODS: &str = "CORS_ALLOW_METHODS";
    pub const CORS_ALLOW_CREDENTIALS: &str = "CORS_ALLOW_CREDENTIALS";
    pub const CORS_EXPOSE_HEADERS: &str = "CORS_EXPOSE_HEADERS";
    pub const CORS_ALLOW_HEADERS: &str = "CORS_ALLOW_HEADERS";
    pub const CORS_MAX_AGE: &str = "CORS_MAX_AGE";

    // Buildout (prefixed name first, legacy alias second)
    pub const FIND_LINKS: &str = "FIND_LINKS";
    pub const ADDONS: (&str, &str) = ("PLONE_ADDONS", "ADDONS");
    pub const ZCML: (&str, &str) = ("PLONE_ZCML", "ZCML");
    pub const DEVELOP: (&str, &str) = ("PLONE_DEVELOP", "DEVELOP");
    pub const SITE: (&str, &str) = ("PLONE_SITE", "SITE");
    pub const PROFILES: (&str, &str) = ("PLONE_PROFILES", "PROFILES");
    pub const VERSIONS: (&str, &str) = ("PLONE_VERSIONS", "VERSIONS");
    pub const SOURCES: &str = "SOURCES";
    pub const PASSWORD: &str = "PASSWORD";
}

/// Read-only mapping from variable name to value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variables {
    values: BTreeMap<String, String>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the process environment.
    pub fn from_process() -> Self {
        Self::from_os_pairs(std::env::vars_os())
    }

    /// Build from OS strings. Invalid UTF-8 is replaced with U+FFFD so the
    /// entry still counts as present.
    pub fn from_os_pairs(pairs: impl IntoIterator<Item = (OsString, OsString)>) -> Self {
        pairs
            .into_iter()
            .map(|(key, value)| {
                (key.to_string_lossy().into_owned(), value.to_string_lossy().into_owned())
            })
            .collect()
    }

    /// Raw lookup. Present-but-empty values are returned as `Some("")`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn get_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get(name).unwrap_or(default)
    }

    /// Value only when set to something other than the empty string.
    pub fn non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|value| !value.is_empty())
    }

    /// Trimmed value, `None` when unset or blank.
    pub fn trimmed(&self, name: &str) -> Option<&str> {
        self.get(name).map(str::trim).filter(|value| !value.is_empty())
    }

    /// Look up `(name, legacy)`. The legacy alias is only consulted when `name` is unset.
    pub fn with_legacy(&self, (name, legacy): (&str, &str)) -> &str {
        self.get(name).or_else(|| self.get(legacy)).unwrap_or("")
    }

    pub fn any_with_prefix(&self, prefix: &str) -> bool {
        self.values.keys().any(|key| key.starts_with(prefix))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Variables {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_alias_used_only_when_prefixed_is_absent() {
        let vars = Variables::from_iter([("ADDONS", "legacy.egg")]);
        assert_eq!(vars.with_legacy(names::ADDONS), "legacy.egg");

        let vars = Variables::from_iter([("PLONE_ADDONS", ""), ("ADDONS", "legacy.egg")]);
        assert_eq!(vars.with_legacy(names::ADDONS), "");

        assert_eq!(Variables::new().with_legacy(names::ADDONS), "");
    }

    #[test]
    fn trimmed_treats_blank_as_unset() {
        let vars = Variables::from_iter([("ZEO_PORT", "  "), ("HTTP_PORT", " 8081 ")]);
        assert_eq!(vars.trimmed("ZEO_PORT"), None);
        assert_eq!(vars.trimmed("HTTP_PORT"), Some("8081"));
        assert_eq!(vars.trimmed("MISSING"), None);
    }

    #[test]
    fn non_empty_keeps_surrounding_whitespace() {
        let vars = Variables::from_iter([("ZEO_ADDRESS", " zeo:8100"), ("EMPTY", "")]);
        assert_eq!(vars.non_empty("ZEO_ADDRESS"), Some(" zeo:8100"));
        assert_eq!(vars.non_empty("EMPTY"), None);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_entries_are_kept_lossily() {
        use std::os::unix::ffi::OsStringExt;

        let vars = Variables::from_os_pairs([
            (
                OsString::from("CORS_ALLOW_ORIGIN"),
                OsString::from_vec(b"https://l\xffms".to_vec()),
            ),
            (OsString::from_vec(b"CORS_\xfe".to_vec()), OsString::from("1")),
        ]);
        assert_eq!(vars.get("CORS_ALLOW_ORIGIN"), Some("https://l\u{fffd}ms"));
        assert!(vars.any_with_prefix(names::CORS_PREFIX));
        assert_eq!(vars.get("CORS_\u{fffd}"), Some("1"));
    }

    #[test]
    fn prefix_detection_matches_names_not_values() {
        let vars = Variables::from_iter([("OTHER", "CORS_ALLOW_ORIGIN")]);
        assert!(!vars.any_with_prefix(names::CORS_PREFIX));

        let vars = Variables::from_iter([("CORS_ANYTHING", "")]);
        assert!(vars.any_with_prefix(names::CORS_PREFIX));
    }
}
