pub const PACK_KEEP_OLD: &str = "pack-keep-old";
const FILESTORAGE_CLOSE: &str = "</filestorage>";
const FALSY: [&str; 5] = ["false", "no", "0", "n", "f"];

/// Whether `value` is one of the recognized false spellings, case-insensitively.
pub fn is_falsy(value: &str) -> bool {
    let lowered = value.to_lowercase();
    FALSY.contains(&lowered.as_str())
}

/// Insert `pack-keep-old false` before each `</filestorage>`.
///
/// Returns `None` if the config already mentions `pack-keep-old`.
pub fn disable_pack_keep_old(config: &str) -> Option<String> {
    if config.contains(PACK_KEEP_OLD) {
        return None;
    }
    Some(config.replace(FILESTORAGE_CLOSE, "  pack-keep-old false\n</filestorage>"))
}
