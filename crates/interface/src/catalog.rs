//! Supported languages and their provider codes.

use crate::error::Error;

/// Display sentinel for provider-side source detection. Valid only in the
/// source role; selection widgets prepend it to [`names`] themselves.
pub const AUTO_DETECT: &str = "Auto Detect";

/// Reserved code [`AUTO_DETECT`] resolves to. Stripped before the provider
/// boundary, never sent on the wire.
pub const AUTO_CODE: &str = "auto";

const ENTRIES: &[(&str, &str)] = &[
    ("English", "en"),
    ("Urdu", "ur"),
    ("Arabic", "ar"),
    ("Hindi", "hi"),
    ("Spanish", "es"),
    ("French", "fr"),
    ("German", "de"),
    ("Italian", "it"),
    ("Portuguese", "pt"),
    ("Russian", "ru"),
    ("Chinese (Simplified)", "zh-cn"),
    ("Chinese (Traditional)", "zh-tw"),
    ("Japanese", "ja"),
    ("Korean", "ko"),
    ("Turkish", "tr"),
    ("Dutch", "nl"),
    ("Swedish", "sv"),
    ("Norwegian", "no"),
    ("Danish", "da"),
    ("Finnish", "fi"),
    ("Greek", "el"),
    ("Hebrew", "he"),
    ("Thai", "th"),
    ("Vietnamese", "vi"),
    ("Indonesian", "id"),
    ("Malay", "ms"),
    ("Bengali", "bn"),
    ("Tamil", "ta"),
    ("Telugu", "te"),
    ("Gujarati", "gu"),
    ("Punjabi", "pa"),
];

/// Display names in fixed catalog order.
pub fn names() -> impl Iterator<Item = &'static str> {
    ENTRIES.iter().map(|(name, _)| *name)
}

/// The full (display name, code) table, in catalog order.
pub fn entries() -> &'static [(&'static str, &'static str)] {
    ENTRIES
}

/// Maps a display name to its provider code. The auto-detect sentinel
/// resolves to [`AUTO_CODE`].
pub fn resolve(display_name: &str) -> Result<&'static str, Error> {
    if display_name == AUTO_DETECT {
        return Ok(AUTO_CODE);
    }
    ENTRIES
        .iter()
        .find(|(name, _)| *name == display_name)
        .map(|(_, code)| *code)
        .ok_or_else(|| Error::UnknownLanguage(display_name.to_owned()))
}

pub fn is_auto(code: &str) -> bool {
    code == AUTO_CODE
}

/// Whether `code` belongs to the catalog. The auto sentinel code does not
/// count; callers decide per role whether it is allowed.
pub fn contains_code(code: &str) -> bool {
    ENTRIES.iter().any(|(_, c)| *c == code)
}
