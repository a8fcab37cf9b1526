// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Turn user-entered text into a filesystem-safe file stem.

/// Fallback stem used when nothing usable is left after cleanup.
pub const DEFAULT_STEM: &str = "registration";

/// Produce a filesystem-safe file stem.
///
/// Unicode is transliterated with `deunicode`, everything outside ASCII
/// alphanumerics, `-` and `_` becomes `_`, runs of `_` collapse and leading or
/// trailing `_` are trimmed. Windows device names get a `_` suffix.
pub fn sanitize_component(value: &str) -> String {
    let transliterated = deunicode::deunicode(value);
    let mut out = String::with_capacity(transliterated.len());

    for ch in transliterated.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' {
            out.push(ch);
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }

    let trimmed = out.trim_matches('_');
    if trimmed.is_empty() {
        return DEFAULT_STEM.to_string();
    }

    let upper = trimmed.to_ascii_uppercase();
    let is_reserved = matches!(upper.as_str(), "CON" | "PRN" | "AUX" | "NUL")
        || (upper.len() == 4
            && (upper.starts_with("COM") || upper.starts_with("LPT"))
            && upper.as_bytes()[3].is_ascii_digit()
            && upper.as_bytes()[3] != b'0');

    if is_reserved {
        format!("{trimmed}_")
    } else {
        trimmed.to_string()
    }
}
