//! Text conversions at the edges: C strings coming in, UTF-16 and XML going
//! out to the OS.

use std::ffi::{c_char, CStr};

/// Decodes a NUL-terminated UTF-8 string handed over the C boundary.
///
/// A null pointer or invalid UTF-8 yields an empty string; `field` only
/// labels the warning.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated buffer that stays valid
/// for the duration of the call.
pub unsafe fn decode_c_str(ptr: *const c_char, field: &str) -> String {
    if ptr.is_null() {
        return String::new();
    }
    match CStr::from_ptr(ptr).to_str() {
        Ok(s) => s.to_owned(),
        Err(e) => {
            tracing::warn!(field, error = %e, "invalid UTF-8 in argument, using empty text");
            String::new()
        }
    }
}

/// Like [`decode_c_str`] but maps null and empty to `None`.
///
/// # Safety
///
/// Same contract as [`decode_c_str`].
pub unsafe fn decode_optional_c_str(ptr: *const c_char, field: &str) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    Some(decode_c_str(ptr, field)).filter(|s| !s.is_empty())
}

/// UTF-16 form of `s` with any trailing NULs removed.
pub fn to_wide(s: &str) -> Vec<u16> {
    let mut wide: Vec<u16> = s.encode_utf16().collect();
    while wide.last() == Some(&0) {
        wide.pop();
    }
    wide
}

/// UTF-16 form of `s` terminated by exactly one NUL, for Win32 `PCWSTR`.
pub fn to_wide_null(s: &str) -> Vec<u16> {
    let mut wide = to_wide(s);
    wide.push(0);
    wide
}

pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' | '\r' => out.push(c),
            // outside the XML 1.0 Char production, not even as a reference
            '\0'..='\u{1f}' | '\u{fffe}' | '\u{ffff}' => {}
            c => out.push(c),
        }
    }
    out
}
