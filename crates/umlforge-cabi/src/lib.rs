//! C ABI bindings for umlforge.
//!
//! All functions use C-compatible string types:
//! - Input: `*const c_char` (null-terminated C string)
//! - Output: `*mut c_char` (caller must free with `umlforge_free_string`)
//!
//! This crate builds as a cdylib for use via P/Invoke (C#), ctypes (Python), etc.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use umlforge_core::{contexts_to_json, synthesize_to_json};
use umlforge_lint::lint_to_json;

/// Synthesize a diagram and return the domain model as JSON.
///
/// # Safety
/// - `diagram_json` and `project_json` must be valid null-terminated UTF-8 strings.
/// - The returned pointer must be freed with `umlforge_free_string`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn umlforge_synthesize(
    diagram_json: *const c_char,
    project_json: *const c_char,
) -> *mut c_char {
    with_two_args(diagram_json, project_json, synthesize_to_json)
}

/// Synthesize a diagram and return the per-entity template contexts as JSON.
///
/// # Safety
/// - `diagram_json` and `project_json` must be valid null-terminated UTF-8 strings.
/// - The returned pointer must be freed with `umlforge_free_string`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn umlforge_contexts(
    diagram_json: *const c_char,
    project_json: *const c_char,
) -> *mut c_char {
    with_two_args(diagram_json, project_json, contexts_to_json)
}

/// Lint a diagram and return diagnostics as JSON.
///
/// # Safety
/// - `diagram_json` and `config_json` must be valid null-terminated UTF-8 strings.
/// - The returned pointer must be freed with `umlforge_free_string`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn umlforge_lint(
    diagram_json: *const c_char,
    config_json: *const c_char,
) -> *mut c_char {
    with_two_args(diagram_json, config_json, lint_to_json)
}

/// Free a string previously returned by one of the umlforge_* functions.
///
/// # Safety
/// - `ptr` must be a pointer previously returned by one of the umlforge_* functions,
///   or null (in which case this is a no-op).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn umlforge_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(unsafe { CString::from_raw(ptr) });
    }
}

/// Decode two C strings and hand them to a JSON API function.
///
/// # Safety
/// Both pointers must be non-null, null-terminated C strings.
unsafe fn with_two_args(
    first: *const c_char,
    second: *const c_char,
    f: fn(&str, &str) -> String,
) -> *mut c_char {
    let first = unsafe { CStr::from_ptr(first) };
    let second = unsafe { CStr::from_ptr(second) };

    let Ok(first) = first.to_str() else {
        return to_c_string(r#"{"success":false,"error":"Invalid UTF-8 in first argument"}"#);
    };
    let Ok(second) = second.to_str() else {
        return to_c_string(r#"{"success":false,"error":"Invalid UTF-8 in second argument"}"#);
    };

    to_c_string(&f(first, second))
}

/// Helper: Convert a Rust string to a C-compatible heap-allocated string.
fn to_c_string(s: &str) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(
        f: unsafe extern "C" fn(*const c_char, *const c_char) -> *mut c_char,
        a: &str,
        b: &str,
    ) -> String {
        let a = CString::new(a).unwrap();
        let b = CString::new(b).unwrap();
        unsafe {
            let ptr = f(a.as_ptr(), b.as_ptr());
            let out = CStr::from_ptr(ptr).to_str().unwrap().to_string();
            umlforge_free_string(ptr);
            out
        }
    }

    #[test]
    fn synthesize_round_trip() {
        let out = call(
            umlforge_synthesize,
            r#"{"classes":[{"id":"1","name":"Pet"}]}"#,
            "",
        );
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["success"], true);
        assert_eq!(v["data"]["entities"][0]["name"], "Pet");
    }

    #[test]
    fn lint_reports_invalid_json() {
        let out = call(umlforge_lint, "nope", "");
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["success"], false);
    }

    #[test]
    fn free_null_is_noop() {
        unsafe { umlforge_free_string(std::ptr::null_mut()) };
    }
}
