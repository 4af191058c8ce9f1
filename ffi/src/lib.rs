//! C-ABI wrapper around `vocab-core`.
//!
//! # Overview
//! Lets a UI written in any language with a C FFI reuse the exact style
//! rules and envelope classification instead of re-implementing them. The
//! host performs its own HTTP call and hands the status and body to
//! `vocab_envelope_from_response`.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - Classifier functions are total: null or non-UTF-8 input is treated as
//!   a missing field and the returned token is a static string the caller
//!   must not free.
//! - Envelopes are heap-allocated; the caller releases them with
//!   `vocab_envelope_free`.

pub mod types;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

use vocab_core::{style, Envelope, HttpResponse};

use types::*;

/// Copy an optional C string. Null means "missing"; invalid UTF-8 is
/// replaced lossily.
///
/// A non-null `ptr` must point to a NUL-terminated string that stays valid
/// for the duration of the call. The result is owned, so nothing borrows
/// from `ptr` afterwards.
fn optional_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
}

// ---------------------------------------------------------------------------
// Style classifier
// ---------------------------------------------------------------------------

/// Rank badge token for a frequency group and word type.
///
/// Either argument may be null. Returns one of `green`, `teal`, `blue`,
/// `indigo`, `purple`, `orange`. The returned pointer is static.
#[unsafe(no_mangle)]
pub extern "C" fn vocab_rank_style(
    frequency_group: *const c_char,
    kind: *const c_char,
) -> *const c_char {
    catch_unwind(|| {
        let group = optional_string(frequency_group);
        let kind = optional_string(kind);
        rank_token(style::rank_style(group.as_deref(), kind.as_deref())).as_ptr()
    })
    .unwrap_or_else(|_| rank_token(style::DEFAULT_RANK_STYLE).as_ptr())
}

/// Border class (`lvl-a1` .. `lvl-c2`) for a level label. Null means A1.
#[unsafe(no_mangle)]
pub extern "C" fn vocab_level_border_class(level: *const c_char) -> *const c_char {
    catch_unwind(|| {
        let level = optional_string(level);
        border_token(style::level_border_class(level.as_deref())).as_ptr()
    })
    .unwrap_or_else(|_| c"lvl-a1".as_ptr())
}

/// Dot color token for a level label. Null means A1 (`green`).
#[unsafe(no_mangle)]
pub extern "C" fn vocab_level_dot_style(level: *const c_char) -> *const c_char {
    catch_unwind(|| {
        let level = optional_string(level);
        dot_token(style::level_dot_style(level.as_deref())).as_ptr()
    })
    .unwrap_or_else(|_| c"green".as_ptr())
}

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// Classify a response the host received.
///
/// `body` may be null (treated as empty). Status 0 is reserved for "no
/// response" and yields the network-error envelope whatever the body. The
/// caller must free the result with `vocab_envelope_free`.
#[unsafe(no_mangle)]
pub extern "C" fn vocab_envelope_from_response(
    status: u16,
    body: *const c_char,
) -> *mut FfiEnvelope {
    catch_unwind(|| {
        if status == 0 {
            return FfiEnvelope::from_core(Envelope::network_error());
        }
        let body = optional_string(body).unwrap_or_default();
        let envelope = Envelope::from_response(&HttpResponse::new(status, body));
        FfiEnvelope::from_core(envelope)
    })
    .unwrap_or_else(|_| FfiEnvelope::from_core(Envelope::network_error()))
}

/// The envelope for a call that never received a response.
///
/// The caller must free the result with `vocab_envelope_free`.
#[unsafe(no_mangle)]
pub extern "C" fn vocab_envelope_network_error() -> *mut FfiEnvelope {
    catch_unwind(|| FfiEnvelope::from_core(Envelope::network_error()))
        .unwrap_or(std::ptr::null_mut())
}

/// Free an `FfiEnvelope` returned by any `vocab_envelope_*` function.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn vocab_envelope_free(envelope: *mut FfiEnvelope) {
    if envelope.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let envelope = unsafe { Box::from_raw(envelope) };
        if !envelope.data_json.is_null() {
            drop(unsafe { CString::from_raw(envelope.data_json) });
        }
        if !envelope.error.is_null() {
            drop(unsafe { CString::from_raw(envelope.error) });
        }
    });
}
