//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! The envelope crosses as owned C strings: `data_json` carries the parsed
//! payload re-serialized as compact JSON, `error` the failure message. Either
//! may be null. Style tokens never cross as owned memory; they are static
//! C strings.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use vocab_core::{DotColor, Envelope, RankStyle};

/// Result of one call, mirroring `{data, error, status}`.
///
/// `status` is 0 when no response was received. `data_json` is null when
/// the body was empty or not JSON; `error` is null on a 2xx status.
#[repr(C)]
pub struct FfiEnvelope {
    pub status: u16,
    pub data_json: *mut c_char,
    pub error: *mut c_char,
}

impl FfiEnvelope {
    /// Move a core `Envelope` onto the heap as an `FfiEnvelope`.
    pub(crate) fn from_core(envelope: Envelope) -> *mut Self {
        let data_json = envelope
            .data
            .map(|data| into_raw_c_string(data.to_string()))
            .unwrap_or(std::ptr::null_mut());
        let error = envelope
            .error
            .map(into_raw_c_string)
            .unwrap_or(std::ptr::null_mut());
        Box::into_raw(Box::new(FfiEnvelope {
            status: envelope.status,
            data_json,
            error,
        }))
    }
}

/// Interior NULs cannot be represented in a C string; they are dropped.
fn into_raw_c_string(text: String) -> *mut c_char {
    let text = if text.contains('\0') {
        text.replace('\0', "")
    } else {
        text
    };
    CString::new(text).unwrap_or_default().into_raw()
}

pub(crate) fn rank_token(style: RankStyle) -> &'static CStr {
    match style {
        RankStyle::Green => c"green",
        RankStyle::Teal => c"teal",
        RankStyle::Blue => c"blue",
        RankStyle::Indigo => c"indigo",
        RankStyle::Purple => c"purple",
        RankStyle::Orange => c"orange",
    }
}

pub(crate) fn border_token(class: &str) -> &'static CStr {
    match class {
        "lvl-a2" => c"lvl-a2",
        "lvl-b1" => c"lvl-b1",
        "lvl-b2" => c"lvl-b2",
        "lvl-c1" => c"lvl-c1",
        "lvl-c2" => c"lvl-c2",
        _ => c"lvl-a1",
    }
}

pub(crate) fn dot_token(color: DotColor) -> &'static CStr {
    match color {
        DotColor::Green => c"green",
        DotColor::Yellow => c"yellow",
        DotColor::Blue => c"blue",
        DotColor::Purple => c"purple",
        DotColor::Orange => c"orange",
        DotColor::Red => c"red",
    }
}
