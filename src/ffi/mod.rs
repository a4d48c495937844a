//! FFI layer – each sub-module exposes one domain area of the C API.
//!
//! Shared helpers (pointer conversion, `ffi_guard!`, `OwnedVec`) live here.
//! Every string handed to C is owned by the returned struct and released by
//! the matching `*_free` function.

use std::ffi::{c_char, CStr, CString};
use std::path::Path;
use std::ptr;

use tracing::warn;

pub mod editor;
pub mod transliterate;


pub use editor::*;
pub use transliterate::*;

// --- Generic owned-pointer helpers for FFI resource management ---

/// Allocate a value on the heap and return a raw pointer suitable for FFI.
/// The caller is responsible for eventually passing the pointer to [`owned_drop`].
pub(crate) fn owned_new<T>(value: T) -> *mut T {
    Box::into_raw(Box::new(value))
}

/// Free a heap-allocated value previously created by [`owned_new`].
/// No-op if `ptr` is null.
///
/// # Safety
/// `ptr` must have been produced by [`owned_new`] and not freed already.
pub(crate) unsafe fn owned_drop<T>(ptr: *mut T) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Convert a C string pointer to a `&str`.
/// Returns `None` if the pointer is null or contains invalid UTF-8.
pub(crate) unsafe fn cptr_to_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

/// Validate FFI arguments and bind them as safe Rust values, returning
/// `$on_err` from the calling function if any check fails.
///
/// | Syntax | What it does |
/// |--------|--------------|
/// | `str: $name = $ptr` | Null-check `$ptr: *const c_char`, convert to `&str`, bind as `$name`. |
/// | `mut: $name = $ptr` | Null-check `$ptr: *mut T`, bind `&mut T` as `$name`. |
macro_rules! ffi_guard {
    ($on_err:expr ; ) => {};

    ($on_err:expr ; str: $name:ident = $ptr:expr , $($rest:tt)*) => {
        let Some($name) = (unsafe { $crate::ffi::cptr_to_str($ptr) }) else {
            return $on_err;
        };
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };

    ($on_err:expr ; mut: $name:ident = $ptr:expr , $($rest:tt)*) => {
        if $ptr.is_null() {
            return $on_err;
        }
        let $name = unsafe { &mut *$ptr };
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };
}

/// Define an `extern "C"` function that frees a heap-allocated resource.
macro_rules! ffi_close {
    ($fn_name:ident, $T:ty) => {
        #[no_mangle]
        pub extern "C" fn $fn_name(ptr: *mut $T) {
            unsafe { $crate::ffi::owned_drop(ptr) };
        }
    };
}

pub(crate) use ffi_close;
pub(crate) use ffi_guard;

// --- Shared FFI types ---

/// Keeps a `Vec<T>` (whose pointer is exposed to C) alive together with the
/// `CString`s that back any `*const c_char` inside `T`.
pub(crate) struct OwnedVec<T> {
    pub(crate) items: Vec<T>,
    pub(crate) _strings: Vec<CString>,
}

impl<T> OwnedVec<T> {
    /// Box the items + strings, return (data_ptr, len, owned_ptr).
    /// Returns null pointers when `items` is empty.
    pub(crate) fn pack(items: Vec<T>, strings: Vec<CString>) -> (*const T, u32, *mut Self) {
        if items.is_empty() {
            return (ptr::null(), 0, ptr::null_mut());
        }
        let owned = Box::new(Self {
            items,
            _strings: strings,
        });
        // Box::into_raw does not move the Vec's heap buffer.
        let data_ptr = owned.items.as_ptr();
        let len = owned.items.len() as u32;
        let owned_ptr = Box::into_raw(owned);
        (data_ptr, len, owned_ptr)
    }
}

/// A UTF-8 string owned by the engine. Free with [`kiril_text_free`].
#[repr(C)]
pub struct KirilText {
    pub text: *const c_char,
    _owned: *mut CString,
}

impl KirilText {
    pub(crate) fn empty() -> Self {
        Self {
            text: ptr::null(),
            _owned: ptr::null_mut(),
        }
    }

    /// Null `text` if `s` contains an interior NUL.
    pub(crate) fn new(s: String) -> Self {
        let Ok(cs) = CString::new(s) else {
            return Self::empty();
        };
        let text = cs.as_ptr();
        Self {
            text,
            _owned: owned_new(cs),
        }
    }
}

#[no_mangle]
pub extern "C" fn kiril_text_free(text: KirilText) {
    unsafe { owned_drop(text._owned) };
}

// --- Top-level FFI functions ---

#[no_mangle]
pub extern "C" fn kiril_version() -> *const c_char {
    c"0.1.0".as_ptr()
}

#[no_mangle]
#[allow(clippy::unused_unit)]
pub extern "C" fn kiril_trace_init(log_dir: *const c_char) {
    ffi_guard!(();
        str: dir_str = log_dir,
    );
    crate::trace_init::init_tracing(Path::new(dir_str));
}

/// Install a custom scheme TOML. Returns 0 on success, -1 on failure.
#[no_mangle]
pub extern "C" fn kiril_init_scheme(toml: *const c_char) -> i32 {
    ffi_guard!(-1;
        str: toml_str = toml,
    );
    match crate::init_scheme(toml_str.to_string()) {
        Ok(()) => 0,
        Err(e) => {
            warn!("kiril_init_scheme: {e}");
            -1
        }
    }
}

/// Install custom settings TOML. Returns 0 on success, -1 on failure.
#[no_mangle]
pub extern "C" fn kiril_init_settings(toml: *const c_char) -> i32 {
    ffi_guard!(-1;
        str: toml_str = toml,
    );
    match crate::init_settings(toml_str.to_string()) {
        Ok(()) => 0,
        Err(e) => {
            warn!("kiril_init_settings: {e}");
            -1
        }
    }
}
