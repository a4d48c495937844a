use std::ffi::{c_char, CString};
use std::ptr;

use super::{ffi_close, ffi_guard, owned_drop, owned_new};
use crate::{apply_at_cursor, EditResult, EditSession};

// --- Edit result ---

/// Text and cursor (in Unicode scalar values) after an edit.
/// Free with [`kiril_edit_result_free`].
#[repr(C)]
pub struct KirilEditResult {
    pub text: *const c_char,
    pub cursor: u32,
    _owned: *mut CString,
}

impl KirilEditResult {
    fn empty() -> Self {
        Self {
            text: ptr::null(),
            cursor: 0,
            _owned: ptr::null_mut(),
        }
    }

    fn from_result(result: EditResult) -> Self {
        let Ok(cs) = CString::new(result.text) else {
            return Self::empty();
        };
        let text = cs.as_ptr();
        Self {
            text,
            cursor: u32::try_from(result.cursor).unwrap_or(u32::MAX),
            _owned: owned_new(cs),
        }
    }
}

#[no_mangle]
pub extern "C" fn kiril_edit_result_free(result: KirilEditResult) {
    unsafe { owned_drop(result._owned) };
}

#[no_mangle]
pub extern "C" fn kiril_apply_at_cursor(text: *const c_char, cursor: u32) -> KirilEditResult {
    ffi_guard!(KirilEditResult::empty();
        str: text_str = text,
    );
    KirilEditResult::from_result(apply_at_cursor(text_str, cursor as usize))
}

// --- Session FFI ---

#[no_mangle]
pub extern "C" fn kiril_session_new() -> *mut EditSession {
    owned_new(EditSession::new())
}

ffi_close!(kiril_session_free, EditSession);

#[no_mangle]
pub extern "C" fn kiril_session_insert(
    session: *mut EditSession,
    text: *const c_char,
) -> KirilEditResult {
    ffi_guard!(KirilEditResult::empty();
        mut: session = session,
        str: text_str = text,
    );
    KirilEditResult::from_result(session.insert(text_str))
}

#[no_mangle]
pub extern "C" fn kiril_session_paste(
    session: *mut EditSession,
    text: *const c_char,
) -> KirilEditResult {
    ffi_guard!(KirilEditResult::empty();
        mut: session = session,
        str: text_str = text,
    );
    KirilEditResult::from_result(session.paste(text_str))
}

#[no_mangle]
pub extern "C" fn kiril_session_backspace(session: *mut EditSession) -> KirilEditResult {
    ffi_guard!(KirilEditResult::empty();
        mut: session = session,
    );
    KirilEditResult::from_result(session.backspace())
}

#[no_mangle]
pub extern "C" fn kiril_session_delete_forward(session: *mut EditSession) -> KirilEditResult {
    ffi_guard!(KirilEditResult::empty();
        mut: session = session,
    );
    KirilEditResult::from_result(session.delete_forward())
}

#[no_mangle]
pub extern "C" fn kiril_session_set_cursor(session: *mut EditSession, cursor: u32) {
    if let Some(session) = unsafe { session.as_mut() } {
        session.set_cursor(cursor as usize);
    }
}

#[no_mangle]
pub extern "C" fn kiril_session_clear(session: *mut EditSession) {
    if let Some(session) = unsafe { session.as_mut() } {
        session.clear();
    }
}
