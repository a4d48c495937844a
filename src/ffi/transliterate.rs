use std::ffi::{c_char, CString};

use super::{ffi_guard, owned_drop, KirilText, OwnedVec};
use crate::{list_mappings, reverse_transliterate, transliterate, TransliterationOptions};

// --- Transliteration FFI ---

#[no_mangle]
pub extern "C" fn kiril_transliterate(
    input: *const c_char,
    preserve_case: u8,
    ascii_harmony: u8,
) -> KirilText {
    ffi_guard!(KirilText::empty();
        str: input_str = input,
    );
    let options = TransliterationOptions {
        preserve_case: preserve_case != 0,
        ascii_harmony: ascii_harmony != 0,
    };
    KirilText::new(transliterate(input_str, options))
}

#[no_mangle]
pub extern "C" fn kiril_reverse_transliterate(input: *const c_char) -> KirilText {
    ffi_guard!(KirilText::empty();
        str: input_str = input,
    );
    KirilText::new(reverse_transliterate(input_str))
}

// --- Conversion table FFI ---

#[repr(C)]
pub struct KirilMapping {
    pub latin: *const c_char,
    pub cyrillic: *const c_char,
}

#[repr(C)]
pub struct KirilMappingList {
    pub mappings: *const KirilMapping,
    pub len: u32,
    _owned: *mut OwnedVec<KirilMapping>,
}

#[no_mangle]
pub extern "C" fn kiril_list_mappings() -> KirilMappingList {
    let mut strings = Vec::new();
    let mut mappings = Vec::new();
    for entry in list_mappings() {
        let Ok(latin) = CString::new(entry.latin) else {
            continue;
        };
        let Ok(cyrillic) = CString::new(entry.cyrillic) else {
            continue;
        };
        mappings.push(KirilMapping {
            latin: latin.as_ptr(),
            cyrillic: cyrillic.as_ptr(),
        });
        strings.push(latin);
        strings.push(cyrillic);
    }
    let (mappings, len, owned) = OwnedVec::pack(mappings, strings);
    KirilMappingList {
        mappings,
        len,
        _owned: owned,
    }
}

#[no_mangle]
pub extern "C" fn kiril_mappings_free(list: KirilMappingList) {
    unsafe { owned_drop(list._owned) };
}
