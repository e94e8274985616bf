//! Shape transforms for C output parameters.
//!
//! libclang returns multi-valued results the C way: the caller passes one
//! pointer per result and the function writes through them. The `out*`
//! helpers below allocate that storage on the stack, run the native call,
//! and hand the written values back as a tuple: primary return value first,
//! then each output in the native declaration's parameter order. That order
//! is a contract: it is what makes the adapted signatures mechanical and
//! testable.
//!
//! A native function whose only result is its return value is adapted as a
//! plain value, never as a one-element tuple; the helpers here are used only
//! when real output parameters exist.

use std::ffi::{CString, NulError};
use std::mem::MaybeUninit;

use libc::c_char;

/// Adapt a call with one output parameter.
///
/// # Safety
///
/// `f` must fully initialize the output location before returning, as every
/// well-behaved native out-parameter function does.
pub unsafe fn out1<R, O1>(f: impl FnOnce(*mut O1) -> R) -> (R, O1) {
    let mut o1 = MaybeUninit::uninit();
    let r = f(o1.as_mut_ptr());
    (r, o1.assume_init())
}

/// Adapt a call with two output parameters.
///
/// # Safety
///
/// `f` must fully initialize both output locations before returning.
pub unsafe fn out2<R, O1, O2>(f: impl FnOnce(*mut O1, *mut O2) -> R) -> (R, O1, O2) {
    let mut o1 = MaybeUninit::uninit();
    let mut o2 = MaybeUninit::uninit();
    let r = f(o1.as_mut_ptr(), o2.as_mut_ptr());
    (r, o1.assume_init(), o2.assume_init())
}

/// Adapt a call with three output parameters.
///
/// # Safety
///
/// `f` must fully initialize all three output locations before returning.
pub unsafe fn out3<R, O1, O2, O3>(
    f: impl FnOnce(*mut O1, *mut O2, *mut O3) -> R,
) -> (R, O1, O2, O3) {
    let mut o1 = MaybeUninit::uninit();
    let mut o2 = MaybeUninit::uninit();
    let mut o3 = MaybeUninit::uninit();
    let r = f(o1.as_mut_ptr(), o2.as_mut_ptr(), o3.as_mut_ptr());
    (r, o1.assume_init(), o2.assume_init(), o3.assume_init())
}

/// Adapt a call with four output parameters.
///
/// # Safety
///
/// `f` must fully initialize all four output locations before returning.
pub unsafe fn out4<R, O1, O2, O3, O4>(
    f: impl FnOnce(*mut O1, *mut O2, *mut O3, *mut O4) -> R,
) -> (R, O1, O2, O3, O4) {
    let mut o1 = MaybeUninit::uninit();
    let mut o2 = MaybeUninit::uninit();
    let mut o3 = MaybeUninit::uninit();
    let mut o4 = MaybeUninit::uninit();
    let r = f(
        o1.as_mut_ptr(),
        o2.as_mut_ptr(),
        o3.as_mut_ptr(),
        o4.as_mut_ptr(),
    );
    (
        r,
        o1.assume_init(),
        o2.assume_init(),
        o3.assume_init(),
        o4.assume_init(),
    )
}

/// A host string sequence converted into the contiguous `const char *const *`
/// array C APIs expect for argv-style parameters.
///
/// The owned storage and the pointer array live exactly as long as this
/// value, which covers the duration of any native call it is passed to.
pub struct CStringArray {
    // ptrs points into owned
    owned: Vec<CString>,
    ptrs: Vec<*const c_char>,
}

impl CStringArray {
    /// Convert a sequence of host strings.
    ///
    /// Fails only if a string contains an interior NUL byte, which C strings
    /// cannot carry.
    pub fn new<I, S>(strings: I) -> Result<Self, NulError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Vec<u8>>,
    {
        let owned = strings
            .into_iter()
            .map(CString::new)
            .collect::<Result<Vec<_>, _>>()?;
        let ptrs = owned.iter().map(|s| s.as_ptr()).collect();
        Ok(Self { owned, ptrs })
    }

    /// Base of the pointer array, valid while `self` lives
    pub fn as_ptr(&self) -> *const *const c_char {
        self.ptrs.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.owned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owned.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    // Stand-in with the exact shape of clang_getInstantiationLocation:
    // void return, four outputs written in declaration order.
    unsafe extern "C" fn fake_get_location(
        file: *mut *mut std::ffi::c_void,
        line: *mut u32,
        column: *mut u32,
        offset: *mut u32,
    ) {
        *file = 0xF11Eusize as *mut std::ffi::c_void;
        *line = 3;
        *column = 14;
        *offset = 159;
    }

    #[test]
    fn out4_preserves_declaration_order() {
        let (ret, file, line, column, offset) =
            unsafe { out4(|f, l, c, o| unsafe { fake_get_location(f, l, c, o) }) };
        let () = ret;
        assert_eq!(file as usize, 0xF11E);
        assert_eq!((line, column, offset), (3, 14, 159));
    }

    #[test]
    fn out1_returns_primary_value_first() {
        let (ret, err) = unsafe {
            out1(|code: *mut i32| {
                unsafe { *code = 1 };
                42u64
            })
        };
        assert_eq!(ret, 42);
        assert_eq!(err, 1);
    }

    #[test]
    fn out2_and_out3_read_back_each_slot() {
        let (_, a, b) = unsafe {
            out2(|pa: *mut u8, pb: *mut u16| unsafe {
                *pa = 1;
                *pb = 2;
            })
        };
        assert_eq!((a, b), (1, 2));

        let (_, x, y, z) = unsafe {
            out3(|px: *mut i64, py: *mut i64, pz: *mut i64| unsafe {
                *px = -1;
                *py = 0;
                *pz = 1;
            })
        };
        assert_eq!((x, y, z), (-1, 0, 1));
    }

    #[test]
    fn cstring_array_matches_source_strings() {
        let args = CStringArray::new(["-std=c++17", "-I/usr/include"]).unwrap();
        assert_eq!(args.len(), 2);
        assert!(!args.is_empty());

        let ptrs = unsafe { std::slice::from_raw_parts(args.as_ptr(), args.len()) };
        let first = unsafe { CStr::from_ptr(ptrs[0]) };
        let second = unsafe { CStr::from_ptr(ptrs[1]) };
        assert_eq!(first.to_str().unwrap(), "-std=c++17");
        assert_eq!(second.to_str().unwrap(), "-I/usr/include");
    }

    #[test]
    fn cstring_array_rejects_interior_nul() {
        assert!(CStringArray::new(["bad\0arg"]).is_err());
    }

    #[test]
    fn cstring_array_of_nothing_is_empty() {
        let args = CStringArray::new(Vec::<String>::new()).unwrap();
        assert_eq!(args.len(), 0);
        assert!(args.is_empty());
    }
}
