//! Concrete adapter instances for the libclang entities whose default
//! bindings are suppressed by the assembly overrides.
//!
//! Each function here is a mechanical shape transform of exactly one native
//! call: output parameters become tuple fields in declaration order, native
//! `(pointer, count)` results become [`ArrayView`]s, and raw handles travel
//! as [`Handle`]s. Nothing is retried, no native error code is interpreted,
//! and no locking is added: whatever thread-safety contract the native call
//! has, the adapted call has.
//!
//! Compiled only with the `libclang` feature, which links the native library.

use std::ffi::CStr;
use std::ptr;

use libc::c_uint;

use crate::array::TokenArray;
use crate::handle::{DatabaseHandle, FileHandle, Handle, IndexHandle, TranslationUnitHandle};
use crate::outcall::{out1, out2, out4, CStringArray};
use crate::sys::{
    self, CXCompilationDatabase_Error, CXSourceLocation, CXSourceRange, CXUnsavedFile,
};

/// Expand an opaque source location into `(file, line, column, offset)`.
///
/// Adapts `clang_getInstantiationLocation`, which returns all four values
/// through output parameters; the tuple keeps their declaration order.
///
/// # Safety
///
/// `location` must originate from a live translation unit.
pub unsafe fn instantiation_location(
    location: CXSourceLocation,
) -> (FileHandle, u32, u32, u32) {
    let ((), file, line, column, offset) = out4(|f, l, c, o| unsafe {
        sys::clang_getInstantiationLocation(location, f, l, c, o)
    });
    (Handle::from_raw(file), line, column, offset)
}

/// Tokenize the source range and return a view over the native token array.
///
/// The array is allocated by libclang; the view neither copies nor frees it.
/// Dispose through [`sys::clang_disposeTokens`] when done, exactly as the
/// native contract requires:
///
/// ```rust,ignore
/// let tokens = unsafe { tokenize(tu, range) };
/// // ... read tokens.at(i) ...
/// unsafe { sys::clang_disposeTokens(tu.as_raw(), tokens.as_ptr() as *mut _, tokens.len()) };
/// ```
///
/// # Safety
///
/// `tu` must be a live translation unit and `range` must belong to it.
pub unsafe fn tokenize(tu: TranslationUnitHandle, range: CXSourceRange) -> TokenArray {
    let ((), tokens, num_tokens) =
        out2(|t, n| unsafe { sys::clang_tokenize(tu.as_raw(), range, t, n) });
    TokenArray::from_raw_parts(tokens, num_tokens)
}

/// Parse a translation unit from the given index.
///
/// The native function's only result is its return value, so the adapted
/// call returns the lone handle, null on parse failure, which the caller
/// interprets per libclang's contract. `args` is passed as the
/// contiguous `argv`-style array [`CStringArray`] maintains; `unsaved_files`
/// entries must have their `Filename`/`Contents` fields backed by live
/// [`crate::StringHolder`]s (or other storage outliving this call).
///
/// # Safety
///
/// `index` must be a live `CXIndex` and every pointer field of
/// `unsaved_files` must be valid for the duration of the call.
pub unsafe fn parse_translation_unit(
    index: IndexHandle,
    source_filename: Option<&CStr>,
    args: &CStringArray,
    unsaved_files: &mut [CXUnsavedFile],
    options: u32,
) -> TranslationUnitHandle {
    let filename_ptr = source_filename.map_or(ptr::null(), CStr::as_ptr);
    let raw = sys::clang_parseTranslationUnit(
        index.as_raw(),
        filename_ptr,
        args.as_ptr(),
        args.len() as libc::c_int,
        unsaved_files.as_mut_ptr(),
        unsaved_files.len() as c_uint,
        options,
    );
    Handle::from_raw(raw)
}

/// Load a compilation database from a build directory.
///
/// Adapts `clang_CompilationDatabase_fromDirectory`: the handle is the
/// primary return value, the error code comes back through the output
/// parameter and is passed through verbatim. A failed load yields a null
/// handle plus [`sys::CXCompilationDatabase_CanNotLoadDatabase`], both for
/// the caller to act on.
///
/// # Safety
///
/// No preconditions beyond FFI itself; the native call accepts any path.
pub unsafe fn compilation_database_from_directory(
    build_dir: &CStr,
) -> (DatabaseHandle, CXCompilationDatabase_Error) {
    let (db, error_code) = out1(|e| unsafe {
        sys::clang_CompilationDatabase_fromDirectory(build_dir.as_ptr(), e)
    });
    (Handle::from_raw(db), error_code)
}
