//! Raw `#[repr(C)]` mirrors of the libclang declarations the hand-written
//! adapters touch, plus the extern declarations for the natives they call.
//!
//! Layouts and field names follow `clang-c/Index.h` and
//! `clang-c/CXCompilationDatabase.h` for the pinned libclang release. The
//! mechanically generated binding surface carries the rest of the API.

#![allow(non_snake_case, non_camel_case_types)]

use std::ffi::c_void;

use libc::{c_char, c_uint, c_ulong};

/// Opaque pointee of `CXTranslationUnit`
#[repr(C)]
pub struct CXTranslationUnitImpl {
    _private: [u8; 0],
}

pub type CXIndex = *mut c_void;
pub type CXFile = *mut c_void;
pub type CXTranslationUnit = *mut CXTranslationUnitImpl;
pub type CXCompilationDatabase = *mut c_void;
pub type CXCompletionString = *mut c_void;

pub type CXCursorKind = libc::c_int;

/// Physical location in a source file, opaque to everything but libclang
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CXSourceLocation {
    pub ptr_data: [*const c_void; 2],
    pub int_data: c_uint,
}

/// Half-open range between two source locations
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CXSourceRange {
    pub ptr_data: [*const c_void; 2],
    pub begin_int_data: c_uint,
    pub end_int_data: c_uint,
}

/// One lexed token; interpreted only through `clang_getToken*` accessors
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CXToken {
    pub int_data: [c_uint; 4],
    pub ptr_data: *mut c_void,
}

/// In-memory file content supplied to the parser.
///
/// `Filename` and `Contents` are raw C-string pointers the native side reads
/// but never owns; see [`crate::StringHolder`] for host-owned backing
/// storage with the required lifetime.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CXUnsavedFile {
    pub Filename: *const c_char,
    pub Contents: *const c_char,
    pub Length: c_ulong,
}

impl Default for CXUnsavedFile {
    fn default() -> Self {
        Self {
            Filename: std::ptr::null(),
            Contents: std::ptr::null(),
            Length: 0,
        }
    }
}

/// One code-completion candidate; the string itself stays native-owned
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CXCompletionResult {
    pub CursorKind: CXCursorKind,
    pub CompletionString: CXCompletionString,
}

/// Candidate set produced by `clang_codeCompleteAt`; released through
/// `clang_disposeCodeCompleteResults`
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CXCodeCompleteResults {
    pub Results: *mut CXCompletionResult,
    pub NumResults: c_uint,
}

/// Error codes of the compilation-database loader, passed through to callers
/// exactly as the native call produced them
pub type CXCompilationDatabase_Error = libc::c_int;
pub const CXCompilationDatabase_NoError: CXCompilationDatabase_Error = 0;
pub const CXCompilationDatabase_CanNotLoadDatabase: CXCompilationDatabase_Error = 1;

#[cfg(feature = "libclang")]
extern "C" {
    pub fn clang_getInstantiationLocation(
        location: CXSourceLocation,
        file: *mut CXFile,
        line: *mut c_uint,
        column: *mut c_uint,
        offset: *mut c_uint,
    );

    pub fn clang_tokenize(
        TU: CXTranslationUnit,
        Range: CXSourceRange,
        Tokens: *mut *mut CXToken,
        NumTokens: *mut c_uint,
    );

    /// Frees a token array produced by `clang_tokenize`. Disposal is the
    /// caller's responsibility, exactly as in the native API.
    pub fn clang_disposeTokens(TU: CXTranslationUnit, Tokens: *mut CXToken, NumTokens: c_uint);

    pub fn clang_parseTranslationUnit(
        CIdx: CXIndex,
        source_filename: *const c_char,
        command_line_args: *const *const c_char,
        num_command_line_args: libc::c_int,
        unsaved_files: *mut CXUnsavedFile,
        num_unsaved_files: c_uint,
        options: c_uint,
    ) -> CXTranslationUnit;

    pub fn clang_CompilationDatabase_fromDirectory(
        BuildDir: *const c_char,
        ErrorCode: *mut CXCompilationDatabase_Error,
    ) -> CXCompilationDatabase;
}
