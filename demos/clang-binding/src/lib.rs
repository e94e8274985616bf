//! Demo binding crate for libclang, assembled by `cxbind` at build time.
//!
//! The generated default surface lives in `bindings`; the entities disabled
//! in `build.rs` are re-exported here from the hand-written adapters in
//! `cxbind-runtime` under their native names, so callers see one flat
//! binding surface.

#[allow(non_snake_case, non_camel_case_types, non_upper_case_globals)]
mod bindings {
    include!(concat!(env!("OUT_DIR"), "/cx_bindings.rs"));
}

pub use bindings::*;

pub use cxbind_runtime::{ArrayView, CStringArray, Handle, StringHolder, TokenArray};

#[cfg(feature = "libclang")]
pub use cxbind_runtime::api::{
    compilation_database_from_directory as clang_CompilationDatabase_fromDirectory,
    instantiation_location as clang_getInstantiationLocation,
    parse_translation_unit as clang_parseTranslationUnit, tokenize as clang_tokenize,
};
