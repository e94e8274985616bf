//! # cxbind
//!
//! Assembly of the libclang binding surface: mechanical generation plus
//! hand-written overrides.
//!
//! See also: [`cxbind-runtime`](https://docs.rs/cxbind-runtime) for the adapter
//! types the overrides install.
//!
//! ## Problem
//!
//! Nearly every declaration in libclang's C API can be bound mechanically: an
//! external generator walks the headers and emits one default Rust binding per
//! native entity. A small set of declarations cannot be translated that way:
//! functions returning data through pointer arguments, functions handing back a
//! native-allocated array plus a count, and structs that store caller-supplied
//! C-string pointers. Hand-editing the generated translation unit is not an
//! option: the next generator run would wipe the edits out.
//!
//! ## Solution
//!
//! `cxbind` keeps the generated and the hand-written worlds apart. The
//! generator writes its catalogue of default bindings as entity records; a
//! binding crate replays that catalogue through an [`overrides::Overrides`]
//! table which
//! suppresses or replaces the defaults for exactly the entities that need
//! special handling, and collects the result into the final binding module.
//! Everything not named in the table passes through untouched.
//!
//! ## Usage example
//!
//! ```rust,ignore
//! // build.rs of a binding crate
//! use cxbind::{Source, overrides, collect::Destination};
//! use itertools::Itertools;
//!
//! fn main() {
//!     // Catalogue emitted by the binding generator
//!     let source = Source::new("generated/libclang");
//!
//!     let overrides = overrides::Builder::new()
//!         // bound by hand: output parameters
//!         .disable("clang_getInstantiationLocation")
//!         // bound by hand: native array + count
//!         .disable("clang_tokenize")
//!         // keep the generated struct, add StringHolder setters
//!         .extend(
//!             "CXUnsavedFile",
//!             r#"impl CXUnsavedFile {
//!                 pub fn set_filename(&mut self, s: &cxbind_runtime::StringHolder) {
//!                     s.attach_filename(self);
//!                 }
//!             }"#,
//!         )
//!         .build();
//!
//!     let destination = source
//!         .items_all()
//!         .batching(overrides.into_closure())
//!         .collect::<Destination>();
//!
//!     let bindings_file = destination.write("cx_bindings.rs");
//!     println!("cargo:rerun-if-changed=generated/libclang");
//!     let _ = bindings_file;
//! }
//! ```
//!
//! The binding crate then compiles the written file with
//! `include!(concat!(env!("OUT_DIR"), "/cx_bindings.rs"));` and re-exports the
//! hand-written adapters from `cxbind-runtime` under the suppressed entities'
//! native names.
//!
//! ## Failure policy
//!
//! Directive misuse is a configuration error and aborts assembly: a directive
//! naming an entity the generator's catalogue does not contain panics when the
//! catalogue stream ends, rather than silently producing a binding surface
//! that still carries the mechanical default.

/// File name storing the native library name the catalogue was generated for
const LIBRARY_NAME_FILE: &str = "library.txt";

pub(crate) mod api;
pub(crate) mod utils;

pub use crate::api::entity::{Entity, EntityKind, HeaderLocation};
pub use crate::api::source::Source;

/// The override registry applied to the catalogue stream via `itertools::batching`
pub mod overrides {
    pub use crate::api::overrides::{Builder, Overrides, Resolution};
}

/// Collectors for sequences of (syn::Item, HeaderLocation) produced by `collect`
pub mod collect {
    pub use crate::api::collect::destination::Destination;
}
