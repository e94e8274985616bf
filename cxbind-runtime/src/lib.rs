//! # cxbind-runtime
//!
//! The hand-written adapter core of the libclang binding surface.
//!
//! Almost every libclang declaration is bound mechanically (see
//! [`cxbind`](https://docs.rs/cxbind)). This crate holds the few pieces that
//! cannot be: the shapes C uses that have no direct Rust spelling.
//!
//! - [`Handle`]: an opaque, non-owning wrapper over a native pointer. The
//!   native library keeps ownership of everything it allocates; disposal goes
//!   through the library's own `clang_dispose*` entry points, never through
//!   Rust drop glue.
//! - [`outcall`]: shape transforms for C output parameters. A native
//!   `R f(args, Out1*, Out2*)` becomes a Rust call returning `(R, Out1, Out2)`
//!   in declaration order.
//! - [`ArrayView`]: a bounds-checked, non-owning view over a native-allocated
//!   `(pointer, count)` pair, as returned by `clang_tokenize`.
//! - [`complete`]: field accessors bridging the code-completion structs into
//!   the two adapters above (handle-typed completion strings, a view over
//!   the `Results`/`NumResults` pair).
//! - [`StringHolder`]: a host-owned C-string buffer with a stable address,
//!   backing native struct fields that store `const char*` (the native struct
//!   cannot own host memory).
//!
//! The concrete libclang adapter instances live in [`api`] and are compiled
//! only with the `libclang` cargo feature, which also links the native
//! library.
//!
//! ## Threading
//!
//! Everything here is a synchronous call adapter. No locks are taken and none
//! are added around the native library: if libclang requires external
//! serialization for a handle, so does the adapted call.

pub mod array;
pub mod complete;
pub mod error;
pub mod handle;
pub mod outcall;
pub mod strbuf;
pub mod sys;

#[cfg(feature = "libclang")]
pub mod api;

pub use crate::array::{ArrayView, TokenArray};
pub use crate::complete::CompletionStringHandle;
pub use crate::error::BindingError;
pub use crate::handle::{DatabaseHandle, FileHandle, Handle, IndexHandle, TranslationUnitHandle};
pub use crate::outcall::CStringArray;
pub use crate::strbuf::StringHolder;
