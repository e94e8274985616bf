//! Error type for the adapter layer.
//!
//! Only adapter-local conditions are represented here. Error codes produced
//! by the native library itself (e.g. `CXCompilationDatabase_Error`) are
//! returned to the caller as plain data, never translated into this type.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindingError {
    /// Index outside a native array's `[0, len)` range
    #[error("index {index} out of range for native array of length {len}")]
    OutOfRange { index: usize, len: u32 },

    /// Host string contained an interior NUL and cannot back a C string
    #[error("interior NUL byte in host string: {0}")]
    Nul(#[from] std::ffi::NulError),
}
