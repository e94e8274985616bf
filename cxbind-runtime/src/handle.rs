//! Opaque handle wrapper for native-owned objects.

use std::ffi::c_void;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::sys::CXTranslationUnitImpl;

/// A non-owning wrapper over a raw native pointer of type `T*`.
///
/// The wrapper stores the pointer value verbatim, null included, and never
/// dereferences it. It exists so host code can hold, compare and pass native
/// handles around without touching raw pointers directly, while the native
/// library keeps full ownership of the pointee. Dropping a `Handle` drops
/// nothing on the native side; resources are released through the library's
/// own `clang_dispose*` calls, which the mechanically generated surface
/// exposes one-for-one.
///
/// The type parameter is a tag only: it keeps translation-unit handles from
/// being passed where, say, an index handle is expected, with no runtime
/// cost.
#[repr(transparent)]
pub struct Handle<T> {
    raw: *mut T,
    _tag: PhantomData<*mut T>,
}

/// Handle to a `CXIndex` (typed `void*` by the native API)
pub type IndexHandle = Handle<c_void>;
/// Handle to a `CXFile` (typed `void*` by the native API)
pub type FileHandle = Handle<c_void>;
/// Handle to a `CXCompilationDatabase` (typed `void*` by the native API)
pub type DatabaseHandle = Handle<c_void>;
/// Handle to a `CXTranslationUnit`
pub type TranslationUnitHandle = Handle<CXTranslationUnitImpl>;

impl<T> Handle<T> {
    /// Wrap a raw native pointer. Total: null wraps like any other value.
    pub fn from_raw(raw: *mut T) -> Self {
        Self {
            raw,
            _tag: PhantomData,
        }
    }

    /// The wrapped pointer value, for passing back into native calls. Total.
    pub fn as_raw(self) -> *mut T {
        self.raw
    }

    /// True if the wrapped pointer is null. libclang returns null handles to
    /// signal failure from several constructors (e.g. an unparsable
    /// translation unit); interpreting that is the caller's business.
    pub fn is_null(self) -> bool {
        self.raw.is_null()
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

// Identity is pointer identity: two handles are the same handle iff they
// wrap the same native address.
impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<T> Eq for Handle<T> {}

impl<T> Hash for Handle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({:p})", self.raw)
    }
}
