//! Bounds-checked views over native-allocated arrays.

use crate::error::BindingError;
use crate::sys::CXToken;

/// A non-owning view over a native `(pointer, count)` array.
///
/// libclang hands back arrays it allocated itself (`clang_tokenize` fills a
/// `CXToken*` plus a count) and expects them to be released through its own
/// disposal entry points (or, for a few arrays, never). The view adds bounds
/// checking on top of the raw pair and nothing else: it does not copy the
/// elements and it does not free the buffer on drop. Whatever disposal
/// contract the native call has, the caller keeps it.
///
/// Using a view after the native buffer was disposed is undefined behavior
/// the native API gives no way to detect; keeping the view from outliving
/// the buffer is the caller's obligation.
#[derive(Debug, Clone, Copy)]
pub struct ArrayView<T> {
    ptr: *const T,
    len: u32,
}

/// View over the token array produced by `clang_tokenize`
pub type TokenArray = ArrayView<CXToken>;

impl<T> ArrayView<T> {
    /// Build a view over a native array.
    ///
    /// # Safety
    ///
    /// `ptr` must point at `len` initialized elements of `T` that stay alive
    /// and unmoved for as long as the view is read through.
    pub unsafe fn from_raw_parts(ptr: *const T, len: u32) -> Self {
        Self { ptr, len }
    }

    /// Element count reported by the native call
    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Base pointer, for handing the array back to native disposal calls
    pub fn as_ptr(&self) -> *const T {
        self.ptr
    }

    /// Borrow the element at `index`.
    ///
    /// Fails with [`BindingError::OutOfRange`] for any index outside
    /// `[0, len)`; the native buffer is never read out of bounds.
    pub fn at(&self, index: usize) -> Result<&T, BindingError> {
        if index >= self.len as usize {
            return Err(BindingError::OutOfRange {
                index,
                len: self.len,
            });
        }
        // Index is in range and construction promised len valid elements
        Ok(unsafe { &*self.ptr.add(index) })
    }

    /// Iterate over the elements in order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        (0..self.len as usize).map(move |i| {
            // 0..len is in range by construction
            unsafe { &*self.ptr.add(i) }
        })
    }
}
