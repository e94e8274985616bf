//! Accessors for the code-completion structs.
//!
//! `CXCompletionResult` stores its completion string as a raw `void*` and
//! `CXCodeCompleteResults` stores its candidates as a `Results`/`NumResults`
//! pair; both shapes already have adapters here ([`Handle`] and
//! [`ArrayView`]), so the accessors below are thin field bridges into them.

use std::ffi::c_void;

use crate::array::ArrayView;
use crate::handle::Handle;
use crate::sys::{CXCodeCompleteResults, CXCompletionResult};

/// Handle to a `CXCompletionString` (typed `void*` by the native API)
pub type CompletionStringHandle = Handle<c_void>;

impl CXCompletionResult {
    /// The candidate's completion string, as an opaque handle.
    ///
    /// The string stays owned by the native results set; the handle is a
    /// view to pass back into `clang_getCompletionChunk*` accessors.
    pub fn completion_string(&self) -> CompletionStringHandle {
        Handle::from_raw(self.CompletionString)
    }

    /// Point this candidate at another completion string. The pointer value
    /// is written verbatim, null included.
    pub fn set_completion_string(&mut self, string: CompletionStringHandle) {
        self.CompletionString = string.as_raw();
    }
}

impl CXCodeCompleteResults {
    /// Bounds-checked view over the candidate array.
    ///
    /// The array stays owned by the native results set; dispose the whole
    /// set through `clang_disposeCodeCompleteResults`, never the view.
    ///
    /// # Safety
    ///
    /// `Results` must point at `NumResults` live candidates for as long as
    /// the view is read through.
    pub unsafe fn results(&self) -> ArrayView<CXCompletionResult> {
        ArrayView::from_raw_parts(self.Results, self.NumResults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn completion_string_round_trips_through_the_handle() {
        let mut backing = 0u8;
        let handle =
            CompletionStringHandle::from_raw(&mut backing as *mut u8 as *mut c_void);

        let mut result = CXCompletionResult {
            CursorKind: 0,
            CompletionString: ptr::null_mut(),
        };
        assert!(result.completion_string().is_null());

        result.set_completion_string(handle);
        assert_eq!(result.completion_string(), handle);
        assert_eq!(result.CompletionString, handle.as_raw());
    }

    #[test]
    fn results_view_is_bounds_checked() {
        let mut candidates = [
            CXCompletionResult {
                CursorKind: 8,
                CompletionString: ptr::null_mut(),
            },
            CXCompletionResult {
                CursorKind: 9,
                CompletionString: ptr::null_mut(),
            },
        ];
        let set = CXCodeCompleteResults {
            Results: candidates.as_mut_ptr(),
            NumResults: candidates.len() as u32,
        };

        let view = unsafe { set.results() };
        assert_eq!(view.len(), 2);
        assert_eq!(view.at(0).unwrap().CursorKind, 8);
        assert_eq!(view.at(1).unwrap().CursorKind, 9);
        assert!(view.at(2).is_err());
    }

    #[test]
    fn empty_results_set_yields_an_empty_view() {
        let set = CXCodeCompleteResults {
            Results: ptr::null_mut(),
            NumResults: 0,
        };
        let view = unsafe { set.results() };
        assert!(view.is_empty());
        assert!(view.at(0).is_err());
    }
}
