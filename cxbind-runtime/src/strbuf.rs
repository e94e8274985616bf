//! Host-owned string storage for native struct fields.

use std::ffi::{CString, NulError};

use libc::c_char;

use crate::sys::CXUnsavedFile;

/// A host-owned, mutable C-string buffer with a stable address.
///
/// `CXUnsavedFile` stores raw `const char*` fields the parser reads whenever
/// the struct is passed to it; the struct cannot own host memory, so the
/// bytes have to live somewhere on the host side with an address that does
/// not move. `StringHolder` is that somewhere: the contents live on the heap,
/// so moving the holder itself does not move them.
///
/// Attaching writes the buffer's pointer into the struct field and nothing
/// more. The native API offers no hook to observe the buffer's destruction,
/// so neither does this type: keeping the holder alive and unmutated for as
/// long as the struct may be read is the caller's obligation. Dropping or
/// [`set_content`](Self::set_content)-ing a holder while a struct still
/// points at it leaves that field dangling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringHolder {
    content: CString,
}

impl StringHolder {
    /// An empty buffer
    pub fn new() -> Self {
        Self {
            content: CString::default(),
        }
    }

    /// A buffer holding `content`. Fails only on interior NUL bytes.
    pub fn with_content(content: impl Into<Vec<u8>>) -> Result<Self, NulError> {
        Ok(Self {
            content: CString::new(content)?,
        })
    }

    /// Replace the contents.
    ///
    /// Any pointer previously attached to a native struct keeps pointing at
    /// the old storage, which this call frees. Re-attach after mutating.
    pub fn set_content(&mut self, content: impl Into<Vec<u8>>) -> Result<(), NulError> {
        self.content = CString::new(content)?;
        Ok(())
    }

    /// The buffer contents, without the terminating NUL
    pub fn as_bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }

    /// Raw pointer to the NUL-terminated storage.
    ///
    /// This is the only way storage escapes the holder; valid until the
    /// holder is dropped or mutated.
    pub fn as_ptr(&self) -> *const c_char {
        self.content.as_ptr()
    }

    /// Point an unsaved file's `Filename` field at this buffer.
    pub fn attach_filename(&self, file: &mut CXUnsavedFile) {
        file.Filename = self.as_ptr();
    }

    /// Point an unsaved file's `Contents` field at this buffer. The caller
    /// still sets `Length` separately, as the native API demands.
    pub fn attach_contents(&self, file: &mut CXUnsavedFile) {
        file.Contents = self.as_ptr();
    }
}

impl Default for StringHolder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    #[test]
    fn attached_filename_reads_back_exactly() {
        let holder = StringHolder::with_content("test.cc").unwrap();
        let mut file = CXUnsavedFile::default();
        holder.attach_filename(&mut file);

        let read_back = unsafe { CStr::from_ptr(file.Filename) };
        assert_eq!(read_back.to_bytes(), b"test.cc");
    }

    #[test]
    fn one_holder_can_back_multiple_fields() {
        let holder = StringHolder::with_content("int main() {}").unwrap();
        let mut a = CXUnsavedFile::default();
        let mut b = CXUnsavedFile::default();
        holder.attach_contents(&mut a);
        holder.attach_contents(&mut b);
        assert_eq!(a.Contents, b.Contents);
        assert_eq!(a.Contents, holder.as_ptr());
    }

    #[test]
    fn storage_survives_moving_the_holder() {
        let holder = StringHolder::with_content("stable").unwrap();
        let ptr_before = holder.as_ptr();
        let moved = holder;
        assert_eq!(moved.as_ptr(), ptr_before);
        let read_back = unsafe { CStr::from_ptr(moved.as_ptr()) };
        assert_eq!(read_back.to_bytes(), b"stable");
    }

    #[test]
    fn mutation_swaps_the_storage() {
        let mut holder = StringHolder::with_content("old").unwrap();
        holder.set_content("new contents").unwrap();
        assert_eq!(holder.as_bytes(), b"new contents");
    }

    #[test]
    fn interior_nul_is_rejected() {
        assert!(StringHolder::with_content("a\0b").is_err());
        let mut holder = StringHolder::new();
        assert!(holder.set_content(b"x\0y".to_vec()).is_err());
    }

    #[test]
    fn empty_holder_is_an_empty_c_string() {
        let holder = StringHolder::new();
        let read_back = unsafe { CStr::from_ptr(holder.as_ptr()) };
        assert!(read_back.to_bytes().is_empty());
    }
}
