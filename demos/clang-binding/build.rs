//! Assemble the binding surface from the checked-in generator fixture.
//!
//! A real binding crate points `Source` at the directory the binding
//! generator wrote after walking the libclang headers; the fixture here is a
//! small excerpt of such a run.

use cxbind::{collect::Destination, overrides, Source};
use itertools::Itertools;
use std::path::Path;

fn main() {
    let fixture = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixture");
    let source = Source::new(&fixture);

    let overrides = overrides::Builder::new()
        // Bound by hand in cxbind-runtime::api (output parameters, native
        // arrays); the lib re-exports them under the native names.
        .disable("clang_getInstantiationLocation")
        .disable("clang_tokenize")
        .disable("clang_parseTranslationUnit")
        .disable("clang_CompilationDatabase_fromDirectory")
        // Keep the generated struct, attach StringHolder-backed setters the
        // way the native API expects callers to fill the pointer fields.
        .extend(
            "CXUnsavedFile",
            r#"impl CXUnsavedFile {
                pub fn set_filename(&mut self, s: &cxbind_runtime::StringHolder) {
                    self.Filename = s.as_ptr();
                }
                pub fn set_contents(&mut self, s: &cxbind_runtime::StringHolder) {
                    self.Contents = s.as_ptr();
                }
            }"#,
        )
        // Completion strings travel as opaque handles; the candidate array
        // is read through the bounds-checked view.
        .extend(
            "CXCompletionResult",
            r#"impl CXCompletionResult {
                pub fn completion_string(&self) -> cxbind_runtime::Handle<std::os::raw::c_void> {
                    cxbind_runtime::Handle::from_raw(self.CompletionString)
                }
                pub fn set_completion_string(
                    &mut self,
                    string: cxbind_runtime::Handle<std::os::raw::c_void>,
                ) {
                    self.CompletionString = string.as_raw();
                }
            }"#,
        )
        .extend(
            "CXCodeCompleteResults",
            r#"impl CXCodeCompleteResults {
                pub unsafe fn results(&self) -> cxbind_runtime::ArrayView<CXCompletionResult> {
                    cxbind_runtime::ArrayView::from_raw_parts(self.Results, self.NumResults)
                }
            }"#,
        )
        .build();

    let destination = source
        .items_all()
        .batching(overrides.into_closure())
        .collect::<Destination>();

    destination.write("cx_bindings.rs");
    println!("cargo:rerun-if-changed=fixture");
}
