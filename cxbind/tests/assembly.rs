//! End-to-end assembly: generator catalogue in, binding module source out.

use cxbind::collect::Destination;
use cxbind::{overrides, Entity, HeaderLocation, Source};
use itertools::Itertools;
use std::fs;
use std::io::Write;
use std::path::Path;

fn header(line: usize) -> HeaderLocation {
    HeaderLocation {
        file: "clang-c/Index.h".to_string(),
        line,
    }
}

/// Lay out a generator output directory the way the binding generator does:
/// `library.txt` marker plus `<group>_*.jsonl` shards.
fn write_catalogue(dir: &Path) {
    fs::write(dir.join("library.txt"), "libclang\n").unwrap();

    let types = [
        Entity::from_item(
            &syn::parse_str(
                "#[repr(C)] pub struct CXUnsavedFile { \
                 pub Filename: *const i8, pub Contents: *const i8, pub Length: u64 }",
            )
            .unwrap(),
            header(110),
        ),
        Entity::from_item(
            &syn::parse_str("#[repr(C)] pub struct CXToken { pub int_data: [u32; 4] }").unwrap(),
            header(210),
        ),
    ];
    let functions = [
        Entity::from_item(
            &syn::parse_str("extern \"C\" { pub fn clang_getCString(); }").unwrap(),
            header(300),
        ),
        Entity::from_item(
            &syn::parse_str("extern \"C\" { pub fn clang_tokenize(); }").unwrap(),
            header(310),
        ),
        Entity::from_item(
            &syn::parse_str("extern \"C\" { pub fn clang_getInstantiationLocation(); }").unwrap(),
            header(320),
        ),
    ];

    for (group, entities) in [("types", &types[..]), ("functions", &functions[..])] {
        let mut file = fs::File::create(dir.join(format!("{group}_0.jsonl"))).unwrap();
        for entity in entities {
            writeln!(file, "{}", entity.to_jsonl_string().unwrap()).unwrap();
        }
    }
}

#[test]
fn overrides_steer_the_emitted_surface() {
    let dir = tempfile::tempdir().unwrap();
    write_catalogue(dir.path());
    let source = Source::new(dir.path());
    assert_eq!(source.library_name(), "libclang");

    let overrides = overrides::Builder::new()
        .disable("clang_tokenize")
        .replace(
            "clang_getInstantiationLocation",
            "pub use cxbind_runtime::api::instantiation_location \
             as clang_getInstantiationLocation;",
        )
        .extend(
            "CXUnsavedFile",
            "impl CXUnsavedFile { \
             pub fn set_filename(&mut self, s: &cxbind_runtime::StringHolder) { \
             s.attach_filename(self); } }",
        )
        .build();

    let destination = source
        .items_all()
        .batching(overrides.into_closure())
        .collect::<Destination>();

    let out = destination.write(dir.path().join("cx_bindings.rs"));
    let written = fs::read_to_string(out).unwrap();

    // untouched default passes through
    assert!(written.contains("clang_getCString"));
    // disabled default is gone entirely
    assert!(!written.contains("fn clang_tokenize"));
    // replacement stands in for the default
    assert!(written.contains("pub use cxbind_runtime::api::instantiation_location"));
    assert!(!written.contains("pub fn clang_getInstantiationLocation"));
    // extension rides along with the kept default
    assert!(written.contains("pub struct CXUnsavedFile"));
    assert!(written.contains("fn set_filename"));
}

#[test]
#[should_panic(expected = "absent from the generator catalogue")]
fn misspelled_directive_aborts_assembly() {
    let dir = tempfile::tempdir().unwrap();
    write_catalogue(dir.path());
    let source = Source::new(dir.path());

    let overrides = overrides::Builder::new()
        .disable("clang_tokenise") // typo
        .build();

    let _ = source
        .items_all()
        .batching(overrides.into_closure())
        .collect::<Destination>();
}
