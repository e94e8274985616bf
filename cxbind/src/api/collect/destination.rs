use std::path::Path;
use std::{env, fs};

use crate::api::entity::HeaderLocation;

/// Collector materializing the assembled binding surface as a Rust source file.
///
/// `Destination` is the final step of the assembly pipeline: it accumulates
/// the `syn::Item`s that survived the override pass and writes them as
/// formatted Rust source, ready to be `include!`d by the binding crate.
///
/// # Usage
///
/// ```rust,ignore
/// use itertools::Itertools;
/// use cxbind::collect::Destination;
///
/// let destination: Destination = source
///     .items_all()
///     .batching(overrides.into_closure())
///     .collect();
///
/// let bindings_file = destination.write("cx_bindings.rs");
/// ```
///
/// # File writing
///
/// [`write`](Self::write) resolves relative paths against the `OUT_DIR`
/// environment variable (the usual build.rs setting) and formats the output
/// with `prettyplease`.
pub struct Destination {
    file: syn::File,
}

impl FromIterator<syn::Item> for Destination {
    fn from_iter<T: IntoIterator<Item = syn::Item>>(iter: T) -> Self {
        Self {
            file: syn::File {
                shebang: None,
                attrs: vec![],
                items: iter.into_iter().collect(),
            },
        }
    }
}

impl FromIterator<(syn::Item, HeaderLocation)> for Destination {
    /// Collects items carrying header locations, discarding the locations:
    /// they only matter for diagnostics while the stream is being assembled.
    fn from_iter<T: IntoIterator<Item = (syn::Item, HeaderLocation)>>(iter: T) -> Self {
        Self {
            file: syn::File {
                shebang: None,
                attrs: vec![],
                items: iter.into_iter().map(|(item, _)| item).collect(),
            },
        }
    }
}

impl Destination {
    /// Number of items collected
    pub fn len(&self) -> usize {
        self.file.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.file.items.is_empty()
    }

    /// Write the collected items to a file and return the absolute path.
    ///
    /// Relative paths are resolved against `OUT_DIR`; absolute paths are used
    /// as-is.
    ///
    /// # Panics
    ///
    /// Panics if `OUT_DIR` is not set when a relative path is given, or if
    /// the file cannot be written.
    pub fn write<P: AsRef<Path>>(self, filename: P) -> std::path::PathBuf {
        let file_path = if filename.as_ref().is_relative() {
            let out_dir = env::var("OUT_DIR").expect("OUT_DIR environment variable not set");
            std::path::PathBuf::from(out_dir).join(filename)
        } else {
            filename.as_ref().to_path_buf()
        };

        let content = prettyplease::unparse(&self.file);
        fs::write(&file_path, content).unwrap_or_else(|e| {
            panic!("Failed to write file {}: {}", file_path.display(), e);
        });

        file_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_and_writes_formatted_source() {
        let items: Vec<syn::Item> = vec![
            syn::parse_str("#[repr(C)] pub struct CXToken { pub ptr_data: usize }").unwrap(),
            syn::parse_str("extern \"C\" { pub fn clang_getCString(); }").unwrap(),
        ];
        let destination: Destination = items.into_iter().collect();
        assert_eq!(destination.len(), 2);

        let dir = tempfile::tempdir().unwrap();
        let path = destination.write(dir.path().join("cx_bindings.rs"));
        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.contains("pub struct CXToken"));
        assert!(written.contains("clang_getCString"));
    }

    #[test]
    fn header_locations_are_discarded() {
        let pair = (
            syn::parse_str::<syn::Item>("pub const X: u32 = 0;").unwrap(),
            HeaderLocation::default(),
        );
        let destination: Destination = vec![pair].into_iter().collect();
        assert_eq!(destination.len(), 1);
    }
}
