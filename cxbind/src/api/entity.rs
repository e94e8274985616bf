use serde::{Deserialize, Serialize};

/// One native entity in the generator's catalogue, together with the default
/// binding the generator would emit for it.
///
/// The binding generator writes one record per declaration it finds in the
/// native headers. `content` holds the generator's default binding for the
/// entity as Rust source; `name` is the native identifier the override
/// registry keys on (e.g. `clang_tokenize`, `CXUnsavedFile`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entity {
    /// The kind of native declaration (struct, enum, union, function, ...)
    pub kind: EntityKind,
    /// The native entity identifier
    pub name: String,
    /// The generator's default binding for this entity, as Rust source
    pub content: String,
    /// Where the native declaration lives in the library headers
    pub header: HeaderLocation,
}

/// Location of a native declaration in the wrapped library's headers.
///
/// Carried through the pipeline purely for diagnostics: every panic raised
/// while assembling the binding surface points back at the header line the
/// offending entity was declared on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct HeaderLocation {
    /// Header file path, relative to the library include root
    pub file: String,
    /// Line of the declaration (1-based)
    pub line: usize,
}

impl std::fmt::Display for HeaderLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// The kind of native declaration a catalogue entity describes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// A C struct mirrored as a `#[repr(C)]` struct
    Struct,
    /// A C enum mirrored as constants or a `#[repr(C)]` enum
    Enum,
    /// A C union mirrored as a `#[repr(C)]` union
    Union,
    /// A native function with its default extern declaration or wrapper
    Function,
    /// A typedef mirrored as a type alias
    TypeAlias,
    /// A `#define` or enum constant mirrored as a `const`
    Const,
}

impl EntityKind {
    /// Returns true if this entity is a type declaration rather than a
    /// function or constant.
    pub fn is_type(&self) -> bool {
        matches!(
            self,
            EntityKind::Struct | EntityKind::Enum | EntityKind::Union | EntityKind::TypeAlias
        )
    }
}

impl From<&(syn::Item, HeaderLocation)> for EntityKind {
    fn from((item, header): &(syn::Item, HeaderLocation)) -> Self {
        match item {
            syn::Item::Struct(_) => EntityKind::Struct,
            syn::Item::Enum(_) => EntityKind::Enum,
            syn::Item::Union(_) => EntityKind::Union,
            syn::Item::Fn(_) | syn::Item::ForeignMod(_) => EntityKind::Function,
            syn::Item::Type(_) => EntityKind::TypeAlias,
            syn::Item::Const(_) => EntityKind::Const,
            _ => panic!("Unsupported syn::Item variant for entity declared at {header}"),
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Struct => write!(f, "struct"),
            EntityKind::Enum => write!(f, "enum"),
            EntityKind::Union => write!(f, "union"),
            EntityKind::Function => write!(f, "function"),
            EntityKind::TypeAlias => write!(f, "type"),
            EntityKind::Const => write!(f, "const"),
        }
    }
}

impl Entity {
    /// Create a new catalogue entity.
    pub fn new(
        kind: EntityKind,
        name: impl Into<String>,
        content: impl Into<String>,
        header: HeaderLocation,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            content: content.into(),
            header,
        }
    }

    /// Build a catalogue entity from an already-parsed item.
    ///
    /// Intended for generator-side writers and tests; the entity name and
    /// kind are taken from the item itself.
    ///
    /// # Panics
    ///
    /// Panics if the item carries no native entity name (see [`entity_name`]).
    pub fn from_item(item: &syn::Item, header: HeaderLocation) -> Self {
        let pair = (item.clone(), header);
        let kind: EntityKind = (&pair).into();
        let (item, header) = pair;
        let name = entity_name(&item).unwrap_or_else(|| {
            panic!("Item declared at {header} carries no native entity name")
        });
        let tokens: proc_macro2::TokenStream = quote::quote! { #item };
        Self {
            kind,
            name,
            content: tokens.to_string(),
            header,
        }
    }

    /// Serialize this entity to a JSON-lines compatible string.
    pub fn to_jsonl_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse the default binding source into a single `syn::Item`.
    ///
    /// # Panics
    ///
    /// A catalogue record whose content is not exactly one item of the
    /// declared kind is generator output corruption; assembly aborts rather
    /// than emitting a half-parsed binding surface.
    pub(crate) fn parse(&self) -> (syn::Item, HeaderLocation) {
        let parsed = syn::parse_file(&self.content).unwrap_or_else(|e| {
            panic!(
                "Failed to parse default binding for entity `{}` ({}): {}",
                self.name, self.header, e
            )
        });

        let mut items = parsed.items.into_iter();
        let item = items.next().unwrap_or_else(|| {
            panic!(
                "Expected exactly one item in entity `{}` ({}), found 0",
                self.name, self.header
            )
        });
        if items.next().is_some() {
            panic!(
                "Expected exactly one item in entity `{}` ({}), found more than 1",
                self.name, self.header
            );
        }

        let pair = (item, self.header.clone());
        let actual_kind: EntityKind = (&pair).into();
        if actual_kind != self.kind {
            panic!(
                "Entity kind mismatch for `{}` ({}): catalogue says {}, content is {}",
                self.name, self.header, self.kind, actual_kind
            );
        }
        pair
    }
}

/// Native entity identifier of a catalogue item.
///
/// Extern blocks are named after their first foreign declaration: the
/// generator emits one `extern "C"` block per native function.
pub(crate) fn entity_name(item: &syn::Item) -> Option<String> {
    match item {
        syn::Item::Struct(s) => Some(s.ident.to_string()),
        syn::Item::Enum(e) => Some(e.ident.to_string()),
        syn::Item::Union(u) => Some(u.ident.to_string()),
        syn::Item::Fn(f) => Some(f.sig.ident.to_string()),
        syn::Item::Type(t) => Some(t.ident.to_string()),
        syn::Item::Const(c) => Some(c.ident.to_string()),
        syn::Item::ForeignMod(m) => m.items.iter().find_map(|fi| match fi {
            syn::ForeignItem::Fn(f) => Some(f.sig.ident.to_string()),
            syn::ForeignItem::Static(s) => Some(s.ident.to_string()),
            syn::ForeignItem::Type(t) => Some(t.ident.to_string()),
            _ => None,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc() -> HeaderLocation {
        HeaderLocation {
            file: "clang-c/Index.h".to_string(),
            line: 42,
        }
    }

    #[test]
    fn parse_single_item() {
        let entity = Entity::new(
            EntityKind::Struct,
            "CXUnsavedFile",
            "#[repr(C)] pub struct CXUnsavedFile { pub Length: u64 }",
            loc(),
        );
        let (item, header) = entity.parse();
        assert!(matches!(item, syn::Item::Struct(_)));
        assert_eq!(header.line, 42);
    }

    #[test]
    fn foreign_mod_counts_as_function() {
        let entity = Entity::new(
            EntityKind::Function,
            "clang_disposeTokens",
            "extern \"C\" { pub fn clang_disposeTokens(); }",
            loc(),
        );
        let (item, _) = entity.parse();
        assert!(matches!(item, syn::Item::ForeignMod(_)));
    }

    #[test]
    fn from_item_round_trips() {
        let item: syn::Item =
            syn::parse_str("extern \"C\" { pub fn clang_tokenize(); }").unwrap();
        let entity = Entity::from_item(&item, loc());
        assert_eq!(entity.name, "clang_tokenize");
        assert_eq!(entity.kind, EntityKind::Function);
        let (parsed, _) = entity.parse();
        assert_eq!(parsed, item);
    }

    #[test]
    #[should_panic(expected = "kind mismatch")]
    fn kind_mismatch_is_fatal() {
        let entity = Entity::new(
            EntityKind::Function,
            "CXToken",
            "pub struct CXToken;",
            loc(),
        );
        entity.parse();
    }

    #[test]
    #[should_panic(expected = "found more than 1")]
    fn multiple_items_are_fatal() {
        let entity = Entity::new(
            EntityKind::Const,
            "CXError_Success",
            "pub const A: u32 = 0; pub const B: u32 = 1;",
            loc(),
        );
        entity.parse();
    }
}
