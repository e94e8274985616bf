//! The override registry: per-entity suppression and replacement of the
//! generator's default bindings.

use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};

use roxygen::roxygen;

use crate::api::entity::{entity_name, HeaderLocation};

/// Builder for configuring an [`Overrides`] table
///
/// Each directive names one native entity from the generator's catalogue and
/// decides what happens to its default binding during assembly:
///
/// - [`disable`](Self::disable): the default is suppressed and nothing is
///   installed in its place. Used when the binding crate exports a
///   hand-written adapter under the native name itself.
/// - [`replace`](Self::replace): the default is suppressed and the given
///   hand-written item is emitted in its place.
/// - [`extend`](Self::extend): the default is kept and the given item is
///   emitted right after it. Used to attach methods to a generated wrapper
///   type (e.g. `StringHolder` setters on `CXUnsavedFile`).
///
/// # Example
///
/// ```
/// let overrides = cxbind::overrides::Builder::new()
///     .disable("clang_tokenize")
///     .disable("clang_getInstantiationLocation")
///     .replace(
///         "clang_parseTranslationUnit",
///         "pub use cxbind_runtime::api::parse_translation_unit as clang_parseTranslationUnit;",
///     )
///     .build();
/// ```
pub struct Builder {
    pub(crate) disabled: BTreeSet<String>,
    pub(crate) replacements: BTreeMap<String, syn::Item>,
    pub(crate) extensions: BTreeMap<String, Vec<syn::Item>>,
}

impl Builder {
    /// Create a new Builder with no directives
    pub fn new() -> Self {
        Self {
            disabled: BTreeSet::new(),
            replacements: BTreeMap::new(),
            extensions: BTreeMap::new(),
        }
    }

    /// Suppress the generator's default binding for an entity
    ///
    /// Disabling the same entity twice is equivalent to disabling it once.
    ///
    /// # Example
    ///
    /// ```
    /// let builder = cxbind::overrides::Builder::new()
    ///     .disable("clang_tokenize")
    ///     .disable("clang_tokenize"); // no-op, same directive
    /// ```
    #[roxygen]
    pub fn disable<S: Into<String>>(
        mut self,
        /// The native entity identifier to suppress
        entity: S,
    ) -> Self {
        self.disabled.insert(entity.into());
        self
    }

    /// Install a hand-written binding in place of the generator's default
    ///
    /// Implicitly disables the default for the entity. The replacement source
    /// must parse as exactly one Rust item.
    ///
    /// # Panics
    ///
    /// Panics if the source does not parse, or if a replacement was already
    /// registered for the same entity: two competing custom bindings for one
    /// native declaration is a configuration error, not a last-one-wins.
    #[roxygen]
    pub fn replace<S: Into<String>>(
        mut self,
        /// The native entity identifier whose default is replaced
        entity: S,
        /// The hand-written binding, as Rust source for a single item
        source: &str,
    ) -> Self {
        let entity = entity.into();
        let item: syn::Item = syn::parse_str(source).unwrap_or_else(|e| {
            panic!("Failed to parse replacement binding for `{entity}`: {e}")
        });
        if self.replacements.insert(entity.clone(), item).is_some() {
            panic!("Replacement binding for `{entity}` registered twice");
        }
        self
    }

    /// Emit an extra item right after an entity's default binding
    ///
    /// The default binding is kept. Multiple extensions for the same entity
    /// are emitted in registration order.
    ///
    /// # Panics
    ///
    /// Panics if the source does not parse as a single Rust item.
    #[roxygen]
    pub fn extend<S: Into<String>>(
        mut self,
        /// The native entity identifier to extend
        entity: S,
        /// The additional item, as Rust source (typically an `impl` block)
        source: &str,
    ) -> Self {
        let entity = entity.into();
        let item: syn::Item = syn::parse_str(source).unwrap_or_else(|e| {
            panic!("Failed to parse extension item for `{entity}`: {e}")
        });
        self.extensions.entry(entity).or_default().push(item);
        self
    }

    /// Build the Overrides table
    pub fn build(self) -> Overrides {
        Overrides {
            builder: self,
            matched: HashSet::new(),
            pending: VecDeque::new(),
            verified: false,
        }
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

/// What the registry decides for one entity during assembly.
#[derive(Debug, PartialEq)]
pub enum Resolution<'a> {
    /// Not present in the table: the generator's default binding applies
    Default,
    /// Default suppressed, nothing installed
    Disabled,
    /// Default suppressed, this hand-written item installed instead
    Custom(&'a syn::Item),
}

/// The override table applied to the catalogue stream.
///
/// `Overrides` is consumed through [`into_closure`](Self::into_closure) with
/// `itertools::batching`: entities flow through unchanged unless a directive
/// names them. When the stream ends, every directive must have matched a
/// catalogued entity; a directive naming an unknown entity identifier aborts
/// assembly instead of silently having no effect.
pub struct Overrides {
    builder: Builder,
    /// Entity ids whose directives matched a streamed item
    matched: HashSet<String>,
    /// Items queued for emission ahead of pulling the next catalogue entity
    pending: VecDeque<(syn::Item, HeaderLocation)>,
    verified: bool,
}

impl Overrides {
    /// Create a builder for an override table
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Look up what the table decides for a single entity.
    ///
    /// This is the same resolution order the streaming pass applies: a
    /// replacement wins over a plain disable, a plain disable wins over the
    /// default.
    pub fn resolution(&self, entity: &str) -> Resolution<'_> {
        if let Some(item) = self.builder.replacements.get(entity) {
            Resolution::Custom(item)
        } else if self.builder.disabled.contains(entity) {
            Resolution::Disabled
        } else {
            Resolution::Default
        }
    }

    /// Process catalogue items in batching mode
    ///
    /// Used internally by `into_closure()` for integration with
    /// `itertools::batching`.
    pub fn call<I>(&mut self, iter: &mut I) -> Option<(syn::Item, HeaderLocation)>
    where
        I: Iterator<Item = (syn::Item, HeaderLocation)>,
    {
        loop {
            if let Some(queued) = self.pending.pop_front() {
                return Some(queued);
            }

            let Some((item, header)) = iter.next() else {
                if !self.verified {
                    self.verified = true;
                    self.verify_all_directives_matched();
                }
                return None;
            };

            let Some(name) = entity_name(&item) else {
                // Unnamed items cannot be addressed by directives
                return Some((item, header));
            };

            if let Some(replacement) = self.builder.replacements.get(&name).cloned() {
                #[cfg(feature = "debug")]
                println!("Replacing default binding for `{name}`");
                self.matched.insert(name.clone());
                self.pending.push_back((replacement, header.clone()));
                self.queue_extensions(&name, &header);
            } else if self.builder.disabled.contains(&name) {
                #[cfg(feature = "debug")]
                println!("Suppressing default binding for `{name}`");
                self.matched.insert(name.clone());
                self.queue_extensions(&name, &header);
            } else if self.builder.extensions.contains_key(&name) {
                self.matched.insert(name.clone());
                self.pending.push_back((item, header.clone()));
                self.queue_extensions(&name, &header);
            } else {
                return Some((item, header));
            }
        }
    }

    /// Convert to a closure compatible with `itertools::batching`
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use itertools::Itertools;
    ///
    /// let destination: cxbind::collect::Destination = source
    ///     .items_all()
    ///     .batching(overrides.into_closure())
    ///     .collect();
    /// ```
    pub fn into_closure<I>(mut self) -> impl FnMut(&mut I) -> Option<(syn::Item, HeaderLocation)>
    where
        I: Iterator<Item = (syn::Item, HeaderLocation)>,
    {
        move |iter| self.call(iter)
    }

    fn queue_extensions(&mut self, name: &str, header: &HeaderLocation) {
        if let Some(extensions) = self.builder.extensions.get(name) {
            for extension in extensions {
                self.pending.push_back((extension.clone(), header.clone()));
            }
        }
    }

    fn verify_all_directives_matched(&self) {
        let mut unmatched: Vec<&str> = Vec::new();
        for id in self
            .builder
            .disabled
            .iter()
            .chain(self.builder.replacements.keys())
            .chain(self.builder.extensions.keys())
        {
            if !self.matched.contains(id) && !unmatched.contains(&id.as_str()) {
                unmatched.push(id);
            }
        }
        if !unmatched.is_empty() {
            panic!(
                "Override directives name entities absent from the generator catalogue: {}. \
                Check the identifiers against the native headers the generator ran on.",
                unmatched.join(", ")
            );
        }
    }
}
