use std::{
    collections::{HashMap, HashSet},
    fs,
    path::Path,
};

use roxygen::roxygen;

use crate::{
    api::entity::{Entity, HeaderLocation},
    utils::jsonl::read_jsonl_file,
    LIBRARY_NAME_FILE,
};

/// File extension for catalogue shards
const JSONL_EXTENSION: &str = ".jsonl";

/// The binding generator's catalogue, read back from its output directory.
///
/// The generator writes one `<group>_*.jsonl` shard per entity group (the
/// grouping is the generator's choice; a typical run writes `types_*` and
/// `functions_*`) plus a `library.txt` marker naming the native library the
/// catalogue was produced for. `Source` replays those records as
/// `(syn::Item, HeaderLocation)` pairs for the assembly pipeline.
pub struct Source {
    library_name: String,
    items: HashMap<String, Vec<(syn::Item, HeaderLocation)>>,
}

impl Source {
    /// Read a generator output directory.
    ///
    /// # Panics
    ///
    /// Panics if the directory does not exist or was not produced by the
    /// binding generator (no `library.txt` marker). A partially assembled
    /// binding surface is never produced from a bad catalogue.
    #[roxygen]
    pub fn new<P: AsRef<Path>>(
        /// Directory the binding generator wrote its catalogue to
        input_dir: P,
    ) -> Self {
        let input_dir = input_dir.as_ref().to_path_buf();
        if !input_dir.is_dir() {
            panic!(
                "Catalogue directory {} does not exist or is not a directory",
                input_dir.display()
            );
        }
        let library_name = read_stored_library_name(&input_dir).unwrap_or_else(|| {
            panic!(
                "The directory {} does not contain a generator catalogue. \
                Run the binding generator against the native headers first.",
                input_dir.display()
            )
        });

        let groups = Self::discover_groups(&input_dir);
        let mut items = HashMap::new();
        for group in groups {
            let entities = Self::read_group(&input_dir, &group);
            let group_items = entities.iter().map(|e| e.parse()).collect::<Vec<_>>();
            items.insert(group, group_items);
        }

        Self {
            library_name,
            items,
        }
    }

    /// Name of the native library the catalogue was generated for
    pub fn library_name(&self) -> &str {
        &self.library_name
    }

    pub fn items_in_groups<'a>(
        &'a self,
        groups: &'a [&'a str],
    ) -> impl Iterator<Item = (syn::Item, HeaderLocation)> + 'a {
        groups
            .iter()
            .filter_map(|group| self.items.get(*group))
            .flat_map(|entities| entities.iter())
            .cloned()
    }

    pub fn items_except_groups<'a>(
        &'a self,
        groups: &'a [&'a str],
    ) -> impl Iterator<Item = (syn::Item, HeaderLocation)> + 'a {
        self.items
            .iter()
            .filter(|(group, _)| !groups.contains(&group.as_str()))
            .flat_map(|(_, entities)| entities.iter())
            .cloned()
    }

    pub fn items_all(&self) -> impl Iterator<Item = (syn::Item, HeaderLocation)> + '_ {
        self.items
            .iter()
            .flat_map(|(_, entities)| entities.iter())
            .cloned()
    }

    /// Internal method to read all shards matching the group name pattern `<group>_*`
    fn read_group<P: AsRef<Path>>(input_dir: P, group: &str) -> Vec<Entity> {
        let pattern = format!("{group}_");
        let mut entity_map = HashMap::new();

        if let Ok(entries) = fs::read_dir(&input_dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if let Some(file_name) = path.file_name().and_then(|n| n.to_str()) {
                    if file_name.starts_with(&pattern) && file_name.ends_with(JSONL_EXTENSION) {
                        #[cfg(feature = "debug")]
                        println!("Reading catalogue shard: {}", path.display());

                        match read_jsonl_file(&path) {
                            Ok(entities) => {
                                for entity in entities {
                                    // Deduplicate entities by native name
                                    entity_map.insert(entity.name.clone(), entity);
                                }
                            }
                            Err(e) => {
                                panic!("Failed to read {}: {}", path.display(), e);
                            }
                        }
                    }
                }
            }
        }

        entity_map.into_values().collect::<Vec<_>>()
    }

    /// Internal method to discover all available groups from the directory
    fn discover_groups<P: AsRef<Path>>(input_dir: P) -> HashSet<String> {
        let mut groups = HashSet::new();

        if let Ok(entries) = fs::read_dir(input_dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if let Some(file_name) = path.file_name().and_then(|n| n.to_str()) {
                    if file_name.ends_with(JSONL_EXTENSION) {
                        // Group name is everything before the first underscore
                        if let Some(underscore_pos) = file_name.find('_') {
                            let group_name = &file_name[..underscore_pos];
                            groups.insert(group_name.to_string());
                        }
                    }
                }
            }
        }

        groups
    }
}

/// Read the native library name from the stored marker file
fn read_stored_library_name(input_dir: &Path) -> Option<String> {
    let library_name_path = input_dir.join(LIBRARY_NAME_FILE);
    fs::read_to_string(&library_name_path)
        .ok()
        .map(|s| s.trim().to_string())
}
