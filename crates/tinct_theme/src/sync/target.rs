//! Style targets: the property store the engine writes into

use std::collections::BTreeMap;

use rustc_hash::{FxHashMap, FxHashSet};

/// A flat store of named string properties plus named flags.
///
/// Implemented by whatever surface renders the theme. [`MemoryStyleTarget`]
/// is the in-process implementation.
pub trait StyleTarget {
    fn set_property(&mut self, name: &str, value: &str);

    fn remove_property(&mut self, name: &str);

    fn property(&self, name: &str) -> Option<String>;

    /// Add or remove a flag, e.g. the dark-mode class
    fn set_flag(&mut self, flag: &str, enabled: bool);

    fn has_flag(&self, flag: &str) -> bool;

    /// Drop every property and flag
    fn clear(&mut self);
}

/// In-memory style target
#[derive(Clone, Debug, Default)]
pub struct MemoryStyleTarget {
    properties: FxHashMap<String, String>,
    flags: FxHashSet<String>,
    writes: usize,
}

impl MemoryStyleTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current properties, sorted by name
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.properties
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Number of `set_property` calls so far
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl StyleTarget for MemoryStyleTarget {
    fn set_property(&mut self, name: &str, value: &str) {
        self.writes += 1;
        self.properties.insert(name.to_string(), value.to_string());
    }

    fn remove_property(&mut self, name: &str) {
        self.properties.remove(name);
    }

    fn property(&self, name: &str) -> Option<String> {
        self.properties.get(name).cloned()
    }

    fn set_flag(&mut self, flag: &str, enabled: bool) {
        if enabled {
            self.flags.insert(flag.to_string());
        } else {
            self.flags.remove(flag);
        }
    }

    fn has_flag(&self, flag: &str) -> bool {
        self.flags.contains(flag)
    }

    fn clear(&mut self) {
        self.properties.clear();
        self.flags.clear();
    }
}
