//! Import tracking for generated modules.

use std::collections::BTreeSet;

use indexmap::IndexMap;

/// Tracks imports and deduplicates them.
///
/// Modules keep insertion order; symbols within a module are sorted.
///
/// # Example
///
/// ```
/// use clientgen_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("../models", "Order");
/// imports.add("../models", "Customer");
/// imports.add("../models", "Order");
///
/// let symbols: Vec<_> = imports.symbols("../models").collect();
/// assert_eq!(symbols, ["Customer", "Order"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    imports: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol import from a module.
    pub fn add(&mut self, module: &str, symbol: &str) {
        self.imports
            .entry(module.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Symbols imported from a module, sorted.
    pub fn symbols(&self, module: &str) -> impl Iterator<Item = &str> {
        self.imports
            .get(module)
            .into_iter()
            .flat_map(|symbols| symbols.iter().map(String::as_str))
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.imports.values().all(BTreeSet::is_empty)
    }
}
