use std::sync::Arc;

use super::{DictEntry, Dictionary};

/// A dictionary that searches several sources in order.
///
/// Results are concatenated layer by layer, so a source given earlier on
/// the command line contributes its candidates first. Duplicates across
/// layers are kept.
pub struct CompositeDictionary {
    layers: Vec<Arc<dyn Dictionary>>,
}

impl CompositeDictionary {
    pub fn new(layers: Vec<Arc<dyn Dictionary>>) -> Self {
        Self { layers }
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    fn gather<'a>(
        &'a self,
        search: impl Fn(&'a dyn Dictionary) -> Vec<&'a DictEntry>,
    ) -> Vec<&'a DictEntry> {
        self.layers
            .iter()
            .flat_map(|layer| search(layer.as_ref()))
            .collect()
    }
}

impl Dictionary for CompositeDictionary {
    fn search_okuri_ari(&self, key: &str) -> Vec<&DictEntry> {
        self.gather(|d| d.search_okuri_ari(key))
    }

    fn search_okuri_nasi(&self, key: &str) -> Vec<&DictEntry> {
        self.gather(|d| d.search_okuri_nasi(key))
    }

    fn search_okuri_nasi_prefix(&self, prefix: &str) -> Vec<&DictEntry> {
        self.gather(|d| d.search_okuri_nasi_prefix(prefix))
    }
}
