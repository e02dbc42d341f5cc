use hashbrown::{HashMap, HashSet};

use crate::model::{ApiEntry, Category, DemoId, Vendor};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate category id '{0}'")]
    DuplicateCategory(String),

    #[error("duplicate entry id '{entry}' in category '{category}'")]
    DuplicateEntry { category: String, entry: String },

    #[error("category at position {0} has an empty id")]
    EmptyCategoryId(usize),

    #[error("entry at position {position} in category '{category}' has an empty id")]
    EmptyEntryId { category: String, position: usize },
}

/// The full catalog, in authored display order.
///
/// Design intent:
/// - Built once, never mutated; views hold `&Registry` only.
/// - A missing category is an ordinary `None`, not an error.
/// - Uniqueness of ids is checked at construction, so lookups never have to
///   pick between two matches.
#[derive(Debug, Clone)]
pub struct Registry {
    categories: Vec<Category>,
    by_id: HashMap<&'static str, usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RegistryStats {
    pub categories: usize,
    pub entries: usize,
    pub with_demo: usize,
    /// (vendor, number of entries that vendor does not support)
    pub unsupported: Vec<(Vendor, usize)>,
}

impl Registry {
    pub fn new(categories: Vec<Category>) -> Result<Self, RegistryError> {
        let mut by_id = HashMap::with_capacity(categories.len());

        for (i, cat) in categories.iter().enumerate() {
            if cat.id.trim().is_empty() {
                return Err(RegistryError::EmptyCategoryId(i));
            }
            if by_id.insert(cat.id, i).is_some() {
                return Err(RegistryError::DuplicateCategory(cat.id.to_string()));
            }

            let mut seen = HashSet::with_capacity(cat.entries.len());
            for (pos, entry) in cat.entries.iter().enumerate() {
                if entry.id.trim().is_empty() {
                    return Err(RegistryError::EmptyEntryId {
                        category: cat.id.to_string(),
                        position: pos,
                    });
                }
                if !seen.insert(entry.id) {
                    return Err(RegistryError::DuplicateEntry {
                        category: cat.id.to_string(),
                        entry: entry.id.to_string(),
                    });
                }
            }
        }

        tracing::debug!(categories = categories.len(), "registry built");
        Ok(Self { categories, by_id })
    }

    /// The authored catalog shipped with the site.
    pub fn builtin() -> Self {
        // Covered by `builtin_catalog_is_valid` in catalog.rs.
        Self::new(crate::catalog::categories()).expect("built-in catalog ids are unique")
    }

    pub fn lookup(&self, category_id: &str) -> Option<&Category> {
        let found = self.by_id.get(category_id).map(|&i| &self.categories[i]);
        if found.is_none() {
            tracing::debug!(category_id, "category lookup missed");
        }
        found
    }

    pub fn all(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// First entry with this id, scanning categories in display order.
    pub fn find_entry(&self, entry_id: &str) -> Option<(&Category, &ApiEntry)> {
        self.categories
            .iter()
            .find_map(|c| c.entry(entry_id).map(|e| (c, e)))
    }

    pub fn demo_entries(&self) -> impl Iterator<Item = (&Category, &ApiEntry, DemoId)> + '_ {
        self.categories.iter().flat_map(|c| {
            c.entries
                .iter()
                .filter_map(move |e| e.demo.id().map(|d| (c, e, d)))
        })
    }

    pub fn stats(&self) -> RegistryStats {
        let entries = self.categories.iter().map(|c| c.entries.len()).sum();
        let with_demo = self.demo_entries().count();
        let unsupported = Vendor::all()
            .iter()
            .map(|&v| {
                let n = self
                    .categories
                    .iter()
                    .flat_map(|c| c.entries.iter())
                    .filter(|e| !e.support.get(v).is_supported())
                    .count();
                (v, n)
            })
            .collect();

        RegistryStats {
            categories: self.categories.len(),
            entries,
            with_demo,
            unsupported,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Links, Support, SupportMap};

    fn entry(id: &'static str) -> ApiEntry {
        ApiEntry::new(
            id,
            id,
            "test entry",
            SupportMap::new(
                Support::Since("1"),
                Support::Since("1"),
                Support::Unsupported,
                Support::Since("1"),
            ),
            Links {
                docs: "https://example.test/docs",
                compat: "https://example.test/compat",
            },
        )
    }

    fn category(id: &'static str, entries: Vec<ApiEntry>) -> Category {
        Category {
            id,
            name: id,
            description: "test category",
            entries,
        }
    }

    #[test]
    fn lookup_hits_and_misses() {
        let reg = Registry::new(vec![
            category("a", vec![entry("a1")]),
            category("b", vec![entry("b1"), entry("b2")]),
        ])
        .unwrap();

        assert_eq!(reg.lookup("b").map(|c| c.id), Some("b"));
        assert!(reg.lookup("c").is_none());
        assert!(reg.lookup("").is_none());
    }

    #[test]
    fn rejects_duplicate_category_ids() {
        let err = Registry::new(vec![category("a", vec![]), category("a", vec![])]).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateCategory("a".to_string()));
    }

    #[test]
    fn rejects_duplicate_entry_ids_within_a_category() {
        let err = Registry::new(vec![category("a", vec![entry("x"), entry("x")])]).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateEntry {
                category: "a".to_string(),
                entry: "x".to_string()
            }
        );
    }

    #[test]
    fn same_entry_id_in_different_categories_is_allowed() {
        let reg = Registry::new(vec![
            category("a", vec![entry("x")]),
            category("b", vec![entry("x")]),
        ])
        .unwrap();
        let (cat, _) = reg.find_entry("x").unwrap();
        assert_eq!(cat.id, "a");
    }

    #[test]
    fn rejects_blank_ids() {
        assert_eq!(
            Registry::new(vec![category(" ", vec![])]).unwrap_err(),
            RegistryError::EmptyCategoryId(0)
        );
        assert_eq!(
            Registry::new(vec![category("a", vec![entry("ok"), entry("")])]).unwrap_err(),
            RegistryError::EmptyEntryId {
                category: "a".to_string(),
                position: 1
            }
        );
    }

    #[test]
    fn all_preserves_authoring_order() {
        let reg = Registry::new(vec![
            category("z", vec![entry("z2"), entry("z1")]),
            category("m", vec![]),
            category("a", vec![entry("a1")]),
        ])
        .unwrap();
        let ids: Vec<_> = reg.all().iter().map(|c| c.id).collect();
        assert_eq!(ids, ["z", "m", "a"]);
        let z: Vec<_> = reg.all()[0].entries.iter().map(|e| e.id).collect();
        assert_eq!(z, ["z2", "z1"]);
    }

    #[test]
    fn stats_count_demos_and_unsupported_cells() {
        let reg = Registry::new(vec![category(
            "a",
            vec![entry("a1").with_demo(DemoId::Canvas), entry("a2")],
        )])
        .unwrap();
        let stats = reg.stats();
        assert_eq!(stats.categories, 1);
        assert_eq!(stats.entries, 2);
        assert_eq!(stats.with_demo, 1);
        assert!(stats.unsupported.contains(&(Vendor::Safari, 2)));
        assert!(stats.unsupported.contains(&(Vendor::Chrome, 0)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn stats_serialize_with_vendor_keys() {
        let reg = Registry::new(vec![category("a", vec![entry("a1")])]).unwrap();
        let json = serde_json::to_value(reg.stats()).unwrap();
        assert_eq!(json["categories"], 1);
        assert_eq!(json["entries"], 1);
        assert_eq!(json["with_demo"], 0);
        assert_eq!(json["unsupported"][2], serde_json::json!(["safari", 1]));
    }
}
