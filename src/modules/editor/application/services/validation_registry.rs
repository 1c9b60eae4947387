use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::content::domain::validation::ErrorMap;

/// Pending validation state of the editing session, keyed by entity handle
/// ("project:1712000000000", "skill:2", "section:contact"). An entry exists
/// only while the entity currently fails validation; recording an empty map
/// clears it.
///
/// Inline errors never block editing other entities. They do block the
/// explicit save action (see the save use case), which is this registry's
/// other consumer.
#[derive(Default)]
pub struct ValidationRegistry {
    entries: Mutex<BTreeMap<String, ErrorMap>>,
}

impl ValidationRegistry {
    pub fn record(&self, key: String, errors: ErrorMap) {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if errors.is_empty() {
            entries.remove(&key);
        } else {
            entries.insert(key, errors);
        }
    }

    pub fn clear(&self, key: &str) {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(key);
    }

    pub fn snapshot(&self) -> BTreeMap<String, ErrorMap> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn failing_keys(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .keys()
            .cloned()
            .collect()
    }

    pub fn is_clean(&self) -> bool {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors_with(field: &str) -> ErrorMap {
        let mut map = ErrorMap::new();
        map.insert(field.to_string(), "This field is required".to_string());
        map
    }

    #[test]
    fn recording_empty_map_clears_the_entry() {
        let registry = ValidationRegistry::default();
        registry.record("project:1".to_string(), errors_with("title"));
        assert!(!registry.is_clean());

        registry.record("project:1".to_string(), ErrorMap::new());
        assert!(registry.is_clean());
    }

    #[test]
    fn failing_keys_lists_every_dirty_entity() {
        let registry = ValidationRegistry::default();
        registry.record("project:1".to_string(), errors_with("title"));
        registry.record("section:contact".to_string(), errors_with("email"));
        assert_eq!(
            registry.failing_keys(),
            vec!["project:1".to_string(), "section:contact".to_string()]
        );
    }
}
