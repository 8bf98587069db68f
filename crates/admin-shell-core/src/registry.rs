use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("no callback registered under `{0}`")]
    NotFound(String),
}

/// Symbolic name → callback mapping, populated once at startup.
///
/// An unknown name is a value-level error, never a runtime fault.
#[derive(Debug, Clone)]
pub struct CallbackRegistry<F> {
    entries: BTreeMap<String, F>,
}

impl<F> Default for CallbackRegistry<F> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<F> CallbackRegistry<F> {
    /// Registers `callback` under `name`. Returns `false` when the name was
    /// already taken; the existing entry wins.
    pub fn register(&mut self, name: impl Into<String>, callback: F) -> bool {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return false;
        }
        self.entries.insert(name, callback);
        true
    }

    pub fn resolve(&self, name: &str) -> Result<&F, RegistryError> {
        self.entries
            .get(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_registered_callback() {
        let mut registry = CallbackRegistry::default();
        assert!(registry.register("navbar/update-state", "navbar"));

        assert_eq!(registry.resolve("navbar/update-state"), Ok(&"navbar"));
    }

    #[test]
    fn unknown_name_is_a_defined_error() {
        let registry: CallbackRegistry<&str> = CallbackRegistry::default();
        assert_eq!(
            registry.resolve("badge/flash"),
            Err(RegistryError::NotFound("badge/flash".to_string()))
        );
    }

    #[test]
    fn first_registration_wins() {
        let mut registry = CallbackRegistry::default();
        assert!(registry.register("layout/resize-full-height", "first"));
        assert!(!registry.register("layout/resize-full-height", "second"));

        assert_eq!(registry.resolve("layout/resize-full-height"), Ok(&"first"));
    }

    #[test]
    fn names_iterate_in_stable_order() {
        let mut registry = CallbackRegistry::default();
        let _ = registry.register("navbar/update-state", ());
        let _ = registry.register("layout/resize-full-height", ());

        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["layout/resize-full-height", "navbar/update-state"]);
    }
}
