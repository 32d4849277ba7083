//! Named collection of input providers used to resolve the rig's input at
//! construction time.

use crate::provider::InputProvider;

/// Ordered set of named [`InputProvider`]s.
///
/// Hosts register whatever providers they have; consumers take the one they
/// need by name, or the first one registered.
#[derive(Default)]
pub struct InputRegistry {
    entries: Vec<(String, Box<dyn InputProvider>)>,
}

impl std::fmt::Debug for InputRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputRegistry")
            .field("providers", &self.names())
            .finish()
    }
}

impl InputRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a provider under `name`. A later registration with the same name
    /// replaces the earlier one in place.
    pub fn register(&mut self, name: impl Into<String>, provider: Box<dyn InputProvider>) {
        let name = name.into();
        if let Some(slot) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            tracing::debug!(%name, "Replacing input provider");
            slot.1 = provider;
        } else {
            self.entries.push((name, provider));
        }
    }

    /// Remove and return the provider registered as `name`.
    pub fn take(&mut self, name: &str) -> Option<Box<dyn InputProvider>> {
        let index = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Remove and return the earliest registered provider.
    pub fn take_first(&mut self) -> Option<Box<dyn InputProvider>> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.remove(0).1)
        }
    }

    /// Registered names, in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Number of registered providers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InputSnapshot, NullInput, ScriptedInput};
    use glam::Vec2;

    #[test]
    fn test_take_first_follows_registration_order() {
        let mut registry = InputRegistry::new();
        registry.register("scripted", Box::new(ScriptedInput::new([InputSnapshot::look(1.0, 0.0)])));
        registry.register("null", Box::new(NullInput));

        let mut first = registry.take_first().unwrap();
        assert_eq!(first.look_delta(), Vec2::new(1.0, 0.0));
        assert_eq!(registry.names(), vec!["null"]);
    }

    #[test]
    fn test_take_by_name() {
        let mut registry = InputRegistry::new();
        registry.register("a", Box::new(NullInput));
        registry.register("b", Box::new(NullInput));
        assert!(registry.take("b").is_some());
        assert!(registry.take("b").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_reregistering_replaces_in_place() {
        let mut registry = InputRegistry::new();
        registry.register("a", Box::new(NullInput));
        registry.register("b", Box::new(NullInput));
        registry.register("a", Box::new(ScriptedInput::new([InputSnapshot::look(2.0, 0.0)])));
        assert_eq!(registry.names(), vec!["a", "b"]);
        let mut a = registry.take_first().unwrap();
        assert_eq!(a.look_delta(), Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_empty_registry() {
        let mut registry = InputRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.take_first().is_none());
    }
}
