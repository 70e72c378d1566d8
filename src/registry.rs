use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

pub const ACTIVE: &str = "active";

#[derive(Debug, Clone, Default, Serialize)]
pub struct Element {
    pub key: String,
    pub classes: BTreeSet<String>,
    pub text: String,
    pub value: String,
}

impl Element {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_string());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    pub fn is_active(&self) -> bool {
        self.has_class(ACTIVE)
    }

    pub fn class_attr(&self) -> String {
        self.classes.iter().cloned().collect::<Vec<_>>().join(" ")
    }
}

/// Lookup surface the UI components work against.
///
/// Resolution misses are `None`/empty, never errors.
pub trait UiRegistry {
    fn by_key(&self, key: &str) -> Option<&Element>;
    fn by_key_mut(&mut self, key: &str) -> Option<&mut Element>;
    fn by_class(&self, class: &str) -> Vec<&Element>;
    fn by_class_mut(&mut self, class: &str) -> Vec<&mut Element>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry {
    elements: BTreeMap<String, Element>,
}

impl MemoryRegistry {
    pub fn insert(&mut self, element: Element) {
        self.elements.insert(element.key.clone(), element);
    }
}

impl UiRegistry for MemoryRegistry {
    fn by_key(&self, key: &str) -> Option<&Element> {
        self.elements.get(key)
    }

    fn by_key_mut(&mut self, key: &str) -> Option<&mut Element> {
        self.elements.get_mut(key)
    }

    fn by_class(&self, class: &str) -> Vec<&Element> {
        self.elements
            .values()
            .filter(|element| element.has_class(class))
            .collect()
    }

    fn by_class_mut(&mut self, class: &str) -> Vec<&mut Element> {
        self.elements
            .values_mut()
            .filter(|element| element.has_class(class))
            .collect()
    }
}
