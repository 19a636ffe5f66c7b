use indexmap::IndexMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::descriptors::ClassDescriptor;

/// The complete metadata model: a name plus one descriptor per class,
/// keyed by fully qualified name in first-insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MetadataModel {
    pub name: String,
    pub classes: IndexMap<String, ClassDescriptor>,
}

impl MetadataModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            classes: IndexMap::new(),
        }
    }

    /// Add a class descriptor unless one with the same qualified name is
    /// already present. Returns false (and drops `class`) in that case.
    pub fn insert(&mut self, class: ClassDescriptor) -> bool {
        if self.classes.contains_key(&class.name) {
            return false;
        }
        self.classes.insert(class.name.clone(), class);
        true
    }

    pub fn get(&self, name: &str) -> Option<&ClassDescriptor> {
        self.classes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassDescriptor> {
        self.classes.values()
    }

    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Classes whose supertype list names `name` directly.
    pub fn subclasses_of<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ClassDescriptor> {
        self.iter()
            .filter(move |class| class.supertypes().any(|supertype| supertype == name))
    }

    /// Classes that realize the interface `name`.
    pub fn implementors_of<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ClassDescriptor> {
        self.iter()
            .filter(move |class| class.interface_names().any(|iface| iface == name))
    }
}
