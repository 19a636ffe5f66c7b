//! Field and class descriptors of the persistence metadata model.

use indexmap::IndexMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A scalar field.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AttributeDescriptor {
    pub name: String,
    pub primary_key: bool,
    /// Built-in types are fully qualified; other type names are kept as declared.
    pub type_name: String,
}

impl AttributeDescriptor {
    pub fn new(name: impl Into<String>, primary_key: bool, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            primary_key,
            type_name: type_name.into(),
        }
    }
}

/// A single-valued relationship to another class.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReferenceDescriptor {
    pub name: String,
    pub primary_key: bool,
    /// Fully qualified name of the referenced class.
    pub referenced_type: String,
    /// Name of the field on the referenced class pointing back here.
    pub reverse_reference: Option<String>,
}

impl ReferenceDescriptor {
    pub fn new(
        name: impl Into<String>,
        primary_key: bool,
        referenced_type: impl Into<String>,
        reverse_reference: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            primary_key,
            referenced_type: referenced_type.into(),
            reverse_reference,
        }
    }
}

/// A multi-valued relationship to another class.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CollectionDescriptor {
    pub name: String,
    pub primary_key: bool,
    pub referenced_type: String,
    pub reverse_reference: Option<String>,
    pub ordered: bool,
}

impl CollectionDescriptor {
    /// Promote a reference to a collection.
    pub fn from_reference(reference: ReferenceDescriptor, ordered: bool) -> Self {
        Self {
            name: reference.name,
            primary_key: reference.primary_key,
            referenced_type: reference.referenced_type,
            reverse_reference: reference.reverse_reference,
            ordered,
        }
    }
}

/// A relationship field produced from one association end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RelationField {
    Reference(ReferenceDescriptor),
    Collection(CollectionDescriptor),
}

impl RelationField {
    pub fn name(&self) -> &str {
        match self {
            Self::Reference(r) => &r.name,
            Self::Collection(c) => &c.name,
        }
    }
}

/// One persistent class or interface.
///
/// Field maps are keyed by field name and iterate in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClassDescriptor {
    /// Fully qualified, dotted name.
    pub name: String,
    /// Space-separated fully qualified supertype names.
    pub supertype: Option<String>,
    /// Space-separated fully qualified names of realized interfaces.
    pub interfaces: Option<String>,
    pub is_interface: bool,
    pub attributes: IndexMap<String, AttributeDescriptor>,
    pub references: IndexMap<String, ReferenceDescriptor>,
    pub collections: IndexMap<String, CollectionDescriptor>,
}

impl ClassDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// The name without its package path.
    pub fn unqualified_name(&self) -> &str {
        self.name.rsplit_once('.').map_or(self.name.as_str(), |(_, name)| name)
    }

    /// The package path, empty for a class in no package.
    pub fn package_name(&self) -> &str {
        self.name.rsplit_once('.').map_or("", |(package, _)| package)
    }

    /// Supertype names, split.
    pub fn supertypes(&self) -> impl Iterator<Item = &str> {
        self.supertype.iter().flat_map(|s| s.split_whitespace())
    }

    /// Realized interface names, split.
    pub fn interface_names(&self) -> impl Iterator<Item = &str> {
        self.interfaces.iter().flat_map(|s| s.split_whitespace())
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeDescriptor> {
        self.attributes.get(name)
    }

    pub fn reference(&self, name: &str) -> Option<&ReferenceDescriptor> {
        self.references.get(name)
    }

    pub fn collection(&self, name: &str) -> Option<&CollectionDescriptor> {
        self.collections.get(name)
    }

    /// Names of all fields flagged as primary key, attributes first.
    pub fn primary_key_fields(&self) -> Vec<&str> {
        let attributes = self
            .attributes
            .values()
            .filter(|a| a.primary_key)
            .map(|a| a.name.as_str());
        let references = self
            .references
            .values()
            .filter(|r| r.primary_key)
            .map(|r| r.name.as_str());
        let collections = self
            .collections
            .values()
            .filter(|c| c.primary_key)
            .map(|c| c.name.as_str());
        attributes.chain(references).chain(collections).collect()
    }

    /// Insert an attribute unless one with that name exists.
    /// Returns false when the name was taken.
    pub fn add_attribute(&mut self, attribute: AttributeDescriptor) -> bool {
        insert_first(&mut self.attributes, attribute.name.clone(), attribute)
    }

    /// Insert a relationship field into the reference or collection map
    /// unless that map already holds the name.
    pub fn add_relation(&mut self, field: RelationField) -> bool {
        match field {
            RelationField::Reference(r) => insert_first(&mut self.references, r.name.clone(), r),
            RelationField::Collection(c) => insert_first(&mut self.collections, c.name.clone(), c),
        }
    }
}

fn insert_first<V>(map: &mut IndexMap<String, V>, key: String, value: V) -> bool {
    if map.contains_key(&key) {
        return false;
    }
    map.insert(key, value);
    true
}
