//! Standalone UML model graph.
//!
//! This is the read-only input of the translator: a graph of namespaces,
//! classifiers, features, associations and relationships as produced by a
//! UML model reader. Elements are stored by ID and reference each other by
//! ID, mirroring the way XMI documents link elements with `xmi.idref`.
//!
//! ```text
//! UmlModel
//! ├── elements: IndexMap<ElementId, Element>  (preserves declaration order)
//! └── root: ElementId                         (top namespace)
//! ```

use indexmap::IndexMap;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// IDs
// ============================================================================

/// Unique identifier for a model element.
///
/// This corresponds to `xmi.id` in XMI documents.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ElementId(pub Arc<str>);

impl ElementId {
    /// Create a new element ID.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Generate a new UUID-based ID.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string().into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ElementId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&ElementId> for ElementId {
    fn from(id: &ElementId) -> Self {
        id.clone()
    }
}

// ============================================================================
// ELEMENT KINDS
// ============================================================================

/// The UML metaclass of a model element.
///
/// Only the constructs the translator interprets get their own kind;
/// everything else a reader encounters is `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ElementKind {
    // Namespaces
    Model,
    Package,

    // Classifiers
    Class,
    Interface,
    DataType,

    // Features
    Attribute,
    AssociationEnd,

    // Relationships
    Association,
    Generalization,
    Abstraction,
    Dependency,

    Other,
}

impl ElementKind {
    /// Returns true for elements that own other packageable elements.
    pub fn is_namespace(&self) -> bool {
        matches!(self, Self::Model | Self::Package)
    }

    /// Returns true for classes and interfaces, the kinds that produce
    /// class descriptors.
    pub fn is_class_or_interface(&self) -> bool {
        matches!(self, Self::Class | Self::Interface)
    }

    /// Returns true if a namespace may own an element of this kind.
    ///
    /// Features are owned by their classifier and association ends by
    /// their association, never directly by a package. Unrecognised kinds
    /// (comments, stereotype definitions) are allowed anywhere.
    pub fn is_packageable(&self) -> bool {
        !matches!(self, Self::Attribute | Self::AssociationEnd)
    }

    /// Get the XMI type name for this kind.
    pub fn xmi_type(&self) -> &'static str {
        match self {
            Self::Model => "UML:Model",
            Self::Package => "UML:Package",
            Self::Class => "UML:Class",
            Self::Interface => "UML:Interface",
            Self::DataType => "UML:DataType",
            Self::Attribute => "UML:Attribute",
            Self::AssociationEnd => "UML:AssociationEnd",
            Self::Association => "UML:Association",
            Self::Generalization => "UML:Generalization",
            Self::Abstraction => "UML:Abstraction",
            Self::Dependency => "UML:Dependency",
            Self::Other => "UML:ModelElement",
        }
    }

    /// Parse from XMI type name.
    pub fn from_xmi_type(xmi_type: &str) -> Self {
        // Strip namespace prefix if present
        let type_name = xmi_type.rsplit(':').next().unwrap_or(xmi_type);

        match type_name {
            "Model" => Self::Model,
            "Package" => Self::Package,
            "Class" => Self::Class,
            "Interface" => Self::Interface,
            "DataType" => Self::DataType,
            "Attribute" => Self::Attribute,
            "AssociationEnd" => Self::AssociationEnd,
            "Association" => Self::Association,
            "Generalization" => Self::Generalization,
            "Abstraction" => Self::Abstraction,
            "Dependency" => Self::Dependency,
            _ => Self::Other,
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.xmi_type())
    }
}

// ============================================================================
// VALUE TYPES
// ============================================================================

/// A free-form `(tag, value)` annotation on a model element.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TaggedValue {
    pub tag: Arc<str>,
    pub value: Arc<str>,
}

impl TaggedValue {
    pub fn new(tag: impl Into<Arc<str>>, value: impl Into<Arc<str>>) -> Self {
        Self {
            tag: tag.into(),
            value: value.into(),
        }
    }
}

/// Cardinality range of an association end.
///
/// `upper == None` stands for the unbounded `*`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Multiplicity {
    pub lower: u32,
    pub upper: Option<u32>,
}

impl Multiplicity {
    /// `1`
    pub const EXACTLY_ONE: Self = Self {
        lower: 1,
        upper: Some(1),
    };
    /// `0..1`
    pub const ZERO_OR_ONE: Self = Self {
        lower: 0,
        upper: Some(1),
    };
    /// `*`
    pub const MANY: Self = Self {
        lower: 0,
        upper: None,
    };
    /// `1..*`
    pub const ONE_OR_MORE: Self = Self {
        lower: 1,
        upper: None,
    };

    pub fn new(lower: u32, upper: Option<u32>) -> Self {
        Self { lower, upper }
    }

    /// True for every range except `1` and `0..1`.
    ///
    /// Degenerate ranges such as `0` (`0..0`) count as multi-valued.
    pub fn is_multi_valued(&self) -> bool {
        *self != Self::EXACTLY_ONE && *self != Self::ZERO_OR_ONE
    }
}

impl Default for Multiplicity {
    fn default() -> Self {
        Self::EXACTLY_ONE
    }
}

impl std::fmt::Display for Multiplicity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.lower, self.upper) {
            (0, None) => write!(f, "*"),
            (lower, None) => write!(f, "{}..*", lower),
            (lower, Some(upper)) if lower == upper => write!(f, "{}", lower),
            (lower, Some(upper)) => write!(f, "{}..{}", lower, upper),
        }
    }
}

/// Error parsing UML range text such as `0..1` or `1..*`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid multiplicity `{text}`: {reason}")]
pub struct ParseMultiplicityError {
    pub text: String,
    pub reason: &'static str,
}

impl FromStr for Multiplicity {
    type Err = ParseMultiplicityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let err = |reason| ParseMultiplicityError {
            text: s.to_string(),
            reason,
        };
        let bound = |part: &str| -> Result<Option<u32>, ParseMultiplicityError> {
            match part.trim() {
                "*" | "n" => Ok(None),
                digits => digits
                    .parse::<u32>()
                    .map(Some)
                    .map_err(|_| err("bound is not a number or `*`")),
            }
        };

        if text.is_empty() {
            return Err(err("empty range"));
        }

        let (lower, upper) = match text.split_once("..") {
            Some((lower, upper)) => {
                let lower = bound(lower)?.ok_or_else(|| err("lower bound cannot be `*`"))?;
                (lower, bound(upper)?)
            }
            None => match bound(text)? {
                None => (0, None),
                Some(n) => (n, Some(n)),
            },
        };

        if upper.is_some_and(|upper| upper < lower) {
            return Err(err("upper bound is below lower bound"));
        }
        Ok(Self { lower, upper })
    }
}

/// Data carried by an association end.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AssociationEndData {
    pub is_navigable: bool,
    pub multiplicity: Multiplicity,
    /// The declared ordering literal (`ordered`, `unordered`, `sorted`...).
    pub ordering: Option<Arc<str>>,
}

impl AssociationEndData {
    /// True iff an ordering is declared and it is not `unordered`.
    pub fn is_ordered(&self) -> bool {
        self.ordering
            .as_deref()
            .is_some_and(|ordering| ordering != "unordered")
    }
}

/// Source/target data of a relationship element.
///
/// For a generalization the source is the child and the target the parent.
/// For a dependency the sources are the clients and the targets the suppliers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RelationshipData {
    pub source: Vec<ElementId>,
    pub target: Vec<ElementId>,
}

impl RelationshipData {
    pub fn new(source: impl Into<ElementId>, target: impl Into<ElementId>) -> Self {
        Self {
            source: vec![source.into()],
            target: vec![target.into()],
        }
    }

    pub fn new_multi(sources: Vec<ElementId>, targets: Vec<ElementId>) -> Self {
        Self {
            source: sources,
            target: targets,
        }
    }

    /// Get the first source element ID, if any.
    pub fn source(&self) -> Option<&ElementId> {
        self.source.first()
    }

    /// Get the first target element ID, if any.
    pub fn target(&self) -> Option<&ElementId> {
        self.target.first()
    }
}

// ============================================================================
// ELEMENT
// ============================================================================

/// A UML model element with its properties and links.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Element {
    /// Unique identifier.
    pub id: ElementId,
    /// The metaclass.
    pub kind: ElementKind,
    /// The declared name (may be None for anonymous elements).
    pub name: Option<Arc<str>>,
    /// The owning element: namespace, classifier or association.
    pub owner: Option<ElementId>,
    /// Directly owned elements, in declaration order.
    pub owned_elements: Vec<ElementId>,
    /// Stereotype name, if any.
    pub stereotype: Option<Arc<str>>,
    pub tagged_values: Vec<TaggedValue>,
    /// Classifier: owned attributes.
    pub features: Vec<ElementId>,
    /// Classifier: association ends whose participant is this classifier.
    pub association_ends: Vec<ElementId>,
    /// Classifier: generalizations in which this classifier is the child.
    pub generalizations: Vec<ElementId>,
    /// Classifier: dependencies in which this classifier is a client.
    pub client_dependencies: Vec<ElementId>,
    /// Attribute type or association-end participant.
    pub type_ref: Option<ElementId>,
    /// Present on association ends.
    pub end: Option<AssociationEndData>,
    /// Present on generalizations and dependencies.
    pub relationship: Option<RelationshipData>,
}

impl Element {
    /// Create a new element with the given ID and kind.
    pub fn new(id: impl Into<ElementId>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            kind,
            name: None,
            owner: None,
            owned_elements: Vec::new(),
            stereotype: None,
            tagged_values: Vec::new(),
            features: Vec::new(),
            association_ends: Vec::new(),
            generalizations: Vec::new(),
            client_dependencies: Vec::new(),
            type_ref: None,
            end: None,
            relationship: None,
        }
    }

    /// Set the name.
    pub fn with_name(mut self, name: impl Into<Arc<str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the owner.
    pub fn with_owner(mut self, owner: impl Into<ElementId>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Set the stereotype.
    pub fn with_stereotype(mut self, stereotype: impl Into<Arc<str>>) -> Self {
        self.stereotype = Some(stereotype.into());
        self
    }

    /// Attach a tagged value.
    pub fn with_tagged_value(mut self, tag: impl Into<Arc<str>>, value: impl Into<Arc<str>>) -> Self {
        self.tagged_values.push(TaggedValue::new(tag, value));
        self
    }

    /// Set the attribute type or association-end participant.
    pub fn with_type(mut self, type_ref: impl Into<ElementId>) -> Self {
        self.type_ref = Some(type_ref.into());
        self
    }

    /// Set association-end data.
    pub fn with_end(mut self, end: AssociationEndData) -> Self {
        self.end = Some(end);
        self
    }

    /// Set relationship data.
    pub fn with_relationship(mut self, relationship: RelationshipData) -> Self {
        self.relationship = Some(relationship);
        self
    }
}

// ============================================================================
// MODEL
// ============================================================================

/// A complete UML model graph rooted at one namespace.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UmlModel {
    /// All elements by ID (IndexMap preserves insertion order).
    pub elements: IndexMap<ElementId, Element>,
    /// The top namespace.
    pub root: ElementId,
}

impl UmlModel {
    /// Create a model containing only its root namespace.
    pub fn new(root: Element) -> Self {
        let id = root.id.clone();
        let mut elements = IndexMap::new();
        elements.insert(id.clone(), root);
        Self { elements, root: id }
    }

    /// Add an element to the model, replacing any element with the same ID.
    pub fn add_element(&mut self, element: Element) -> ElementId {
        let id = element.id.clone();
        self.elements.insert(id.clone(), element);
        id
    }

    /// Get an element by ID.
    pub fn get(&self, id: &ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Get a mutable element by ID.
    pub fn get_mut(&mut self, id: &ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    /// The root namespace element, if present.
    pub fn root_element(&self) -> Option<&Element> {
        self.get(&self.root)
    }

    /// Iterate over all elements.
    pub fn iter_elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }

    /// Get the number of elements.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }
}
