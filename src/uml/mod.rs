//! In-memory UML model graph.
//!
//! The translator consumes a [`UmlModel`]: a read-only, ID-linked graph
//! rooted at one namespace. A model reader (XMI or otherwise) produces it,
//! typically through [`UmlBuilder`], and the translator navigates it
//! through [`ElementView`].

mod builder;
pub mod model;
mod views;

pub use builder::{EndSpec, UmlBuilder};
pub use model::{
    AssociationEndData, Element, ElementId, ElementKind, Multiplicity, ParseMultiplicityError,
    RelationshipData, TaggedValue, UmlModel,
};
pub use views::ElementView;
