//! # umlmeta-base
//!
//! Translates UML class models into persistence metadata.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! translate → Walker, classifier translation, key/hierarchy resolution
//!   ↓
//! metadata  → MetadataModel, ClassDescriptor and field descriptors
//! uml       → UmlModel graph, ElementView navigation, UmlBuilder
//! ```
//!
//! ## Usage
//!
//! ```
//! use umlmeta::uml::{EndSpec, Multiplicity, UmlBuilder};
//!
//! let mut b = UmlBuilder::new("app");
//! let root = b.root();
//! let model = b.package(&root, "model");
//! let dept = b.class(&model, "Dept");
//! let person = b.class(&model, "Person");
//! b.association(
//!     &model,
//!     EndSpec::to(&person).named("members").multiplicity(Multiplicity::MANY),
//!     EndSpec::to(&dept).named("dept"),
//! );
//!
//! let meta = umlmeta::translate(&b.build(), "app").unwrap();
//! let person = meta.get("app.model.Person").unwrap();
//! assert_eq!(person.reference("dept").unwrap().referenced_type, "app.model.Dept");
//! ```

// ============================================================================
// MODULES (dependency order: uml → metadata → translate)
// ============================================================================

/// Input graph: elements, ids, multiplicities, views and builder
pub mod uml;

/// Output descriptors
pub mod metadata;

/// The translation pipeline
pub mod translate;

// Re-export the entry points
pub use metadata::{ClassDescriptor, MetadataModel};
pub use translate::{
    Diagnostic, TranslateError, TranslateOptions, Translation, Translator, translate,
};
pub use uml::{ElementId, UmlModel};
