//! Persistence metadata model.
//!
//! The translator's output: a flat, denormalized description of persistent
//! classes, their fields, references and collections, consumed downstream
//! by schema and code generators.
//!
//! ```text
//! MetadataModel
//! └── classes: IndexMap<qualified name, ClassDescriptor>
//!     ├── attributes:  IndexMap<name, AttributeDescriptor>
//!     ├── references:  IndexMap<name, ReferenceDescriptor>
//!     └── collections: IndexMap<name, CollectionDescriptor>
//! ```

mod descriptors;
mod model;

pub use descriptors::{
    AttributeDescriptor, ClassDescriptor, CollectionDescriptor, ReferenceDescriptor, RelationField,
};
pub use model::MetadataModel;
