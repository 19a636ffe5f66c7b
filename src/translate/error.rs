//! Error types for model translation.

use thiserror::Error;

use crate::uml::{ElementId, ElementKind};

/// Fatal conditions that abort a translation.
///
/// There is no partial result: any of these makes the whole call fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// An element of a kind that cannot appear where a namespace member
    /// (or the root namespace) is required.
    #[error("unexpected {found} `{id}` where a package or classifier was expected")]
    UnexpectedElement { id: ElementId, found: ElementKind },

    /// A link points at an element that is not in the model.
    #[error("unresolved reference: {0}")]
    UnresolvedReference(ElementId),

    /// An association end whose association has no other end.
    #[error("association end `{end}` has no opposite end")]
    IncompleteAssociation { end: ElementId },

    /// An attribute without a resolvable, named type.
    #[error("attribute `{attribute}` has no declared type")]
    MissingType { attribute: ElementId },

    /// A `realize` dependency whose supplier is absent or not an interface.
    #[error("invalid realization `{dependency}` from `{client}`: {reason}")]
    InvalidRealization {
        dependency: ElementId,
        client: String,
        reason: String,
    },

    /// The namespace ownership chain loops back on itself.
    #[error("namespace cycle through `{0}`")]
    CyclicNamespace(ElementId),

    /// The generalization chain loops back on itself.
    #[error("generalization cycle through `{0}`")]
    CyclicGeneralization(ElementId),
}

impl TranslateError {
    pub fn invalid_realization(
        dependency: &ElementId,
        client: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidRealization {
            dependency: dependency.clone(),
            client: client.into(),
            reason: reason.into(),
        }
    }
}

/// Result alias for translation steps.
pub type Result<T, E = TranslateError> = std::result::Result<T, E>;
