//! Borrowed navigation views over [`UmlModel`].
//!
//! Zero-copy views that expose the UML metamodel associations the
//! translator walks: namespace ownership, classifier features and
//! association ends, generalization parents and dependency suppliers.
//!
//! ```ignore
//! use umlmeta::uml::ElementView;
//!
//! let root = ElementView::root(&model).unwrap();
//! for child in root.owned_elements() {
//!     println!("{}: {:?}", child.name().unwrap_or("?"), child.kind());
//! }
//! ```

use super::model::{AssociationEndData, Element, ElementId, ElementKind, UmlModel};

/// A borrowed view over any model element.
///
/// Navigation methods return further views; links that point at IDs
/// missing from the model resolve to `None` (single links) or are
/// skipped (lists).
#[derive(Clone, Copy)]
pub struct ElementView<'m> {
    pub element: &'m Element,
    pub model: &'m UmlModel,
}

impl<'m> ElementView<'m> {
    /// Create a new view over an element.
    pub fn new(element: &'m Element, model: &'m UmlModel) -> Self {
        Self { element, model }
    }

    /// Create a view from an element ID. Returns None if the ID is not in the model.
    pub fn from_id(id: &ElementId, model: &'m UmlModel) -> Option<Self> {
        model.get(id).map(|element| Self { element, model })
    }

    /// View of the model's root namespace.
    pub fn root(model: &'m UmlModel) -> Option<Self> {
        Self::from_id(&model.root, model)
    }

    fn resolve(&self, id: &ElementId) -> Option<ElementView<'m>> {
        Self::from_id(id, self.model)
    }

    fn resolve_all(&self, ids: &'m [ElementId]) -> Vec<ElementView<'m>> {
        ids.iter().filter_map(|id| self.resolve(id)).collect()
    }

    // ── Identity ────────────────────────────────────────────────────

    pub fn id(&self) -> &'m ElementId {
        &self.element.id
    }

    /// The declared name (may be None for anonymous elements).
    pub fn name(&self) -> Option<&'m str> {
        self.element.name.as_deref()
    }

    pub fn kind(&self) -> ElementKind {
        self.element.kind
    }

    pub fn is_interface(&self) -> bool {
        self.element.kind == ElementKind::Interface
    }

    pub fn stereotype(&self) -> Option<&'m str> {
        self.element.stereotype.as_deref()
    }

    // ── Ownership ───────────────────────────────────────────────────

    /// The owning element (None for the root).
    pub fn owner(&self) -> Option<ElementView<'m>> {
        self.element.owner.as_ref().and_then(|id| self.resolve(id))
    }

    /// The owner, if it is a namespace.
    pub fn namespace(&self) -> Option<ElementView<'m>> {
        self.owner().filter(|owner| owner.kind().is_namespace())
    }

    /// IDs of directly owned elements, in declaration order.
    pub fn owned_ids(&self) -> &'m [ElementId] {
        &self.element.owned_elements
    }

    /// Directly owned elements that resolve in the model.
    pub fn owned_elements(&self) -> Vec<ElementView<'m>> {
        self.resolve_all(&self.element.owned_elements)
    }

    // ── Tagged values ───────────────────────────────────────────────

    /// Values of every tagged value carrying the given tag.
    pub fn tag_values(&self, tag: &str) -> Vec<&'m str> {
        self.element
            .tagged_values
            .iter()
            .filter(|tv| &*tv.tag == tag)
            .map(|tv| &*tv.value)
            .collect()
    }

    // ── Classifier ──────────────────────────────────────────────────

    /// IDs of owned attributes, in declaration order.
    pub fn feature_ids(&self) -> &'m [ElementId] {
        &self.element.features
    }

    /// IDs of association ends attached to this classifier.
    pub fn association_end_ids(&self) -> &'m [ElementId] {
        &self.element.association_ends
    }

    /// Generalizations in which this classifier is the child.
    pub fn generalizations(&self) -> Vec<ElementView<'m>> {
        self.resolve_all(&self.element.generalizations)
    }

    /// Dependencies in which this classifier is a client.
    pub fn client_dependencies(&self) -> Vec<ElementView<'m>> {
        self.resolve_all(&self.element.client_dependencies)
    }

    // ── Typed elements ──────────────────────────────────────────────

    /// Attribute type or association-end participant.
    pub fn type_ref(&self) -> Option<&'m ElementId> {
        self.element.type_ref.as_ref()
    }

    /// The resolved attribute type or association-end participant.
    pub fn typed_by(&self) -> Option<ElementView<'m>> {
        self.type_ref().and_then(|id| self.resolve(id))
    }

    // ── Association ends ────────────────────────────────────────────

    /// Association-end data (None for anything but an association end).
    pub fn end(&self) -> Option<&'m AssociationEndData> {
        self.element.end.as_ref()
    }

    pub fn is_navigable(&self) -> bool {
        self.end().is_some_and(|end| end.is_navigable)
    }

    /// The other end of this end's binary association.
    ///
    /// Only association ends owned by the association are considered, so
    /// comments or other members listed before the far end are passed
    /// over. Ends are compared by ID, so a self-association still finds
    /// the end on the far side.
    pub fn opposite(&self) -> Option<ElementView<'m>> {
        let association = self.owner()?;
        association
            .owned_elements()
            .into_iter()
            .filter(|member| member.kind() == ElementKind::AssociationEnd)
            .find(|end| end.id() != self.id())
    }

    // ── Relationships ───────────────────────────────────────────────

    /// Generalization parent.
    pub fn parent(&self) -> Option<ElementView<'m>> {
        self.element
            .relationship
            .as_ref()?
            .target()
            .and_then(|id| self.resolve(id))
    }

    /// Declared supplier IDs of a dependency.
    pub fn supplier_ids(&self) -> &'m [ElementId] {
        self.element
            .relationship
            .as_ref()
            .map(|rel| rel.target.as_slice())
            .unwrap_or_default()
    }
}

impl<'m> std::fmt::Debug for ElementView<'m> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementView")
            .field("id", &self.element.id.as_str())
            .field("name", &self.name())
            .field("kind", &self.kind())
            .finish()
    }
}
