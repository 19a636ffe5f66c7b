//! Programmatic construction of [`UmlModel`] graphs.
//!
//! A model reader (or a test) describes the model one element at a time;
//! the builder wires both directions of every link so the graph satisfies
//! the navigation contract of [`ElementView`](super::ElementView):
//! owners list their owned elements, classifiers list their features,
//! association ends, generalizations and client dependencies.

use std::sync::Arc;

use super::model::{
    AssociationEndData, Element, ElementId, ElementKind, Multiplicity, RelationshipData,
    TaggedValue, UmlModel,
};

/// Description of one end of a binary association.
#[derive(Clone, Debug)]
pub struct EndSpec {
    participant: ElementId,
    name: Option<Arc<str>>,
    data: AssociationEndData,
}

impl EndSpec {
    /// An unnamed, navigable, exactly-one end attached to `participant`.
    pub fn to(participant: &ElementId) -> Self {
        Self {
            participant: participant.clone(),
            name: None,
            data: AssociationEndData {
                is_navigable: true,
                multiplicity: Multiplicity::EXACTLY_ONE,
                ordering: None,
            },
        }
    }

    pub fn named(mut self, name: impl Into<Arc<str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn navigable(mut self, navigable: bool) -> Self {
        self.data.is_navigable = navigable;
        self
    }

    pub fn multiplicity(mut self, multiplicity: Multiplicity) -> Self {
        self.data.multiplicity = multiplicity;
        self
    }

    pub fn ordering(mut self, ordering: impl Into<Arc<str>>) -> Self {
        self.data.ordering = Some(ordering.into());
        self
    }
}

/// Incremental builder for a [`UmlModel`].
pub struct UmlBuilder {
    model: UmlModel,
}

impl UmlBuilder {
    /// Start a model whose root namespace has the given name.
    pub fn new(root_name: &str) -> Self {
        let root = Element::new(ElementId::generate(), ElementKind::Model).with_name(root_name);
        Self {
            model: UmlModel::new(root),
        }
    }

    /// ID of the root namespace.
    pub fn root(&self) -> ElementId {
        self.model.root.clone()
    }

    /// The model built so far.
    pub fn model(&self) -> &UmlModel {
        &self.model
    }

    /// Insert an element under `owner`, linking it into the owner's
    /// `owned_elements`.
    pub fn add_owned(&mut self, owner: &ElementId, element: Element) -> ElementId {
        let id = self.model.add_element(element.with_owner(owner));
        if let Some(owner) = self.model.get_mut(owner) {
            owner.owned_elements.push(id.clone());
        }
        id
    }

    fn named(&mut self, owner: &ElementId, kind: ElementKind, name: &str) -> ElementId {
        self.add_owned(owner, Element::new(ElementId::generate(), kind).with_name(name))
    }

    pub fn package(&mut self, parent: &ElementId, name: &str) -> ElementId {
        self.named(parent, ElementKind::Package, name)
    }

    pub fn class(&mut self, namespace: &ElementId, name: &str) -> ElementId {
        self.named(namespace, ElementKind::Class, name)
    }

    pub fn interface(&mut self, namespace: &ElementId, name: &str) -> ElementId {
        self.named(namespace, ElementKind::Interface, name)
    }

    pub fn data_type(&mut self, namespace: &ElementId, name: &str) -> ElementId {
        self.named(namespace, ElementKind::DataType, name)
    }

    /// Add an attribute of type `type_ref` to a classifier.
    pub fn attribute(&mut self, classifier: &ElementId, name: &str, type_ref: &ElementId) -> ElementId {
        let element = Element::new(ElementId::generate(), ElementKind::Attribute)
            .with_name(name)
            .with_type(type_ref);
        let id = self.add_owned(classifier, element);
        if let Some(owner) = self.model.get_mut(classifier) {
            owner.features.push(id.clone());
        }
        id
    }

    /// Attach a tagged value to any element.
    pub fn tag(&mut self, element: &ElementId, tag: &str, value: &str) {
        if let Some(element) = self.model.get_mut(element) {
            element.tagged_values.push(TaggedValue::new(tag, value));
        }
    }

    fn relationship_owner(&self, source: &ElementId) -> ElementId {
        self.model
            .get(source)
            .and_then(|e| e.owner.clone())
            .unwrap_or_else(|| self.root())
    }

    /// Make `parent` a generalization parent of `child`.
    pub fn generalization(&mut self, child: &ElementId, parent: &ElementId) -> ElementId {
        let owner = self.relationship_owner(child);
        let element = Element::new(ElementId::generate(), ElementKind::Generalization)
            .with_relationship(RelationshipData::new(child, parent));
        let id = self.add_owned(&owner, element);
        if let Some(child) = self.model.get_mut(child) {
            child.generalizations.push(id.clone());
        }
        id
    }

    /// Add a dependency from `client` to `suppliers`.
    pub fn dependency(
        &mut self,
        client: &ElementId,
        kind: ElementKind,
        stereotype: Option<&str>,
        suppliers: &[ElementId],
    ) -> ElementId {
        let owner = self.relationship_owner(client);
        let mut element = Element::new(ElementId::generate(), kind).with_relationship(
            RelationshipData::new_multi(vec![client.clone()], suppliers.to_vec()),
        );
        if let Some(stereotype) = stereotype {
            element = element.with_stereotype(stereotype);
        }
        let id = self.add_owned(&owner, element);
        if let Some(client) = self.model.get_mut(client) {
            client.client_dependencies.push(id.clone());
        }
        id
    }

    /// `client` realizes the `supplier` interface.
    pub fn realization(&mut self, client: &ElementId, supplier: &ElementId) -> ElementId {
        self.dependency(
            client,
            ElementKind::Abstraction,
            Some("realize"),
            std::slice::from_ref(supplier),
        )
    }

    /// Add a binary association owned by `namespace`.
    ///
    /// Returns the association and its two ends, in argument order.
    pub fn association(
        &mut self,
        namespace: &ElementId,
        first: EndSpec,
        second: EndSpec,
    ) -> (ElementId, ElementId, ElementId) {
        let association = self.add_owned(
            namespace,
            Element::new(ElementId::generate(), ElementKind::Association),
        );
        let first = self.association_end(&association, first);
        let second = self.association_end(&association, second);
        (association, first, second)
    }

    fn association_end(&mut self, association: &ElementId, spec: EndSpec) -> ElementId {
        let mut element = Element::new(ElementId::generate(), ElementKind::AssociationEnd)
            .with_type(&spec.participant)
            .with_end(spec.data);
        element.name = spec.name;
        let id = self.add_owned(association, element);
        if let Some(participant) = self.model.get_mut(&spec.participant) {
            participant.association_ends.push(id.clone());
        }
        id
    }

    pub fn build(self) -> UmlModel {
        self.model
    }
}
