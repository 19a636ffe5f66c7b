//! Fatal input-shape errors.

use umlmeta::translate::{TranslateError, Translator};
use umlmeta::uml::{Element, ElementId, ElementKind, ElementView, RelationshipData, UmlBuilder, UmlModel};

fn translate(uml: &UmlModel) -> Result<umlmeta::MetadataModel, TranslateError> {
    umlmeta::translate(uml, "test")
}

#[test]
fn test_attribute_owned_by_package_is_rejected() {
    let mut b = UmlBuilder::new("app");
    let root = b.root();
    let stray = b.add_owned(&root, Element::new("stray", ElementKind::Attribute).with_name("x"));

    assert_eq!(
        translate(&b.build()),
        Err(TranslateError::UnexpectedElement {
            id: stray,
            found: ElementKind::Attribute
        })
    );
}

#[test]
fn test_error_discards_partial_model() {
    let mut b = UmlBuilder::new("app");
    let root = b.root();
    b.class(&root, "Fine");
    b.add_owned(&root, Element::new("end", ElementKind::AssociationEnd));

    assert!(matches!(
        translate(&b.build()),
        Err(TranslateError::UnexpectedElement { found: ElementKind::AssociationEnd, .. })
    ));
}

#[test]
fn test_untyped_attribute() {
    let mut b = UmlBuilder::new("app");
    let root = b.root();
    let person = b.class(&root, "Person");
    let untyped = b.add_owned(&person, Element::new("untyped", ElementKind::Attribute).with_name("x"));
    let mut uml = b.build();
    uml.get_mut(&person).unwrap().features.push(untyped.clone());

    assert_eq!(
        translate(&uml),
        Err(TranslateError::MissingType { attribute: untyped })
    );
}

#[test]
fn test_dangling_feature() {
    let mut b = UmlBuilder::new("app");
    let root = b.root();
    let person = b.class(&root, "Person");
    let mut uml = b.build();
    uml.get_mut(&person).unwrap().features.push(ElementId::new("gone"));

    assert_eq!(
        translate(&uml),
        Err(TranslateError::UnresolvedReference(ElementId::new("gone")))
    );
}

#[test]
fn test_association_with_one_end() {
    let mut b = UmlBuilder::new("app");
    let root = b.root();
    let person = b.class(&root, "Person");
    let association = b.add_owned(&root, Element::new("assoc", ElementKind::Association));
    let end = b.add_owned(
        &association,
        Element::new("lonely", ElementKind::AssociationEnd).with_type(&person),
    );
    let mut uml = b.build();
    uml.get_mut(&person).unwrap().association_ends.push(end.clone());

    assert_eq!(translate(&uml), Err(TranslateError::IncompleteAssociation { end }));
}

#[test]
fn test_ownership_cycle() {
    let mut b = UmlBuilder::new("app");
    let root = b.root();
    let outer = b.package(&root, "outer");
    let inner = b.package(&outer, "inner");
    let mut uml = b.build();
    uml.get_mut(&inner).unwrap().owned_elements.push(outer.clone());

    assert_eq!(translate(&uml), Err(TranslateError::CyclicNamespace(outer)));
}

#[test]
fn test_generalization_cycle() {
    let mut b = UmlBuilder::new("app");
    let root = b.root();
    let a = b.class(&root, "A");
    let c = b.class(&root, "B");
    b.generalization(&a, &c);
    b.generalization(&c, &a);

    assert!(matches!(
        translate(&b.build()),
        Err(TranslateError::CyclicGeneralization(_))
    ));
}

#[test]
fn test_non_namespace_root() {
    let uml = UmlModel::new(Element::new("c", ElementKind::Class).with_name("C"));
    let root = ElementView::root(&uml).unwrap();

    assert!(matches!(
        Translator::default().translate_namespace(root, "test"),
        Err(TranslateError::UnexpectedElement { found: ElementKind::Class, .. })
    ));
}

#[test]
fn test_unset_generalization_parent_is_tolerated() {
    let mut b = UmlBuilder::new("app");
    let root = b.root();
    let child = b.class(&root, "Child");
    let orphan = b.add_owned(
        &root,
        Element::new("orphan", ElementKind::Generalization)
            .with_relationship(RelationshipData::new_multi(vec![child.clone()], vec![])),
    );
    let mut uml = b.build();
    uml.get_mut(&child).unwrap().generalizations.push(orphan.clone());

    let translation = Translator::default().translate_with_diagnostics(&uml, "test").unwrap();
    assert_eq!(translation.model.get("app.Child").unwrap().supertype, None);
    assert_eq!(translation.diagnostics.len(), 1);
    assert_eq!(translation.diagnostics[0].element.as_ref(), Some(&orphan));
}

#[test]
fn test_error_messages() {
    let err = TranslateError::MissingType {
        attribute: ElementId::new("attr-1"),
    };
    assert!(err.to_string().contains("attr-1"), "message: {}", err);
}
