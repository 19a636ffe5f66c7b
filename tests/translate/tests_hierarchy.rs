//! Supertypes and realized interfaces.

use rstest::rstest;
use umlmeta::translate::{TranslateError, codes};
use umlmeta::uml::{ElementKind, UmlBuilder};

use crate::helpers::metadata_assertions::{class, codes as diagnostic_codes};
use crate::helpers::model_fixtures::{translate_default, translation};

#[test]
fn test_realize_dependency_names_interface() {
    let mut b = UmlBuilder::new("app");
    let root = b.root();
    let api = b.package(&root, "api");
    let named = b.interface(&api, "Named");
    let person = b.class(&root, "Person");
    b.realization(&person, &named);

    let meta = translate_default(&b.build());
    assert_eq!(class(&meta, "app.Person").interfaces.as_deref(), Some("app.api.Named"));
    assert_eq!(
        meta.implementors_of("app.api.Named").map(|c| c.name.as_str()).collect::<Vec<_>>(),
        vec!["app.Person"]
    );
}

#[test]
fn test_several_realizations_are_joined() {
    let mut b = UmlBuilder::new("app");
    let root = b.root();
    let first = b.interface(&root, "First");
    let second = b.interface(&root, "Second");
    let class_id = b.class(&root, "Both");
    b.realization(&class_id, &first);
    b.realization(&class_id, &second);

    let meta = translate_default(&b.build());
    let both = class(&meta, "app.Both");
    assert_eq!(both.interfaces.as_deref(), Some("app.First app.Second"));
    assert_eq!(both.interface_names().collect::<Vec<_>>(), vec!["app.First", "app.Second"]);
}

#[rstest]
#[case(ElementKind::Abstraction, Some("implements"))]
#[case(ElementKind::Abstraction, None)]
#[case(ElementKind::Abstraction, Some(" realize "))]
#[case(ElementKind::Dependency, Some("realize"))]
fn test_non_realizations_are_skipped(#[case] kind: ElementKind, #[case] stereotype: Option<&str>) {
    let mut b = UmlBuilder::new("app");
    let root = b.root();
    let api = b.interface(&root, "Api");
    let class_id = b.class(&root, "Impl");
    b.dependency(&class_id, kind, stereotype, &[api]);

    let translation = translation(&b.build());
    assert_eq!(class(&translation.model, "app.Impl").interfaces, None);
    assert_eq!(diagnostic_codes(&translation.diagnostics), vec![codes::SKIPPED_DEPENDENCY]);
}

#[test]
fn test_plain_dependency_is_silent() {
    let mut b = UmlBuilder::new("app");
    let root = b.root();
    let other = b.class(&root, "Other");
    let class_id = b.class(&root, "Impl");
    b.dependency(&class_id, ElementKind::Dependency, None, &[other]);

    let translation = translation(&b.build());
    assert_eq!(class(&translation.model, "app.Impl").interfaces, None);
    assert!(translation.diagnostics.is_empty());
}

#[test]
fn test_realizing_a_class_fails_the_translation() {
    let mut b = UmlBuilder::new("app");
    let root = b.root();
    let concrete = b.class(&root, "Concrete");
    let class_id = b.class(&root, "Impl");
    let dependency = b.realization(&class_id, &concrete);

    let result = umlmeta::translate(&b.build(), "test");
    match result {
        Err(TranslateError::InvalidRealization {
            dependency: id,
            client,
            reason,
        }) => {
            assert_eq!(id, dependency);
            assert_eq!(client, "Impl");
            assert!(reason.contains("Concrete"), "reason: {}", reason);
        }
        other => panic!("expected an invalid realization, got {:?}", other),
    }
}

#[test]
fn test_interfaces_do_not_consult_realizations() {
    let mut b = UmlBuilder::new("app");
    let root = b.root();
    let concrete = b.class(&root, "Concrete");
    let api = b.interface(&root, "Api");
    b.realization(&api, &concrete);

    let meta = translate_default(&b.build());
    assert_eq!(class(&meta, "app.Api").interfaces, None);
}

#[test]
fn test_supertypes_and_subclass_query() {
    let mut b = UmlBuilder::new("zoo");
    let root = b.root();
    let animal = b.class(&root, "Animal");
    let cat = b.class(&root, "Cat");
    let dog = b.class(&root, "Dog");
    b.generalization(&cat, &animal);
    b.generalization(&dog, &animal);

    let meta = translate_default(&b.build());
    assert_eq!(class(&meta, "zoo.Cat").supertype.as_deref(), Some("zoo.Animal"));
    assert_eq!(class(&meta, "zoo.Animal").supertype, None);
    assert_eq!(
        meta.subclasses_of("zoo.Animal").map(|c| c.name.as_str()).collect::<Vec<_>>(),
        vec!["zoo.Cat", "zoo.Dog"]
    );
}

#[test]
fn test_non_business_supertype_is_still_named() {
    let mut b = UmlBuilder::new("");
    let root = b.root();
    let java = b.package(&root, "java");
    let util = b.package(&java, "util");
    let base = b.class(&util, "AbstractList");
    let app = b.package(&root, "app");
    let list = b.class(&app, "MyList");
    b.generalization(&list, &base);

    let meta = translate_default(&b.build());
    assert_eq!(
        class(&meta, "app.MyList").supertype.as_deref(),
        Some("java.util.AbstractList")
    );
}
