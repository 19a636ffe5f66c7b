//! Which classifiers produce descriptors, and under which names.

use rstest::rstest;
use umlmeta::translate::codes;
use umlmeta::uml::{Element, ElementKind, UmlBuilder};

use crate::helpers::metadata_assertions::{assert_class_names, class, codes as diagnostic_codes};
use crate::helpers::model_fixtures::{translate_default, translation};

#[rstest]
#[case("int")]
#[case("void")]
#[case("boolean")]
#[case("double")]
#[case("")]
fn test_primitive_and_unnamed_classifiers_are_skipped(#[case] name: &str) {
    let mut b = UmlBuilder::new("app");
    let root = b.root();
    b.class(&root, name);
    b.class(&root, "Kept");

    assert_class_names(&translate_default(&b.build()), &["app.Kept"]);
}

#[test]
fn test_classifier_without_name_is_skipped() {
    let mut b = UmlBuilder::new("app");
    let root = b.root();
    b.add_owned(&root, Element::new("anonymous", ElementKind::Class));

    assert!(translate_default(&b.build()).is_empty());
}

#[test]
fn test_business_object_is_qualified() {
    let mut b = UmlBuilder::new("");
    let root = b.root();
    let biz = b.package(&root, "biz");
    let model = b.package(&biz, "model");
    b.class(&model, "Employee");

    let meta = translate_default(&b.build());
    assert_class_names(&meta, &["biz.model.Employee"]);
    assert_eq!(class(&meta, "biz.model.Employee").package_name(), "biz.model");
}

#[rstest]
#[case(&["java", "lang"], false)]
#[case(&["java", "util"], false)]
#[case(&["vendor", "java", "util"], false)]
#[case(&["java"], true)]
#[case(&["java", "lang", "ref"], true)]
#[case(&["myjava", "lang"], true)]
fn test_reserved_namespaces(#[case] packages: &[&str], #[case] kept: bool) {
    let mut b = UmlBuilder::new("");
    let mut namespace = b.root();
    for package in packages {
        namespace = b.package(&namespace, package);
    }
    b.class(&namespace, "Thing");

    let meta = translate_default(&b.build());
    assert_eq!(meta.len(), usize::from(kept), "packages: {:?}", packages);
}

#[test]
fn test_interfaces_are_translated() {
    let mut b = UmlBuilder::new("app");
    let root = b.root();
    b.interface(&root, "Named");

    let meta = translate_default(&b.build());
    assert!(class(&meta, "app.Named").is_interface);
}

#[test]
fn test_data_types_and_other_elements_are_ignored() {
    let mut b = UmlBuilder::new("app");
    let root = b.root();
    b.data_type(&root, "Money");
    b.add_owned(&root, Element::new("note", ElementKind::Other).with_name("Note"));
    b.class(&root, "Account");

    assert_class_names(&translate_default(&b.build()), &["app.Account"]);
}

#[test]
fn test_walk_order_is_depth_first() {
    let mut b = UmlBuilder::new("app");
    let root = b.root();
    b.class(&root, "A");
    let outer = b.package(&root, "outer");
    b.class(&outer, "B");
    let inner = b.package(&outer, "inner");
    b.class(&inner, "C");
    b.class(&outer, "D");
    b.class(&root, "E");

    assert_class_names(
        &translate_default(&b.build()),
        &["app.A", "app.outer.B", "app.outer.inner.C", "app.outer.D", "app.E"],
    );
}

#[test]
fn test_duplicate_qualified_name_keeps_first() {
    let mut b = UmlBuilder::new("app");
    let root = b.root();
    let int = b.data_type(&root, "int");
    let first = b.class(&root, "Twin");
    let second = b.class(&root, "Twin");
    b.attribute(&first, "a", &int);
    b.attribute(&second, "b", &int);

    let translation = translation(&b.build());
    let twin = class(&translation.model, "app.Twin");
    assert!(twin.attribute("a").is_some());
    assert!(twin.attribute("b").is_none());
    assert_eq!(diagnostic_codes(&translation.diagnostics), vec![codes::DUPLICATE_CLASS]);
    assert_eq!(translation.diagnostics[0].element.as_ref(), Some(&second));
}
