//! The rayon path must agree with the sequential one.

use umlmeta::translate::{TranslateError, Translator};
use umlmeta::uml::{EndSpec, Multiplicity, UmlBuilder, UmlModel};

use crate::helpers::model_fixtures::{app_model, key_hierarchy};

/// Many packages of keyed, associated classes.
fn wide_model() -> UmlModel {
    let mut b = UmlBuilder::new("wide");
    let root = b.root();
    let int = b.data_type(&root, "int");
    let base = b.class(&root, "Entity");
    b.tag(&base, "key", "id");
    b.attribute(&base, "id", &int);

    for p in 0..8 {
        let package = b.package(&root, &format!("p{}", p));
        let mut previous = None;
        for c in 0..16 {
            let class = b.class(&package, &format!("C{}", c));
            b.generalization(&class, &base);
            b.attribute(&class, "id", &int);
            b.tag(&class, "note", "generated");
            if let Some(previous) = previous {
                b.association(
                    &package,
                    EndSpec::to(&previous).multiplicity(Multiplicity::MANY),
                    EndSpec::to(&class),
                );
            }
            previous = Some(class);
        }
    }
    b.build()
}

fn assert_same(uml: &UmlModel) {
    let translator = Translator::default();
    let sequential = translator.translate_with_diagnostics(uml, "test").unwrap();
    let parallel = translator.translate_parallel(uml, "test").unwrap();

    assert_eq!(sequential.model, parallel.model);
    assert_eq!(
        sequential.model.class_names().collect::<Vec<_>>(),
        parallel.model.class_names().collect::<Vec<_>>()
    );
    assert_eq!(sequential.diagnostics, parallel.diagnostics);
}

#[test]
fn test_parallel_matches_sequential_on_fixtures() {
    assert_same(&app_model().uml);
    assert_same(&key_hierarchy());
}

#[test]
fn test_parallel_matches_sequential_on_wide_model() {
    let uml = wide_model();
    assert_same(&uml);

    let meta = Translator::default().translate_parallel(&uml, "test").unwrap().model;
    assert_eq!(meta.len(), 1 + 8 * 16);
    for class in meta.iter().filter(|c| c.name != "wide.Entity") {
        assert_eq!(class.primary_key_fields(), vec!["id"], "class {}", class.name);
    }
}

#[test]
fn test_parallel_reports_first_error_in_walk_order() {
    let mut b = UmlBuilder::new("app");
    let root = b.root();
    let concrete = b.class(&root, "Concrete");
    let first = b.class(&root, "First");
    let second = b.class(&root, "Second");
    let expected = b.realization(&first, &concrete);
    b.realization(&second, &concrete);
    let uml = b.build();

    let translator = Translator::default();
    for result in [
        translator.translate(&uml, "test").map(|_| ()),
        translator.translate_parallel(&uml, "test").map(|_| ()),
    ] {
        match result {
            Err(TranslateError::InvalidRealization { dependency, .. }) => {
                assert_eq!(dependency, expected)
            }
            other => panic!("expected an invalid realization, got {:?}", other),
        }
    }
}
