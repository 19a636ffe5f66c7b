//! Per-classifier descriptor assembly.

use super::associations::translate_end;
use super::attributes::translate_attribute;
use super::diagnostics::{Diagnostic, Diagnostics, codes};
use super::error::{Result, TranslateError};
use super::hierarchy::{realized_interfaces, supertype_names};
use super::keys::{KeySet, resolve_keys};
use super::naming::qualified_name;
use super::options::TranslateOptions;
use crate::metadata::ClassDescriptor;
use crate::uml::{ElementKind, ElementView};

/// State shared by the field translators of one classifier.
///
/// Built fresh for every classifier and dropped with it, so key sets
/// never leak between classifiers.
#[derive(Debug)]
pub struct ClassifierContext<'a> {
    pub options: &'a TranslateOptions,
    pub keys: KeySet,
}

impl<'a> ClassifierContext<'a> {
    pub fn new(options: &'a TranslateOptions, keys: KeySet) -> Self {
        Self { options, keys }
    }

    pub fn is_key(&self, field: &str) -> bool {
        self.keys.contains(field)
    }
}

fn duplicate_field(diagnostics: &mut Diagnostics, class: &str, field: &str, category: &str) {
    diagnostics.push(Diagnostic::warning(
        codes::DUPLICATE_FIELD,
        format!("`{}` declares {} `{}` twice; keeping the first", class, category, field),
    ));
}

/// Build the descriptor of one eligible class or interface.
pub fn translate_classifier(
    classifier: ElementView<'_>,
    options: &TranslateOptions,
    diagnostics: &mut Diagnostics,
) -> Result<ClassDescriptor> {
    let name = qualified_name(classifier)?;
    tracing::debug!(class = %name, "translating classifier");

    let supertype = supertype_names(classifier, diagnostics)?;
    let interfaces = if classifier.is_interface() {
        None
    } else {
        realized_interfaces(classifier, options, diagnostics)?
    };
    let ctx = ClassifierContext::new(options, resolve_keys(classifier, options, diagnostics)?);

    let mut class = ClassDescriptor {
        name,
        supertype,
        interfaces,
        is_interface: classifier.is_interface(),
        ..Default::default()
    };

    for id in classifier.feature_ids() {
        let feature = ElementView::from_id(id, classifier.model)
            .ok_or_else(|| TranslateError::UnresolvedReference(id.clone()))?;
        if feature.kind() != ElementKind::Attribute {
            tracing::trace!(feature = %id, kind = %feature.kind(), "skipping non-attribute feature");
            continue;
        }
        let attribute = translate_attribute(feature, &ctx)?;
        let field = attribute.name.clone();
        if !class.add_attribute(attribute) {
            duplicate_field(diagnostics, &class.name, &field, "attribute");
        }
    }

    for id in classifier.association_end_ids() {
        let end = ElementView::from_id(id, classifier.model)
            .ok_or_else(|| TranslateError::UnresolvedReference(id.clone()))?;
        if let Some(field) = translate_end(end, &ctx)? {
            let field_name = field.name().to_string();
            if !class.add_relation(field) {
                duplicate_field(diagnostics, &class.name, &field_name, "relationship");
            }
        }
    }

    Ok(class)
}
