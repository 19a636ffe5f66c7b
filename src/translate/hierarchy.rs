//! Generalization and realization resolution.

use super::diagnostics::{Diagnostic, Diagnostics, codes};
use super::error::{Result, TranslateError};
use super::naming::qualified_name;
use super::options::TranslateOptions;
use crate::uml::{ElementId, ElementKind, ElementView};

fn resolve<'m>(owner: ElementView<'m>, id: &ElementId) -> Result<ElementView<'m>> {
    ElementView::from_id(id, owner.model)
        .ok_or_else(|| TranslateError::UnresolvedReference(id.clone()))
}

/// Render classifiers as space-separated qualified names, dropping
/// repeats of the same element. `None` for an empty list.
fn join_qualified(classifiers: &[ElementView<'_>]) -> Result<Option<String>> {
    let mut names = Vec::with_capacity(classifiers.len());
    for (index, classifier) in classifiers.iter().enumerate() {
        if classifiers[..index].iter().any(|c| c.id() == classifier.id()) {
            continue;
        }
        names.push(qualified_name(*classifier)?);
    }
    Ok((!names.is_empty()).then(|| names.join(" ")))
}

/// Qualified names of every generalization parent of `classifier`.
pub fn supertype_names(
    classifier: ElementView<'_>,
    diagnostics: &mut Diagnostics,
) -> Result<Option<String>> {
    let mut parents = Vec::new();
    for id in &classifier.element.generalizations {
        let generalization = resolve(classifier, id)?;
        match generalization.parent() {
            Some(parent) => parents.push(parent),
            None => diagnostics.push(
                Diagnostic::warning(
                    codes::UNSET_PARENT,
                    format!(
                        "generalization of `{}` has no parent",
                        classifier.name().unwrap_or_default()
                    ),
                )
                .with_element(id),
            ),
        }
    }
    join_qualified(&parents)
}

/// Qualified names of the interfaces a class realizes.
///
/// Only abstractions stereotyped `realize` count, and only their first
/// supplier is consulted; that supplier must be an interface.
pub fn realized_interfaces(
    class: ElementView<'_>,
    options: &TranslateOptions,
    diagnostics: &mut Diagnostics,
) -> Result<Option<String>> {
    let class_name = class.name().unwrap_or_default();
    let mut interfaces = Vec::new();

    for id in &class.element.client_dependencies {
        let dependency = resolve(class, id)?;
        let stereotype = dependency.stereotype().unwrap_or_default();
        let is_realize = stereotype == options.realize_stereotype;

        if dependency.kind() != ElementKind::Abstraction {
            if is_realize {
                diagnostics.push(
                    Diagnostic::warning(
                        codes::SKIPPED_DEPENDENCY,
                        format!(
                            "`{}` dependency of `{}` is a {}, not an abstraction",
                            stereotype,
                            class_name,
                            dependency.kind()
                        ),
                    )
                    .with_element(id),
                );
            }
            continue;
        }
        if !is_realize {
            let shown = if stereotype.trim().is_empty() { "<none>" } else { stereotype };
            diagnostics.push(
                Diagnostic::warning(
                    codes::SKIPPED_DEPENDENCY,
                    format!(
                        "abstraction of `{}` with stereotype {} is not a realization",
                        class_name, shown
                    ),
                )
                .with_element(id),
            );
            continue;
        }

        let suppliers = dependency.supplier_ids();
        let Some(supplier_id) = suppliers.first() else {
            return Err(TranslateError::invalid_realization(id, class_name, "no supplier"));
        };
        if suppliers.len() > 1 {
            diagnostics.push(
                Diagnostic::warning(
                    codes::EXTRA_SUPPLIERS,
                    format!(
                        "realization of `{}` lists {} suppliers; only the first is used",
                        class_name,
                        suppliers.len()
                    ),
                )
                .with_element(id),
            );
        }
        let supplier = ElementView::from_id(supplier_id, class.model).ok_or_else(|| {
            TranslateError::invalid_realization(
                id,
                class_name,
                format!("supplier `{}` is not in the model", supplier_id),
            )
        })?;
        if !supplier.is_interface() {
            return Err(TranslateError::invalid_realization(
                id,
                class_name,
                format!(
                    "supplier `{}` is a {}, not an interface",
                    supplier.name().unwrap_or_default(),
                    supplier.kind()
                ),
            ));
        }
        interfaces.push(supplier);
    }

    join_qualified(&interfaces)
}
