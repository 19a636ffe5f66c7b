//! Namespace traversal.
//!
//! Depth-first, pre-order walk over the owned elements of a namespace:
//! nested packages are descended into as they are met, eligible classes
//! and interfaces are collected in visit order.

use rustc_hash::FxHashSet;

use super::diagnostics::{Diagnostic, Diagnostics, codes};
use super::error::{Result, TranslateError};
use super::naming::{is_business_object, qualified_name};
use super::options::TranslateOptions;
use crate::uml::{ElementId, ElementView};

/// Collect every eligible classifier below `root` with its qualified
/// name, in first-visit order.
///
/// Classifiers whose qualified name was already collected are dropped
/// with a [`codes::DUPLICATE_CLASS`] diagnostic.
pub fn collect_classifiers<'m>(
    root: ElementView<'m>,
    options: &TranslateOptions,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<(String, ElementView<'m>)>> {
    if !root.kind().is_namespace() {
        return Err(TranslateError::UnexpectedElement {
            id: root.id().clone(),
            found: root.kind(),
        });
    }

    let mut walker = Walker {
        options,
        diagnostics,
        visited: FxHashSet::default(),
        names: FxHashSet::default(),
        found: Vec::new(),
    };
    walker.visit(root)?;
    Ok(walker.found)
}

struct Walker<'m, 'a> {
    options: &'a TranslateOptions,
    diagnostics: &'a mut Diagnostics,
    visited: FxHashSet<&'m ElementId>,
    names: FxHashSet<String>,
    found: Vec<(String, ElementView<'m>)>,
}

impl<'m> Walker<'m, '_> {
    fn visit(&mut self, namespace: ElementView<'m>) -> Result<()> {
        if !self.visited.insert(namespace.id()) {
            return Err(TranslateError::CyclicNamespace(namespace.id().clone()));
        }
        tracing::trace!(namespace = ?namespace.name(), "visiting namespace");

        for id in namespace.owned_ids() {
            let element = ElementView::from_id(id, namespace.model)
                .ok_or_else(|| TranslateError::UnresolvedReference(id.clone()))?;
            let kind = element.kind();

            if kind.is_namespace() {
                self.visit(element)?;
            } else if kind.is_class_or_interface() {
                self.classifier(element)?;
            } else if !kind.is_packageable() {
                return Err(TranslateError::UnexpectedElement {
                    id: id.clone(),
                    found: kind,
                });
            }
        }
        Ok(())
    }

    fn classifier(&mut self, classifier: ElementView<'m>) -> Result<()> {
        if !is_business_object(classifier, self.options)? {
            tracing::trace!(classifier = ?classifier.name(), "skipping non-business classifier");
            return Ok(());
        }
        let name = qualified_name(classifier)?;
        if !self.names.insert(name.clone()) {
            self.diagnostics.push(
                Diagnostic::warning(
                    codes::DUPLICATE_CLASS,
                    format!("class `{}` is declared more than once; keeping the first", name),
                )
                .with_element(classifier.id()),
            );
            return Ok(());
        }
        self.found.push((name, classifier));
        Ok(())
    }
}
