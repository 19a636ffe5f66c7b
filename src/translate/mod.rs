//! UML to persistence-metadata translation.
//!
//! ## Pipeline
//!
//! ```text
//! walker      → eligible classes/interfaces, in pre-order
//!   ↓
//! classifier  → one ClassDescriptor per classifier
//!   ↓ uses
//! hierarchy, keys, attributes, associations
//!   ↓ use
//! naming      → qualified names, field names, eligibility
//! ```
//!
//! All per-classifier state lives in a [`ClassifierContext`] built for that
//! classifier alone, and tolerated anomalies are collected in a per-call
//! [`Diagnostics`] sink. A [`Translator`] holds nothing but its options, so
//! classifiers can be translated in any order or in parallel.

mod associations;
mod attributes;
mod classifier;
pub mod diagnostics;
mod error;
mod hierarchy;
mod keys;
pub mod naming;
mod options;
mod walker;

use rayon::prelude::*;

use crate::metadata::{ClassDescriptor, MetadataModel};
use crate::uml::{ElementView, UmlModel};

pub use associations::translate_end;
pub use attributes::translate_attribute;
pub use classifier::{ClassifierContext, translate_classifier};
pub use diagnostics::{Diagnostic, Diagnostics, Severity, codes};
pub use error::{Result, TranslateError};
pub use hierarchy::{realized_interfaces, supertype_names};
pub use keys::{KeySet, resolve_keys, tokenize_keys};
pub use options::TranslateOptions;
pub use walker::collect_classifiers;

/// The outcome of a translation: the metadata model plus every tolerated
/// anomaly met on the way, in encounter order.
#[derive(Clone, Debug, Default)]
pub struct Translation {
    pub model: MetadataModel,
    pub diagnostics: Vec<Diagnostic>,
}

/// Translates UML models into [`MetadataModel`]s.
#[derive(Clone, Debug, Default)]
pub struct Translator {
    options: TranslateOptions,
}

impl Translator {
    pub fn new(options: TranslateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TranslateOptions {
        &self.options
    }

    /// Translate the whole of `uml` into a metadata model called `name`.
    pub fn translate(&self, uml: &UmlModel, name: &str) -> Result<MetadataModel> {
        self.translate_with_diagnostics(uml, name)
            .map(|translation| translation.model)
    }

    /// Like [`Translator::translate`], keeping the diagnostics.
    pub fn translate_with_diagnostics(&self, uml: &UmlModel, name: &str) -> Result<Translation> {
        self.translate_namespace(root_view(uml)?, name)
    }

    /// Translate the subtree below one namespace.
    pub fn translate_namespace(&self, root: ElementView<'_>, name: &str) -> Result<Translation> {
        let _span = tracing::debug_span!("translate", model = name).entered();
        let mut diagnostics = Diagnostics::new();
        let classifiers = collect_classifiers(root, &self.options, &mut diagnostics)?;

        let mut classes = Vec::with_capacity(classifiers.len());
        for (_, classifier) in classifiers {
            classes.push(translate_classifier(classifier, &self.options, &mut diagnostics)?);
        }
        Ok(finish(name, classes, diagnostics))
    }

    /// Translate on the rayon pool.
    ///
    /// Produces the same model and diagnostics as
    /// [`Translator::translate_with_diagnostics`]; on failure the error of
    /// the first failing classifier in walk order is returned.
    pub fn translate_parallel(&self, uml: &UmlModel, name: &str) -> Result<Translation> {
        let _span = tracing::debug_span!("translate_parallel", model = name).entered();
        let mut diagnostics = Diagnostics::new();
        let classifiers = collect_classifiers(root_view(uml)?, &self.options, &mut diagnostics)?;

        let results: Vec<(Result<ClassDescriptor>, Diagnostics)> = classifiers
            .par_iter()
            .map(|(_, classifier)| {
                let mut local = Diagnostics::new();
                let class = translate_classifier(*classifier, &self.options, &mut local);
                (class, local)
            })
            .collect();

        let mut classes = Vec::with_capacity(results.len());
        for (class, local) in results {
            classes.push(class?);
            diagnostics.extend(local);
        }
        Ok(finish(name, classes, diagnostics))
    }
}

/// Translate `uml` with default options.
pub fn translate(uml: &UmlModel, name: &str) -> Result<MetadataModel> {
    Translator::default().translate(uml, name)
}

fn root_view(uml: &UmlModel) -> Result<ElementView<'_>> {
    ElementView::root(uml).ok_or_else(|| TranslateError::UnresolvedReference(uml.root.clone()))
}

fn finish(name: &str, classes: Vec<ClassDescriptor>, diagnostics: Diagnostics) -> Translation {
    let mut model = MetadataModel::new(name);
    for class in classes {
        // names were deduplicated by the walk
        model.insert(class);
    }
    tracing::debug!(
        model = name,
        classes = model.len(),
        diagnostics = diagnostics.len(),
        "translation finished"
    );
    Translation {
        model,
        diagnostics: diagnostics.into_vec(),
    }
}
