//! Primary-key resolution.
//!
//! A classifier's key is the union of the field names listed in its own
//! `key` tagged values and the key of its first generalization parent,
//! followed transitively up the chain.

use indexmap::IndexSet;
use rustc_hash::FxHashSet;

use super::diagnostics::{Diagnostic, Diagnostics, codes};
use super::error::{Result, TranslateError};
use super::options::TranslateOptions;
use crate::uml::ElementView;

/// Field names forming a primary key, in discovery order.
pub type KeySet = IndexSet<String>;

/// Split a `key` tag value on whitespace and commas.
pub fn tokenize_keys(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
}

/// Resolve the complete key set of `classifier`, inherited keys included.
///
/// Only the first generalization of each classifier is followed; further
/// parents are reported as [`codes::IGNORED_KEY_PARENT`].
pub fn resolve_keys(
    classifier: ElementView<'_>,
    options: &TranslateOptions,
    diagnostics: &mut Diagnostics,
) -> Result<KeySet> {
    let mut keys = KeySet::new();
    let mut seen = FxHashSet::default();
    let mut current = Some(classifier);

    for tagged in &classifier.element.tagged_values {
        if *tagged.tag != *options.key_tag {
            diagnostics.push(
                Diagnostic::info(
                    codes::UNKNOWN_TAG,
                    format!("tagged value `{}` is not interpreted", tagged.tag),
                )
                .with_element(classifier.id()),
            );
        }
    }

    while let Some(class) = current {
        if !seen.insert(class.id()) {
            return Err(TranslateError::CyclicGeneralization(class.id().clone()));
        }
        for value in class.tag_values(&options.key_tag) {
            keys.extend(tokenize_keys(value).map(String::from));
        }

        let generalizations = class.generalizations();
        for ignored in generalizations.iter().skip(1).filter_map(|g| g.parent()) {
            diagnostics.push(
                Diagnostic::warning(
                    codes::IGNORED_KEY_PARENT,
                    format!(
                        "keys of `{}` are not inherited by `{}`: only the first parent is followed",
                        ignored.name().unwrap_or_default(),
                        class.name().unwrap_or_default()
                    ),
                )
                .with_element(class.id()),
            );
        }
        current = generalizations.first().and_then(|g| g.parent());
    }

    Ok(keys)
}
