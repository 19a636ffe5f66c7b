//! Name and qualification rules.
//!
//! - qualified names are the dotted chain of owner names, root first
//! - the "business object" filter decides which classifiers are kept
//! - relationship fields are named after their end or its target type

use rustc_hash::FxHashSet;

use super::error::{Result, TranslateError};
use super::options::TranslateOptions;
use crate::uml::ElementView;

/// Dotted path of the owners of `element`, most significant first.
///
/// Owners without a name are skipped, so an anonymous root does not
/// produce a leading dot.
pub fn package_path(element: ElementView<'_>) -> Result<String> {
    let mut segments = Vec::new();
    let mut seen = FxHashSet::default();
    let mut current = element.element.owner.as_ref();

    while let Some(id) = current {
        if !seen.insert(id) {
            return Err(TranslateError::CyclicNamespace(id.clone()));
        }
        let owner = element
            .model
            .get(id)
            .ok_or_else(|| TranslateError::UnresolvedReference(id.clone()))?;
        if let Some(name) = owner.name.as_deref().filter(|name| !name.is_empty()) {
            segments.push(name);
        }
        current = owner.owner.as_ref();
    }

    segments.reverse();
    Ok(segments.join("."))
}

/// `<package-path>.<name>` of a classifier.
pub fn qualified_name(element: ElementView<'_>) -> Result<String> {
    let name = element.name().unwrap_or_default();
    let package = package_path(element)?;
    if package.is_empty() {
        Ok(name.to_string())
    } else {
        Ok(format!("{}.{}", package, name))
    }
}

/// Whether a classifier describes a persistent business object rather
/// than a primitive or a platform library type.
pub fn is_business_object(classifier: ElementView<'_>, options: &TranslateOptions) -> Result<bool> {
    let name = match classifier.name() {
        Some(name) if !name.is_empty() => name,
        _ => return Ok(false),
    };
    if options.is_primitive(name) {
        return Ok(false);
    }
    Ok(!options.is_reserved_package(&package_path(classifier)?))
}

/// Field name for the relationship reached through `end`.
///
/// An explicit end name wins; otherwise the target type name is used,
/// pluralized for multi-valued ends. Either way the first letter is
/// lowered.
pub fn end_field_name(end: ElementView<'_>) -> Result<String> {
    if let Some(name) = end.name().filter(|name| !name.is_empty()) {
        return Ok(lower_first(name));
    }
    let target = end
        .typed_by()
        .ok_or_else(|| TranslateError::UnresolvedReference(end.id().clone()))?;
    let base = lower_first(target.name().unwrap_or_default());
    let multi = end.end().is_some_and(|data| data.multiplicity.is_multi_valued());
    Ok(if multi { pluralize(&base) } else { base })
}

/// Lower-case the first character.
pub fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// English plural of a field name.
pub fn pluralize(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }
    if let Some(stem) = name.strip_suffix('y') {
        let before = stem.chars().last();
        if before.is_some_and(|c| !"aeiouAEIOU".contains(c)) {
            return format!("{}ies", stem);
        }
    }
    if ["s", "x", "z", "ch", "sh"]
        .iter()
        .any(|suffix| name.ends_with(suffix))
    {
        return format!("{}es", name);
    }
    format!("{}s", name)
}
