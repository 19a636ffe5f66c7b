use super::classifier::ClassifierContext;
use super::error::{Result, TranslateError};
use crate::metadata::AttributeDescriptor;
use crate::uml::ElementView;

/// Translate one attribute of the classifier described by `ctx`.
///
/// The type name is not package-qualified; only built-in names such as
/// `String` are rewritten to their qualified form.
pub fn translate_attribute(
    attribute: ElementView<'_>,
    ctx: &ClassifierContext<'_>,
) -> Result<AttributeDescriptor> {
    let name = attribute.name().unwrap_or_default();
    let type_name = match attribute.type_ref() {
        Some(id) => attribute
            .typed_by()
            .ok_or_else(|| TranslateError::UnresolvedReference(id.clone()))?
            .name()
            .filter(|name| !name.is_empty()),
        None => None,
    }
    .ok_or_else(|| TranslateError::MissingType {
        attribute: attribute.id().clone(),
    })?;

    Ok(AttributeDescriptor::new(
        name,
        ctx.is_key(name),
        ctx.options.builtin_type(type_name),
    ))
}
