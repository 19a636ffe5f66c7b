//! Association-end translation.
//!
//! Each association end attached to a classifier is looked at from that
//! classifier's side: the *opposite* end is what the classifier can reach.
//! Single-valued opposite ends become references, multi-valued ones
//! become collections.

use super::classifier::ClassifierContext;
use super::error::{Result, TranslateError};
use super::naming::{end_field_name, qualified_name};
use crate::metadata::{CollectionDescriptor, ReferenceDescriptor, RelationField};
use crate::uml::ElementView;

/// Translate the end opposite to `own_end`, the end attached to the
/// classifier under translation.
///
/// Returns `None` when the opposite end is not navigable.
pub fn translate_end(
    own_end: ElementView<'_>,
    ctx: &ClassifierContext<'_>,
) -> Result<Option<RelationField>> {
    let far = own_end
        .opposite()
        .ok_or_else(|| TranslateError::IncompleteAssociation {
            end: own_end.id().clone(),
        })?;
    let Some(data) = far.end().filter(|data| data.is_navigable) else {
        tracing::trace!(end = %far.id(), "skipping non-navigable association end");
        return Ok(None);
    };

    let name = end_field_name(far)?;
    let target = far
        .typed_by()
        .ok_or_else(|| TranslateError::UnresolvedReference(far.id().clone()))?;
    let reverse_reference = if own_end.is_navigable() {
        Some(end_field_name(own_end)?)
    } else {
        None
    };

    let reference = ReferenceDescriptor::new(
        name.as_str(),
        ctx.is_key(&name),
        qualified_name(target)?,
        reverse_reference,
    );
    if data.multiplicity.is_multi_valued() {
        Ok(Some(RelationField::Collection(
            CollectionDescriptor::from_reference(reference, data.is_ordered()),
        )))
    } else {
        Ok(Some(RelationField::Reference(reference)))
    }
}
