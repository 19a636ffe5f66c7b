//! Diagnostics for tolerated input anomalies.
//!
//! Malformed-but-tolerable input (odd stereotypes, extra generalization
//! parents, duplicate field names...) never fails a translation. Each
//! such case is logged through `tracing` and recorded here so callers can
//! inspect what was skipped.

use std::sync::Arc;

use crate::uml::ElementId;

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Warning,
    Info,
}

/// One recorded anomaly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Stable code from [`codes`].
    pub code: &'static str,
    /// The element the anomaly was found on, if any.
    pub element: Option<ElementId>,
    pub message: Arc<str>,
}

impl Diagnostic {
    pub fn warning(code: &'static str, message: impl Into<Arc<str>>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            element: None,
            message: message.into(),
        }
    }

    pub fn info(code: &'static str, message: impl Into<Arc<str>>) -> Self {
        Self {
            severity: Severity::Info,
            code,
            element: None,
            message: message.into(),
        }
    }

    pub fn with_element(mut self, element: &ElementId) -> Self {
        self.element = Some(element.clone());
        self
    }
}

/// Diagnostic codes.
pub mod codes {
    /// Key inheritance ignored a generalization parent beyond the first.
    pub const IGNORED_KEY_PARENT: &str = "W001";
    /// A dependency was not treated as a realization.
    pub const SKIPPED_DEPENDENCY: &str = "W002";
    /// A realization declared more than one supplier; only the first counts.
    pub const EXTRA_SUPPLIERS: &str = "W003";
    /// A generalization without a resolvable parent.
    pub const UNSET_PARENT: &str = "W004";
    /// Two fields of one category share a name; the first was kept.
    pub const DUPLICATE_FIELD: &str = "W005";
    /// Two classifiers share a qualified name; the first was kept.
    pub const DUPLICATE_CLASS: &str = "W006";
    /// A tagged value with a tag the translator does not interpret.
    pub const UNKNOWN_TAG: &str = "I001";
}

/// Per-translation diagnostic sink.
#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic and emit it as a log event.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Warning => tracing::warn!(
                code = diagnostic.code,
                element = ?diagnostic.element,
                "{}",
                diagnostic.message
            ),
            Severity::Info => tracing::debug!(
                code = diagnostic.code,
                element = ?diagnostic.element,
                "{}",
                diagnostic.message
            ),
        }
        self.items.push(diagnostic);
    }

    /// Append another sink, preserving its order.
    pub fn extend(&mut self, other: Diagnostics) {
        self.items.extend(other.items);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// Diagnostics carrying the given code.
    pub fn with_code<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a Diagnostic> {
        self.items.iter().filter(move |d| d.code == code)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}
