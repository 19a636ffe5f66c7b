//! Translation options

use indexmap::IndexMap;

/// Naming conventions and reserved names the translator applies.
///
/// The defaults target a Java persistence layer.
#[derive(Debug, Clone)]
pub struct TranslateOptions {
    /// Tag whose values list primary-key field names.
    pub key_tag: String,
    /// Stereotype marking an abstraction as an interface realization.
    pub realize_stereotype: String,
    /// Classifier names that never produce a class descriptor.
    pub primitive_types: Vec<String>,
    /// Dotted package paths whose classifiers are platform types.
    pub reserved_namespaces: Vec<String>,
    /// Attribute type names rewritten to a fully qualified built-in type.
    pub builtin_types: IndexMap<String, String>,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            key_tag: "key".to_string(),
            realize_stereotype: "realize".to_string(),
            primitive_types: [
                "void", "char", "byte", "short", "int", "long", "boolean", "float", "double",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            reserved_namespaces: vec!["java.lang".to_string(), "java.util".to_string()],
            builtin_types: IndexMap::from([("String".to_string(), "java.lang.String".to_string())]),
        }
    }
}

impl TranslateOptions {
    pub fn with_key_tag(mut self, tag: impl Into<String>) -> Self {
        self.key_tag = tag.into();
        self
    }

    pub fn with_realize_stereotype(mut self, stereotype: impl Into<String>) -> Self {
        self.realize_stereotype = stereotype.into();
        self
    }

    pub fn with_primitive_type(mut self, name: impl Into<String>) -> Self {
        self.primitive_types.push(name.into());
        self
    }

    pub fn with_reserved_namespace(mut self, package: impl Into<String>) -> Self {
        self.reserved_namespaces.push(package.into());
        self
    }

    pub fn with_builtin_type(mut self, name: impl Into<String>, qualified: impl Into<String>) -> Self {
        self.builtin_types.insert(name.into(), qualified.into());
        self
    }

    pub fn is_primitive(&self, name: &str) -> bool {
        self.primitive_types.iter().any(|p| p == name)
    }

    /// True if the dotted `package` path ends with a reserved namespace,
    /// compared segment by segment.
    pub fn is_reserved_package(&self, package: &str) -> bool {
        let segments: Vec<&str> = package.split('.').collect();
        self.reserved_namespaces.iter().any(|reserved| {
            let reserved: Vec<&str> = reserved.split('.').collect();
            segments.ends_with(&reserved)
        })
    }

    /// The built-in rewrite of a type name, or the name unchanged.
    pub fn builtin_type<'a>(&'a self, name: &'a str) -> &'a str {
        self.builtin_types.get(name).map_or(name, String::as_str)
    }
}
