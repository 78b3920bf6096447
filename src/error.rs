//! Error types for the harvester.
//!
//! Structural failures and unresolved required vocabulary references are
//! fatal for the document being converted; everything softer is logged via
//! `tracing` at the place where it is absorbed.

use thiserror::Error;

use crate::vocabulary::VocabularyError;

/// Main error type for the harvester library.
#[derive(Debug, Error)]
pub enum HarvestError {
    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Unconsumed XML content remains after an entity's rules ran.
    ///
    /// Raised by the exhaustion check at every entity boundary. The path
    /// points at the entity whose content has no mapping rule, so a schema
    /// change surfaces close to its actual location.
    #[error("Unconsumed XML content at {path}: {leftover}")]
    UnconsumedContent { path: String, leftover: String },

    /// Missing required XML element.
    #[error("Missing required XML element: <{element}> in {context}")]
    MissingElement { element: String, context: String },

    /// A required controlled-vocabulary reference did not resolve.
    #[error("Vocabulary lookup failed for category '{category}', iri '{iri}': {source}")]
    VocabularyLookup {
        category: String,
        iri: String,
        #[source]
        source: VocabularyError,
    },

    /// A scalar value could not be parsed.
    #[error("Invalid value at {context}: expected {expected}, got '{value}'")]
    InvalidValue {
        context: String,
        expected: &'static str,
        value: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML deserialization error (vocabulary files).
    #[error("YAML parsing failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for harvester operations.
pub type Result<T> = std::result::Result<T, HarvestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconsumed_content_display() {
        let err = HarvestError::UnconsumedContent {
            path: "/dataset/location[2]".to_string(),
            leftover: "<geometry>".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unconsumed XML content at /dataset/location[2]: <geometry>"
        );
    }

    #[test]
    fn test_missing_element_display() {
        let err = HarvestError::MissingElement {
            element: "iri".to_string(),
            context: "/dataset/resource_type".to_string(),
        };
        assert!(err.to_string().contains("<iri>"));
        assert!(err.to_string().contains("/dataset/resource_type"));
    }

    #[test]
    fn test_vocabulary_lookup_display() {
        let err = HarvestError::VocabularyLookup {
            category: "languages".to_string(),
            iri: "https://example.com/unknown".to_string(),
            source: VocabularyError::NotFound {
                category: "languages".to_string(),
                iri: "https://example.com/unknown".to_string(),
            },
        };
        assert!(err.to_string().contains("languages"));
        assert!(err.to_string().contains("https://example.com/unknown"));
    }
}
