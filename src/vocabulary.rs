//! Controlled-vocabulary resolution.
//!
//! CCMM XML references controlled terms by IRI; repositories store them by a
//! short stable id. The parser resolves every such reference through the
//! [`VocabularyResolver`] capability so the lookup backend (a vocabulary
//! service, a fixture map, a YAML file) stays outside the parsing core.

use std::collections::HashMap;

use thiserror::Error;

/// Vocabulary category for alternate title types.
pub const TITLE_TYPES: &str = "titletypes";
/// Vocabulary category for identifier schemes (doi, orcid, ror, ...).
pub const IDENTIFIER_SCHEMES: &str = "identifierschemes";
/// Vocabulary category for resource types.
pub const RESOURCE_TYPES: &str = "resourcetypes";
/// Vocabulary category for languages.
pub const LANGUAGES: &str = "languages";
/// Vocabulary category for time reference date types.
pub const DATE_TYPES: &str = "datetypes";
/// Vocabulary category for description types.
pub const DESCRIPTION_TYPES: &str = "descriptiontypes";
/// Vocabulary category for file formats.
pub const FILE_FORMATS: &str = "fileformats";
/// Vocabulary category for checksum algorithms.
pub const CHECKSUM_ALGORITHMS: &str = "checksumalgorithms";
/// Vocabulary category for location relation types.
pub const LOCATION_RELATION_TYPES: &str = "locationrelationtypes";
/// Vocabulary category for agent roles on a resource.
pub const RESOURCE_AGENT_ROLE_TYPES: &str = "resourceagentroletypes";
/// Vocabulary category for relations between resources.
pub const RESOURCE_RELATION_TYPES: &str = "resourcerelationtypes";
/// Vocabulary category for subject classification schemes.
pub const SUBJECT_SCHEMES: &str = "subjectschemes";
/// Vocabulary category for access rights.
pub const ACCESS_RIGHTS: &str = "accessrights";
/// Vocabulary category for licenses (used by the production transform only).
pub const LICENSES: &str = "licenses";

/// Map a CCMM category name to the name the lookup backend knows.
///
/// The repository vocabularies keep relation types and file types under
/// shorter names than the CCMM schema does; everything else passes through.
#[must_use]
pub fn remap_category(category: &str) -> &str {
    match category {
        RESOURCE_RELATION_TYPES => "relationtypes",
        FILE_FORMATS => "filetypes",
        other => other,
    }
}

/// Error answered by a [`VocabularyResolver`].
#[derive(Debug, Error)]
pub enum VocabularyError {
    /// The category has no entry for the given IRI.
    #[error("no '{category}' entry for iri '{iri}'")]
    NotFound { category: String, iri: String },

    /// The lookup backend itself failed.
    #[error("vocabulary backend failed: {0}")]
    Backend(String),
}

/// Capability resolving a controlled-vocabulary IRI to its short id.
pub trait VocabularyResolver {
    /// Resolve `iri` within `category` to the stable short id.
    ///
    /// # Errors
    /// [`VocabularyError::NotFound`] when no entry matches,
    /// [`VocabularyError::Backend`] when the backend cannot answer at all.
    fn resolve(&self, category: &str, iri: &str) -> std::result::Result<String, VocabularyError>;
}

/// In-memory [`VocabularyResolver`] backed by nested maps.
///
/// Used by tests and by the CLI, which loads the maps from a YAML document
/// of the shape `category: { iri: id }`.
#[derive(Debug, Clone, Default)]
pub struct MemoryResolver {
    entries: HashMap<String, HashMap<String, String>>,
}

impl MemoryResolver {
    /// Create an empty resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one `category`/`iri` -> `id` entry.
    pub fn insert(
        &mut self,
        category: impl Into<String>,
        iri: impl Into<String>,
        id: impl Into<String>,
    ) {
        self.entries
            .entry(category.into())
            .or_default()
            .insert(iri.into(), id.into());
    }

    /// Build a resolver from a YAML document of `category: { iri: id }` maps.
    ///
    /// # Errors
    /// Returns the YAML error when the document does not have that shape.
    pub fn from_yaml(text: &str) -> std::result::Result<Self, serde_yaml::Error> {
        let entries: HashMap<String, HashMap<String, String>> = serde_yaml::from_str(text)?;
        Ok(Self { entries })
    }
}

impl VocabularyResolver for MemoryResolver {
    fn resolve(&self, category: &str, iri: &str) -> std::result::Result<String, VocabularyError> {
        self.entries
            .get(category)
            .and_then(|terms| terms.get(iri))
            .cloned()
            .ok_or_else(|| VocabularyError::NotFound {
                category: category.to_string(),
                iri: iri.to_string(),
            })
    }
}
