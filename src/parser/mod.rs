//! Recursive-descent parser for CCMM dataset XML.
//!
//! One parsing rule per CCMM entity, composed top-down from the `<dataset>`
//! root. Every rule consumes the elements and attributes it recognizes
//! through an [`ElementScope`] and finishes with the exhaustion check, so an
//! XML element with no mapping rule fails the parse right where it occurs.
//!
//! Controlled-vocabulary references (`iri` plus informative labels) resolve
//! through the injected [`VocabularyResolver`]; an unresolved required
//! reference fails the whole document, never a partial record.

mod agent;
mod coverage;
mod dataset;
mod descriptive;
mod distribution;

use roxmltree::Document;

use crate::error::{HarvestError, Result};
use crate::model::nma::{Dataset, IriRef, LabelledReference, LocalizedText, VocabularyRef};
use crate::vocabulary::{remap_category, VocabularyResolver};
use crate::xml::ElementScope;

/// Parser producing the NMA (aggregator) dataset record.
pub struct NmaParser<'v> {
    vocabularies: &'v dyn VocabularyResolver,
}

impl<'v> NmaParser<'v> {
    /// Create a parser resolving vocabulary references through `vocabularies`.
    #[must_use]
    pub fn new(vocabularies: &'v dyn VocabularyResolver) -> Self {
        Self { vocabularies }
    }

    /// Parse one CCMM XML document into the NMA dataset record.
    ///
    /// # Errors
    /// Fails on malformed XML, on unconsumed content at any entity boundary
    /// and on unresolved required vocabulary references.
    pub fn parse(&self, xml: &str) -> Result<Dataset> {
        let doc = Document::parse(xml)?;
        self.parse_document(&doc)
    }

    /// Parse an already-built DOM document.
    ///
    /// # Errors
    /// Same conditions as [`NmaParser::parse`], minus the XML syntax errors.
    pub fn parse_document(&self, doc: &Document<'_>) -> Result<Dataset> {
        self.parse_dataset(ElementScope::root(doc))
    }

    /// Resolve a vocabulary IRI, remapping the category name first.
    pub(crate) fn resolve(&self, category: &str, iri: &str) -> Result<VocabularyRef> {
        let category = remap_category(category);
        self.vocabularies
            .resolve(category, iri)
            .map(VocabularyRef::new)
            .map_err(|source| HarvestError::VocabularyLookup {
                category: category.to_string(),
                iri: iri.to_string(),
                source,
            })
    }

    /// Parse a `(iri, label*)` vocabulary reference element and resolve it.
    ///
    /// The labels are informative only; the record keeps just the id.
    pub(crate) fn parse_vocabulary(
        &self,
        category: &str,
        mut scope: ElementScope<'_, '_>,
    ) -> Result<VocabularyRef> {
        let iri = require(&mut scope, "iri")?;
        take_localized(&mut scope, "label")?;
        scope.finish()?;
        self.resolve(category, &iri)
    }

    /// Take an optional vocabulary reference child.
    pub(crate) fn take_vocabulary(
        &self,
        scope: &mut ElementScope<'_, '_>,
        tag: &str,
        category: &str,
    ) -> Result<Option<VocabularyRef>> {
        scope
            .take_child(tag)
            .map(|child| self.parse_vocabulary(category, child))
            .transpose()
    }
}

/// Take a required text child, failing with the element's path when absent.
pub(crate) fn require(scope: &mut ElementScope<'_, '_>, tag: &str) -> Result<String> {
    let context = scope.path().to_string();
    scope
        .take_child_text(tag)?
        .ok_or_else(|| HarvestError::MissingElement {
            element: tag.to_string(),
            context,
        })
}

/// Take a repeated language-tagged text group.
///
/// A missing `xml:lang` maps to `und`, matching how the source documents
/// tag language-neutral values.
pub(crate) fn take_localized(
    scope: &mut ElementScope<'_, '_>,
    tag: &str,
) -> Result<Vec<LocalizedText>> {
    let mut texts = Vec::new();
    for mut child in scope.take_children(tag) {
        let lang = child
            .take_attribute("lang")
            .unwrap_or_else(|| "und".to_string());
        let value = child.text();
        child.finish()?;
        texts.push(LocalizedText {
            lang: VocabularyRef::new(lang),
            value,
        });
    }
    Ok(texts)
}

/// Parse an `(iri, label*)` reference that is kept unresolved.
pub(crate) fn parse_labelled_reference(
    mut scope: ElementScope<'_, '_>,
) -> Result<LabelledReference> {
    let reference = LabelledReference {
        iri: scope.take_child_text("iri")?,
        label: take_localized(&mut scope, "label")?,
    };
    scope.finish()?;
    Ok(reference)
}

/// Parse an element holding just an `<iri>`.
pub(crate) fn parse_iri_ref(mut scope: ElementScope<'_, '_>) -> Result<IriRef> {
    let reference = IriRef {
        iri: scope.take_child_text("iri")?,
    };
    scope.finish()?;
    Ok(reference)
}
