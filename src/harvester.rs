//! Top-level conversion entry points.

use serde::Serialize;
use serde_json::{json, Value};

use crate::affiliation::AffiliationResolver;
use crate::clean::clean_record;
use crate::error::Result;
use crate::parser::NmaParser;
use crate::transform::to_production;
use crate::vocabulary::VocabularyResolver;

/// Convert one CCMM XML document into the NMA (aggregator) record.
///
/// # Errors
/// Fails on malformed XML, unconsumed content at any entity boundary, and
/// unresolved required vocabulary references.
pub fn harvest_nma(xml: &str, vocabularies: &dyn VocabularyResolver) -> Result<Value> {
    let dataset = NmaParser::new(vocabularies).parse(xml)?;
    record(&dataset)
}

/// Convert one CCMM XML document into the production repository record.
///
/// Runs the NMA parse and then the production transform.
///
/// # Errors
/// Same conditions as [`harvest_nma`]; the transform itself only degrades,
/// it never fails.
pub fn harvest_production(
    xml: &str,
    vocabularies: &dyn VocabularyResolver,
    affiliations: &dyn AffiliationResolver,
) -> Result<Value> {
    let dataset = NmaParser::new(vocabularies).parse(xml)?;
    let metadata = to_production(dataset, vocabularies, affiliations);
    record(&metadata)
}

/// Wrap serialized metadata in the record envelope and clean it.
fn record<T: Serialize>(metadata: &T) -> Result<Value> {
    let value = serde_json::to_value(metadata)?;
    Ok(clean_record(json!({ "metadata": value })))
}
