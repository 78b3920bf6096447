//! Transform from the NMA dataset record to the production repository shape.
//!
//! A pure record-to-record rewrite with no further XML access. Each rule
//! consumes its own part of the parsed dataset and writes zero or more
//! production fields; the full destructuring below is what guarantees that
//! every aggregator field is either converted or deliberately dropped.

mod agents;
mod fields;

use crate::affiliation::AffiliationResolver;
use crate::model::nma::{Dataset, Identifier};
use crate::model::production::{ProductionMetadata, RepositoryIdentifier};
use crate::vocabulary::VocabularyResolver;

/// Rewrite a parsed NMA dataset into the production repository metadata.
///
/// Publication-date derivation runs before the time references are consumed
/// for `dates`; the remaining rules operate on disjoint fields.
#[must_use]
pub fn to_production(
    dataset: Dataset,
    vocabularies: &dyn VocabularyResolver,
    affiliations: &dyn AffiliationResolver,
) -> ProductionMetadata {
    let Dataset {
        iri,
        alternate_titles,
        descriptions,
        distributions,
        funding_references,
        identifiers,
        locations,
        metadata_identifications,
        other_languages,
        primary_language,
        // provenances and validation results have no production counterpart
        provenances: _,
        publication_year,
        qualified_relations,
        related_resources,
        resource_type,
        subjects,
        terms_of_use,
        time_references,
        title,
        validation_results: _,
        version,
    } = dataset;

    let publication_date = fields::publication_date(publication_year, &time_references);
    let agents::PartitionedAgents {
        publisher,
        creators,
        contributors,
    } = agents::partition_relations(qualified_relations, affiliations);

    // Sections the production repository cannot represent.
    if !metadata_identifications.is_empty() {
        tracing::warn!(
            count = metadata_identifications.len(),
            "metadata_identification sections are not present in production repository records, stripping them out"
        );
    }
    if !distributions.is_empty() {
        tracing::warn!(
            count = distributions.len(),
            "distribution sections cannot be deposited this way, stripping them out"
        );
    }
    if let Some(iri) = iri {
        tracing::warn!(%iri, "dataset iri is not supported in production repository records, stripping it out");
    }

    ProductionMetadata {
        title,
        version,
        publication_date,
        additional_titles: fields::additional_titles(alternate_titles),
        additional_descriptions: fields::additional_descriptions(descriptions),
        identifiers: convert_identifiers(identifiers),
        publisher,
        creators,
        contributors,
        subjects: fields::subjects(subjects),
        funding: agents::funding(funding_references, affiliations),
        related_resources: fields::related_resources(related_resources),
        resource_type,
        languages: fields::languages(primary_language, other_languages),
        locations: fields::locations(locations),
        dates: fields::dates(time_references),
        rights: fields::rights(terms_of_use, vocabularies),
    }
}

/// Convert identifiers to repository form: drop the IRI, rename the value,
/// unwrap the scheme id.
pub(crate) fn convert_identifiers(identifiers: Vec<Identifier>) -> Vec<RepositoryIdentifier> {
    identifiers
        .into_iter()
        .map(|identifier| RepositoryIdentifier {
            identifier: identifier.value,
            scheme: identifier.scheme.map(|scheme| scheme.id),
        })
        .collect()
}
