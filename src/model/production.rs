//! Production (deposition repository) record model.
//!
//! The shape the RDM-style repository ingests. Produced only by the
//! transform in [`crate::transform`]; never parsed directly from XML.

use std::collections::BTreeMap;

use serde::Serialize;

use super::nma::{Geometry, Person, VocabularyRef};

/// An identifier in repository form: bare value plus scheme name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct RepositoryIdentifier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
}

/// One flattened additional title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct AdditionalTitle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub title_type: Option<VocabularyRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<VocabularyRef>,
}

/// One flattened additional description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct AdditionalDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub description_type: Option<VocabularyRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<VocabularyRef>,
}

/// A creator or contributor entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Creatibutor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<VocabularyRef>,
    pub person_or_org: PersonOrOrg,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub affiliations: Vec<AffiliationEntry>,
}

/// The person-or-organization payload of a creator/contributor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonOrOrg {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub identifiers: Vec<RepositoryIdentifier>,
}

/// An affiliation entry, with an id only when the lookup knows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct AffiliationEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A subject entry: optional unique id plus the subject text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct SubjectEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

/// One funding entry: a funder paired with the shared award.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Funding {
    pub funder: Funder,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub award: Option<Award>,
}

/// A funder.
///
/// Person funders are not representable in the repository model; the raw
/// person record passes through and fails repository validation visibly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Funder {
    Organization(AffiliationEntry),
    Person(Box<Person>),
}

/// An award with a language-keyed title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Award {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
}

/// A related resource in repository form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct RelatedResourceEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub identifiers: Vec<BareIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relation_type: Option<VocabularyRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<VocabularyRef>,
}

/// An identifier without a scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BareIdentifier {
    pub identifier: String,
}

/// The locations container of the repository record.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Locations {
    pub features: Vec<LocationFeature>,
}

/// One location feature.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct LocationFeature {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub identifiers: Vec<RepositoryIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One typed date entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateEntry {
    pub date: String,
    #[serde(rename = "type")]
    pub date_type: VocabularyRef,
}

/// A rights entry: a resolved license id, or a link fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RightsEntry {
    Resolved {
        id: String,
    },
    Link {
        #[serde(skip_serializing_if = "Option::is_none")]
        link: Option<String>,
        #[serde(skip_serializing_if = "BTreeMap::is_empty")]
        title: BTreeMap<String, String>,
    },
}

/// The complete production metadata record.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ProductionMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub additional_titles: Vec<AdditionalTitle>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub additional_descriptions: Vec<AdditionalDescription>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub identifiers: Vec<RepositoryIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub creators: Vec<Creatibutor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contributors: Vec<Creatibutor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subjects: Vec<SubjectEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub funding: Vec<Funding>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related_resources: Vec<RelatedResourceEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<VocabularyRef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<VocabularyRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Locations>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dates: Vec<DateEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rights: Vec<RightsEntry>,
}
