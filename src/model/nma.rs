//! NMA (aggregator) record model.
//!
//! One struct per CCMM entity, with optional fields left out of the
//! serialized record. Field names match the aggregator record keys;
//! repeatable XML elements surface as plural `Vec` fields.

use serde::Serialize;

/// A resolved controlled-vocabulary reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VocabularyRef {
    /// Stable short id answered by the vocabulary resolver.
    pub id: String,
}

impl VocabularyRef {
    /// Create a reference from an already-resolved id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// One language-tagged text value.
///
/// Language ids are the raw `xml:lang` codes of the source document
/// (2-letter or `und`); no normalization happens at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedText {
    pub lang: VocabularyRef,
    pub value: String,
}

/// An identifier with its scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Identifier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<VocabularyRef>,
}

/// A reference carrying an IRI and multilingual labels.
///
/// Used for standards, specifications, schemas and the license, none of
/// which resolve through a vocabulary at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct LabelledReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iri: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub label: Vec<LocalizedText>,
}

/// A bare IRI wrapper (documentation links, original repository).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct IriRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iri: Option<String>,
}

/// An alternate title with its type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternateTitle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_title_type: Option<VocabularyRef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub title: Vec<LocalizedText>,
}

/// A typed multilingual description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Description {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub description_text: Vec<LocalizedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_type: Option<VocabularyRef>,
}

/// A person or organization; CCMM agent references are a choice of the two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Agent {
    #[serde(rename = "person")]
    Person(Person),
    #[serde(rename = "organization")]
    Organization(Organization),
}

impl Agent {
    /// The agent's display name, whichever variant it is.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Person(person) => person.name.as_deref(),
            Self::Organization(organization) => organization.name.as_deref(),
        }
    }
}

/// A person with names, identifiers, affiliations and contact points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Person {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub affiliations: Vec<Affiliation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contact_points: Vec<ContactPoint>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub family_names: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub given_names: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub identifiers: Vec<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// An organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Organization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iri: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub identifiers: Vec<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A person's affiliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Affiliation {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub identifiers: Vec<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Contact details of a person or organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct ContactPoint {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<Address>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<String>,
}

/// A postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Address {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub full_addresses: Vec<String>,
}

/// A role paired with the person or organization holding it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualifiedRelation {
    pub relation: Agent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<VocabularyRef>,
}

/// A time reference of the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct TimeReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporal_representation: Option<TemporalRepresentation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_type: Option<VocabularyRef>,
}

/// Either a single instant or an interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TemporalRepresentation {
    #[serde(rename = "time_instant")]
    TimeInstant(TimeInstant),
    #[serde(rename = "time_interval")]
    TimeInterval(TimeInterval),
}

/// A point in time, as a full date-time or a bare date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct TimeInstant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// A time interval with optional endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct TimeInterval {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beginning: Option<IntervalBound>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<IntervalBound>,
}

/// One endpoint of a time interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct IntervalBound {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// A subject classification entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Subject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification_code: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub definition: Vec<LocalizedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_scheme: Option<VocabularyRef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub title: Vec<LocalizedText>,
}

/// A spatial coverage entry.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Location {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bounding_boxes: Vec<BoundingBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<LocationGeometry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub names: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related_objects: Vec<RelatedObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relation_type: Option<VocabularyRef>,
}

/// An axis-aligned bounding box; corners are `x y` coordinate pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct BoundingBox {
    #[serde(rename = "lowerCorner")]
    pub lower_corner: Vec<f64>,
    #[serde(rename = "upperCorner")]
    pub upper_corner: Vec<f64>,
}

/// A location's geometry wrapper.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationGeometry {
    pub geometry: GeometryContent,
}

/// Geometry payload: a GeoJSON-shaped value, or the raw embedded markup
/// (typically GML) when no converter has been applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GeometryContent {
    GeoJson(Geometry),
    Raw(String),
}

/// A GeoJSON-like geometry value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: serde_json::Value,
}

/// An object a location refers to (a region register entry and the like).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct RelatedObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// A distribution: either a data service or a downloadable file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Distribution {
    #[serde(rename = "distribution_data_service")]
    DataService(DataService),
    #[serde(rename = "distribution_downloadable_file")]
    DownloadableFile(DownloadableFile),
}

/// A distribution exposed as a queryable service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct DataService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iri: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub access_services: Vec<AccessService>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub description: Vec<LocalizedText>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub documentations: Vec<IriRef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conforms_to_specifications: Vec<LabelledReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// A service endpoint group of a data service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct AccessService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iri: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub endpoint_urls: Vec<EndpointUrl>,
}

/// One endpoint URL with its title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct EndpointUrl {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// A distribution available as a direct download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct DownloadableFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iri: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub access_urls: Vec<LabelledReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub byte_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<Checksum>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conforms_to_schemas: Vec<LabelledReference>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub download_urls: Vec<LabelledReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<VocabularyRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<VocabularyRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// A file checksum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Checksum {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<VocabularyRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum_value: Option<String>,
}

/// A funding reference shared by one or more funders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct FundingReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub award_title: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub funders: Vec<Agent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding_program: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_identifier: Option<String>,
}

/// Terms of use of the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct TermsOfUse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_rights: Option<VocabularyRef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contact_points: Vec<Agent>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub description: Vec<LocalizedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<LabelledReference>,
}

/// Provenance of the dataset; CCMM rarely fills this in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Provenance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iri: Option<String>,
}

/// A validation result attached to the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct ValidationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iri: Option<String>,
}

/// Metadata-about-metadata: where this record came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct MetadataIdentification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iri: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conforms_to_standards: Vec<LabelledReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_updated: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<VocabularyRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_repository: Option<IriRef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub qualified_relations: Vec<QualifiedRelation>,
}

/// A resource related to the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct RelatedResource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_relation_type: Option<VocabularyRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<VocabularyRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// The complete NMA dataset record.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iri: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternate_titles: Vec<AlternateTitle>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<Description>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub distributions: Vec<Distribution>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub funding_references: Vec<FundingReference>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub identifiers: Vec<Identifier>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<Location>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metadata_identifications: Vec<MetadataIdentification>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub other_languages: Vec<VocabularyRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_language: Option<VocabularyRef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub provenances: Vec<Provenance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_year: Option<i32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub qualified_relations: Vec<QualifiedRelation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related_resources: Vec<RelatedResource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<VocabularyRef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subjects: Vec<Subject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_of_use: Option<TermsOfUse>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub time_references: Vec<TimeReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validation_results: Vec<ValidationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}
