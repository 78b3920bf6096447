//! Conversion of qualified relations and funding to repository agents.

use std::collections::BTreeMap;

use crate::affiliation::AffiliationResolver;
use crate::langcodes::detect_lang2;
use crate::model::nma::{Agent, FundingReference, Organization, Person, QualifiedRelation};
use crate::model::production::{
    AffiliationEntry, Award, Creatibutor, Funder, Funding, PersonOrOrg,
};

use super::convert_identifiers;

/// The three-way split of qualified relations.
pub(crate) struct PartitionedAgents {
    pub publisher: Option<String>,
    pub creators: Vec<Creatibutor>,
    pub contributors: Vec<Creatibutor>,
}

/// Partition qualified relations into publisher, creators and contributors.
///
/// The split is a strict set difference on the role id: `Publisher` and
/// `Creator` take their exact matches, every other role lands in
/// contributors. A relation without any role matches no bucket and is
/// dropped with a warning. Publisher names collapse into one comma-joined
/// string while creators stay separate entries; the asymmetry is historical
/// and kept deliberately.
pub(crate) fn partition_relations(
    relations: Vec<QualifiedRelation>,
    affiliations: &dyn AffiliationResolver,
) -> PartitionedAgents {
    let mut publisher_names: Vec<String> = Vec::new();
    let mut creators = Vec::new();
    let mut contributors = Vec::new();

    for relation in relations {
        match relation.role.as_ref().map(|role| role.id.as_str()) {
            Some("Publisher") => {
                if let Some(name) = relation.relation.name() {
                    publisher_names.push(name.to_string());
                }
            }
            Some("Creator") => creators.push(to_creatibutor(relation, affiliations)),
            Some(_) => contributors.push(to_creatibutor(relation, affiliations)),
            None => {
                tracing::warn!(
                    agent = relation.relation.name().unwrap_or_default(),
                    "qualified relation has no role and cannot be mapped, stripping it out"
                );
            }
        }
    }

    PartitionedAgents {
        publisher: if publisher_names.is_empty() {
            None
        } else {
            Some(publisher_names.join(", "))
        },
        creators,
        contributors,
    }
}

/// Convert one qualified relation to a creator/contributor entry.
fn to_creatibutor(
    relation: QualifiedRelation,
    affiliations: &dyn AffiliationResolver,
) -> Creatibutor {
    let (person_or_org, affiliation_entries) = match relation.relation {
        Agent::Person(person) => convert_person(person, affiliations),
        Agent::Organization(organization) => (convert_organization(organization), Vec::new()),
    };
    Creatibutor {
        role: relation.role,
        person_or_org,
        affiliations: affiliation_entries,
    }
}

/// Convert a person, returning the person payload and its affiliations.
fn convert_person(
    person: Person,
    affiliations: &dyn AffiliationResolver,
) -> (PersonOrOrg, Vec<AffiliationEntry>) {
    let affiliation_entries = person
        .affiliations
        .into_iter()
        .map(|affiliation| AffiliationEntry {
            id: affiliations.affiliation_id(&affiliation.identifiers),
            name: affiliation.name,
        })
        .collect();

    let person_or_org = PersonOrOrg {
        name: person.name,
        kind: "personal".to_string(),
        given_name: join_names(person.given_names),
        family_name: join_names(person.family_names),
        identifiers: convert_identifiers(person.identifiers),
    };
    (person_or_org, affiliation_entries)
}

fn convert_organization(organization: Organization) -> PersonOrOrg {
    PersonOrOrg {
        name: organization.name,
        kind: "organizational".to_string(),
        given_name: None,
        family_name: None,
        identifiers: convert_identifiers(organization.identifiers),
    }
}

fn join_names(names: Vec<String>) -> Option<String> {
    if names.is_empty() {
        None
    } else {
        Some(names.join(" "))
    }
}

/// Convert funding references: one entry per funder, each carrying the
/// reference's shared award.
///
/// Award titles carry no language tag in CCMM, so the award language is
/// detected from the title text. Person funders pass through raw and fail
/// repository validation visibly.
pub(crate) fn funding(
    references: Vec<FundingReference>,
    affiliations: &dyn AffiliationResolver,
) -> Vec<Funding> {
    let mut converted = Vec::new();
    for reference in references {
        let award = Award {
            title: reference.award_title.map(|title| {
                let lang = detect_lang2(&title);
                BTreeMap::from([(lang, title)])
            }),
            number: reference.local_identifier,
        };

        for funder in reference.funders {
            let funder = match funder {
                Agent::Organization(organization) => Funder::Organization(AffiliationEntry {
                    id: affiliations.affiliation_id(&organization.identifiers),
                    name: organization.name,
                }),
                Agent::Person(person) => Funder::Person(Box::new(person)),
            };
            converted.push(Funding {
                funder,
                award: Some(award.clone()),
            });
        }
    }
    converted
}
