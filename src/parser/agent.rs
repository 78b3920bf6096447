//! Parsing rules for persons, organizations and their relations.

use crate::error::{HarvestError, Result};
use crate::model::nma::{
    Address, Affiliation, Agent, ContactPoint, Identifier, Organization, Person,
    QualifiedRelation,
};
use crate::vocabulary;
use crate::xml::ElementScope;

use super::NmaParser;

impl NmaParser<'_> {
    /// Take the `person`-or-`organization` choice out of a wrapper element.
    pub(crate) fn take_agent_choice(
        &self,
        scope: &mut ElementScope<'_, '_>,
    ) -> Result<Agent> {
        if let Some(person) = scope.take_child("person") {
            return Ok(Agent::Person(self.parse_person(person)?));
        }
        if let Some(organization) = scope.take_child("organization") {
            return Ok(Agent::Organization(self.parse_organization(organization)?));
        }
        Err(HarvestError::MissingElement {
            element: "person|organization".to_string(),
            context: scope.path().to_string(),
        })
    }

    pub(crate) fn parse_person(&self, mut scope: ElementScope<'_, '_>) -> Result<Person> {
        let person = Person {
            affiliations: scope
                .take_children("affiliation")
                .into_iter()
                .map(|child| self.parse_affiliation(child))
                .collect::<Result<_>>()?,
            contact_points: scope
                .take_children("contact_point")
                .into_iter()
                .map(parse_contact_point)
                .collect::<Result<_>>()?,
            family_names: scope.take_children_texts("family_name")?,
            given_names: scope.take_children_texts("given_name")?,
            identifiers: self.take_identifiers(&mut scope)?,
            name: scope.take_child_text("name")?,
        };
        scope.finish()?;
        Ok(person)
    }

    pub(crate) fn parse_organization(
        &self,
        mut scope: ElementScope<'_, '_>,
    ) -> Result<Organization> {
        let organization = Organization {
            iri: scope.take_child_text("iri")?,
            identifiers: self.take_identifiers(&mut scope)?,
            name: scope.take_child_text("name")?,
        };
        scope.finish()?;
        Ok(organization)
    }

    fn parse_affiliation(&self, mut scope: ElementScope<'_, '_>) -> Result<Affiliation> {
        let affiliation = Affiliation {
            identifiers: self.take_identifiers(&mut scope)?,
            name: scope.take_child_text("name")?,
        };
        scope.finish()?;
        Ok(affiliation)
    }

    /// Take all `identifier` children of the current element.
    pub(crate) fn take_identifiers(
        &self,
        scope: &mut ElementScope<'_, '_>,
    ) -> Result<Vec<Identifier>> {
        scope
            .take_children("identifier")
            .into_iter()
            .map(|child| self.parse_identifier(child))
            .collect()
    }

    pub(crate) fn parse_identifier(&self, mut scope: ElementScope<'_, '_>) -> Result<Identifier> {
        let identifier = Identifier {
            iri: scope.take_child_text("iri")?,
            value: scope.take_child_text("value")?,
            scheme: self.take_vocabulary(
                &mut scope,
                "identifier_scheme",
                vocabulary::IDENTIFIER_SCHEMES,
            )?,
        };
        scope.finish()?;
        Ok(identifier)
    }

    /// Parse a qualified relation: a role paired with a person or organization
    /// behind a `relation` choice wrapper.
    pub(crate) fn parse_qualified_relation(
        &self,
        mut scope: ElementScope<'_, '_>,
    ) -> Result<QualifiedRelation> {
        let context = scope.path().to_string();
        let mut wrapper = scope
            .take_child("relation")
            .ok_or_else(|| HarvestError::MissingElement {
                element: "relation".to_string(),
                context,
            })?;
        let relation = self.take_agent_choice(&mut wrapper)?;
        wrapper.finish()?;

        let role =
            self.take_vocabulary(&mut scope, "role", vocabulary::RESOURCE_AGENT_ROLE_TYPES)?;
        scope.finish()?;
        Ok(QualifiedRelation { relation, role })
    }
}

fn parse_contact_point(mut scope: ElementScope<'_, '_>) -> Result<ContactPoint> {
    let contact_point = ContactPoint {
        addresses: scope
            .take_children("address")
            .into_iter()
            .map(parse_address)
            .collect::<Result<_>>()?,
        emails: scope.take_children_texts("email")?,
        phones: scope.take_children_texts("phone")?,
    };
    scope.finish()?;
    Ok(contact_point)
}

fn parse_address(mut scope: ElementScope<'_, '_>) -> Result<Address> {
    let address = Address {
        full_addresses: scope.take_children_texts("full_address")?,
    };
    scope.finish()?;
    Ok(address)
}
