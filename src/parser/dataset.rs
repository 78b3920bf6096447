//! The dataset root rule and its administrative sub-entities.

use crate::error::{HarvestError, Result};
use crate::model::nma::{
    Agent, Dataset, FundingReference, MetadataIdentification, Provenance, TermsOfUse,
    ValidationResult,
};
use crate::vocabulary;
use crate::xml::ElementScope;

use super::{parse_iri_ref, parse_labelled_reference, take_localized, NmaParser};

impl NmaParser<'_> {
    /// Parse the `<dataset>` root element.
    pub(crate) fn parse_dataset(&self, mut scope: ElementScope<'_, '_>) -> Result<Dataset> {
        let publication_year = match scope.take_child_text("publication_year")? {
            Some(text) => Some(text.parse::<i32>().map_err(|_| {
                HarvestError::InvalidValue {
                    context: format!("{}/publication_year", scope.path()),
                    expected: "year",
                    value: text,
                }
            })?),
            None => None,
        };

        let dataset = Dataset {
            iri: scope.take_child_text("iri")?,
            alternate_titles: scope
                .take_children("alternate_title")
                .into_iter()
                .map(|child| self.parse_alternate_title(child))
                .collect::<Result<_>>()?,
            descriptions: scope
                .take_children("description")
                .into_iter()
                .map(|child| self.parse_description(child))
                .collect::<Result<_>>()?,
            distributions: scope
                .take_children("distribution")
                .into_iter()
                .map(|child| self.parse_distribution(child))
                .collect::<Result<_>>()?,
            funding_references: scope
                .take_children("funding_reference")
                .into_iter()
                .map(|child| self.parse_funding_reference(child))
                .collect::<Result<_>>()?,
            identifiers: self.take_identifiers(&mut scope)?,
            locations: scope
                .take_children("location")
                .into_iter()
                .map(|child| self.parse_location(child))
                .collect::<Result<_>>()?,
            metadata_identifications: scope
                .take_children("metadata_identification")
                .into_iter()
                .map(|child| self.parse_metadata_identification(child))
                .collect::<Result<_>>()?,
            other_languages: scope
                .take_children("other_language")
                .into_iter()
                .map(|child| self.parse_vocabulary(vocabulary::LANGUAGES, child))
                .collect::<Result<_>>()?,
            primary_language: self.take_vocabulary(
                &mut scope,
                "primary_language",
                vocabulary::LANGUAGES,
            )?,
            provenances: scope
                .take_children("provenance")
                .into_iter()
                .map(parse_provenance)
                .collect::<Result<_>>()?,
            publication_year,
            qualified_relations: scope
                .take_children("qualified_relation")
                .into_iter()
                .map(|child| self.parse_qualified_relation(child))
                .collect::<Result<_>>()?,
            related_resources: scope
                .take_children("related_resource")
                .into_iter()
                .map(|child| self.parse_related_resource(child))
                .collect::<Result<_>>()?,
            resource_type: self.take_vocabulary(
                &mut scope,
                "resource_type",
                vocabulary::RESOURCE_TYPES,
            )?,
            subjects: scope
                .take_children("subject")
                .into_iter()
                .map(|child| self.parse_subject(child))
                .collect::<Result<_>>()?,
            terms_of_use: scope
                .take_child("terms_of_use")
                .map(|child| self.parse_terms_of_use(child))
                .transpose()?,
            time_references: scope
                .take_children("time_reference")
                .into_iter()
                .map(|child| self.parse_time_reference(child))
                .collect::<Result<_>>()?,
            title: scope.take_child_text("title")?,
            validation_results: scope
                .take_children("validation_result")
                .into_iter()
                .map(parse_validation_result)
                .collect::<Result<_>>()?,
            version: scope.take_child_text("version")?,
        };
        scope.finish()?;
        Ok(dataset)
    }

    fn parse_funding_reference(
        &self,
        mut scope: ElementScope<'_, '_>,
    ) -> Result<FundingReference> {
        let funders = scope
            .take_children("funder")
            .into_iter()
            .map(|mut child| {
                let agent = self.take_agent_choice(&mut child)?;
                child.finish()?;
                Ok(agent)
            })
            .collect::<Result<Vec<Agent>>>()?;
        let reference = FundingReference {
            iri: scope.take_child_text("iri")?,
            award_title: scope.take_child_text("award_title")?,
            funders,
            funding_program: scope.take_child_text("funding_program")?,
            local_identifier: scope.take_child_text("local_identifier")?,
        };
        scope.finish()?;
        Ok(reference)
    }

    fn parse_terms_of_use(&self, mut scope: ElementScope<'_, '_>) -> Result<TermsOfUse> {
        let contact_points = scope
            .take_children("contact_point")
            .into_iter()
            .map(|mut child| {
                let agent = self.take_agent_choice(&mut child)?;
                child.finish()?;
                Ok(agent)
            })
            .collect::<Result<Vec<Agent>>>()?;
        let terms = TermsOfUse {
            access_rights: self.take_vocabulary(
                &mut scope,
                "access_rights",
                vocabulary::ACCESS_RIGHTS,
            )?,
            contact_points,
            description: take_localized(&mut scope, "description")?,
            // the license IRI is resolved only by the production transform
            license: scope.take_child("license").map(parse_labelled_reference).transpose()?,
        };
        scope.finish()?;
        Ok(terms)
    }

    fn parse_metadata_identification(
        &self,
        mut scope: ElementScope<'_, '_>,
    ) -> Result<MetadataIdentification> {
        let identification = MetadataIdentification {
            iri: scope.take_child_text("iri")?,
            conforms_to_standards: scope
                .take_children("conforms_to_standard")
                .into_iter()
                .map(parse_labelled_reference)
                .collect::<Result<_>>()?,
            date_created: scope.take_child_text("date_created")?,
            date_updated: scope.take_child_text("date_updated")?,
            languages: scope
                .take_children("language")
                .into_iter()
                .map(|child| self.parse_vocabulary(vocabulary::LANGUAGES, child))
                .collect::<Result<_>>()?,
            original_repository: scope
                .take_child("original_repository")
                .map(parse_iri_ref)
                .transpose()?,
            qualified_relations: scope
                .take_children("qualified_relation")
                .into_iter()
                .map(|child| self.parse_qualified_relation(child))
                .collect::<Result<_>>()?,
        };
        scope.finish()?;
        Ok(identification)
    }
}

fn parse_provenance(mut scope: ElementScope<'_, '_>) -> Result<Provenance> {
    let provenance = Provenance {
        iri: scope.take_child_text("iri")?,
    };
    scope.finish()?;
    Ok(provenance)
}

fn parse_validation_result(mut scope: ElementScope<'_, '_>) -> Result<ValidationResult> {
    let result = ValidationResult {
        iri: scope.take_child_text("iri")?,
    };
    scope.finish()?;
    Ok(result)
}
