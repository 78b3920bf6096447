//! Parsing rules for descriptive metadata: titles, descriptions, subjects
//! and related resources.

use crate::error::Result;
use crate::model::nma::{AlternateTitle, Description, RelatedResource, Subject};
use crate::vocabulary;
use crate::xml::ElementScope;

use super::{take_localized, NmaParser};

impl NmaParser<'_> {
    pub(crate) fn parse_alternate_title(
        &self,
        mut scope: ElementScope<'_, '_>,
    ) -> Result<AlternateTitle> {
        let title = AlternateTitle {
            alternate_title_type: self.take_vocabulary(
                &mut scope,
                "alternate_title_type",
                vocabulary::TITLE_TYPES,
            )?,
            title: take_localized(&mut scope, "title")?,
        };
        scope.finish()?;
        Ok(title)
    }

    pub(crate) fn parse_description(
        &self,
        mut scope: ElementScope<'_, '_>,
    ) -> Result<Description> {
        let description = Description {
            description_text: take_localized(&mut scope, "description_text")?,
            description_type: self.take_vocabulary(
                &mut scope,
                "description_type",
                vocabulary::DESCRIPTION_TYPES,
            )?,
        };
        scope.finish()?;
        Ok(description)
    }

    pub(crate) fn parse_subject(&self, mut scope: ElementScope<'_, '_>) -> Result<Subject> {
        let subject = Subject {
            iri: scope.take_child_text("iri")?,
            classification_code: scope.take_child_text("classification_code")?,
            definition: take_localized(&mut scope, "definition")?,
            subject_scheme: self.take_vocabulary(
                &mut scope,
                "subject_scheme",
                vocabulary::SUBJECT_SCHEMES,
            )?,
            title: take_localized(&mut scope, "title")?,
        };
        scope.finish()?;
        Ok(subject)
    }

    pub(crate) fn parse_related_resource(
        &self,
        mut scope: ElementScope<'_, '_>,
    ) -> Result<RelatedResource> {
        let resource = RelatedResource {
            iri: scope.take_child_text("iri")?,
            resource_relation_type: self.take_vocabulary(
                &mut scope,
                "resource_relation_type",
                vocabulary::RESOURCE_RELATION_TYPES,
            )?,
            resource_type: self.take_vocabulary(
                &mut scope,
                "resource_type",
                vocabulary::RESOURCE_TYPES,
            )?,
            resource_url: scope.take_child_text("resource_url")?,
            title: scope.take_child_text("title")?,
        };
        scope.finish()?;
        Ok(resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::nma::VocabularyRef;
    use crate::vocabulary::MemoryResolver;
    use roxmltree::Document;

    fn resolver() -> MemoryResolver {
        let mut resolver = MemoryResolver::new();
        resolver.insert(
            "titletypes",
            "https://example.com/title/translatedTitle",
            "translatedTitle",
        );
        resolver.insert(
            "descriptiontypes",
            "https://example.com/description/abstract",
            "abstract",
        );
        resolver.insert("subjectschemes", "https://example.com/scheme/", "Frascati");
        // resource relation types resolve under the remapped category name
        resolver.insert(
            "relationtypes",
            "https://example.com/relation/IsDerivedFrom",
            "IsDerivedFrom",
        );
        resolver.insert(
            "resourcetypes",
            "https://example.com/resource/Dataset",
            "Dataset",
        );
        resolver
    }

    #[test]
    fn test_parse_alternate_title() {
        let resolver = resolver();
        let parser = NmaParser::new(&resolver);
        let doc = Document::parse(
            r#"<alternate_title>
                <alternate_title_type>
                    <iri>https://example.com/title/translatedTitle</iri>
                </alternate_title_type>
                <title xml:lang="en">Air quality measurements</title>
            </alternate_title>"#,
        )
        .unwrap();

        let title = parser.parse_alternate_title(ElementScope::root(&doc)).unwrap();
        assert_eq!(
            title.alternate_title_type,
            Some(VocabularyRef::new("translatedTitle"))
        );
        assert_eq!(title.title.len(), 1);
        assert_eq!(title.title[0].value, "Air quality measurements");
    }

    #[test]
    fn test_parse_subject_with_scheme() {
        let resolver = resolver();
        let parser = NmaParser::new(&resolver);
        let doc = Document::parse(
            r#"<subject>
                <iri>https://example.com/scheme/10511</iri>
                <classification_code>10511</classification_code>
                <subject_scheme><iri>https://example.com/scheme/</iri></subject_scheme>
                <title xml:lang="cs">Environmentální vědy</title>
            </subject>"#,
        )
        .unwrap();

        let subject = parser.parse_subject(ElementScope::root(&doc)).unwrap();
        assert_eq!(subject.classification_code.as_deref(), Some("10511"));
        assert_eq!(subject.subject_scheme, Some(VocabularyRef::new("Frascati")));
        assert_eq!(subject.title[0].value, "Environmentální vědy");
    }

    #[test]
    fn test_parse_subject_free_keyword() {
        let resolver = resolver();
        let parser = NmaParser::new(&resolver);
        let doc =
            Document::parse(r#"<subject><title xml:lang="cs">kvalita ovzduší</title></subject>"#)
                .unwrap();

        let subject = parser.parse_subject(ElementScope::root(&doc)).unwrap();
        assert_eq!(subject.classification_code, None);
        assert_eq!(subject.subject_scheme, None);
        assert_eq!(subject.title.len(), 1);
    }

    #[test]
    fn test_parse_related_resource_remaps_relation_category() {
        let resolver = resolver();
        let parser = NmaParser::new(&resolver);
        let doc = Document::parse(
            r#"<related_resource>
                <iri>https://example.com/source</iri>
                <resource_relation_type>
                    <iri>https://example.com/relation/IsDerivedFrom</iri>
                </resource_relation_type>
                <resource_type><iri>https://example.com/resource/Dataset</iri></resource_type>
                <resource_url>https://example.com/data</resource_url>
                <title>Source data</title>
            </related_resource>"#,
        )
        .unwrap();

        let resource = parser.parse_related_resource(ElementScope::root(&doc)).unwrap();
        assert_eq!(
            resource.resource_relation_type,
            Some(VocabularyRef::new("IsDerivedFrom"))
        );
        assert_eq!(resource.resource_type, Some(VocabularyRef::new("Dataset")));
        assert_eq!(resource.title.as_deref(), Some("Source data"));
    }
}
