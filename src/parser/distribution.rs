//! Parsing rules for distributions.

use crate::error::{HarvestError, Result};
use crate::model::nma::{
    AccessService, Checksum, DataService, Distribution, DownloadableFile, EndpointUrl,
    VocabularyRef,
};
use crate::vocabulary;
use crate::xml::ElementScope;

use super::{parse_iri_ref, parse_labelled_reference, take_localized, NmaParser};

impl NmaParser<'_> {
    /// Parse the `distribution` choice wrapper: a data service or a
    /// downloadable file.
    pub(crate) fn parse_distribution(
        &self,
        mut scope: ElementScope<'_, '_>,
    ) -> Result<Distribution> {
        if let Some(service) = scope.take_child("distribution_data_service") {
            let parsed = Distribution::DataService(self.parse_data_service(service)?);
            scope.finish()?;
            return Ok(parsed);
        }
        if let Some(file) = scope.take_child("distribution_downloadable_file") {
            let parsed = Distribution::DownloadableFile(self.parse_downloadable_file(file)?);
            scope.finish()?;
            return Ok(parsed);
        }
        Err(HarvestError::MissingElement {
            element: "distribution_data_service|distribution_downloadable_file".to_string(),
            context: scope.path().to_string(),
        })
    }

    fn parse_data_service(&self, mut scope: ElementScope<'_, '_>) -> Result<DataService> {
        let service = DataService {
            iri: scope.take_child_text("iri")?,
            access_services: scope
                .take_children("access_service")
                .into_iter()
                .map(parse_access_service)
                .collect::<Result<_>>()?,
            description: take_localized(&mut scope, "description")?,
            documentations: scope
                .take_children("documentation")
                .into_iter()
                .map(parse_iri_ref)
                .collect::<Result<_>>()?,
            conforms_to_specifications: scope
                .take_children("conforms_to_specification")
                .into_iter()
                .map(parse_labelled_reference)
                .collect::<Result<_>>()?,
            title: scope.take_child_text("title")?,
        };
        scope.finish()?;
        Ok(service)
    }

    fn parse_downloadable_file(
        &self,
        mut scope: ElementScope<'_, '_>,
    ) -> Result<DownloadableFile> {
        let byte_size = match scope.take_child_text("byte_size")? {
            Some(text) => Some(text.parse::<u64>().map_err(|_| {
                HarvestError::InvalidValue {
                    context: format!("{}/byte_size", scope.path()),
                    expected: "byte count",
                    value: text,
                }
            })?),
            None => None,
        };
        let file = DownloadableFile {
            iri: scope.take_child_text("iri")?,
            access_urls: scope
                .take_children("access_url")
                .into_iter()
                .map(parse_labelled_reference)
                .collect::<Result<_>>()?,
            byte_size,
            checksum: scope
                .take_child("checksum")
                .map(|child| self.parse_checksum(child))
                .transpose()?,
            conforms_to_schemas: scope
                .take_children("conforms_to_schema")
                .into_iter()
                .map(parse_labelled_reference)
                .collect::<Result<_>>()?,
            download_urls: scope
                .take_children("download_url")
                .into_iter()
                .map(parse_labelled_reference)
                .collect::<Result<_>>()?,
            format: self.take_vocabulary(&mut scope, "format", vocabulary::FILE_FORMATS)?,
            media_type: scope
                .take_child("media_type")
                .map(parse_media_type)
                .transpose()?,
            title: scope.take_child_text("title")?,
        };
        scope.finish()?;
        Ok(file)
    }

    fn parse_checksum(&self, mut scope: ElementScope<'_, '_>) -> Result<Checksum> {
        let checksum = Checksum {
            algorithm: self.take_vocabulary(
                &mut scope,
                "algorithm",
                vocabulary::CHECKSUM_ALGORITHMS,
            )?,
            checksum_value: scope.take_child_text("checksum_value")?,
        };
        scope.finish()?;
        Ok(checksum)
    }
}

/// Parse a media type reference.
///
/// Media types have no vocabulary mapping on the repository side; the IRI
/// passes through as the id, unresolved.
fn parse_media_type(mut scope: ElementScope<'_, '_>) -> Result<VocabularyRef> {
    let iri = super::require(&mut scope, "iri")?;
    take_localized(&mut scope, "label")?;
    scope.finish()?;
    Ok(VocabularyRef::new(iri))
}

fn parse_access_service(mut scope: ElementScope<'_, '_>) -> Result<AccessService> {
    let service = AccessService {
        iri: scope.take_child_text("iri")?,
        endpoint_urls: scope
            .take_children("endpoint_url")
            .into_iter()
            .map(parse_endpoint_url)
            .collect::<Result<_>>()?,
    };
    scope.finish()?;
    Ok(service)
}

fn parse_endpoint_url(mut scope: ElementScope<'_, '_>) -> Result<EndpointUrl> {
    let endpoint = EndpointUrl {
        iri: scope.take_child_text("iri")?,
        title: scope.take_child_text("title")?,
    };
    scope.finish()?;
    Ok(endpoint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::MemoryResolver;
    use roxmltree::Document;

    fn resolver() -> MemoryResolver {
        let mut resolver = MemoryResolver::new();
        // file formats resolve under the remapped category name
        resolver.insert("filetypes", "https://example.com/file-type/GPKG", "GPKG");
        resolver.insert(
            "checksumalgorithms",
            "https://www.iana.org/go/rfc6920",
            "rfc6920",
        );
        resolver
    }

    #[test]
    fn test_parse_downloadable_file() {
        let resolver = resolver();
        let parser = NmaParser::new(&resolver);
        let doc = Document::parse(
            r#"<distribution>
                <distribution_downloadable_file>
                    <iri>http://portal.chmi.cz/AQ_DATA</iri>
                    <title>Kvalita ovzduší</title>
                    <byte_size>256</byte_size>
                    <checksum>
                        <algorithm><iri>https://www.iana.org/go/rfc6920</iri></algorithm>
                        <checksum_value>9c56cc51</checksum_value>
                    </checksum>
                    <download_url>
                        <iri>https://example.com/data.zip</iri>
                        <label xml:lang="en">Dataset in Geopackage format</label>
                    </download_url>
                    <format><iri>https://example.com/file-type/GPKG</iri></format>
                    <media_type><iri>https://example.com/file-type/ZIP</iri></media_type>
                </distribution_downloadable_file>
            </distribution>"#,
        )
        .unwrap();

        let distribution = parser.parse_distribution(ElementScope::root(&doc)).unwrap();
        let Distribution::DownloadableFile(file) = distribution else {
            panic!("expected a downloadable file");
        };
        assert_eq!(file.byte_size, Some(256));
        assert_eq!(file.format, Some(VocabularyRef::new("GPKG")));
        // media type passes through unresolved
        assert_eq!(
            file.media_type,
            Some(VocabularyRef::new("https://example.com/file-type/ZIP"))
        );
        assert_eq!(
            file.checksum.as_ref().and_then(|c| c.checksum_value.as_deref()),
            Some("9c56cc51")
        );
        assert_eq!(file.download_urls.len(), 1);
    }

    #[test]
    fn test_parse_data_service() {
        let resolver = resolver();
        let parser = NmaParser::new(&resolver);
        let doc = Document::parse(
            r#"<distribution>
                <distribution_data_service>
                    <iri>https://gis.example.com/wms</iri>
                    <title>WMS service</title>
                    <access_service>
                        <iri>https://gis.example.com/wms</iri>
                        <endpoint_url>
                            <iri>https://gis.example.com/wms</iri>
                            <title>Endpoint of WMS service</title>
                        </endpoint_url>
                    </access_service>
                    <description xml:lang="cs">Prohlížecí služba</description>
                    <documentation><iri>https://geoportal.example.com/doc</iri></documentation>
                    <conforms_to_specification>
                        <iri></iri>
                        <label xml:lang="cs">NAŘÍZENÍ KOMISE</label>
                    </conforms_to_specification>
                </distribution_data_service>
            </distribution>"#,
        )
        .unwrap();

        let distribution = parser.parse_distribution(ElementScope::root(&doc)).unwrap();
        let Distribution::DataService(service) = distribution else {
            panic!("expected a data service");
        };
        assert_eq!(service.access_services.len(), 1);
        assert_eq!(service.access_services[0].endpoint_urls.len(), 1);
        // explicitly empty iri survives as an empty string
        assert_eq!(
            service.conforms_to_specifications[0].iri.as_deref(),
            Some("")
        );
    }

    #[test]
    fn test_parse_distribution_requires_choice() {
        let resolver = resolver();
        let parser = NmaParser::new(&resolver);
        let doc = Document::parse("<distribution/>").unwrap();

        let err = parser.parse_distribution(ElementScope::root(&doc)).unwrap_err();
        assert!(matches!(err, HarvestError::MissingElement { .. }));
    }

    #[test]
    fn test_parse_byte_size_rejects_non_number() {
        let resolver = resolver();
        let parser = NmaParser::new(&resolver);
        let doc = Document::parse(
            r#"<distribution>
                <distribution_downloadable_file>
                    <byte_size>many</byte_size>
                </distribution_downloadable_file>
            </distribution>"#,
        )
        .unwrap();

        let err = parser.parse_distribution(ElementScope::root(&doc)).unwrap_err();
        assert!(matches!(err, HarvestError::InvalidValue { .. }));
    }
}
