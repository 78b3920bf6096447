//! Field-level production conversion rules.

use std::collections::BTreeMap;

use crate::langcodes::lang2_to_lang3;
use crate::model::nma::{
    AlternateTitle, Description, GeometryContent, Geometry, Location, RelatedResource, Subject,
    TemporalRepresentation, TermsOfUse, TimeReference, VocabularyRef,
};
use crate::model::production::{
    AdditionalDescription, AdditionalTitle, BareIdentifier, DateEntry, LocationFeature,
    Locations, RelatedResourceEntry, RepositoryIdentifier, RightsEntry, SubjectEntry,
};
use crate::vocabulary::{self, VocabularyResolver};

/// The date part of an ISO date-time (everything before `T`).
fn date_part(value: &str) -> String {
    value.split('T').next().unwrap_or(value).to_string()
}

/// Derive the publication date.
///
/// A `Created` time reference with an instant wins; its bare year fallback
/// applies only when no such instant exists at all.
pub(crate) fn publication_date(
    publication_year: Option<i32>,
    time_references: &[TimeReference],
) -> Option<String> {
    let created_instant = time_references
        .iter()
        .filter(|reference| {
            reference
                .date_type
                .as_ref()
                .is_some_and(|date_type| date_type.id == "Created")
        })
        .find_map(|reference| match &reference.temporal_representation {
            Some(TemporalRepresentation::TimeInstant(instant)) => Some(instant),
            _ => None,
        });

    if let Some(instant) = created_instant {
        instant
            .date_time
            .as_deref()
            .or(instant.date.as_deref())
            .map(date_part)
    } else {
        publication_year.map(|year| format!("{year}-01-01"))
    }
}

/// Flatten alternate titles: one entry per language entry per input title.
pub(crate) fn additional_titles(alternate_titles: Vec<AlternateTitle>) -> Vec<AdditionalTitle> {
    let mut converted = Vec::new();
    for alternate in alternate_titles {
        for title in alternate.title {
            converted.push(AdditionalTitle {
                title: Some(title.value),
                title_type: alternate.alternate_title_type.clone(),
                lang: lang2_to_lang3(&title.lang.id),
            });
        }
    }
    converted
}

/// Flatten descriptions, same pattern as the titles.
pub(crate) fn additional_descriptions(
    descriptions: Vec<Description>,
) -> Vec<AdditionalDescription> {
    let mut converted = Vec::new();
    for description in descriptions {
        for text in description.description_text {
            converted.push(AdditionalDescription {
                description: Some(text.value),
                description_type: description.description_type.clone(),
                lang: lang2_to_lang3(&text.lang.id),
            });
        }
    }
    converted
}

/// Flatten subjects to `{id?, subject}` entries.
///
/// Repository subject ids must be unique across schemes, so the scheme id is
/// prepended to the classification code; entries missing either part stay
/// unkeyed.
pub(crate) fn subjects(subjects: Vec<Subject>) -> Vec<SubjectEntry> {
    let mut converted = Vec::new();
    for subject in subjects {
        let vocabulary_id = match (&subject.subject_scheme, &subject.classification_code) {
            (Some(scheme), Some(code)) => Some(format!("{}:{}", scheme.id, code)),
            _ => None,
        };
        for title in subject.title {
            converted.push(SubjectEntry {
                id: vocabulary_id.clone(),
                subject: Some(title.value),
            });
        }
    }
    converted
}

/// Primary language first, then the others.
pub(crate) fn languages(
    primary_language: Option<VocabularyRef>,
    other_languages: Vec<VocabularyRef>,
) -> Vec<VocabularyRef> {
    match primary_language {
        Some(primary) => std::iter::once(primary).chain(other_languages).collect(),
        None => other_languages,
    }
}

/// Convert locations to the features container.
pub(crate) fn locations(locations: Vec<Location>) -> Option<Locations> {
    if locations.is_empty() {
        return None;
    }

    let features = locations
        .into_iter()
        .map(|location| {
            let place = location.names.first().cloned().or_else(|| {
                location
                    .related_objects
                    .first()
                    .and_then(|object| object.title.clone())
            });

            let identifiers = location
                .related_objects
                .iter()
                .filter_map(|object| object.iri.clone())
                .map(|iri| RepositoryIdentifier {
                    identifier: Some(iri),
                    scheme: Some("iri".to_string()),
                })
                .collect();

            let embedded = location.geometry.and_then(|wrapper| match wrapper.geometry {
                GeometryContent::GeoJson(geometry) => Some(geometry),
                GeometryContent::Raw(_) => None,
            });
            let geometry = embedded.or_else(|| {
                location.bounding_boxes.first().and_then(bounding_box_polygon)
            });

            LocationFeature {
                place,
                identifiers,
                geometry,
                description: location.relation_type.map(|relation| relation.id),
            }
        })
        .collect();

    Some(Locations { features })
}

/// Build the axis-aligned rectangle ring for a bounding box.
fn bounding_box_polygon(bbox: &crate::model::nma::BoundingBox) -> Option<Geometry> {
    let min_x = *bbox.lower_corner.first()?;
    let min_y = *bbox.lower_corner.get(1)?;
    let max_x = *bbox.upper_corner.first()?;
    let max_y = *bbox.upper_corner.get(1)?;

    Some(Geometry {
        kind: "Polygon".to_string(),
        coordinates: serde_json::json!([[
            [min_x, min_y],
            [max_x, min_y],
            [max_x, max_y],
            [min_x, max_y],
            [min_x, min_y],
        ]]),
    })
}

/// Convert time references to typed date entries.
///
/// An instant contributes its date-time's date part, an interval its
/// beginning date; references lacking a value or a type are dropped.
pub(crate) fn dates(time_references: Vec<TimeReference>) -> Vec<DateEntry> {
    time_references
        .into_iter()
        .filter_map(|reference| {
            let date = match reference.temporal_representation? {
                TemporalRepresentation::TimeInstant(instant) => {
                    instant.date_time.as_deref().map(date_part)
                }
                TemporalRepresentation::TimeInterval(interval) => {
                    interval.beginning.and_then(|bound| bound.date)
                }
            }?;
            let date_type = reference.date_type?;
            Some(DateEntry { date, date_type })
        })
        .collect()
}

/// Convert the terms of use to rights entries.
///
/// The license IRI is looked up in the licenses vocabulary; any failure
/// degrades to a link/title fallback built from the raw license labels.
pub(crate) fn rights(
    terms_of_use: Option<TermsOfUse>,
    vocabularies: &dyn VocabularyResolver,
) -> Vec<RightsEntry> {
    let Some(terms) = terms_of_use else {
        return Vec::new();
    };
    let Some(license) = terms.license else {
        return Vec::new();
    };

    let resolved = license
        .iri
        .as_deref()
        .map(|iri| vocabularies.resolve(vocabulary::LICENSES, iri));
    match resolved {
        Some(Ok(id)) => vec![RightsEntry::Resolved { id }],
        outcome => {
            if let Some(Err(error)) = outcome {
                tracing::warn!(
                    iri = license.iri.as_deref().unwrap_or_default(),
                    %error,
                    "license vocabulary lookup failed, falling back to link representation"
                );
            }
            let title: BTreeMap<String, String> = license
                .label
                .into_iter()
                .map(|label| (label.lang.id, label.value))
                .collect();
            vec![RightsEntry::Link {
                link: license.iri,
                title,
            }]
        }
    }
}

/// Convert related resources; identifiers come from the IRI and the resource
/// URL, deduplicated in that order.
pub(crate) fn related_resources(resources: Vec<RelatedResource>) -> Vec<RelatedResourceEntry> {
    resources
        .into_iter()
        .map(|resource| {
            let mut identifiers: Vec<BareIdentifier> = Vec::new();
            for candidate in [resource.iri, resource.resource_url].into_iter().flatten() {
                if !identifiers.iter().any(|entry| entry.identifier == candidate) {
                    identifiers.push(BareIdentifier {
                        identifier: candidate,
                    });
                }
            }
            RelatedResourceEntry {
                title: resource.title,
                identifiers,
                relation_type: resource.resource_relation_type,
                resource_type: resource.resource_type,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::nma::{
        BoundingBox, LocalizedText, LocationGeometry, RelatedObject, TimeInstant, TimeInterval,
        IntervalBound,
    };
    use crate::vocabulary::MemoryResolver;
    use serde_json::json;

    fn created_reference(date_time: &str) -> TimeReference {
        TimeReference {
            temporal_representation: Some(TemporalRepresentation::TimeInstant(TimeInstant {
                date_time: Some(date_time.to_string()),
                date: None,
            })),
            date_type: Some(VocabularyRef::new("Created")),
        }
    }

    #[test]
    fn test_publication_date_prefers_created_instant() {
        let references = vec![created_reference("2025-04-27T12:00:01+02:00")];
        assert_eq!(
            publication_date(Some(2025), &references),
            Some("2025-04-27".to_string())
        );
    }

    #[test]
    fn test_publication_date_falls_back_to_year() {
        assert_eq!(
            publication_date(Some(2025), &[]),
            Some("2025-01-01".to_string())
        );
        assert_eq!(publication_date(None, &[]), None);
    }

    #[test]
    fn test_publication_date_ignores_non_created_references() {
        let references = vec![TimeReference {
            temporal_representation: Some(TemporalRepresentation::TimeInstant(TimeInstant {
                date_time: Some("2024-01-01T00:00:00Z".to_string()),
                date: None,
            })),
            date_type: Some(VocabularyRef::new("Collected")),
        }];
        assert_eq!(
            publication_date(Some(2025), &references),
            Some("2025-01-01".to_string())
        );
    }

    #[test]
    fn test_additional_titles_flatten_languages() {
        let titles = vec![AlternateTitle {
            alternate_title_type: Some(VocabularyRef::new("translatedTitle")),
            title: vec![
                LocalizedText {
                    lang: VocabularyRef::new("en"),
                    value: "Air quality".to_string(),
                },
                LocalizedText {
                    lang: VocabularyRef::new("cs"),
                    value: "Kvalita ovzduší".to_string(),
                },
            ],
        }];

        let converted = additional_titles(titles);
        assert_eq!(converted.len(), 2);
        assert_eq!(converted[0].lang, Some(VocabularyRef::new("ENG")));
        assert_eq!(converted[1].lang, Some(VocabularyRef::new("CES")));
        assert_eq!(
            converted[1].title_type,
            Some(VocabularyRef::new("translatedTitle"))
        );
    }

    #[test]
    fn test_additional_titles_drop_unmappable_language() {
        let titles = vec![AlternateTitle {
            alternate_title_type: None,
            title: vec![LocalizedText {
                lang: VocabularyRef::new("und"),
                value: "Untagged".to_string(),
            }],
        }];

        let converted = additional_titles(titles);
        assert_eq!(converted.len(), 1);
        assert_eq!(converted[0].lang, None);
    }

    #[test]
    fn test_subjects_key_by_scheme_and_code() {
        let input = vec![
            Subject {
                classification_code: Some("10511".to_string()),
                subject_scheme: Some(VocabularyRef::new("Frascati")),
                title: vec![LocalizedText {
                    lang: VocabularyRef::new("cs"),
                    value: "Environmentální vědy".to_string(),
                }],
                ..Subject::default()
            },
            Subject {
                title: vec![LocalizedText {
                    lang: VocabularyRef::new("cs"),
                    value: "kvalita ovzduší".to_string(),
                }],
                ..Subject::default()
            },
        ];

        let converted = subjects(input);
        assert_eq!(converted.len(), 2);
        assert_eq!(converted[0].id.as_deref(), Some("Frascati:10511"));
        assert_eq!(converted[1].id, None);
        assert_eq!(converted[1].subject.as_deref(), Some("kvalita ovzduší"));
    }

    #[test]
    fn test_languages_primary_first() {
        let converted = languages(
            Some(VocabularyRef::new("CES")),
            vec![VocabularyRef::new("ENG")],
        );
        assert_eq!(
            converted,
            vec![VocabularyRef::new("CES"), VocabularyRef::new("ENG")]
        );

        let converted = languages(None, vec![VocabularyRef::new("ENG")]);
        assert_eq!(converted, vec![VocabularyRef::new("ENG")]);
    }

    #[test]
    fn test_locations_bounding_box_fallback() {
        let input = vec![Location {
            bounding_boxes: vec![BoundingBox {
                lower_corner: vec![1.0, 2.0],
                upper_corner: vec![3.0, 4.0],
            }],
            geometry: Some(LocationGeometry {
                geometry: GeometryContent::Raw("<gml:MultiSurface/>".to_string()),
            }),
            names: vec!["Region".to_string()],
            related_objects: vec![RelatedObject {
                iri: Some("https://example.com/region/1".to_string()),
                title: Some("Region".to_string()),
            }],
            relation_type: Some(VocabularyRef::new("Collected")),
        }];

        let converted = locations(input).expect("features present");
        let feature = &converted.features[0];
        assert_eq!(feature.place.as_deref(), Some("Region"));
        assert_eq!(feature.description.as_deref(), Some("Collected"));
        assert_eq!(feature.identifiers[0].scheme.as_deref(), Some("iri"));
        let geometry = feature.geometry.as_ref().expect("geometry synthesized");
        assert_eq!(geometry.kind, "Polygon");
        assert_eq!(
            geometry.coordinates,
            json!([[[1.0, 2.0], [3.0, 2.0], [3.0, 4.0], [1.0, 4.0], [1.0, 2.0]]])
        );
    }

    #[test]
    fn test_locations_embedded_geojson_wins_over_bounding_box() {
        let input = vec![Location {
            bounding_boxes: vec![BoundingBox {
                lower_corner: vec![1.0, 2.0],
                upper_corner: vec![3.0, 4.0],
            }],
            geometry: Some(LocationGeometry {
                geometry: GeometryContent::GeoJson(Geometry {
                    kind: "Point".to_string(),
                    coordinates: json!([10.0, 20.0]),
                }),
            }),
            ..Location::default()
        }];

        let converted = locations(input).expect("features present");
        let geometry = converted.features[0].geometry.as_ref().expect("geometry");
        assert_eq!(geometry.kind, "Point");
    }

    #[test]
    fn test_locations_place_falls_back_to_related_object_title() {
        let input = vec![Location {
            related_objects: vec![RelatedObject {
                iri: None,
                title: Some("Register entry".to_string()),
            }],
            ..Location::default()
        }];

        let converted = locations(input).expect("features present");
        assert_eq!(
            converted.features[0].place.as_deref(),
            Some("Register entry")
        );
    }

    #[test]
    fn test_dates_conversion_and_dropping() {
        let references = vec![
            created_reference("2025-04-27T12:00:01+02:00"),
            TimeReference {
                temporal_representation: Some(TemporalRepresentation::TimeInterval(
                    TimeInterval {
                        beginning: Some(IntervalBound {
                            date: Some("2024-01-01".to_string()),
                        }),
                        end: Some(IntervalBound {
                            date: Some("2024-12-31".to_string()),
                        }),
                    },
                )),
                date_type: Some(VocabularyRef::new("Collected")),
            },
            // no date type: dropped
            TimeReference {
                temporal_representation: Some(TemporalRepresentation::TimeInstant(TimeInstant {
                    date_time: Some("2024-06-01T00:00:00Z".to_string()),
                    date: None,
                })),
                date_type: None,
            },
        ];

        let converted = dates(references);
        assert_eq!(converted.len(), 2);
        assert_eq!(converted[0].date, "2025-04-27");
        assert_eq!(converted[0].date_type, VocabularyRef::new("Created"));
        assert_eq!(converted[1].date, "2024-01-01");
    }

    #[test]
    fn test_rights_resolved_license() {
        let mut resolver = MemoryResolver::new();
        resolver.insert(
            "licenses",
            "https://creativecommons.org/licenses/by/4.0/",
            "cc-by-4.0",
        );
        let terms = TermsOfUse {
            license: Some(crate::model::nma::LabelledReference {
                iri: Some("https://creativecommons.org/licenses/by/4.0/".to_string()),
                label: Vec::new(),
            }),
            ..TermsOfUse::default()
        };

        let converted = rights(Some(terms), &resolver);
        assert_eq!(
            converted,
            vec![RightsEntry::Resolved {
                id: "cc-by-4.0".to_string()
            }]
        );
    }

    #[test]
    fn test_rights_fallback_to_link() {
        let resolver = MemoryResolver::new();
        let terms = TermsOfUse {
            license: Some(crate::model::nma::LabelledReference {
                iri: Some("https://creativecommons.org/licenses/by/4.0/".to_string()),
                label: vec![LocalizedText {
                    lang: VocabularyRef::new("en"),
                    value: "Attribution 4.0 International".to_string(),
                }],
            }),
            ..TermsOfUse::default()
        };

        let converted = rights(Some(terms), &resolver);
        match &converted[0] {
            RightsEntry::Link { link, title } => {
                assert_eq!(
                    link.as_deref(),
                    Some("https://creativecommons.org/licenses/by/4.0/")
                );
                assert_eq!(
                    title.get("en").map(String::as_str),
                    Some("Attribution 4.0 International")
                );
            }
            other => panic!("unexpected rights entry: {other:?}"),
        }
    }

    #[test]
    fn test_related_resources_deduplicate_identifiers() {
        let resources = vec![RelatedResource {
            iri: Some("https://example.com/same".to_string()),
            resource_url: Some("https://example.com/same".to_string()),
            title: Some("Self-identified".to_string()),
            ..RelatedResource::default()
        }];

        let converted = related_resources(resources);
        assert_eq!(converted[0].identifiers.len(), 1);
        assert_eq!(converted[0].identifiers[0].identifier, "https://example.com/same");
    }
}
