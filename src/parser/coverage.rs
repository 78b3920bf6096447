//! Parsing rules for spatial and temporal coverage.

use crate::error::{HarvestError, Result};
use crate::model::nma::{
    BoundingBox, GeometryContent, IntervalBound, Location, LocationGeometry, RelatedObject,
    TemporalRepresentation, TimeInstant, TimeInterval, TimeReference,
};
use crate::vocabulary;
use crate::xml::ElementScope;

use super::NmaParser;

impl NmaParser<'_> {
    pub(crate) fn parse_location(&self, mut scope: ElementScope<'_, '_>) -> Result<Location> {
        let location = Location {
            bounding_boxes: scope
                .take_children("bounding_box")
                .into_iter()
                .map(parse_bounding_box)
                .collect::<Result<_>>()?,
            geometry: scope.take_child("geometry").map(parse_geometry).transpose()?,
            names: scope.take_children_texts("name")?,
            related_objects: scope
                .take_children("related_object")
                .into_iter()
                .map(parse_related_object)
                .collect::<Result<_>>()?,
            relation_type: self.take_vocabulary(
                &mut scope,
                "relation_type",
                vocabulary::LOCATION_RELATION_TYPES,
            )?,
        };
        scope.finish()?;
        Ok(location)
    }

    pub(crate) fn parse_time_reference(
        &self,
        mut scope: ElementScope<'_, '_>,
    ) -> Result<TimeReference> {
        let reference = TimeReference {
            temporal_representation: scope
                .take_child("temporal_representation")
                .map(parse_temporal_representation)
                .transpose()?,
            date_type: self.take_vocabulary(&mut scope, "date_type", vocabulary::DATE_TYPES)?,
        };
        scope.finish()?;
        Ok(reference)
    }
}

/// Parse the `time_instant`-or-`time_interval` choice wrapper.
fn parse_temporal_representation(
    mut scope: ElementScope<'_, '_>,
) -> Result<TemporalRepresentation> {
    if let Some(mut instant) = scope.take_child("time_instant") {
        let parsed = TimeInstant {
            date_time: instant.take_child_text("date_time")?,
            date: instant.take_child_text("date")?,
        };
        instant.finish()?;
        scope.finish()?;
        return Ok(TemporalRepresentation::TimeInstant(parsed));
    }
    if let Some(mut interval) = scope.take_child("time_interval") {
        let parsed = TimeInterval {
            beginning: interval
                .take_child("beginning")
                .map(parse_interval_bound)
                .transpose()?,
            end: interval.take_child("end").map(parse_interval_bound).transpose()?,
        };
        interval.finish()?;
        scope.finish()?;
        return Ok(TemporalRepresentation::TimeInterval(parsed));
    }
    Err(HarvestError::MissingElement {
        element: "time_instant|time_interval".to_string(),
        context: scope.path().to_string(),
    })
}

fn parse_interval_bound(mut scope: ElementScope<'_, '_>) -> Result<IntervalBound> {
    let bound = IntervalBound {
        date: scope.take_child_text("date")?,
    };
    scope.finish()?;
    Ok(bound)
}

/// Capture the embedded geometry markup without walking it.
///
/// The geometry wrapper holds one arbitrary element (GML in practice); its
/// subtree is carried raw so a downstream converter can turn it into
/// GeoJSON.
fn parse_geometry(mut scope: ElementScope<'_, '_>) -> Result<LocationGeometry> {
    let context = scope.path().to_string();
    let embedded = scope
        .take_any_child()
        .ok_or_else(|| HarvestError::MissingElement {
            element: "geometry content".to_string(),
            context,
        })?;
    let raw = embedded.raw_xml().to_string();
    scope.finish()?;
    Ok(LocationGeometry {
        geometry: GeometryContent::Raw(raw),
    })
}

fn parse_related_object(mut scope: ElementScope<'_, '_>) -> Result<RelatedObject> {
    let object = RelatedObject {
        iri: scope.take_child_text("iri")?,
        title: scope.take_child_text("title")?,
    };
    scope.finish()?;
    Ok(object)
}

/// Parse a bounding-box corner: two space-separated floats.
fn parse_corner(scope: &mut ElementScope<'_, '_>, tag: &str) -> Result<Vec<f64>> {
    let context = format!("{}/{}", scope.path(), tag);
    let text = super::require(scope, tag)?;
    let corner = text
        .split_whitespace()
        .map(|part| {
            part.parse::<f64>()
                .map_err(|_| HarvestError::InvalidValue {
                    context: context.clone(),
                    expected: "coordinate number",
                    value: part.to_string(),
                })
        })
        .collect::<Result<Vec<f64>>>()?;
    if corner.len() != 2 {
        return Err(HarvestError::InvalidValue {
            context,
            expected: "two coordinates",
            value: text,
        });
    }
    Ok(corner)
}

fn parse_bounding_box(mut scope: ElementScope<'_, '_>) -> Result<BoundingBox> {
    let bbox = BoundingBox {
        lower_corner: parse_corner(&mut scope, "lowerCorner")?,
        upper_corner: parse_corner(&mut scope, "upperCorner")?,
    };
    scope.finish()?;
    Ok(bbox)
}
