use std::fmt;

use geo::{Geometry, GeometryCollection, LineString, MultiPolygon};

/// Name of an entry in a [`ZoneSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZoneName {
    /// Reference line of the symmetric form.
    Centerline,
    /// Reference line of the asymmetric form.
    Runway,
    ExclusionZone,
    RestrictionZone,
}

impl ZoneName {
    /// Display label used by downstream datasets.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Centerline => "Runway Centreline",
            Self::Runway => "Runway",
            Self::ExclusionZone => "Exclusion Zone",
            Self::RestrictionZone => "Restriction Zone",
        }
    }
}

impl fmt::Display for ZoneName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Geometry carried by a zone entry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ZoneGeometry {
    Line(LineString<f64>),
    Area(MultiPolygon<f64>),
}

impl ZoneGeometry {
    /// Returns the area geometry, or `None` for a line entry.
    #[must_use]
    pub fn as_area(&self) -> Option<&MultiPolygon<f64>> {
        match self {
            Self::Area(area) => Some(area),
            Self::Line(_) => None,
        }
    }

    /// Returns the line geometry, or `None` for an area entry.
    #[must_use]
    pub fn as_line(&self) -> Option<&LineString<f64>> {
        match self {
            Self::Line(line) => Some(line),
            Self::Area(_) => None,
        }
    }

    /// Converts into a generic `geo` geometry.
    #[must_use]
    pub fn to_geometry(&self) -> Geometry<f64> {
        match self {
            Self::Line(line) => Geometry::LineString(line.clone()),
            Self::Area(area) => Geometry::MultiPolygon(area.clone()),
        }
    }
}

/// A named piece of zone output. Never mutated after composition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Zone {
    pub name: ZoneName,
    pub geometry: ZoneGeometry,
}

/// Ordered output of one zone construction.
///
/// The first entry is always the reference line, followed by the exclusion
/// and restriction zones.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ZoneSet {
    zones: Vec<Zone>,
}

impl ZoneSet {
    pub(crate) fn new(
        reference: ZoneName,
        line: LineString<f64>,
        exclusion: MultiPolygon<f64>,
        restriction: MultiPolygon<f64>,
    ) -> Self {
        Self {
            zones: vec![
                Zone {
                    name: reference,
                    geometry: ZoneGeometry::Line(line),
                },
                Zone {
                    name: ZoneName::ExclusionZone,
                    geometry: ZoneGeometry::Area(exclusion),
                },
                Zone {
                    name: ZoneName::RestrictionZone,
                    geometry: ZoneGeometry::Area(restriction),
                },
            ],
        }
    }

    /// Number of entries (always 3 for composer output).
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Returns `true` if the set has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Iterates entries in output order.
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Zone> {
        self.zones.iter()
    }

    /// Looks up an entry by name.
    #[must_use]
    pub fn get(&self, name: ZoneName) -> Option<&Zone> {
        self.zones.iter().find(|z| z.name == name)
    }

    /// The reference line (centerline or runway).
    #[must_use]
    pub fn reference_line(&self) -> Option<&LineString<f64>> {
        self.zones.first().and_then(|z| z.geometry.as_line())
    }

    /// The exclusion zone area.
    #[must_use]
    pub fn exclusion(&self) -> Option<&MultiPolygon<f64>> {
        self.get(ZoneName::ExclusionZone)
            .and_then(|z| z.geometry.as_area())
    }

    /// The restriction zone area.
    #[must_use]
    pub fn restriction(&self) -> Option<&MultiPolygon<f64>> {
        self.get(ZoneName::RestrictionZone)
            .and_then(|z| z.geometry.as_area())
    }

    /// Flattens the set into a `geo` collection, in output order, for
    /// persistence or rendering.
    #[must_use]
    pub fn to_geometry_collection(&self) -> GeometryCollection<f64> {
        self.zones.iter().map(|z| z.geometry.to_geometry()).collect()
    }
}

impl<'a> IntoIterator for &'a ZoneSet {
    type Item = &'a Zone;
    type IntoIter = std::slice::Iter<'a, Zone>;

    fn into_iter(self) -> Self::IntoIter {
        self.zones.iter()
    }
}
