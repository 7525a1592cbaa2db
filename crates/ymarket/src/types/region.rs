use serde::{Deserialize, Serialize};

use super::wire_enum;

/// Payload of the region search.
#[derive(Debug, Default, Deserialize)]
pub struct RegionsPayload {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub regions: Vec<Region>,
}

/// A region together with its chain of parent regions.
///
/// Only ancestors are returned by the platform, never siblings or children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub region_type: RegionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<Region>>,
}

impl Region {
    /// Iterates over parent regions, nearest first.
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors {
            next: self.parent.as_deref(),
        }
    }

    /// The first ancestor (or the region itself) of the given type.
    pub fn nearest(&self, region_type: &RegionType) -> Option<&Region> {
        std::iter::once(self)
            .chain(self.ancestors())
            .find(|r| &r.region_type == region_type)
    }
}

/// Iterator over a region's ancestor chain.
pub struct Ancestors<'a> {
    next: Option<&'a Region>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Region;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent.as_deref();
        Some(current)
    }
}

wire_enum! {
    /// Administrative level of a region.
    pub enum RegionType {
        /// Local area.
        Area => "AREA",
        City => "CITY",
        Continent => "CONTINENT",
        Country => "COUNTRY",
        /// City district.
        District => "DISTRICT",
        MonorailStation => "MONORAIL_STATION",
        /// Territory of a state located on another continent.
        OverseasTerritory => "OVERSEAS_TERRITORY",
        Region => "REGION",
        /// Federal subject of Russia.
        Republic => "REPUBLIC",
        /// District within a federal subject.
        RepublicArea => "REPUBLIC_AREA",
        /// Second-level city district.
        SecondaryDistrict => "SECONDARY_DISTRICT",
        Settlement => "SETTLEMENT",
        /// Suburb.
        Sub => "SUB",
        SubwayStation => "SUBWAY_STATION",
        Town => "TOWN",
        /// The platform itself does not know the level.
        Unknown => "UNKNOWN",
    }
}
