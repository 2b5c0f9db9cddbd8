use serde::Deserialize;

/// The kind of water body a feature represents. Determines which marker
/// icon the interface uses for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureType {
    Lake,
    Dam,
    Reservoir,
    River,
}

impl FeatureType {
    pub const ALL: [FeatureType; 4] = [
        FeatureType::Lake,
        FeatureType::Dam,
        FeatureType::Reservoir,
        FeatureType::River,
    ];

    /// The value the query service uses on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureType::Lake => "LAKE",
            FeatureType::Dam => "DAM",
            FeatureType::Reservoir => "RESERVOIR",
            FeatureType::River => "RIVER",
        }
    }

    /// Human-readable form for selectors and popups.
    pub fn label(&self) -> &'static str {
        match self {
            FeatureType::Lake => "Lake",
            FeatureType::Dam => "Dam",
            FeatureType::Reservoir => "Reservoir",
            FeatureType::River => "River",
        }
    }

    /// Decodes a wire value. Anything unrecognized falls back to `Lake`,
    /// which is also the default marker icon, so one bad enum value from
    /// the service cannot fail the whole response.
    pub fn from_wire(raw: &str) -> FeatureType {
        match raw {
            "DAM" => FeatureType::Dam,
            "RESERVOIR" => FeatureType::Reservoir,
            "RIVER" => FeatureType::River,
            _ => FeatureType::Lake,
        }
    }
}

impl<'de> Deserialize<'de> for FeatureType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(FeatureType::from_wire(&raw))
    }
}

/// Geographic position of a feature in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// A single water-body record as returned by the query service.
///
/// `location`, `surface_area`, `capacity` and `wikidata_url` are optional
/// on the wire; a feature without a location is still part of the result
/// set but never gets a marker.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterFeature {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub feature_type: FeatureType,
    pub location: Option<Location>,
    pub surface_area: Option<f64>,
    pub capacity: Option<f64>,
    pub wikidata_url: Option<String>,
}

/// The user-chosen constraints for one feature query. A `None` field is
/// omitted from the outgoing query variables entirely, so the service
/// treats it as "no constraint" rather than "exactly zero".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub feature_type: Option<FeatureType>,
    pub min_surface_area: Option<f64>,
    pub min_capacity: Option<f64>,
}
