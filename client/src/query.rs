use serde_json::{json, Map, Value};

use crate::types::FilterCriteria;

/// The one query this client issues. `$region` is part of the service
/// schema but the interface never binds it.
pub const WATER_FEATURES_QUERY: &str = "\
query WaterFeatures(
  $type: WaterFeatureType
  $minSurfaceArea: Float
  $minCapacity: Float
  $region: String
) {
  waterFeatures(
    type: $type
    minSurfaceArea: $minSurfaceArea
    minCapacity: $minCapacity
    region: $region
  ) {
    id
    name
    type
    location {
      latitude
      longitude
    }
    surfaceArea
    capacity
    wikidataUrl
  }
}";

/// Builds the variables object for one criteria value. Absent criteria are
/// left out of the map entirely, never sent as null or zero.
pub fn variables(criteria: &FilterCriteria) -> Map<String, Value> {
    let mut variables = Map::new();
    if let Some(feature_type) = criteria.feature_type {
        variables.insert("type".to_string(), json!(feature_type.as_str()));
    }
    if let Some(min_surface_area) = criteria.min_surface_area {
        variables.insert("minSurfaceArea".to_string(), json!(min_surface_area));
    }
    if let Some(min_capacity) = criteria.min_capacity {
        variables.insert("minCapacity".to_string(), json!(min_capacity));
    }
    variables
}

/// The full request body POSTed to the service.
pub fn request_body(criteria: &FilterCriteria) -> Value {
    json!({
        "query": WATER_FEATURES_QUERY,
        "variables": variables(criteria),
    })
}
