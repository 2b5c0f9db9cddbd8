use std::{cell::RefCell, rc::Rc};

use egui::{include_image, Image, ImageSource, Rect, Response, Sense, Vec2};
use walkers::{Plugin, Position, Projector};

use crate::state::SelectionState;
use client::{FeatureType, WaterFeature};

// Icon dimensions and the point inside the icon that touches the map
// coordinate (the pin tip).
const MARKER_SIZE: Vec2 = Vec2::new(35.0, 41.0);
const MARKER_ANCHOR: Vec2 = Vec2::new(12.0, 41.0);

pub struct Features<'a> {
    features: &'a [WaterFeature],
    selection_state: Rc<RefCell<SelectionState>>,
}

impl<'a> Features<'a> {
    pub fn new(
        features: &'a [WaterFeature],
        selection_state: Rc<RefCell<SelectionState>>,
    ) -> Self {
        Self {
            features,
            selection_state,
        }
    }
}

impl Plugin for Features<'_> {
    fn run(self: Box<Self>, ui: &mut egui::Ui, _response: &Response, projector: &Projector) {
        for (position, feature) in placements(self.features) {
            draw(
                feature,
                position,
                ui,
                projector,
                &mut self.selection_state.borrow_mut(),
            );
        }
    }
}

/// Pairs each feature that has a location with its map position. Features
/// without a location stay in the result set but get no marker.
fn placements(features: &[WaterFeature]) -> impl Iterator<Item = (Position, &WaterFeature)> {
    features.iter().filter_map(|feature| {
        feature
            .location
            .map(|location| (Position::from_lat_lon(location.latitude, location.longitude), feature))
    })
}

fn icon(feature_type: FeatureType) -> ImageSource<'static> {
    match feature_type {
        FeatureType::Lake => include_image!(r"../../pin-lake.svg"),
        FeatureType::Dam => include_image!(r"../../pin-dam.svg"),
        FeatureType::Reservoir => include_image!(r"../../pin-reservoir.svg"),
        FeatureType::River => include_image!(r"../../pin-river.svg"),
    }
}

fn draw(
    feature: &WaterFeature,
    position: Position,
    ui: &mut egui::Ui,
    projector: &Projector,
    selection_state: &mut SelectionState,
) {
    let screen_position = projector.project(position).to_pos2();

    // Place the icon so its anchor point lands on the projected coordinate.
    let rect = Rect::from_min_size(screen_position - MARKER_ANCHOR, MARKER_SIZE);

    let response = ui.allocate_rect(rect, Sense::click());

    let image = Image::new(icon(feature.feature_type)).fit_to_exact_size(MARKER_SIZE);
    ui.put(rect, image);

    if response.clicked() {
        selection_state.toggle_feature_selection(feature);
    }

    response.on_hover_text(&feature.name);
}

#[cfg(test)]
mod tests {
    use super::*;
    use client::Location;

    fn feature(id: &str, location: Option<Location>) -> WaterFeature {
        WaterFeature {
            id: id.to_string(),
            name: id.to_string(),
            feature_type: FeatureType::River,
            location,
            surface_area: None,
            capacity: None,
            wikidata_url: None,
        }
    }

    #[test]
    fn features_without_location_get_no_placement() {
        let features = vec![
            feature(
                "Q472837",
                Some(Location {
                    latitude: 43.2141,
                    longitude: 27.6699,
                }),
            ),
            feature("Q1567239", None),
        ];

        let placed: Vec<_> = placements(&features).collect();
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].1.id, "Q472837");
    }

    #[test]
    fn placement_uses_the_exact_coordinate_pair() {
        let features = vec![feature(
            "Q208155",
            Some(Location {
                latitude: 44.1156,
                longitude: 27.0717,
            }),
        )];

        let (position, _) = placements(&features).next().expect("Placement expected");
        assert_eq!(position.lat(), 44.1156);
        assert_eq!(position.lon(), 27.0717);
    }

    #[test]
    fn each_feature_type_has_its_own_icon() {
        let uris: Vec<_> = FeatureType::ALL
            .iter()
            .map(|t| icon(*t).uri().expect("Bundled icon should have a URI").to_string())
            .collect();

        assert!(uris[0].ends_with("pin-lake.svg"));
        assert!(uris[1].ends_with("pin-dam.svg"));
        assert!(uris[2].ends_with("pin-reservoir.svg"));
        assert!(uris[3].ends_with("pin-river.svg"));
    }
}
