use client::WaterFeature;

/// Tracks which feature, if any, has its popup open.
pub struct SelectionState {
    pub feature: Option<WaterFeature>,
}

impl SelectionState {
    pub fn new() -> SelectionState {
        Self { feature: None }
    }

    /// If the provided feature is already selected, it will be deselected.
    /// Otherwise, it will be selected.
    pub fn toggle_feature_selection(&mut self, feature: &WaterFeature) {
        if let Some(selected_feature) = &self.feature {
            if selected_feature.id == feature.id {
                self.feature = None;
            } else {
                self.feature = Some(feature.clone());
            }
        } else {
            self.feature = Some(feature.clone());
        }
    }

    /// Drops the selection. Used when a new result set replaces the
    /// rendered markers.
    pub fn clear(&mut self) {
        self.feature = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client::FeatureType;

    fn feature(id: &str) -> WaterFeature {
        WaterFeature {
            id: id.to_string(),
            name: id.to_string(),
            feature_type: FeatureType::Dam,
            location: None,
            surface_area: None,
            capacity: None,
            wikidata_url: None,
        }
    }

    #[test]
    fn toggling_twice_deselects() {
        let mut state = SelectionState::new();
        let kardzhali = feature("Q1019890");

        state.toggle_feature_selection(&kardzhali);
        assert!(state.feature.is_some());

        state.toggle_feature_selection(&kardzhali);
        assert!(state.feature.is_none());
    }

    #[test]
    fn toggling_another_feature_replaces_the_selection() {
        let mut state = SelectionState::new();
        state.toggle_feature_selection(&feature("Q1019890"));
        state.toggle_feature_selection(&feature("Q904139"));

        let selected = state.feature.expect("Selection should be present");
        assert_eq!(selected.id, "Q904139");
    }
}
