use client::{FeatureType, FilterCriteria};

/// The filter form: a type selector and two free-text numeric minimums.
///
/// Raw text stays in the fields between submissions; only pressing the
/// apply button publishes a criteria value.
pub struct WidgetFilters {
    feature_type: Option<FeatureType>,
    min_surface_area: String,
    min_capacity: String,
}

impl WidgetFilters {
    pub fn new() -> Self {
        Self {
            feature_type: None,
            min_surface_area: String::new(),
            min_capacity: String::new(),
        }
    }

    /// Draws the panel. Returns the normalized criteria when the user
    /// pressed "Apply Filters" this frame, `None` otherwise.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<FilterCriteria> {
        let mut submitted = None;

        egui::Window::new("Filter Waters")
            .resizable(false)
            .collapsible(true)
            .fixed_pos([20.0, 20.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Type:");
                    egui::ComboBox::from_id_salt("feature_type_selector")
                        .selected_text(match self.feature_type {
                            None => "Any",
                            Some(feature_type) => feature_type.label(),
                        })
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut self.feature_type, None, "Any");
                            for feature_type in FeatureType::ALL {
                                ui.selectable_value(
                                    &mut self.feature_type,
                                    Some(feature_type),
                                    feature_type.label(),
                                );
                            }
                        });
                });

                ui.horizontal(|ui| {
                    ui.label("Min Surface Area (km²):");
                    ui.text_edit_singleline(&mut self.min_surface_area);
                });

                ui.horizontal(|ui| {
                    ui.label("Min Capacity (m³):");
                    ui.text_edit_singleline(&mut self.min_capacity);
                });

                ui.add_space(5.0);

                if ui.button("Apply Filters").clicked() {
                    submitted = Some(self.criteria());
                }
            });

        submitted
    }

    fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            feature_type: self.feature_type,
            min_surface_area: parse_minimum(&self.min_surface_area),
            min_capacity: parse_minimum(&self.min_capacity),
        }
    }
}

/// Normalizes one numeric field. Empty text means "no constraint"; so does
/// anything that fails to parse as a finite non-negative number, which
/// keeps NaN out of the query variables.
fn parse_minimum(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Some(value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_mean_no_constraint() {
        assert_eq!(parse_minimum(""), None);
        assert_eq!(parse_minimum("   "), None);
    }

    #[test]
    fn valid_numbers_pass_through_exactly() {
        assert_eq!(parse_minimum("100"), Some(100.0));
        assert_eq!(parse_minimum(" 42.5 "), Some(42.5));
        assert_eq!(parse_minimum("0"), Some(0.0));
    }

    #[test]
    fn malformed_text_is_treated_as_omitted() {
        assert_eq!(parse_minimum("ten"), None);
        assert_eq!(parse_minimum("1,5"), None);
        assert_eq!(parse_minimum("NaN"), None);
        assert_eq!(parse_minimum("-3"), None);
        assert_eq!(parse_minimum("inf"), None);
    }

    #[test]
    fn only_present_fields_reach_the_criteria() {
        let widget = WidgetFilters {
            feature_type: None,
            min_surface_area: "100".to_string(),
            min_capacity: String::new(),
        };

        let criteria = widget.criteria();
        assert_eq!(criteria.min_surface_area, Some(100.0));
        assert_eq!(criteria.min_capacity, None);
        assert_eq!(criteria.feature_type, None);
    }

    #[test]
    fn type_selection_is_carried_as_is() {
        let widget = WidgetFilters {
            feature_type: Some(FeatureType::Lake),
            min_surface_area: String::new(),
            min_capacity: String::new(),
        };

        let criteria = widget.criteria();
        assert_eq!(criteria.feature_type, Some(FeatureType::Lake));
        assert_eq!(criteria.min_surface_area, None);
        assert_eq!(criteria.min_capacity, None);
    }
}
