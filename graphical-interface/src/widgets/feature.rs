use egui::{Color32, RichText};

use client::WaterFeature;

/// Popup window for a selected feature: name, type, physical attributes
/// and the external reference link when the record carries one.
pub struct WidgetFeature {
    pub selected_feature: WaterFeature,
}

impl WidgetFeature {
    pub fn new(selected_feature: WaterFeature) -> Self {
        Self { selected_feature }
    }

    /// Shows the popup. Returns `false` once the user closed it.
    pub fn show(&mut self, ctx: &egui::Context) -> bool {
        let mut open = true;
        let screen_width = ctx.screen_rect().width();

        egui::Window::new(format!("Feature: {}", self.selected_feature.name))
            .resizable(false)
            .collapsible(true)
            .open(&mut open)
            .fixed_pos([screen_width - 320.0, 20.0])
            .show(ctx, |ui| {
                ui.label(
                    RichText::new(&self.selected_feature.name)
                        .strong()
                        .size(20.0)
                        .color(Color32::from_rgb(0, 150, 255)),
                );
                ui.label(
                    RichText::new(format!("Type: {}", self.selected_feature.feature_type.label()))
                        .size(16.0),
                );
                ui.separator();

                ui.label(
                    RichText::new(format!(
                        "Area: {} km²",
                        quantity(self.selected_feature.surface_area)
                    ))
                    .size(16.0),
                );
                ui.label(
                    RichText::new(format!(
                        "Capacity: {} m³",
                        quantity(self.selected_feature.capacity)
                    ))
                    .size(16.0),
                );

                if let Some(url) = &self.selected_feature.wikidata_url {
                    ui.add_space(5.0);
                    // Opens in the system browser, detached from this app.
                    ui.hyperlink_to("Wikidata", url);
                }
            });

        open
    }
}

/// Optional physical attributes render as "N/A", never as zero or blank.
fn quantity(value: Option<f64>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_quantity_renders_as_not_available() {
        assert_eq!(quantity(None), "N/A");
    }

    #[test]
    fn present_quantity_renders_its_exact_value() {
        assert_eq!(quantity(Some(42.5)), "42.5");
        assert_eq!(quantity(Some(0.0)), "0");
    }
}
