use std::{cell::RefCell, rc::Rc};

use egui::Context;
use egui_extras::install_image_loaders;
use walkers::{HttpOptions, HttpTiles, Map, MapMemory, Position, Tiles};

use crate::{
    fetch::{FetchState, Fetcher},
    plugins,
    state::SelectionState,
    widgets::{WidgetFeature, WidgetFilters},
    windows,
};
use client::{FilterCriteria, WaterFeaturesClient};
use logger::Logger;

const INITIAL_LAT: f64 = 42.7339;
const INITIAL_LON: f64 = 25.4858;
const INITIAL_ZOOM: f64 = 7.0;

/// The main application struct that manages the state and UI of the water
/// feature map.
///
/// `WatersApp` owns the current filter criteria lifecycle: the filter
/// widget publishes a criteria value, the fetcher issues the query, and
/// the map renders whatever state the fetcher is in.
pub struct WatersApp {
    tiles: Box<dyn Tiles>,
    map_memory: MapMemory,
    selection_state: Rc<RefCell<SelectionState>>,
    filters_widget: WidgetFilters,
    feature_widget: Option<WidgetFeature>,
    fetcher: Fetcher,
}

impl WatersApp {
    /// Creates a new `WatersApp` and issues the initial, unconstrained
    /// query.
    pub fn new(egui_ctx: Context, client: WaterFeaturesClient, logger: Logger) -> Self {
        install_image_loaders(&egui_ctx);
        let mut initial_map_memory = MapMemory::default();
        initial_map_memory.set_zoom(INITIAL_ZOOM).unwrap();

        let mut fetcher = Fetcher::new(client, logger, egui_ctx.clone());
        fetcher.submit(FilterCriteria::default());

        Self {
            tiles: Box::new(HttpTiles::with_options(
                walkers::sources::OpenStreetMap,
                HttpOptions::default(),
                egui_ctx.to_owned(),
            )),
            map_memory: initial_map_memory,
            selection_state: Rc::new(RefCell::new(SelectionState::new())),
            filters_widget: WidgetFilters::new(),
            feature_widget: None,
            fetcher,
        }
    }
}

impl eframe::App for WatersApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.fetcher.poll();

        let rimless = egui::Frame {
            fill: ctx.style().visuals.panel_fill,
            ..Default::default()
        };

        egui::CentralPanel::default()
            .frame(rimless)
            .show(ctx, |ui| match self.fetcher.state() {
                FetchState::Idle => {}
                FetchState::Loading => {
                    ui.centered_and_justified(|ui| {
                        ui.add(egui::Spinner::new().size(48.0));
                    });
                }
                FetchState::Failed(message) => {
                    ui.centered_and_justified(|ui| {
                        ui.label(format!("Error: {}", message));
                    });
                }
                FetchState::Ready(features) => {
                    let my_position = Position::from_lat_lon(INITIAL_LAT, INITIAL_LON);

                    let tiles = self.tiles.as_mut();
                    let attribution = tiles.attribution();

                    let features_plugin =
                        plugins::Features::new(features, self.selection_state.clone());

                    let map = Map::new(Some(tiles), &mut self.map_memory, my_position)
                        .with_plugin(features_plugin);

                    ui.add(map);

                    {
                        use windows::*;
                        zoom(ui, &mut self.map_memory);
                        acknowledge(ui, attribution);
                    }
                }
            });

        if let Some(criteria) = self.filters_widget.show(ctx) {
            // A fresh result fully replaces the rendered set, popup
            // included.
            self.selection_state.borrow_mut().clear();
            self.feature_widget = None;
            self.fetcher.submit(criteria);
        }

        let selected_feature = self.selection_state.borrow().feature.clone();
        if let Some(feature) = selected_feature {
            if let Some(widget) = &mut self.feature_widget {
                if widget.selected_feature.id == feature.id {
                    if !widget.show(ctx) {
                        self.selection_state.borrow_mut().clear();
                        self.feature_widget = None;
                    }
                } else {
                    self.feature_widget = Some(WidgetFeature::new(feature));
                }
            } else {
                self.feature_widget = Some(WidgetFeature::new(feature));
            }
        } else {
            self.feature_widget = None;
        }
    }
}
