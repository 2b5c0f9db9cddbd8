use client::WaterFeaturesClient;
use logger::Logger;

mod fetch;
mod map;
mod plugins;
mod state;
mod widgets;
mod windows;
use map::WatersApp;

/// Starts the map interface against an already constructed query client.
/// The client is handed in rather than built here so the endpoint is fixed
/// exactly once, at process start.
pub fn run(client: WaterFeaturesClient, logger: Logger) -> Result<(), eframe::Error> {
    eframe::run_native(
        "Bulgarian Waters",
        Default::default(),
        Box::new(move |cc| Ok(Box::new(WatersApp::new(cc.egui_ctx.clone(), client, logger)))),
    )
}
