use std::path::Path;

use client::WaterFeaturesClient;
use logger::{Color, Logger};

fn main() {
    let logger = match Logger::new(Path::new(".")) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Failed to create logger: {}", e);
            return;
        }
    };

    let client = match WaterFeaturesClient::new() {
        Ok(client) => client,
        Err(e) => {
            let _ = logger.error(&format!("Failed to create query client: {}", e), true);
            return;
        }
    };

    let _ = logger.info(
        &format!("Water features service at {}", client.endpoint()),
        Color::Blue,
        true,
    );

    if let Err(e) = graphical_interface::run(client, logger) {
        eprintln!("Failed to run the graphical interface: {}", e);
    }
}
