use std::sync::{mpsc, Arc};
use std::thread;

use client::{ClientError, FilterCriteria, WaterFeature, WaterFeaturesClient};
use logger::{Color, Logger};

/// Presentation state for the current filter criteria.
///
/// Each new submission restarts the machine at `Loading`; the previous
/// result is discarded, never kept stale while revalidating.
#[derive(Debug)]
pub enum FetchState {
    Idle,
    Loading,
    Ready(Vec<WaterFeature>),
    Failed(String),
}

struct Outcome {
    generation: u64,
    result: Result<Vec<WaterFeature>, ClientError>,
}

/// Issues one query per submitted criteria value from a background thread
/// and reconciles responses with the view.
///
/// Every submission gets a monotonically increasing generation number. A
/// response carrying any generation other than the latest one belongs to a
/// superseded request and is dropped, so out-of-order arrivals can never
/// overwrite the result of a newer submission.
pub struct Fetcher {
    client: Arc<WaterFeaturesClient>,
    logger: Logger,
    egui_ctx: egui::Context,
    tx: mpsc::Sender<Outcome>,
    rx: mpsc::Receiver<Outcome>,
    generation: u64,
    state: FetchState,
}

impl Fetcher {
    pub fn new(client: WaterFeaturesClient, logger: Logger, egui_ctx: egui::Context) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            client: Arc::new(client),
            logger,
            egui_ctx,
            tx,
            rx,
            generation: 0,
            state: FetchState::Idle,
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Starts a query for `criteria`, superseding any request still in
    /// flight.
    pub fn submit(&mut self, criteria: FilterCriteria) {
        self.generation += 1;
        self.state = FetchState::Loading;

        let generation = self.generation;
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        let egui_ctx = self.egui_ctx.clone();

        let _ = self.logger.info(
            &format!("query #{}: {:?}", generation, criteria),
            Color::Cyan,
            true,
        );

        thread::spawn(move || {
            let result = client.water_features(&criteria);
            if tx.send(Outcome { generation, result }).is_ok() {
                egui_ctx.request_repaint();
            }
        });
    }

    /// Drains arrived outcomes. Called once per frame.
    pub fn poll(&mut self) {
        while let Ok(outcome) = self.rx.try_recv() {
            self.apply(outcome);
        }
    }

    fn apply(&mut self, outcome: Outcome) {
        if outcome.generation != self.generation {
            let _ = self.logger.warn(
                &format!(
                    "query #{} superseded by #{}, response dropped",
                    outcome.generation, self.generation
                ),
                true,
            );
            return;
        }

        self.state = match outcome.result {
            Ok(features) => {
                let _ = self.logger.info(
                    &format!("query #{}: {} features", outcome.generation, features.len()),
                    Color::Green,
                    true,
                );
                FetchState::Ready(features)
            }
            Err(err) => {
                let _ = self
                    .logger
                    .error(&format!("query #{}: {}", outcome.generation, err), true);
                FetchState::Failed(err.to_string())
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client::FeatureType;

    fn test_fetcher() -> Fetcher {
        let client = WaterFeaturesClient::with_endpoint("http://127.0.0.1:1/")
            .expect("Failed to build client");
        let logger = Logger::new(&std::env::temp_dir()).expect("Failed to create logger");
        Fetcher::new(client, logger, egui::Context::default())
    }

    fn feature(id: &str) -> WaterFeature {
        WaterFeature {
            id: id.to_string(),
            name: format!("Feature {id}"),
            feature_type: FeatureType::Lake,
            location: None,
            surface_area: None,
            capacity: None,
            wikidata_url: None,
        }
    }

    #[test]
    fn submission_moves_the_machine_to_loading() {
        let mut fetcher = test_fetcher();
        assert!(matches!(fetcher.state(), FetchState::Idle));

        fetcher.submit(FilterCriteria::default());
        assert!(matches!(fetcher.state(), FetchState::Loading));
    }

    #[test]
    fn stale_generation_is_discarded() {
        let mut fetcher = test_fetcher();
        fetcher.submit(FilterCriteria::default());
        fetcher.submit(FilterCriteria::default());

        // The first request resolves after being superseded; its result
        // must not leave the Loading state.
        fetcher.apply(Outcome {
            generation: 1,
            result: Ok(vec![feature("stale")]),
        });
        assert!(matches!(fetcher.state(), FetchState::Loading));

        fetcher.apply(Outcome {
            generation: 2,
            result: Ok(vec![feature("fresh")]),
        });
        match fetcher.state() {
            FetchState::Ready(features) => assert_eq!(features[0].id, "fresh"),
            other => panic!("Expected Ready, got {:?}", other),
        }
    }

    #[test]
    fn late_stale_response_cannot_overwrite_a_newer_result() {
        let mut fetcher = test_fetcher();
        fetcher.submit(FilterCriteria::default());
        fetcher.submit(FilterCriteria::default());

        fetcher.apply(Outcome {
            generation: 2,
            result: Ok(vec![feature("fresh")]),
        });
        fetcher.apply(Outcome {
            generation: 1,
            result: Err(ClientError::Service("too late".into())),
        });

        match fetcher.state() {
            FetchState::Ready(features) => assert_eq!(features[0].id, "fresh"),
            other => panic!("Expected Ready, got {:?}", other),
        }
    }

    #[test]
    fn current_failure_surfaces_its_message() {
        let mut fetcher = test_fetcher();
        fetcher.submit(FilterCriteria::default());

        fetcher.apply(Outcome {
            generation: 1,
            result: Err(ClientError::Service("region unavailable".into())),
        });

        match fetcher.state() {
            FetchState::Failed(message) => assert!(message.contains("region unavailable")),
            other => panic!("Expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn empty_result_is_ready_not_failed() {
        let mut fetcher = test_fetcher();
        fetcher.submit(FilterCriteria::default());

        fetcher.apply(Outcome {
            generation: 1,
            result: Ok(vec![]),
        });
        match fetcher.state() {
            FetchState::Ready(features) => assert!(features.is_empty()),
            other => panic!("Expected Ready, got {:?}", other),
        }
    }
}
