use std::{env, time::Duration};

use serde::Deserialize;
use thiserror::Error;

pub mod query;
mod types;

pub use types::{FeatureType, FilterCriteria, Location, WaterFeature};

const DEFAULT_ENDPOINT: &str = "http://localhost:4000/";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors produced while querying the water-features service. All of them
/// are terminal for the current request; the only recovery path is a new
/// submission.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("service answered with status {0}")]
    Status(reqwest::StatusCode),
    #[error("service reported an error: {0}")]
    Service(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

#[derive(Deserialize)]
struct Envelope {
    data: Option<QueryData>,
    errors: Option<Vec<ServiceError>>,
}

#[derive(Deserialize)]
struct QueryData {
    #[serde(rename = "waterFeatures")]
    water_features: Option<Vec<WaterFeature>>,
}

#[derive(Deserialize)]
struct ServiceError {
    message: String,
}

/// A client for the water-features query service.
///
/// The endpoint is fixed at construction time. The client is cheap to
/// share behind an `Arc` and safe to call from background threads; each
/// call performs one blocking HTTP round trip.
pub struct WaterFeaturesClient {
    endpoint: String,
    http: reqwest::blocking::Client,
}

impl WaterFeaturesClient {
    /// Creates a client against the configured endpoint: the
    /// `WATERS_ENDPOINT` environment variable if set, the default local
    /// service address otherwise.
    pub fn new() -> Result<Self, ClientError> {
        let endpoint = env::var("WATERS_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        Self::with_endpoint(endpoint)
    }

    /// Creates a client against an explicit endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetches every feature matching all provided constraints. The
    /// service applies AND-semantics across the constraints; no filtering
    /// happens on this side.
    ///
    /// A response whose feature list is null counts as an empty result,
    /// not an error.
    pub fn water_features(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<Vec<WaterFeature>, ClientError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&query::request_body(criteria))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        let envelope: Envelope = response
            .json()
            .map_err(|e| ClientError::MalformedResponse(e.to_string()))?;

        if let Some(errors) = envelope.errors {
            if let Some(first) = errors.into_iter().next() {
                return Err(ClientError::Service(first.message));
            }
        }

        Ok(envelope
            .data
            .and_then(|data| data.water_features)
            .unwrap_or_default())
    }
}
