use crate::api::api_url;
use crate::config::Config;
use crate::error::ApiError;
use log::{debug, error};
use url::Url;

/// Body of the dashboard endpoint, passed through exactly as decoded.
pub type DashboardPayload = serde_json::Value;

pub const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Debug, Clone)]
pub struct DashboardClient {
    config: Config,
    origin: Option<Url>,
    client: reqwest::Client,
}

impl DashboardClient {
    pub fn new(config: Config) -> Self {
        Self::new_with_client(config, reqwest::Client::new())
    }

    pub fn new_with_client(config: Config, client: reqwest::Client) -> Self {
        Self {
            config,
            origin: None,
            client,
        }
    }

    /// Origin the page was served from. Relative base URLs are resolved
    /// against it.
    pub fn with_origin(mut self, origin: Url) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetches the dashboard document with a single GET.
    ///
    /// Failures are logged once at error level and returned unchanged.
    pub async fn get_dashboard_data(&self) -> Result<DashboardPayload, ApiError> {
        self.fetch_dashboard().await.map_err(|e| {
            error!("Error fetching dashboard data: {}", e);
            e
        })
    }

    async fn fetch_dashboard(&self) -> Result<DashboardPayload, ApiError> {
        let url = self.resolve(&api_url(&self.config, DASHBOARD_PATH))?;
        debug!("Fetching dashboard data from {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| ApiError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status,
            });
        }

        response
            .json::<DashboardPayload>()
            .await
            .map_err(|source| ApiError::Decode {
                url: url.to_string(),
                source,
            })
    }

    fn resolve(&self, raw: &str) -> Result<Url, ApiError> {
        match Url::parse(raw) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let origin = self.origin.as_ref().ok_or_else(|| ApiError::InvalidUrl {
                    url: raw.to_string(),
                    reason: "relative URL needs the hosting origin".to_string(),
                })?;
                origin.join(raw).map_err(|e| ApiError::InvalidUrl {
                    url: raw.to_string(),
                    reason: e.to_string(),
                })
            }
            Err(e) => Err(ApiError::InvalidUrl {
                url: raw.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}

/// One-shot helper for callers that do not keep a client around.
pub async fn get_dashboard_data(config: &Config) -> Result<DashboardPayload, ApiError> {
    DashboardClient::new(config.clone()).get_dashboard_data().await
}
