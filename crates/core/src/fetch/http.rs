use crate::config::Settings;
use crate::domain::metrics::{ModelMetrics, ReliabilityBin, ReliabilityResponse};
use crate::domain::plan::{PlanRequest, PlanResponse};
use crate::fetch::ScoringService;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const PLAN_PATH: &str = "/plan/today";
const METRICS_PATH: &str = "/metrics";
const RELIABILITY_PATH: &str = "/reliability";
const EXPORT_PATH: &str = "/trade/export";

#[derive(Debug, Clone)]
pub struct HttpScoringClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpScoringClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let base_url = settings
            .scoring_api_base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = std::env::var("SCORING_API_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self::new(base_url, Duration::from_secs(timeout_secs))
    }

    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build scoring service http client")?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Link to the server-side export for the same parameter tuple. Handed
    /// to the user as-is, never fetched by this client.
    pub fn export_url(&self, req: &PlanRequest) -> String {
        let query = req
            .query()
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.url(EXPORT_PATH))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let res = self
            .http
            .get(self.url(path))
            .query(query)
            .send()
            .await
            .context("scoring service request failed")?;

        let status = res.status();
        let text = res
            .text()
            .await
            .context("failed to read scoring service response")?;

        if !status.is_success() {
            anyhow::bail!("scoring service HTTP {status} for {path}: {text}");
        }

        serde_json::from_str::<T>(&text)
            .with_context(|| format!("scoring service response for {path} is not valid JSON: {text}"))
    }
}

#[async_trait::async_trait]
impl ScoringService for HttpScoringClient {
    async fn fetch_plan(&self, req: &PlanRequest) -> Result<PlanResponse> {
        self.get_json(PLAN_PATH, &req.query()).await
    }

    async fn fetch_metrics(&self) -> Result<ModelMetrics> {
        self.get_json(METRICS_PATH, &[]).await
    }

    async fn fetch_reliability(&self) -> Result<Vec<ReliabilityBin>> {
        let res: ReliabilityResponse = self.get_json(RELIABILITY_PATH, &[]).await?;
        Ok(res.calibration)
    }
}
