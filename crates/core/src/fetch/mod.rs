use crate::domain::metrics::{ModelMetrics, ReliabilityBin};
use crate::domain::plan::{PlanRequest, PlanResponse};

pub mod http;
pub mod metrics;
pub mod plan;

/// The remote scoring service, as this client sees it. Probabilities,
/// expected value and sizing are all computed upstream; this side only
/// requests and presents.
#[async_trait::async_trait]
pub trait ScoringService: Send + Sync {
    async fn fetch_plan(&self, req: &PlanRequest) -> anyhow::Result<PlanResponse>;

    async fn fetch_metrics(&self) -> anyhow::Result<ModelMetrics>;

    async fn fetch_reliability(&self) -> anyhow::Result<Vec<ReliabilityBin>>;
}
