use crate::domain::metrics::{ModelMetrics, ReliabilityBin};
use crate::fetch::ScoringService;

/// Retrieves model-quality metrics and reliability bins, independently of
/// the plan cycle. Failures degrade to whatever was last seen: the display
/// shows a placeholder rather than an error, and there is no retry.
pub struct MetricsFetcher<C> {
    client: C,
    metrics: ModelMetrics,
    reliability: Vec<ReliabilityBin>,
}

impl<C: ScoringService> MetricsFetcher<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            metrics: ModelMetrics::default(),
            reliability: Vec::new(),
        }
    }

    /// Runs both retrievals concurrently. Each failure is logged and
    /// swallowed on its own; one failing does not block the other.
    pub async fn refresh(&mut self) {
        let (metrics, reliability) = tokio::join!(
            self.client.fetch_metrics(),
            self.client.fetch_reliability()
        );

        match metrics {
            Ok(m) => self.metrics = m,
            Err(err) => {
                tracing::warn!(error = %err, "metrics fetch failed; keeping previous values");
            }
        }

        match reliability {
            Ok(bins) => self.reliability = bins,
            Err(err) => {
                tracing::warn!(error = %err, "reliability fetch failed; keeping previous values");
            }
        }
    }

    pub fn metrics(&self) -> &ModelMetrics {
        &self.metrics
    }

    pub fn reliability(&self) -> &[ReliabilityBin] {
        &self.reliability
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plan::{PlanRequest, PlanResponse};
    use std::sync::atomic::{AtomicBool, Ordering};

    struct StubService {
        fail: AtomicBool,
    }

    impl StubService {
        fn new() -> Self {
            Self {
                fail: AtomicBool::new(false),
            }
        }
    }

    #[async_trait::async_trait]
    impl ScoringService for &StubService {
        async fn fetch_plan(&self, _req: &PlanRequest) -> anyhow::Result<PlanResponse> {
            anyhow::bail!("not used here")
        }

        async fn fetch_metrics(&self) -> anyhow::Result<ModelMetrics> {
            if self.fail.load(Ordering::SeqCst) {
                anyhow::bail!("metrics endpoint down");
            }
            Ok(ModelMetrics { brier: Some(0.18) })
        }

        async fn fetch_reliability(&self) -> anyhow::Result<Vec<ReliabilityBin>> {
            if self.fail.load(Ordering::SeqCst) {
                anyhow::bail!("reliability endpoint down");
            }
            Ok(vec![
                ReliabilityBin {
                    p_avg: 0.2,
                    y_rate: 0.1,
                    n: 5,
                },
                ReliabilityBin {
                    p_avg: 0.55,
                    y_rate: 0.52,
                    n: 40,
                },
                ReliabilityBin {
                    p_avg: 0.9,
                    y_rate: 1.0,
                    n: 3,
                },
            ])
        }
    }

    #[tokio::test]
    async fn refresh_loads_both_slots() {
        let stub = StubService::new();
        let mut fetcher = MetricsFetcher::new(&stub);

        fetcher.refresh().await;
        assert_eq!(fetcher.metrics().brier, Some(0.18));
        assert_eq!(fetcher.reliability().len(), 3);
    }

    #[tokio::test]
    async fn failures_keep_previously_loaded_values() {
        let stub = StubService::new();
        let mut fetcher = MetricsFetcher::new(&stub);

        fetcher.refresh().await;
        stub.fail.store(true, Ordering::SeqCst);
        fetcher.refresh().await;

        assert_eq!(fetcher.metrics().brier, Some(0.18));
        assert_eq!(fetcher.reliability().len(), 3);
    }

    #[tokio::test]
    async fn failure_before_any_load_leaves_placeholders() {
        let stub = StubService::new();
        stub.fail.store(true, Ordering::SeqCst);

        let mut fetcher = MetricsFetcher::new(&stub);
        fetcher.refresh().await;

        assert!(fetcher.metrics().brier.is_none());
        assert!(fetcher.reliability().is_empty());
    }
}
