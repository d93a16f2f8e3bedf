pub mod calibrate;
pub mod domain;
pub mod export;
pub mod fetch;
pub mod tips;

pub mod config {
    #[derive(Debug, Clone)]
    pub struct Settings {
        pub scoring_api_base_url: Option<String>,
        pub sentry_dsn: Option<String>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Ok(Self {
                scoring_api_base_url: std::env::var("SCORING_API_BASE_URL").ok(),
                sentry_dsn: std::env::var("SENTRY_DSN").ok(),
            })
        }
    }
}
