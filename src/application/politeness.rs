//! Request pacing
//!
//! The catalogue is walked one request at a time; these policies decide how
//! long to wait between requests.

use async_trait::async_trait;
use std::time::Duration;

use crate::infrastructure::config::PolitenessConfig;

/// Points in the walk where a pause is taken
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pause {
    /// After every detail-page fetch attempt, successful or not
    AfterDetail,
    /// After every listing page whose items were processed
    AfterPage,
}

#[async_trait]
pub trait DelayPolicy: Send + Sync {
    async fn pause(&self, pause: Pause);
}

/// Sleeps for a fixed duration per pause kind
#[derive(Debug, Clone)]
pub struct FixedDelay {
    after_detail: Duration,
    after_page: Duration,
}

impl FixedDelay {
    pub fn new(after_detail: Duration, after_page: Duration) -> Self {
        Self { after_detail, after_page }
    }

    pub fn from_config(config: &PolitenessConfig) -> Self {
        Self::new(
            Duration::from_millis(config.detail_delay_ms),
            Duration::from_millis(config.page_delay_ms),
        )
    }

    pub fn duration_for(&self, pause: Pause) -> Duration {
        match pause {
            Pause::AfterDetail => self.after_detail,
            Pause::AfterPage => self.after_page,
        }
    }
}

#[async_trait]
impl DelayPolicy for FixedDelay {
    async fn pause(&self, pause: Pause) {
        let duration = self.duration_for(pause);
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}

/// Never waits
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl DelayPolicy for NoDelay {
    async fn pause(&self, _pause: Pause) {}
}
