//! Inter-row pacing for CSV batches.
//!
//! `AppState` holds an `Arc<dyn RowPacer>`, chosen at startup from
//! `BATCH_ROW_DELAY_MS`. Tests inject `NoDelay`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

#[async_trait]
pub trait RowPacer: Send + Sync {
    /// Called between two processed rows.
    async fn pause(&self);
}

/// Sleeps for a fixed interval between rows.
pub struct FixedDelay(pub Duration);

#[async_trait]
impl RowPacer for FixedDelay {
    async fn pause(&self) {
        tokio::time::sleep(self.0).await;
    }
}

pub struct NoDelay;

#[async_trait]
impl RowPacer for NoDelay {
    async fn pause(&self) {}
}

pub fn pacer_for_delay(delay_ms: u64) -> Arc<dyn RowPacer> {
    if delay_ms == 0 {
        Arc::new(NoDelay)
    } else {
        Arc::new(FixedDelay(Duration::from_millis(delay_ms)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_fixed_delay_sleeps() {
        let start = Instant::now();
        FixedDelay(Duration::from_millis(100)).pause().await;
        assert!(start.elapsed() >= Duration::from_millis(100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_delay_selects_no_delay() {
        let start = Instant::now();
        pacer_for_delay(0).pause().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
