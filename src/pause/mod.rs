use async_trait::async_trait;
use std::time::Duration;

/// Suspension point between progress lines.
#[async_trait]
pub trait Pause: Send + Sync {
    async fn pause(&self, duration: Duration);
}

/// Wall-clock pause backed by the tokio timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioPause;

#[async_trait]
impl Pause for TokioPause {
    async fn pause(&self, duration: Duration) {
        if duration.is_zero() {
            return;
        }
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn sleeps_for_the_requested_duration() {
        let start = Instant::now();
        TokioPause.pause(Duration::from_secs(3)).await;
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(3));
        assert!(elapsed < Duration::from_millis(3_010));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_duration_returns_immediately() {
        let start = Instant::now();
        TokioPause.pause(Duration::ZERO).await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
