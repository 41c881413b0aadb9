use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use tracing::trace;

use crate::error::FinderError;

#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self);
}

/// Sleeps a uniformly random number of seconds in `[min, max]` after each call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomDelay {
    min: f64,
    max: f64,
}

impl RandomDelay {
    pub fn new(min: f64, max: f64) -> Result<Self, FinderError> {
        if !min.is_finite() || !max.is_finite() || min < 0.0 || min > max {
            return Err(FinderError::InvalidDelay { min, max });
        }

        Ok(Self { min, max })
    }

    pub fn fixed(secs: f64) -> Result<Self, FinderError> {
        Self::new(secs, secs)
    }

    pub fn next_delay(&self) -> Duration {
        let secs = rand::thread_rng().gen_range(self.min..=self.max);
        Duration::from_secs_f64(secs)
    }
}

impl Default for RandomDelay {
    fn default() -> Self {
        Self { min: 1.0, max: 2.0 }
    }
}

#[async_trait]
impl Pacer for RandomDelay {
    async fn pause(&self) {
        let delay = self.next_delay();
        trace!(?delay, "pacing");
        tokio::time::sleep(delay).await;
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl Pacer for NoDelay {
    async fn pause(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_delay_stays_within_one_to_two_seconds() {
        let pacer = RandomDelay::default();

        for _ in 0..200 {
            let delay = pacer.next_delay();
            assert!(delay >= Duration::from_secs(1), "{delay:?}");
            assert!(delay <= Duration::from_secs(2), "{delay:?}");
        }
    }

    #[test]
    fn fixed_delay_has_no_jitter() {
        let pacer = RandomDelay::fixed(0.25).unwrap();
        assert_eq!(pacer.next_delay(), Duration::from_millis(250));
    }

    #[test]
    fn rejects_bad_ranges() {
        assert!(RandomDelay::new(2.0, 1.0).is_err());
        assert!(RandomDelay::new(-1.0, 1.0).is_err());
        assert!(RandomDelay::new(0.0, f64::INFINITY).is_err());
        assert!(RandomDelay::new(f64::NAN, 1.0).is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn pause_sleeps_for_the_drawn_delay() {
        let pacer = RandomDelay::fixed(1.5).unwrap();
        let started = tokio::time::Instant::now();

        pacer.pause().await;

        assert!(started.elapsed() >= Duration::from_millis(1500));
    }
}
