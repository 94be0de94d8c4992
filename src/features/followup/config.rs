use anyhow::{bail, Result};
use log::warn;
use std::time::Duration;

/// Default sweep interval (10 minutes)
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(10 * 60);
/// Default age at which a pending request gets a reminder (24 hours)
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Timing of the follow-up sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FollowUpConfig {
    /// How often the store is swept
    pub tick_interval: Duration,
    /// Age at which a pending entry is considered stale
    pub ttl: Duration,
}

impl Default for FollowUpConfig {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            ttl: DEFAULT_TTL,
        }
    }
}

impl FollowUpConfig {
    pub fn new(tick_interval: Duration, ttl: Duration) -> Result<Self> {
        let config = Self { tick_interval, ttl };
        config.validate()?;
        Ok(config)
    }

    /// Reject zero durations; warn when entries may outlive their TTL by up to one tick
    pub fn validate(&self) -> Result<()> {
        if self.tick_interval.is_zero() {
            bail!("follow-up tick interval must be greater than zero");
        }
        if self.ttl.is_zero() {
            bail!("follow-up TTL must be greater than zero");
        }
        if self.ttl < self.tick_interval {
            warn!(
                "Follow-up TTL ({:?}) is shorter than the tick interval ({:?}); reminders may fire up to one interval late",
                self.ttl, self.tick_interval
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FollowUpConfig::default();
        assert_eq!(config.tick_interval, Duration::from_secs(600));
        assert_eq!(config.ttl, Duration::from_secs(86_400));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_durations_rejected() {
        assert!(FollowUpConfig::new(Duration::ZERO, DEFAULT_TTL).is_err());
        assert!(FollowUpConfig::new(DEFAULT_TICK_INTERVAL, Duration::ZERO).is_err());
    }

    #[test]
    fn test_short_ttl_is_allowed() {
        let config = FollowUpConfig::new(Duration::from_secs(60), Duration::from_secs(30));
        assert!(config.is_ok());
    }
}
