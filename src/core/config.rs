//! Environment configuration
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::{anyhow, Context, Result};
use std::time::Duration;

use crate::features::followup::config::{FollowUpConfig, DEFAULT_TICK_INTERVAL, DEFAULT_TTL};

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub admin_channel_id: u64,
    pub discord_guild_id: Option<u64>,
    pub log_level: String,
    pub followup: FollowUpConfig,
}

impl Config {
    /// Read configuration from process environment (call `dotenv()` first)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_token = lookup("DISCORD_TOKEN")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| anyhow!("DISCORD_TOKEN environment variable not set"))?;

        let admin_channel_id = lookup("ADMIN_CHANNEL_ID")
            .ok_or_else(|| anyhow!("ADMIN_CHANNEL_ID environment variable not set"))?
            .trim()
            .parse::<u64>()
            .context("ADMIN_CHANNEL_ID must be a numeric channel id")?;

        let discord_guild_id = lookup("DISCORD_GUILD_ID")
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.trim().parse::<u64>())
            .transpose()
            .context("DISCORD_GUILD_ID must be a numeric guild id")?;

        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let tick_interval = duration_secs(
            &lookup,
            "FOLLOWUP_TICK_INTERVAL_SECS",
            DEFAULT_TICK_INTERVAL,
        )?;
        let ttl = duration_secs(&lookup, "FOLLOWUP_TTL_SECS", DEFAULT_TTL)?;
        let followup = FollowUpConfig::new(tick_interval, ttl)?;

        Ok(Config {
            discord_token,
            admin_channel_id,
            discord_guild_id,
            log_level,
            followup,
        })
    }
}

fn duration_secs<F>(lookup: &F, key: &str, default: Duration) -> Result<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .with_context(|| format!("{key} must be a whole number of seconds, got '{raw}'")),
        None => Ok(default),
    }
}
