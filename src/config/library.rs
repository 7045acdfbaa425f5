//! Library configuration structures.

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

use crate::core::AppResult;

/// Environment variable holding the queue cap (`unbounded` or a count).
pub const ENV_MAX_QUEUE_DEPTH: &str = "LIBRARY_MAX_QUEUE_DEPTH";
/// Environment variable selecting the audit backend.
pub const ENV_AUDIT: &str = "LIBRARY_AUDIT";
/// Environment variable holding the audit buffer size.
pub const ENV_AUDIT_CAPACITY: &str = "LIBRARY_AUDIT_CAPACITY";

const DEFAULT_AUDIT_CAPACITY: usize = 1024;

/// Audit backend selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditBackendConfig {
    /// No audit trail.
    #[default]
    Disabled,
    /// Bounded in-memory audit trail.
    InMemory,
}

impl std::str::FromStr for AuditBackendConfig {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "disabled" | "off" | "none" => Ok(Self::Disabled),
            "in_memory" | "memory" => Ok(Self::InMemory),
            other => Err(format!("unknown audit backend `{other}`")),
        }
    }
}

/// Library configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Maximum users waiting per book; `None` leaves queues unbounded.
    pub max_queue_depth: Option<usize>,
    /// Audit backend selection.
    pub audit: AuditBackendConfig,
    /// Events kept by the in-memory audit trail before the oldest is evicted.
    pub audit_capacity: usize,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            max_queue_depth: None,
            audit: AuditBackendConfig::Disabled,
            audit_capacity: DEFAULT_AUDIT_CAPACITY,
        }
    }
}

impl LibraryConfig {
    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Describes the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_queue_depth == Some(0) {
            return Err("max_queue_depth must be greater than 0 when set".into());
        }
        if self.audit == AuditBackendConfig::InMemory && self.audit_capacity == 0 {
            return Err("audit_capacity must be greater than 0 for the in_memory audit".into());
        }
        Ok(())
    }

    /// Parse configuration from a JSON string and validate.
    ///
    /// # Errors
    ///
    /// Returns the parse error or the validation failure.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load configuration from the process environment, reading a `.env`
    /// file first if one exists. Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Fails on unparsable values or an invalid resulting configuration.
    pub fn from_env() -> AppResult<Self> {
        // A missing .env file is normal.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Fails on unparsable values or an invalid resulting configuration.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(raw) = lookup(ENV_MAX_QUEUE_DEPTH) {
            let raw = raw.trim();
            cfg.max_queue_depth = if raw.is_empty() || raw.eq_ignore_ascii_case("unbounded") {
                None
            } else {
                Some(
                    raw.parse()
                        .with_context(|| format!("{ENV_MAX_QUEUE_DEPTH}={raw} is not a count"))?,
                )
            };
        }
        if let Some(raw) = lookup(ENV_AUDIT) {
            cfg.audit = raw
                .parse()
                .map_err(|e: String| anyhow::anyhow!("{ENV_AUDIT}: {e}"))?;
        }
        if let Some(raw) = lookup(ENV_AUDIT_CAPACITY) {
            cfg.audit_capacity = raw
                .trim()
                .parse()
                .with_context(|| format!("{ENV_AUDIT_CAPACITY}={raw} is not a count"))?;
        }

        if let Err(e) = cfg.validate() {
            bail!("invalid library configuration: {e}");
        }
        Ok(cfg)
    }
}
