//! Builders to construct an in-memory library from configuration.

use std::sync::Arc;

use anyhow::anyhow;

use crate::config::{AuditBackendConfig, LibraryConfig};
use crate::core::{AppResult, AuditSink, InMemoryAuditSink};
use crate::infra::InMemoryLibrary;

/// Builder for [`InMemoryLibrary`].
pub struct LibraryBuilder {
    config: LibraryConfig,
    audit: Option<Arc<dyn AuditSink>>,
}

impl LibraryBuilder {
    /// Start from the given configuration.
    #[must_use]
    pub fn new(config: LibraryConfig) -> Self {
        Self {
            config,
            audit: None,
        }
    }

    /// Start from configuration loaded by [`LibraryConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Propagates environment parsing and validation failures.
    pub fn from_env() -> AppResult<Self> {
        Ok(Self::new(LibraryConfig::from_env()?))
    }

    /// Configuration the library will be built from.
    #[must_use]
    pub const fn config(&self) -> &LibraryConfig {
        &self.config
    }

    /// Use `sink` for the audit trail regardless of the configured backend.
    #[must_use]
    pub fn with_audit_sink(mut self, sink: Arc<dyn AuditSink>) -> Self {
        self.audit = Some(sink);
        self
    }

    /// Validate the configuration and build the library.
    ///
    /// # Errors
    ///
    /// Fails when the configuration is invalid.
    pub fn build(self) -> AppResult<InMemoryLibrary> {
        self.config
            .validate()
            .map_err(|e| anyhow!("config invalid: {e}"))?;

        let audit = match (self.audit, self.config.audit) {
            (Some(sink), _) => Some(sink),
            (None, AuditBackendConfig::InMemory) => {
                Some(Arc::new(InMemoryAuditSink::new(self.config.audit_capacity)) as Arc<dyn AuditSink>)
            }
            (None, AuditBackendConfig::Disabled) => None,
        };

        let mut library = InMemoryLibrary::new().with_max_queue_depth(self.config.max_queue_depth);
        if let Some(sink) = audit {
            library = library.with_audit(sink);
        }
        tracing::debug!(
            "built library (max_queue_depth={:?}, audit={:?})",
            self.config.max_queue_depth,
            self.config.audit
        );
        Ok(library)
    }
}

/// Build a library from configuration, returning a handle to the in-memory
/// audit trail when one is configured.
///
/// # Errors
///
/// Fails when the configuration is invalid.
pub fn build_library(cfg: &LibraryConfig) -> AppResult<(InMemoryLibrary, Option<InMemoryAuditSink>)> {
    let sink = match cfg.audit {
        AuditBackendConfig::InMemory => Some(InMemoryAuditSink::new(cfg.audit_capacity)),
        AuditBackendConfig::Disabled => None,
    };
    let mut builder = LibraryBuilder::new(cfg.clone());
    if let Some(sink) = &sink {
        builder = builder.with_audit_sink(Arc::new(sink.clone()));
    }
    Ok((builder.build()?, sink))
}
