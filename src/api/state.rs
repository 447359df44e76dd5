//! Application state for the Benefits Calculation Engine API.

use std::sync::Arc;

use crate::config::{BenefitsPolicy, ConfigLoader, PolicyMetadata};

/// Shared application state.
///
/// Wraps the loaded policy tables so every handler can reach them without
/// re-reading the YAML files. Cloning is cheap (one `Arc` bump), which is
/// what axum's `State` extractor requires.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the benefits policy the calculators consume.
    pub fn policy(&self) -> &BenefitsPolicy {
        self.config.policy()
    }

    /// Returns the policy metadata (code, name, version).
    pub fn metadata(&self) -> &PolicyMetadata {
        self.config.metadata()
    }
}
