//! Configuration loading and management

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Runtime configuration for the shop-orders service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Address the HTTP server binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Base URL of the customer service
    #[serde(default = "default_customer_url")]
    pub customer_service_url: String,

    /// Base URL of the item service
    #[serde(default = "default_item_url")]
    pub item_service_url: String,

    /// Per-call timeout for downstream requests, in seconds
    #[serde(default = "default_timeout_secs")]
    pub downstream_timeout_secs: u64,
}

fn default_bind_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_customer_url() -> String {
    "http://customerservice:8080".to_string()
}

fn default_item_url() -> String {
    "http://itemservice:8080".to_string()
}

fn default_timeout_secs() -> u64 {
    5
}

impl ServiceConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load from `SHOP_ORDERS_CONFIG` if set, otherwise defaults, then apply
    /// env-var overrides
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var("SHOP_ORDERS_CONFIG") {
            Ok(path) => Self::from_yaml_file(&path)?,
            Err(_) => Self::default_config(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Override individual fields from the environment
    pub fn apply_env_overrides(&mut self) {
        if let Ok(addr) = std::env::var("SHOP_ORDERS_BIND_ADDR") {
            self.bind_addr = addr;
        }
        if let Ok(url) = std::env::var("SHOP_ORDERS_CUSTOMER_SERVICE_URL") {
            self.customer_service_url = url;
        }
        if let Ok(url) = std::env::var("SHOP_ORDERS_ITEM_SERVICE_URL") {
            self.item_service_url = url;
        }
        if let Ok(secs) = std::env::var("SHOP_ORDERS_DOWNSTREAM_TIMEOUT_SECS") {
            if let Ok(secs) = secs.parse() {
                self.downstream_timeout_secs = secs;
            }
        }
    }

    /// Downstream timeout as a Duration
    pub fn downstream_timeout(&self) -> Duration {
        Duration::from_secs(self.downstream_timeout_secs)
    }

    /// Create a default configuration for testing
    pub fn default_config() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            customer_service_url: default_customer_url(),
            item_service_url: default_item_url(),
            downstream_timeout_secs: default_timeout_secs(),
        }
    }
}
