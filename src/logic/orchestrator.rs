//! Risk Orchestrator
//!
//! Một evaluation: settings → features → remote (hoặc local) → history.
//! Luôn trả về một PhishingStatus; remote lỗi thì fallback sang local scorer.

use std::sync::Arc;
use std::time::Duration;

use crate::constants;
use crate::logic::features::{extract_features, PageContent, PhishingFeatures};
use crate::logic::remote::RemoteClient;
use crate::logic::scoring::{self, PhishingStatus};
use crate::logic::store::{ResultStore, Settings};

#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    pub remote_timeout: Duration,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            remote_timeout: constants::get_remote_timeout(),
        }
    }
}

pub struct RiskOrchestrator {
    store: Arc<ResultStore>,
    remote: RemoteClient,
}

impl RiskOrchestrator {
    pub fn new(store: Arc<ResultStore>, config: OrchestratorConfig) -> Self {
        Self {
            store,
            remote: RemoteClient::new(config.remote_timeout),
        }
    }

    pub fn store(&self) -> &Arc<ResultStore> {
        &self.store
    }

    /// Evaluate one page and record the result in history.
    ///
    /// Exactly one history entry is written per call. A failed write is logged
    /// and the status is still returned.
    pub async fn evaluate(&self, url: &str, content: &PageContent) -> PhishingStatus {
        let settings = self.store.get_settings();
        let features = extract_features(url, content);

        let status = self.resolve(url, &features, &settings).await;

        if let Err(e) = self.store.append_history_entry(&status) {
            log::error!("Failed to record result for {}: {}", url, e);
        }

        status
    }

    async fn resolve(
        &self,
        url: &str,
        features: &PhishingFeatures,
        settings: &Settings,
    ) -> PhishingStatus {
        if settings.use_local_model {
            let status = scoring::score(url, features);
            log::info!("[local] {} -> {} ({:.2})", url, status.risk, status.score);
            return status;
        }

        match self.remote.classify(&settings.api_endpoint, url, features).await {
            Ok(status) => {
                log::info!("[remote] {} -> {} ({:.2})", url, status.risk, status.score);
                status
            }
            Err(e) => {
                log::warn!("Remote classification unavailable ({}), scoring locally", e);
                let status = scoring::score(url, features);
                log::info!("[local] {} -> {} ({:.2})", url, status.risk, status.score);
                status
            }
        }
    }
}
