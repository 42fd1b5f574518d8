//! Commands - API cho popup / host shell
//!
//! On-demand analysis và các thao tác settings, history, feedback.
//! Lỗi trả về dạng `String` cho host hiển thị.

use crate::logic::orchestrator::RiskOrchestrator;
use crate::logic::scoring::{PhishingStatus, RiskLevel};
use crate::logic::store::{DetectionHistory, FeedbackData, ResultStore, Settings};

use super::events::{deliver, NotificationSink, PageContentProvider};

// ============================================================================
// ANALYSIS
// ============================================================================

/// Analyze the page the user is looking at.
///
/// If the page content cannot be read the result is `unknown` and nothing is
/// recorded. The provider failed before reporting an address, so the
/// status carries an empty `url`.
pub async fn analyze_active_page(
    orchestrator: &RiskOrchestrator,
    provider: &dyn PageContentProvider,
    sink: &dyn NotificationSink,
) -> PhishingStatus {
    let page = match provider.active_page() {
        Ok(page) => page,
        Err(e) => {
            log::warn!("Active page unavailable: {}", e);
            return PhishingStatus::unknown("");
        }
    };

    let settings = orchestrator.store().get_settings();
    let status = orchestrator.evaluate(&page.url, &page.content).await;
    deliver(&status, settings.show_notifications, sink);
    status
}

/// Most recent recorded result for a URL
pub fn get_site_status(store: &ResultStore, url: &str) -> Result<Option<PhishingStatus>, String> {
    store.latest_for_url(url).map_err(|e| e.to_string())
}

// ============================================================================
// SETTINGS
// ============================================================================

pub fn get_settings(store: &ResultStore) -> Settings {
    store.get_settings()
}

pub fn save_settings(store: &ResultStore, settings: Settings) -> Result<(), String> {
    store.save_settings(&settings).map_err(|e| e.to_string())
}

// ============================================================================
// HISTORY
// ============================================================================

pub fn get_history(store: &ResultStore) -> Result<DetectionHistory, String> {
    store.get_history().map_err(|e| e.to_string())
}

pub fn clear_history(store: &ResultStore) -> Result<(), String> {
    store.clear_history().map_err(|e| e.to_string())
}

pub fn search_history(store: &ResultStore, term: &str) -> Result<Vec<PhishingStatus>, String> {
    store.search_history(term).map_err(|e| e.to_string())
}

// ============================================================================
// FEEDBACK
// ============================================================================

/// Record the user's own classification of a page
pub fn submit_feedback(
    store: &ResultStore,
    url: &str,
    user_classification: RiskLevel,
    system_classification: RiskLevel,
    reason: Option<&str>,
) -> Result<(), String> {
    let mut feedback = FeedbackData::new(url, user_classification, system_classification);
    if let Some(reason) = reason {
        feedback = feedback.with_reason(reason);
    }
    store.save_feedback(&feedback).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::events::{ActivePage, Notification};
    use crate::logic::features::PageContent;
    use crate::logic::orchestrator::OrchestratorConfig;
    use parking_lot::Mutex;
    use std::sync::Arc;
    use std::time::Duration;

    struct FixedProvider(Result<ActivePage, String>);

    impl PageContentProvider for FixedProvider {
        fn active_page(&self) -> Result<ActivePage, String> {
            self.0.clone()
        }
    }

    #[derive(Default)]
    struct RecordingSink(Mutex<Vec<Notification>>);

    impl NotificationSink for RecordingSink {
        fn notify(&self, notification: &Notification) {
            self.0.lock().push(notification.clone());
        }
    }

    fn orchestrator() -> RiskOrchestrator {
        let store = Arc::new(ResultStore::in_memory());
        store.save_settings(&Settings { use_local_model: true, ..Default::default() }).unwrap();
        RiskOrchestrator::new(store, OrchestratorConfig { remote_timeout: Duration::from_secs(1) })
    }

    #[tokio::test]
    async fn test_provider_failure_is_unknown_and_unrecorded() {
        let o = orchestrator();
        let sink = RecordingSink::default();

        let status =
            analyze_active_page(&o, &FixedProvider(Err("tab closed".to_string())), &sink).await;

        assert_eq!(status.risk, RiskLevel::Unknown);
        assert!(status.url.is_empty());
        assert_eq!(status.explanation[0].factor, "Page Unavailable");
        assert!(o.store().get_history().unwrap().is_empty());
        assert!(sink.0.lock().is_empty());
    }

    #[tokio::test]
    async fn test_analyze_active_page() {
        let o = orchestrator();
        let sink = RecordingSink::default();
        let page = ActivePage {
            url: "https://example.com".to_string(),
            content: PageContent::new("<link rel=\"icon\" href=\"/f.ico\">", "Welcome"),
        };

        let status = analyze_active_page(&o, &FixedProvider(Ok(page)), &sink).await;

        assert_eq!(status.risk, RiskLevel::Safe);
        assert!(sink.0.lock().is_empty());
        let site = get_site_status(o.store(), "https://example.com").unwrap().unwrap();
        assert_eq!(site.risk, RiskLevel::Safe);
    }

    #[test]
    fn test_store_commands() {
        let store = ResultStore::in_memory();

        let quiet = Settings {
            show_notifications: false,
            ..Default::default()
        };
        save_settings(&store, quiet).unwrap();
        assert!(!get_settings(&store).show_notifications);

        let status = PhishingStatus::new("https://a.com", 0.0, RiskLevel::Safe, vec![]);
        store.append_history_entry(&status).unwrap();
        assert_eq!(search_history(&store, "A.COM").unwrap().len(), 1);
        clear_history(&store).unwrap();
        assert!(get_history(&store).unwrap().is_empty());

        submit_feedback(
            &store,
            "https://a.com",
            RiskLevel::Dangerous,
            RiskLevel::Safe,
            Some("fake login"),
        )
        .unwrap();
        let feedback = store.get_feedback().unwrap();
        assert_eq!(feedback.len(), 1);
        assert_eq!(feedback[0].reason.as_deref(), Some("fake login"));
    }
}
