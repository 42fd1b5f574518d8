//! Event Surface - Browser-side collaborators
//!
//! Page-content provider, notification sink và navigation trigger.
//! Host (browser shell, CLI, test) implement các trait này.

use serde::{Deserialize, Serialize};

use crate::logic::features::PageContent;
use crate::logic::orchestrator::RiskOrchestrator;
use crate::logic::scoring::{PhishingStatus, RiskLevel};

// ============================================================================
// COLLABORATOR TRAITS
// ============================================================================

/// The page currently shown to the user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivePage {
    pub url: String,
    pub content: PageContent,
}

/// Supplies the active page's URL and content on demand
pub trait PageContentProvider {
    fn active_page(&self) -> Result<ActivePage, String>;
}

/// Receives user-facing alerts and per-page results
pub trait NotificationSink {
    fn notify(&self, notification: &Notification);

    /// Result delivered back to the page (in-page warning banner)
    fn page_result(&self, _status: &PhishingStatus) {}
}

// ============================================================================
// NOTIFICATION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub risk: RiskLevel,
    pub url: String,
}

impl Notification {
    /// Alert for a suspicious or dangerous result; `None` for anything else
    pub fn for_status(status: &PhishingStatus) -> Option<Self> {
        if !status.risk.is_alert() {
            return None;
        }

        let title = if status.risk == RiskLevel::Dangerous {
            "Dangerous Website Detected!"
        } else {
            "Suspicious Website Warning"
        };

        Some(Self {
            title: title.to_string(),
            message: format!(
                "PhishSense has detected that {} may be a {} website.",
                display_host(&status.url),
                status.risk
            ),
            risk: status.risk,
            url: status.url.clone(),
        })
    }
}

fn display_host(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| url.to_string())
}

/// Notify when enabled and the result is an alert
pub(crate) fn deliver(
    status: &PhishingStatus,
    show_notifications: bool,
    sink: &dyn NotificationSink,
) {
    if show_notifications {
        if let Some(notification) = Notification::for_status(status) {
            log::info!("Notifying: {} ({})", notification.title, status.url);
            sink.notify(&notification);
        }
    }
    sink.page_result(status);
}

// ============================================================================
// NAVIGATION TRIGGER
// ============================================================================

/// A completed navigation in some frame of the browser
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationEvent {
    /// 0 = main frame
    pub frame_id: u32,
    pub url: String,
}

impl NavigationEvent {
    pub fn is_main_frame(&self) -> bool {
        self.frame_id == 0
    }
}

/// Automatic scan on navigation.
///
/// Only main-frame navigations are evaluated, and only while
/// `scanAutomatically` is on. Returns the status when an evaluation ran.
pub async fn on_navigation_completed(
    orchestrator: &RiskOrchestrator,
    event: NavigationEvent,
    content: &PageContent,
    sink: &dyn NotificationSink,
) -> Option<PhishingStatus> {
    if !event.is_main_frame() {
        return None;
    }

    let settings = orchestrator.store().get_settings();
    if !settings.scan_automatically {
        log::debug!("Automatic scan disabled, skipping {}", event.url);
        return None;
    }

    let status = orchestrator.evaluate(&event.url, content).await;
    deliver(&status, settings.show_notifications, sink);
    Some(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::store::{ResultStore, Settings};
    use crate::logic::orchestrator::OrchestratorConfig;
    use parking_lot::Mutex;
    use std::sync::Arc;
    use std::time::Duration;

    #[derive(Default)]
    struct RecordingSink {
        notifications: Mutex<Vec<Notification>>,
        results: Mutex<Vec<PhishingStatus>>,
    }

    impl NotificationSink for RecordingSink {
        fn notify(&self, notification: &Notification) {
            self.notifications.lock().push(notification.clone());
        }

        fn page_result(&self, status: &PhishingStatus) {
            self.results.lock().push(status.clone());
        }
    }

    fn local_orchestrator(settings: Settings) -> RiskOrchestrator {
        let store = Arc::new(ResultStore::in_memory());
        store.save_settings(&Settings { use_local_model: true, ..settings }).unwrap();
        RiskOrchestrator::new(store, OrchestratorConfig { remote_timeout: Duration::from_secs(1) })
    }

    #[test]
    fn test_notification_wording() {
        let status =
            PhishingStatus::new("http://192.168.1.5/login", 0.7, RiskLevel::Dangerous, vec![]);
        let n = Notification::for_status(&status).unwrap();

        assert_eq!(n.title, "Dangerous Website Detected!");
        assert_eq!(
            n.message,
            "PhishSense has detected that 192.168.1.5 may be a dangerous website."
        );

        let status = PhishingStatus::new("https://paypa1.xyz/", 0.4, RiskLevel::Suspicious, vec![]);
        assert_eq!(Notification::for_status(&status).unwrap().title, "Suspicious Website Warning");
    }

    #[test]
    fn test_no_notification_for_safe() {
        let status = PhishingStatus::new("https://example.com", 0.0, RiskLevel::Safe, vec![]);
        assert!(Notification::for_status(&status).is_none());
        assert!(Notification::for_status(&PhishingStatus::error("https://example.com")).is_none());
        let unknown = PhishingStatus::unknown("https://example.com");
        assert!(Notification::for_status(&unknown).is_none());
    }

    #[tokio::test]
    async fn test_subframe_navigation_ignored() {
        let o = local_orchestrator(Settings::default());
        let sink = RecordingSink::default();
        let event = NavigationEvent { frame_id: 3, url: "https://example.com/ad".to_string() };

        assert!(on_navigation_completed(&o, event, &PageContent::default(), &sink).await.is_none());
        assert!(o.store().get_history().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_auto_scan_disabled() {
        let o = local_orchestrator(Settings { scan_automatically: false, ..Default::default() });
        let sink = RecordingSink::default();
        let event = NavigationEvent { frame_id: 0, url: "https://example.com".to_string() };

        assert!(on_navigation_completed(&o, event, &PageContent::default(), &sink).await.is_none());
        assert!(o.store().get_history().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_main_frame_evaluated_and_notified() {
        let o = local_orchestrator(Settings::default());
        let sink = RecordingSink::default();
        let event = NavigationEvent { frame_id: 0, url: "http://192.168.1.5/login".to_string() };

        let status = on_navigation_completed(&o, event, &PageContent::default(), &sink)
            .await
            .unwrap();

        assert_eq!(status.risk, RiskLevel::Suspicious);
        assert_eq!(sink.notifications.lock().len(), 1);
        assert_eq!(sink.results.lock().len(), 1);
        assert_eq!(o.store().get_history().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_notifications_disabled() {
        let o = local_orchestrator(Settings { show_notifications: false, ..Default::default() });
        let sink = RecordingSink::default();
        let event = NavigationEvent { frame_id: 0, url: "http://192.168.1.5/login".to_string() };

        on_navigation_completed(&o, event, &PageContent::default(), &sink).await;

        assert!(sink.notifications.lock().is_empty());
        assert_eq!(sink.results.lock().len(), 1);
    }
}
