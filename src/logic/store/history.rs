use super::{load, save, DetectionHistory, ResultStore, StoreError, HISTORY_KEY};
use crate::logic::scoring::PhishingStatus;

impl ResultStore {
    /// Stored history; empty when never written
    pub fn get_history(&self) -> Result<DetectionHistory, StoreError> {
        let backend = self.backend.lock();
        Ok(load(&**backend, HISTORY_KEY)?.unwrap_or_default())
    }

    /// Prepend one result, keeping at most `HISTORY_LIMIT` entries
    pub fn append_history_entry(&self, status: &PhishingStatus) -> Result<(), StoreError> {
        let mut backend = self.backend.lock();
        let mut history: DetectionHistory = load(&**backend, HISTORY_KEY)?.unwrap_or_default();

        history.prepend(status.clone());
        save(&mut **backend, HISTORY_KEY, &history)?;

        log::debug!(
            "Recorded {} ({}) - history size {}",
            status.url,
            status.risk,
            history.len()
        );
        Ok(())
    }

    pub fn clear_history(&self) -> Result<(), StoreError> {
        let mut backend = self.backend.lock();
        save(&mut **backend, HISTORY_KEY, &DetectionHistory::default())?;
        log::info!("Cleared detection history");
        Ok(())
    }

    /// Entries whose URL contains `term` (case-insensitive), most recent first
    pub fn search_history(&self, term: &str) -> Result<Vec<PhishingStatus>, StoreError> {
        let needle = term.to_lowercase();
        Ok(self
            .get_history()?
            .items
            .into_iter()
            .filter(|item| item.url.to_lowercase().contains(&needle))
            .collect())
    }

    /// Most recent result recorded for exactly this URL
    pub fn latest_for_url(&self, url: &str) -> Result<Option<PhishingStatus>, StoreError> {
        Ok(self.get_history()?.items.into_iter().find(|item| item.url == url))
    }
}
