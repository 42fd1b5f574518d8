use super::{load, save, FeedbackData, ResultStore, StoreError, FEEDBACK_KEY};

impl ResultStore {
    /// Append to the feedback log; entries are never modified or pruned
    pub fn save_feedback(&self, feedback: &FeedbackData) -> Result<(), StoreError> {
        let mut backend = self.backend.lock();
        let mut entries: Vec<FeedbackData> = load(&**backend, FEEDBACK_KEY)?.unwrap_or_default();

        entries.push(feedback.clone());
        save(&mut **backend, FEEDBACK_KEY, &entries)?;

        log::info!(
            "Feedback saved for {}: user={} system={}",
            feedback.url,
            feedback.user_classification,
            feedback.system_classification
        );
        Ok(())
    }

    /// Feedback in insertion order
    pub fn get_feedback(&self) -> Result<Vec<FeedbackData>, StoreError> {
        let backend = self.backend.lock();
        Ok(load(&**backend, FEEDBACK_KEY)?.unwrap_or_default())
    }
}
