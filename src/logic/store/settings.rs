use super::{load, save, ResultStore, Settings, StoreError, SETTINGS_KEY};

impl ResultStore {
    /// Current settings; absent or unreadable data falls back to defaults
    pub fn get_settings(&self) -> Settings {
        let backend = self.backend.lock();
        match load::<Settings>(&**backend, SETTINGS_KEY) {
            Ok(Some(settings)) => settings,
            Ok(None) => Settings::default(),
            Err(e) => {
                log::warn!("Failed to read settings, using defaults: {}", e);
                Settings::default()
            }
        }
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<(), StoreError> {
        let mut backend = self.backend.lock();
        save(&mut **backend, SETTINGS_KEY, settings)?;
        log::info!("Settings saved");
        Ok(())
    }
}
