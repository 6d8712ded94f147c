use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use gallery_domain::{DomainError, GridLayout};

pub const SETTINGS_ENV: &str = "GALLERY_SETTINGS";
const SETTINGS_FILE_NAME: &str = "settings.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub settings_path: PathBuf,
    pub gallery_layout: GridLayout,
    pub recent_layout: GridLayout,
    pub window_size: [f32; 2],
    pub watch_poll_interval: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, DomainError> {
        Self::with_settings_override(std::env::var_os(SETTINGS_ENV))
    }

    pub fn with_settings_override(settings: Option<OsString>) -> Result<Self, DomainError> {
        Ok(Self {
            settings_path: settings
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(default_settings_path),
            gallery_layout: GridLayout::new(3, 350.0, None)?,
            recent_layout: GridLayout::new(2, 250.0, Some(4))?,
            window_size: [1000.0, 850.0],
            watch_poll_interval: Duration::from_millis(500),
        })
    }

    pub fn recent_capacity(&self) -> usize {
        self.recent_layout
            .capacity()
            .unwrap_or(gallery_application::DEFAULT_RECENT_CAPACITY)
    }
}

/// `settings.json` next to the executable, or in the working directory when
/// the executable path is unknown.
fn default_settings_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(SETTINGS_FILE_NAME)))
        .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE_NAME))
}
