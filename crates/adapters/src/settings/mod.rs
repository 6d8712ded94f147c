use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use gallery_application::{ApplicationError, SettingsRepository};
use gallery_domain::Settings;

/// Settings kept as a single JSON object in one file.
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsRepository for JsonSettingsStore {
    fn load(&self) -> Result<Settings, ApplicationError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Settings::default()),
            Err(error) => {
                return Err(ApplicationError::Settings(format!(
                    "failed to read {}: {error}",
                    self.path.display()
                )))
            }
        };

        serde_json::from_slice(&bytes).map_err(|error| {
            ApplicationError::Settings(format!("malformed {}: {error}", self.path.display()))
        })
    }

    fn save(&self, settings: &Settings) -> Result<(), ApplicationError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|error| {
                    ApplicationError::Settings(format!(
                        "failed to create settings directory: {error}"
                    ))
                })?;
            }
        }

        let json = serde_json::to_vec(settings)
            .map_err(|error| ApplicationError::Settings(error.to_string()))?;
        fs::write(&self.path, json).map_err(|error| {
            ApplicationError::Settings(format!(
                "failed to write {}: {error}",
                self.path.display()
            ))
        })
    }
}
