use std::path::{Path, PathBuf};
use std::time::SystemTime;

use gallery_domain::{ImageFile, Settings, Thumbnail};

use crate::ApplicationError;

/// Lists the supported image files directly inside a folder, in no
/// particular order.
pub trait FolderLister {
    fn list_images(&self, folder: &Path) -> Result<Vec<ImageFile>, ApplicationError>;
}

pub trait ImageStore {
    /// Copies `source` into `folder` under its base name, replacing any file
    /// of that name, and stamps the copy with `modified`.
    fn copy_into(
        &self,
        source: &Path,
        folder: &Path,
        modified: SystemTime,
    ) -> Result<PathBuf, ApplicationError>;

    fn remove(&self, path: &Path) -> Result<(), ApplicationError>;
}

pub trait SettingsRepository {
    fn load(&self) -> Result<Settings, ApplicationError>;

    fn save(&self, settings: &Settings) -> Result<(), ApplicationError>;
}

pub trait FolderWatcher {
    /// Watches `folder`, replacing whatever was watched before.
    fn watch(&mut self, folder: &Path) -> Result<(), ApplicationError>;

    /// True when at least one change arrived since the previous call.
    fn take_changes(&mut self) -> bool;
}

pub trait ThumbnailSource {
    fn load_thumbnail(&self, path: &Path, max_edge: u32) -> Result<Thumbnail, ApplicationError>;
}

pub trait Clock {
    fn now(&self) -> SystemTime;
}
