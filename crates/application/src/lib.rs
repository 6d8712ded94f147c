mod error;
mod ports;
mod service;
mod use_cases;

pub use error::ApplicationError;
pub use ports::{
    Clock, FolderLister, FolderWatcher, ImageStore, SettingsRepository, ThumbnailSource,
};
pub use service::{GalleryService, DEFAULT_RECENT_CAPACITY};
pub use use_cases::{
    AddImageCommand, BootstrapGalleryCommand, DeleteSelectedCommand, RefreshFolderCommand,
    SelectFolderCommand, SelectImageCommand,
};
