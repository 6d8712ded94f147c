use std::path::{Path, PathBuf};

use gallery_domain::{GalleryState, ImageFile, Settings};
use log::{debug, info, warn};

use crate::{
    AddImageCommand, ApplicationError, BootstrapGalleryCommand, Clock, DeleteSelectedCommand,
    FolderLister, FolderWatcher, ImageStore, RefreshFolderCommand, SelectFolderCommand,
    SelectImageCommand, SettingsRepository,
};

pub const DEFAULT_RECENT_CAPACITY: usize = 4;

pub struct GalleryService {
    lister: Box<dyn FolderLister>,
    store: Box<dyn ImageStore>,
    settings: Box<dyn SettingsRepository>,
    watcher: Box<dyn FolderWatcher>,
    clock: Box<dyn Clock>,
    recent_capacity: usize,
    state: GalleryState,
}

impl GalleryService {
    pub fn new(
        lister: Box<dyn FolderLister>,
        store: Box<dyn ImageStore>,
        settings: Box<dyn SettingsRepository>,
        watcher: Box<dyn FolderWatcher>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            lister,
            store,
            settings,
            watcher,
            clock,
            recent_capacity: DEFAULT_RECENT_CAPACITY,
            state: GalleryState::default(),
        }
    }

    pub fn with_recent_capacity(mut self, capacity: usize) -> Self {
        self.recent_capacity = capacity;
        self
    }

    /// Restores the remembered folder, if any. Unreadable settings count as
    /// "nothing remembered".
    pub fn bootstrap(&mut self, _command: BootstrapGalleryCommand) {
        match self.settings.load() {
            Ok(Settings {
                image_folder: Some(folder),
            }) => self.select_folder(SelectFolderCommand { folder }),
            Ok(_) => debug!("no remembered image folder"),
            Err(error) => warn!("ignoring settings: {error}"),
        }
    }

    pub fn select_folder(&mut self, command: SelectFolderCommand) {
        info!("switching image folder to {}", command.folder.display());
        self.state.set_folder(command.folder.clone());

        // Watch before listing so nothing created in between goes unseen.
        if let Err(error) = self.watcher.watch(&command.folder) {
            warn!(
                "not watching {} for changes: {error}",
                command.folder.display()
            );
        }
        self.refresh();

        if let Err(error) = self.settings.save(&Settings {
            image_folder: Some(command.folder.clone()),
        }) {
            warn!("failed to remember image folder: {error}");
        }
    }

    pub fn add_image(&mut self, command: AddImageCommand) -> Result<PathBuf, ApplicationError> {
        let folder = self
            .state
            .folder()
            .ok_or(ApplicationError::NoFolderSelected)?
            .to_path_buf();

        let copied = self
            .store
            .copy_into(&command.source, &folder, self.clock.now())?;
        info!("added {}", copied.display());

        self.state.clear_selection();
        self.refresh();
        Ok(copied)
    }

    pub fn select_image(&mut self, command: SelectImageCommand) -> Option<&ImageFile> {
        if !self.state.toggle_selection(&command.image) {
            debug!(
                "ignoring selection of unlisted file {}",
                command.image.path.display()
            );
        }
        self.selected()
    }

    pub fn delete_selected(
        &mut self,
        _command: DeleteSelectedCommand,
    ) -> Result<PathBuf, ApplicationError> {
        let target = self
            .state
            .selection()
            .current()
            .ok_or(ApplicationError::NoImageSelected)?
            .path
            .clone();

        self.store.remove(&target)?;
        info!("deleted {}", target.display());

        self.state.clear_selection();
        self.refresh();
        Ok(target)
    }

    /// Re-reads the folder after a change made by someone else. A selection
    /// whose file disappeared is dropped.
    pub fn notify_external_change(&mut self, _command: RefreshFolderCommand) {
        self.refresh();
    }

    pub fn poll_external_changes(&mut self) -> bool {
        if !self.watcher.take_changes() {
            return false;
        }
        debug!("folder changed on disk, refreshing");
        self.notify_external_change(RefreshFolderCommand);
        true
    }

    pub fn gallery_view(&self) -> &[ImageFile] {
        self.state.files()
    }

    pub fn recent_view(&self) -> &[ImageFile] {
        self.state.recent(self.recent_capacity)
    }

    pub fn recent_capacity(&self) -> usize {
        self.recent_capacity
    }

    pub fn folder(&self) -> Option<&Path> {
        self.state.folder()
    }

    pub fn selected(&self) -> Option<&ImageFile> {
        self.state.selection().current()
    }

    fn refresh(&mut self) {
        let files = match self.state.folder() {
            None => Vec::new(),
            Some(folder) => match self.lister.list_images(folder) {
                Ok(files) => files,
                Err(error) => {
                    debug!("treating {} as empty: {error}", folder.display());
                    Vec::new()
                }
            },
        };
        self.state.replace_files(files);
        debug!("listed {} images", self.state.files().len());
    }
}
