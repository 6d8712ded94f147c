use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};

use gallery_application::{ApplicationError, FolderWatcher};
use log::{debug, warn};
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};

/// Watches one folder at a time. The notify backend thread only pushes
/// wake-ups into a channel; `take_changes` drains it on the caller's thread.
pub struct NotifyFolderWatcher {
    watcher: Option<RecommendedWatcher>,
    watched: Option<PathBuf>,
    sender: Sender<()>,
    events: Receiver<()>,
}

impl NotifyFolderWatcher {
    pub fn new() -> Self {
        let (sender, events) = mpsc::channel();
        Self {
            watcher: None,
            watched: None,
            sender,
            events,
        }
    }

    pub fn watched(&self) -> Option<&Path> {
        self.watched.as_deref()
    }
}

impl Default for NotifyFolderWatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FolderWatcher for NotifyFolderWatcher {
    fn watch(&mut self, folder: &Path) -> Result<(), ApplicationError> {
        let watcher = match self.watcher.take() {
            Some(watcher) => watcher,
            None => create_watcher(self.sender.clone())?,
        };
        let watcher = self.watcher.insert(watcher);

        if let Some(previous) = self.watched.take() {
            if let Err(error) = watcher.unwatch(&previous) {
                debug!("unwatch {} failed: {error}", previous.display());
            }
        }

        // Wake-ups queued for the previous folder are stale. Anything arriving
        // after the new watch is registered must be kept.
        while self.events.try_recv().is_ok() {}

        watcher
            .watch(folder, RecursiveMode::NonRecursive)
            .map_err(|error| ApplicationError::Watch(format!("{}: {error}", folder.display())))?;
        self.watched = Some(folder.to_path_buf());
        Ok(())
    }

    fn take_changes(&mut self) -> bool {
        let mut changed = false;
        while self.events.try_recv().is_ok() {
            changed = true;
        }
        changed
    }
}

fn create_watcher(sender: Sender<()>) -> Result<RecommendedWatcher, ApplicationError> {
    notify::recommended_watcher(move |result: notify::Result<Event>| match result {
        Ok(event) if event.kind.is_access() => {}
        Ok(_) => {
            let _ = sender.send(());
        }
        Err(error) => warn!("folder watch error: {error}"),
    })
    .map_err(|error| ApplicationError::Watch(error.to_string()))
}
