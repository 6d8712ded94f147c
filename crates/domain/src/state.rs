use std::path::{Path, PathBuf};

use crate::{sort_most_recent_first, ImageFile, Selection};

/// Folder, selection and the sorted file list derived from the folder.
#[derive(Debug, Clone, Default)]
pub struct GalleryState {
    folder: Option<PathBuf>,
    selection: Selection,
    files: Vec<ImageFile>,
}

impl GalleryState {
    pub fn folder(&self) -> Option<&Path> {
        self.folder.as_deref()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn files(&self) -> &[ImageFile] {
        &self.files
    }

    pub fn recent(&self, capacity: usize) -> &[ImageFile] {
        &self.files[..self.files.len().min(capacity)]
    }

    pub fn contains(&self, file: &ImageFile) -> bool {
        self.files.iter().any(|listed| listed.is_same_file(file))
    }

    pub fn set_folder(&mut self, folder: PathBuf) {
        self.folder = Some(folder);
        self.selection.clear();
        self.files.clear();
    }

    /// Installs a fresh listing. The selection survives only if its file is
    /// still listed.
    pub fn replace_files(&mut self, mut files: Vec<ImageFile>) {
        sort_most_recent_first(&mut files);
        self.selection.retain_in(&files);
        self.files = files;
    }

    /// Returns false when `file` is not listed; the selection is untouched.
    pub fn toggle_selection(&mut self, file: &ImageFile) -> bool {
        if !self.contains(file) {
            return false;
        }
        self.selection.toggle(file);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime};

    use super::*;

    fn file(name: &str, secs: u64) -> ImageFile {
        ImageFile::new(
            PathBuf::from(format!("/gallery/{name}")),
            SystemTime::UNIX_EPOCH + Duration::from_secs(secs),
        )
    }

    fn names(files: &[ImageFile]) -> Vec<&str> {
        files.iter().map(|f| f.display_name.as_str()).collect()
    }

    #[test]
    fn replace_files_sorts_by_recency() {
        let mut state = GalleryState::default();
        state.replace_files(vec![file("a.jpg", 10), file("b.png", 20), file("c.jpeg", 5)]);

        assert_eq!(names(state.files()), vec!["b", "a", "c"]);
        assert_eq!(names(state.recent(4)), vec!["b", "a", "c"]);
        assert_eq!(names(state.recent(2)), vec!["b", "a"]);
        assert!(state.recent(0).is_empty());
    }

    #[test]
    fn set_folder_resets_selection_and_files() {
        let mut state = GalleryState::default();
        state.replace_files(vec![file("a.jpg", 10)]);
        assert!(state.toggle_selection(&file("a.jpg", 10)));

        state.set_folder(PathBuf::from("/elsewhere"));

        assert_eq!(state.folder(), Some(Path::new("/elsewhere")));
        assert_eq!(state.selection(), &Selection::Unselected);
        assert!(state.files().is_empty());
    }

    #[test]
    fn toggle_ignores_unlisted_file() {
        let mut state = GalleryState::default();
        state.replace_files(vec![file("a.jpg", 10)]);

        assert!(!state.toggle_selection(&file("stranger.png", 10)));
        assert_eq!(state.selection(), &Selection::Unselected);
    }

    #[test]
    fn replace_files_drops_selection_of_removed_file() {
        let mut state = GalleryState::default();
        state.replace_files(vec![file("a.jpg", 10), file("b.png", 20)]);
        state.toggle_selection(&file("b.png", 20));

        state.replace_files(vec![file("a.jpg", 10)]);

        assert_eq!(state.selection(), &Selection::Unselected);
    }
}
