use crate::ImageFile;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Unselected,
    Selected(ImageFile),
}

impl Selection {
    pub fn current(&self) -> Option<&ImageFile> {
        match self {
            Self::Unselected => None,
            Self::Selected(file) => Some(file),
        }
    }

    pub fn is_selected(&self, file: &ImageFile) -> bool {
        self.current()
            .map(|current| current.is_same_file(file))
            .unwrap_or(false)
    }

    /// Selecting the current file again deselects it; any other file
    /// replaces the current selection.
    pub fn toggle(&mut self, file: &ImageFile) {
        if self.is_selected(file) {
            *self = Self::Unselected;
        } else {
            *self = Self::Selected(file.clone());
        }
    }

    pub fn clear(&mut self) {
        *self = Self::Unselected;
    }

    /// Drops the selection when its file is not part of `files`. A surviving
    /// selection is refreshed to the listed descriptor.
    pub fn retain_in(&mut self, files: &[ImageFile]) {
        let Self::Selected(current) = self else {
            return;
        };

        match files.iter().find(|file| file.is_same_file(current)) {
            Some(listed) => *current = listed.clone(),
            None => *self = Self::Unselected,
        }
    }
}
