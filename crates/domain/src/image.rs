use std::path::{Path, PathBuf};
use std::time::SystemTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
    Unsupported,
}

/// One image file inside the gallery folder, as seen by the last listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub path: PathBuf,
    pub display_name: String,
    pub modified: SystemTime,
}

impl ImageFile {
    pub fn new(path: PathBuf, modified: SystemTime) -> Self {
        let display_name = display_name_for(&path);
        Self {
            path,
            display_name,
            modified,
        }
    }

    pub fn is_same_file(&self, other: &ImageFile) -> bool {
        self.path == other.path
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

pub fn detect_image_kind(path: &Path) -> ImageKind {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return ImageKind::Unsupported;
    };

    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => ImageKind::Jpeg,
        "png" => ImageKind::Png,
        _ => ImageKind::Unsupported,
    }
}

pub fn is_supported_image(path: &Path) -> bool {
    detect_image_kind(path) != ImageKind::Unsupported
}

/// Orders files most recently modified first. The sort is stable, so files
/// sharing a timestamp keep the order the listing produced them in.
pub fn sort_most_recent_first(files: &mut [ImageFile]) {
    files.sort_by(|left, right| right.modified.cmp(&left.modified));
}

fn display_name_for(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default()
}
