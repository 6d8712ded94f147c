use std::path::PathBuf;

use gallery_domain::ImageFile;

#[derive(Debug, Clone, Default)]
pub struct BootstrapGalleryCommand;

#[derive(Debug, Clone)]
pub struct SelectFolderCommand {
    pub folder: PathBuf,
}

#[derive(Debug, Clone)]
pub struct AddImageCommand {
    pub source: PathBuf,
}

#[derive(Debug, Clone)]
pub struct SelectImageCommand {
    pub image: ImageFile,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteSelectedCommand;

#[derive(Debug, Clone, Default)]
pub struct RefreshFolderCommand;
