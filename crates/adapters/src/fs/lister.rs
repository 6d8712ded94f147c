use std::path::Path;

use gallery_application::{ApplicationError, FolderLister};
use gallery_domain::{is_supported_image, ImageFile};
use log::debug;
use walkdir::WalkDir;

#[derive(Debug, Default)]
pub struct WalkdirFolderLister;

impl FolderLister for WalkdirFolderLister {
    fn list_images(&self, folder: &Path) -> Result<Vec<ImageFile>, ApplicationError> {
        if !folder.is_dir() {
            return Err(ApplicationError::Io(format!(
                "folder does not exist or is not a directory: {}",
                folder.display()
            )));
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(folder)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(Result::ok)
        {
            if !entry.file_type().is_file() || !is_supported_image(entry.path()) {
                continue;
            }

            let modified = match entry.metadata().map(|metadata| metadata.modified()) {
                Ok(Ok(modified)) => modified,
                Ok(Err(error)) => {
                    debug!("skipping {}: {error}", entry.path().display());
                    continue;
                }
                Err(error) => {
                    debug!("skipping {}: {error}", entry.path().display());
                    continue;
                }
            };

            files.push(ImageFile::new(entry.into_path(), modified));
        }

        Ok(files)
    }
}
