use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use filetime::FileTime;
use gallery_application::{ApplicationError, ImageStore};
use tempfile::NamedTempFile;

#[derive(Debug, Default)]
pub struct FsImageStore;

impl ImageStore for FsImageStore {
    fn copy_into(
        &self,
        source: &Path,
        folder: &Path,
        modified: SystemTime,
    ) -> Result<PathBuf, ApplicationError> {
        let name = source.file_name().ok_or_else(|| {
            ApplicationError::Copy(format!("source has no file name: {}", source.display()))
        })?;
        let destination = folder.join(name);

        if is_same_file(source, &destination) {
            return Err(ApplicationError::Copy(format!(
                "{} is already in the gallery folder",
                source.display()
            )));
        }

        let copy_error = |error: io::Error| {
            ApplicationError::Copy(format!(
                "{} -> {}: {error}",
                source.display(),
                destination.display()
            ))
        };

        // Staged in the same folder: persist renames it over the destination
        // in one step, and a dropped stage removes itself.
        let mut reader = fs::File::open(source).map_err(copy_error)?;
        let permissions = reader.metadata().map_err(copy_error)?.permissions();
        let mut staged = NamedTempFile::new_in(folder).map_err(copy_error)?;
        io::copy(&mut reader, staged.as_file_mut()).map_err(copy_error)?;
        staged.as_file().sync_all().map_err(copy_error)?;
        fs::set_permissions(staged.path(), permissions).map_err(copy_error)?;

        let stamp = FileTime::from_system_time(modified);
        filetime::set_file_times(staged.path(), stamp, stamp).map_err(|error| {
            ApplicationError::Copy(format!(
                "failed to update timestamps of {}: {error}",
                destination.display()
            ))
        })?;

        staged
            .persist(&destination)
            .map_err(|error| copy_error(error.error))?;

        Ok(destination)
    }

    fn remove(&self, path: &Path) -> Result<(), ApplicationError> {
        fs::remove_file(path)
            .map_err(|error| ApplicationError::Delete(format!("{}: {error}", path.display())))
    }
}

fn is_same_file(left: &Path, right: &Path) -> bool {
    match (left.canonicalize(), right.canonicalize()) {
        (Ok(left), Ok(right)) => left == right,
        _ => false,
    }
}
