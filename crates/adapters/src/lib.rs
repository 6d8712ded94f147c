pub mod fs;
pub mod presenters;
pub mod settings;
pub mod watcher;

pub use fs::{FsImageStore, ImageCrateThumbnailer, SystemClock, WalkdirFolderLister};
pub use presenters::{present_folder, present_status};
pub use settings::JsonSettingsStore;
pub use watcher::NotifyFolderWatcher;

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::path::Path;
    use std::time::{Duration, Instant, SystemTime};

    use filetime::FileTime;
    use gallery_application::{
        AddImageCommand, ApplicationError, BootstrapGalleryCommand, DeleteSelectedCommand,
        FolderLister, FolderWatcher, GalleryService, SelectFolderCommand, SelectImageCommand,
    };
    use gallery_domain::ImageFile;
    use tempfile::TempDir;

    use super::*;

    struct IdleWatcher;

    impl FolderWatcher for IdleWatcher {
        fn watch(&mut self, _folder: &Path) -> Result<(), ApplicationError> {
            Ok(())
        }

        fn take_changes(&mut self) -> bool {
            false
        }
    }

    /// Lists normally, then drops a new image into the folder once, as if
    /// another program wrote it right after the listing finished.
    struct LateWriterLister {
        written: Cell<bool>,
    }

    impl FolderLister for LateWriterLister {
        fn list_images(&self, folder: &Path) -> Result<Vec<ImageFile>, ApplicationError> {
            let files = WalkdirFolderLister.list_images(folder)?;
            if !self.written.replace(true) {
                std::fs::write(folder.join("late.png"), b"late").expect("late file");
            }
            Ok(files)
        }
    }

    fn service_with_settings(settings_path: &Path) -> GalleryService {
        GalleryService::new(
            Box::new(WalkdirFolderLister),
            Box::new(FsImageStore),
            Box::new(JsonSettingsStore::new(settings_path)),
            Box::new(IdleWatcher),
            Box::new(SystemClock),
        )
    }

    fn write_with_mtime(path: &Path, secs: i64) {
        std::fs::write(path, b"image bytes").expect("file should be written");
        filetime::set_file_mtime(path, FileTime::from_unix_time(secs, 0)).expect("mtime");
    }

    fn names(files: &[ImageFile]) -> Vec<&str> {
        files.iter().map(|f| f.display_name.as_str()).collect()
    }

    #[test]
    fn gallery_workflow_on_real_folder() {
        let dir = TempDir::new().expect("tempdir");
        let gallery = dir.path().join("gallery");
        let incoming = dir.path().join("incoming");
        std::fs::create_dir(&gallery).expect("gallery dir");
        std::fs::create_dir(&incoming).expect("incoming dir");
        write_with_mtime(&gallery.join("a.jpg"), 10);
        write_with_mtime(&gallery.join("b.png"), 20);
        write_with_mtime(&gallery.join("c.jpeg"), 5);
        write_with_mtime(&gallery.join("x.png"), 1);
        write_with_mtime(&incoming.join("x.png"), 2);
        let settings_path = dir.path().join("settings.json");

        let mut service = service_with_settings(&settings_path);
        service.select_folder(SelectFolderCommand {
            folder: gallery.clone(),
        });
        assert_eq!(names(service.gallery_view()), vec!["b", "a", "c", "x"]);
        assert_eq!(names(service.recent_view()), vec!["b", "a", "c", "x"]);

        let before_add = SystemTime::now() - Duration::from_secs(5);
        service
            .add_image(AddImageCommand {
                source: incoming.join("x.png"),
            })
            .expect("add should work");
        let first = service.gallery_view()[0].clone();
        assert_eq!(first.display_name, "x");
        assert!(first.modified >= before_add);
        assert_eq!(service.gallery_view().len(), 4);

        service.select_image(SelectImageCommand { image: first });
        service
            .delete_selected(DeleteSelectedCommand)
            .expect("delete should work");
        assert!(!gallery.join("x.png").exists());
        assert_eq!(names(service.gallery_view()), vec!["b", "a", "c"]);

        let mut restored = service_with_settings(&settings_path);
        restored.bootstrap(BootstrapGalleryCommand);
        assert_eq!(restored.folder(), Some(gallery.as_path()));
        assert_eq!(names(restored.gallery_view()), vec!["b", "a", "c"]);
    }

    #[test]
    fn file_created_right_after_listing_shows_up() {
        let dir = TempDir::new().expect("tempdir");
        let gallery = dir.path().join("gallery");
        std::fs::create_dir(&gallery).expect("gallery dir");
        write_with_mtime(&gallery.join("a.png"), 10);
        let mut service = GalleryService::new(
            Box::new(LateWriterLister {
                written: Cell::new(false),
            }),
            Box::new(FsImageStore),
            Box::new(JsonSettingsStore::new(dir.path().join("settings.json"))),
            Box::new(NotifyFolderWatcher::new()),
            Box::new(SystemClock),
        );

        service.select_folder(SelectFolderCommand { folder: gallery });
        assert_eq!(names(service.gallery_view()), vec!["a"]);

        let deadline = Instant::now() + Duration::from_secs(5);
        while !names(service.gallery_view()).contains(&"late") && Instant::now() < deadline {
            service.poll_external_changes();
            std::thread::sleep(Duration::from_millis(25));
        }

        assert!(names(service.gallery_view()).contains(&"late"));
    }

    #[test]
    fn empty_folder_has_empty_views() {
        let dir = TempDir::new().expect("tempdir");
        let mut service = service_with_settings(&dir.path().join("settings.json"));

        service.select_folder(SelectFolderCommand {
            folder: dir.path().to_path_buf(),
        });

        assert!(service.gallery_view().is_empty());
        assert!(service.recent_view().is_empty());
    }

    #[test]
    fn delete_of_externally_removed_file_surfaces_error() {
        let dir = TempDir::new().expect("tempdir");
        write_with_mtime(&dir.path().join("a.jpg"), 10);
        let mut service = service_with_settings(&dir.path().join("settings.json"));
        service.select_folder(SelectFolderCommand {
            folder: dir.path().to_path_buf(),
        });
        let a = service.gallery_view()[0].clone();
        service.select_image(SelectImageCommand { image: a.clone() });

        std::fs::remove_file(&a.path).expect("remove behind the gallery's back");
        let result = service.delete_selected(DeleteSelectedCommand);

        assert!(matches!(result, Err(ApplicationError::Delete(_))));
        assert_eq!(service.selected(), Some(&a));
    }
}
