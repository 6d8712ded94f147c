mod config;
mod logging;
mod ui;

use std::process::ExitCode;

use config::AppConfig;
use gallery_adapters::{
    FsImageStore, ImageCrateThumbnailer, JsonSettingsStore, NotifyFolderWatcher, SystemClock,
    WalkdirFolderLister,
};
use gallery_application::{BootstrapGalleryCommand, GalleryService};
use log::{error, info};

fn main() -> ExitCode {
    logging::init_logging();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            error!("invalid configuration: {error}");
            return ExitCode::from(1);
        }
    };
    info!("settings file: {}", config.settings_path.display());

    let mut service = build_gallery_service(&config);
    service.bootstrap(BootstrapGalleryCommand);

    match ui::launch_window(service, Box::new(ImageCrateThumbnailer), &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            error!("{msg}");
            ExitCode::from(1)
        }
    }
}

fn build_gallery_service(config: &AppConfig) -> GalleryService {
    GalleryService::new(
        Box::new(WalkdirFolderLister),
        Box::new(FsImageStore),
        Box::new(JsonSettingsStore::new(config.settings_path.clone())),
        Box::new(NotifyFolderWatcher::new()),
        Box::new(SystemClock),
    )
    .with_recent_capacity(config.recent_capacity())
}
