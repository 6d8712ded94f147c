mod clock;
mod lister;
mod store;
mod thumbs;

pub use clock::SystemClock;
pub use lister::WalkdirFolderLister;
pub use store::FsImageStore;
pub use thumbs::ImageCrateThumbnailer;
