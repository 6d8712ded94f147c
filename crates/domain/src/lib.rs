mod error;
mod image;
mod layout;
mod selection;
mod settings;
mod state;

pub use error::DomainError;
pub use image::{
    detect_image_kind, is_supported_image, sort_most_recent_first, ImageFile, ImageKind,
    Thumbnail,
};
pub use layout::{GridCell, GridLayout};
pub use selection::Selection;
pub use settings::Settings;
pub use state::GalleryState;
