use std::path::Path;

use gallery_domain::ImageFile;

pub fn present_folder(folder: Option<&Path>) -> String {
    match folder {
        Some(folder) => format!("Folder: {}", folder.display()),
        None => "No folder selected".to_string(),
    }
}

pub fn present_status(
    folder: Option<&Path>,
    image_count: usize,
    selected: Option<&ImageFile>,
) -> String {
    let images = match image_count {
        1 => "1 image".to_string(),
        count => format!("{count} images"),
    };
    match selected {
        Some(file) => format!(
            "{} | {images} | selected: {}",
            present_folder(folder),
            file.display_name
        ),
        None => format!("{} | {images}", present_folder(folder)),
    }
}
