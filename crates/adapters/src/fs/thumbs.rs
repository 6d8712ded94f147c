use std::path::Path;

use gallery_application::{ApplicationError, ThumbnailSource};
use gallery_domain::{detect_image_kind, ImageKind, Thumbnail};
use image::ImageReader;

#[derive(Debug, Default)]
pub struct ImageCrateThumbnailer;

impl ThumbnailSource for ImageCrateThumbnailer {
    fn load_thumbnail(&self, path: &Path, max_edge: u32) -> Result<Thumbnail, ApplicationError> {
        if detect_image_kind(path) == ImageKind::Unsupported {
            return Err(ApplicationError::Decode(format!(
                "unsupported image format: {}",
                path.display()
            )));
        }

        let image = ImageReader::open(path)
            .map_err(|error| ApplicationError::Io(format!("{}: {error}", path.display())))?
            .with_guessed_format()
            .map_err(|error| ApplicationError::Io(format!("{}: {error}", path.display())))?
            .decode()
            .map_err(|error| ApplicationError::Decode(format!("{}: {error}", path.display())))?;

        let thumb = if image.width() > max_edge || image.height() > max_edge {
            image.thumbnail(max_edge, max_edge)
        } else {
            image
        };
        let rgba = thumb.to_rgba8();

        Ok(Thumbnail {
            width: rgba.width(),
            height: rgba.height(),
            rgba: rgba.into_raw(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use image::{ImageBuffer, Rgb};
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn downscales_keeping_aspect_ratio() {
        let dir = TempDir::new().expect("tempdir");
        let src = dir.path().join("wide.png");
        let img = ImageBuffer::from_fn(500, 300, |_x, _y| Rgb([10_u8, 20_u8, 30_u8]));
        img.save(&src).expect("save");

        let thumb = ImageCrateThumbnailer
            .load_thumbnail(&src, 250)
            .expect("thumbnail");

        assert_eq!(thumb.width, 250);
        assert_eq!(thumb.height, 150);
        assert_eq!(thumb.rgba.len(), 250 * 150 * 4);
    }

    #[test]
    fn small_images_are_not_upscaled() {
        let dir = TempDir::new().expect("tempdir");
        let src = dir.path().join("small.jpg");
        let img = ImageBuffer::from_fn(40, 20, |_x, _y| Rgb([200_u8, 200_u8, 200_u8]));
        img.save(&src).expect("save");

        let thumb = ImageCrateThumbnailer
            .load_thumbnail(&src, 350)
            .expect("thumbnail");

        assert_eq!((thumb.width, thumb.height), (40, 20));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let dir = TempDir::new().expect("tempdir");
        let src = dir.path().join("broken.png");
        fs::write(&src, b"definitely not a png").expect("write");

        let result = ImageCrateThumbnailer.load_thumbnail(&src, 100);

        assert!(matches!(result, Err(ApplicationError::Decode(_))));
    }
}
