//! Window icon loading.

use std::path::Path;

/// Decode an image file into RGBA icon data for the window.
pub fn load_icon(path: &Path) -> Result<egui::IconData, image::ImageError> {
    let image = image::open(path)?.into_rgba8();
    let (width, height) = image.dimensions();
    Ok(egui::IconData {
        rgba: image.into_raw(),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn loads_png_as_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        RgbaImage::from_pixel(4, 2, Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();

        let icon = load_icon(&path).unwrap();
        assert_eq!((icon.width, icon.height), (4, 2));
        assert_eq!(icon.rgba.len(), 4 * 2 * 4);
        assert_eq!(&icon.rgba[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn missing_file_fails() {
        assert!(load_icon(Path::new("/nonexistent/icon.png")).is_err());
    }
}
