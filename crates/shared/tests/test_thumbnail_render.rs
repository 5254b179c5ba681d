use image::{Rgba, RgbaImage};
use shared::image::{ImageProcessingError, LetterboxDimensions, render_thumbnail};

#[test]
fn test_extreme_aspect_ratio() {
    let dims = LetterboxDimensions::calculate(2560, 256, 256);
    assert_eq!(dims.image_width, 256);
    assert_eq!(dims.image_height, 26);
    assert!(dims.top > 100);
    assert_eq!(dims.left, 0);
}

#[test]
fn test_render_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wide.png");
    RgbaImage::from_pixel(300, 100, Rgba([10, 20, 30, 255]))
        .save(&path)
        .unwrap();

    let thumb = render_thumbnail(&path, 64, [0, 0, 0]).unwrap();
    assert_eq!((thumb.width, thumb.height), (64, 64));
    assert_eq!(thumb.rgba.len(), 64 * 64 * 4);
}

#[test]
fn test_render_rejects_garbage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"not an image").unwrap();

    assert!(matches!(
        render_thumbnail(&path, 64, [0, 0, 0]),
        Err(ImageProcessingError::LoadError(_))
    ));
}
