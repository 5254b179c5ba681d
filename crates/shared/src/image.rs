use fast_image_resize::images::Image;
use fast_image_resize::{PixelType, Resizer};
use image::{DynamicImage, Rgba, RgbaImage};
use std::fmt;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageProcessingError {
    #[error("Failed to load image: {0}")]
    LoadError(#[from] image::ImageError),

    #[error("Failed to resize image: {0}")]
    ResizeError(String),

    #[error("Invalid image dimensions")]
    InvalidDimensions,
}

pub type ImageResult<T> = Result<T, ImageProcessingError>;

/// Square RGBA thumbnail ready to hand to the renderer
#[derive(Clone, PartialEq, Eq)]
pub struct ThumbnailPixels {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl fmt::Debug for ThumbnailPixels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThumbnailPixels")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba.len())
            .finish()
    }
}

/// Placement of a scaled image centred on a square canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterboxDimensions {
    pub canvas: u32,
    pub image_width: u32,
    pub image_height: u32,
    pub left: u32,
    pub top: u32,
}

impl LetterboxDimensions {
    /// Fits `width`x`height` into a `max_size` square. Images that already fit keep their size.
    pub fn calculate(width: u32, height: u32, max_size: u32) -> Self {
        let longest = width.max(height);
        let (image_width, image_height) = if longest > max_size {
            let scale = max_size as f64 / longest as f64;
            (
                ((width as f64 * scale).round() as u32).max(1),
                ((height as f64 * scale).round() as u32).max(1),
            )
        } else {
            (width, height)
        };

        Self {
            canvas: max_size,
            image_width,
            image_height,
            left: max_size.saturating_sub(image_width) / 2,
            top: max_size.saturating_sub(image_height) / 2,
        }
    }
}

pub fn render_thumbnail<P: AsRef<Path>>(
    path: P,
    max_size: u32,
    background_color: [u8; 3],
) -> ImageResult<ThumbnailPixels> {
    let img = image::open(path)?;
    resize_with_letterbox(&img, max_size, background_color)
}

pub fn resize_with_letterbox(
    image: &DynamicImage,
    max_size: u32,
    background_color: [u8; 3],
) -> ImageResult<ThumbnailPixels> {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 || max_size == 0 {
        return Err(ImageProcessingError::InvalidDimensions);
    }

    let dims = LetterboxDimensions::calculate(width, height, max_size);

    let mut canvas = RgbaImage::from_pixel(
        dims.canvas,
        dims.canvas,
        Rgba([
            background_color[0],
            background_color[1],
            background_color[2],
            255,
        ]),
    );

    let rgba = image.to_rgba8();
    let resized = if dims.image_width != width || dims.image_height != height {
        let src = Image::from_vec_u8(width, height, rgba.into_raw(), PixelType::U8x4)
            .map_err(|e| ImageProcessingError::ResizeError(e.to_string()))?;
        let mut dst = Image::new(dims.image_width, dims.image_height, PixelType::U8x4);

        Resizer::new()
            .resize(&src, &mut dst, None)
            .map_err(|e| ImageProcessingError::ResizeError(e.to_string()))?;

        RgbaImage::from_raw(dims.image_width, dims.image_height, dst.into_vec())
            .ok_or(ImageProcessingError::InvalidDimensions)?
    } else {
        rgba
    };

    image::imageops::overlay(&mut canvas, &resized, dims.left as i64, dims.top as i64);

    Ok(ThumbnailPixels {
        width: dims.canvas,
        height: dims.canvas,
        rgba: canvas.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letterbox_dimensions() {
        let dims = LetterboxDimensions::calculate(400, 200, 256);
        assert_eq!(dims.canvas, 256);
        assert_eq!((dims.image_width, dims.image_height), (256, 128));
        assert_eq!((dims.left, dims.top), (0, 64));

        let dims = LetterboxDimensions::calculate(200, 400, 256);
        assert_eq!((dims.image_width, dims.image_height), (128, 256));
        assert_eq!((dims.left, dims.top), (64, 0));
    }

    #[test]
    fn test_small_image_is_centred_not_upscaled() {
        let dims = LetterboxDimensions::calculate(16, 16, 256);
        assert_eq!((dims.image_width, dims.image_height), (16, 16));
        assert_eq!((dims.left, dims.top), (120, 120));
    }

    #[test]
    fn test_resize_fills_background() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(40, 20, Rgba([255, 0, 0, 255])));
        let thumb = resize_with_letterbox(&img, 20, [0, 0, 255]).unwrap();

        assert_eq!((thumb.width, thumb.height), (20, 20));
        assert_eq!(thumb.rgba.len(), 20 * 20 * 4);
        // top-left corner is letterbox, centre is image
        assert_eq!(&thumb.rgba[0..4], &[0, 0, 255, 255]);
        let centre = ((10 * 20) + 10) * 4;
        assert_eq!(thumb.rgba[centre], 255);
    }

    #[test]
    fn test_zero_size_rejected() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(4, 4));
        assert!(matches!(
            resize_with_letterbox(&img, 0, [0, 0, 0]),
            Err(ImageProcessingError::InvalidDimensions)
        ));
    }
}
