pub mod controller;
pub mod scan;
pub mod surface;

pub use controller::{GalleryController, ThumbnailStrip, ViewerSurface};
pub use gallery_types::{Direction, GalleryEvent, KeyCode, ThumbnailId};
pub use scan::{EXTENSIONS, get_image_dir, is_supported_image, scan_dir, thumbnails_from};
pub use surface::{Thumbnail, Viewer};
