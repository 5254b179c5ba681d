use cosmic::widget::image::Handle;
use gallery_config::GalleryConfig;
use gallery_types::GalleryEvent;
use std::path::PathBuf;

/// Top-level application message type
#[derive(Debug, Clone)]
pub enum Message {
    /// Click or key press routed to the gallery controller
    Gallery(GalleryEvent),
    /// Directory listing finished
    DirectoryScanned {
        dir: PathBuf,
        images: Vec<PathBuf>,
        /// File the user asked to open, if any
        target: Option<PathBuf>,
    },
    /// Thumbnail ready for the strip
    ThumbnailReady {
        generation: u64,
        path: PathBuf,
        handle: Handle,
    },
    /// Thumbnail could not be rendered
    ThumbnailFailed {
        generation: u64,
        path: PathBuf,
        error: String,
    },
    /// Config changed on disk
    ConfigChanged(GalleryConfig),
}
