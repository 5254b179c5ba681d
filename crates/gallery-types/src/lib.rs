pub mod types;

pub use types::{Direction, GalleryEvent, KeyCode};

/// Handle to a thumbnail, bound to its position when the strip is registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThumbnailId(usize);

impl ThumbnailId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for ThumbnailId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "thumbnail-{}", self.0)
    }
}
