use crate::controller::{GalleryController, ThumbnailStrip, ViewerSurface};
use crate::scan::thumbnails_from;
use gallery_types::ThumbnailId;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub source: PathBuf,
    pub selected: bool,
}

impl Thumbnail {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            selected: false,
        }
    }

    pub fn file_name(&self) -> Option<&str> {
        self.source.file_name().and_then(|name| name.to_str())
    }
}

impl ThumbnailStrip for Vec<Thumbnail> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn source(&self, index: usize) -> Option<&PathBuf> {
        self.get(index).map(|thumb| &thumb.source)
    }

    fn set_selected(&mut self, index: usize, selected: bool) {
        if let Some(thumb) = self.get_mut(index) {
            thumb.selected = selected;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewer {
    source: Option<PathBuf>,
}

impl Viewer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ViewerSurface for Viewer {
    fn set_source(&mut self, source: &Path) {
        self.source = Some(source.to_path_buf());
    }

    fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

impl GalleryController<Vec<Thumbnail>, Viewer> {
    /// Builds a gallery over `images`, then selects `target` when it is one of them
    pub fn open(images: Vec<PathBuf>, target: Option<&Path>) -> Self {
        let target_idx =
            target.and_then(|target| images.iter().position(|path| path.as_path() == target));

        let mut gallery = Self::new(thumbnails_from(images), Viewer::new());
        if let Some(idx) = target_idx {
            gallery.select_by_reference(ThumbnailId::new(idx));
        }

        gallery
    }
}
