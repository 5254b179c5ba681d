//! Selection state for a thumbnail strip and the viewer showing the selected image.
//!
//! The controller owns both surfaces. Every state change goes through
//! [`GalleryController::select_by_reference`] or [`GalleryController::advance`],
//! so the viewer source and the highlighted thumbnail never drift apart.

use gallery_types::{Direction, GalleryEvent, ThumbnailId};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Ordered, fixed collection of thumbnails provided by the host
pub trait ThumbnailStrip {
    fn len(&self) -> usize;

    fn source(&self, index: usize) -> Option<&PathBuf>;

    fn set_selected(&mut self, index: usize, selected: bool);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The large display surface
pub trait ViewerSurface {
    fn set_source(&mut self, source: &Path);

    fn source(&self) -> Option<&Path>;
}

#[derive(Debug, Clone)]
pub struct GalleryController<T, V> {
    thumbnails: T,
    viewer: V,
    cur_idx: Option<usize>,
    viewer_click_advances: bool,
}

impl<T, V> GalleryController<T, V>
where
    T: ThumbnailStrip,
    V: ViewerSurface,
{
    /// Takes over the surfaces and selects the first thumbnail.
    /// An empty strip leaves nothing selected and the viewer untouched.
    pub fn new(thumbnails: T, viewer: V) -> Self {
        let mut controller = Self {
            thumbnails,
            viewer,
            cur_idx: None,
            viewer_click_advances: true,
        };

        if controller.thumbnails.is_empty() {
            debug!("No thumbnails to show, skipping initial selection");
        } else {
            controller.select_by_reference(ThumbnailId::new(0));
        }

        controller
    }

    /// One id per thumbnail, in strip order
    pub fn bindings(&self) -> impl Iterator<Item = ThumbnailId> + use<T, V> {
        (0..self.thumbnails.len()).map(ThumbnailId::new)
    }

    pub fn set_viewer_click_advances(&mut self, enabled: bool) {
        self.viewer_click_advances = enabled;
    }

    pub fn current(&self) -> Option<&PathBuf> {
        self.cur_idx.and_then(|idx| self.thumbnails.source(idx))
    }

    pub fn index(&self) -> Option<usize> {
        self.cur_idx
    }

    pub fn len(&self) -> usize {
        self.thumbnails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thumbnails.is_empty()
    }

    pub fn thumbnails(&self) -> &T {
        &self.thumbnails
    }

    pub fn viewer(&self) -> &V {
        &self.viewer
    }

    /// Shows the referenced thumbnail in the viewer and highlights it.
    /// Ids that don't belong to the strip are ignored.
    pub fn select_by_reference(&mut self, id: ThumbnailId) -> Option<&PathBuf> {
        let idx = id.index();
        let Some(source) = self.thumbnails.source(idx).cloned() else {
            debug!("Ignoring unknown {id}");
            return None;
        };

        self.cur_idx = Some(idx);
        self.viewer.set_source(&source);

        for pos in 0..self.thumbnails.len() {
            self.thumbnails.set_selected(pos, pos == idx);
        }

        debug!("Selected {id}: {}", source.display());
        self.current()
    }

    /// Steps the selection one place, wrapping around at either end
    pub fn advance(&mut self, direction: Direction) -> Option<&PathBuf> {
        let total = self.thumbnails.len();
        if total == 0 {
            return None;
        }

        let current = self.cur_idx.unwrap_or_default();
        let next = direction.step(current, total);
        self.select_by_reference(ThumbnailId::new(next))
    }

    /// Routes a host event. Returns true when the selection was updated.
    pub fn handle_event(&mut self, event: GalleryEvent) -> bool {
        match event {
            GalleryEvent::ThumbnailClicked(id) => self.select_by_reference(id).is_some(),
            GalleryEvent::KeyDown(key) => match key.direction() {
                Some(direction) => self.advance(direction).is_some(),
                None => false,
            },
            GalleryEvent::ViewerClicked if self.viewer_click_advances => {
                self.advance(Direction::Next).is_some()
            }
            GalleryEvent::ViewerClicked => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Thumbnail, Viewer};
    use gallery_types::KeyCode;

    fn gallery(names: &[&str]) -> GalleryController<Vec<Thumbnail>, Viewer> {
        let thumbnails = names.iter().map(|name| Thumbnail::new(*name)).collect();
        GalleryController::new(thumbnails, Viewer::new())
    }

    #[test]
    fn test_init_selects_first() {
        let nav = gallery(&["a.png", "b.png"]);
        assert_eq!(nav.index(), Some(0));
        assert_eq!(nav.viewer().source(), Some(Path::new("a.png")));
        assert!(nav.thumbnails()[0].selected);
        assert!(!nav.thumbnails()[1].selected);
    }

    #[test]
    fn test_empty_strip_is_inert() {
        let mut nav = gallery(&[]);
        assert_eq!(nav.index(), None);
        assert!(nav.viewer().source().is_none());
        assert!(nav.advance(Direction::Next).is_none());
        assert!(!nav.handle_event(GalleryEvent::ViewerClicked));
        assert!(!nav.handle_event(GalleryEvent::KeyDown(KeyCode::ArrowLeft)));
        assert_eq!(nav.bindings().count(), 0);
    }

    #[test]
    fn test_unknown_id_ignored() {
        let mut nav = gallery(&["a.png", "b.png"]);
        assert!(nav.select_by_reference(ThumbnailId::new(5)).is_none());
        assert_eq!(nav.index(), Some(0));
        assert_eq!(nav.viewer().source(), Some(Path::new("a.png")));
    }

    #[test]
    fn test_viewer_click_can_be_disabled() {
        let mut nav = gallery(&["a.png", "b.png"]);
        nav.set_viewer_click_advances(false);
        assert!(!nav.handle_event(GalleryEvent::ViewerClicked));
        assert_eq!(nav.index(), Some(0));
    }
}
