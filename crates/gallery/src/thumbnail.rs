use cosmic::widget::image::Handle;
use shared::{
    cache::ThumbnailCache,
    image::{ImageProcessingError, ThumbnailPixels, render_thumbnail},
};
use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing::debug;

/// Letterbox colour behind thumbnails that aren't square
const BACKGROUND: [u8; 3] = [0, 0, 0];

pub type ThumbnailResult<T> = Result<T, ThumbnailError>;

#[derive(thiserror::Error, Debug)]
pub enum ThumbnailError {
    #[error("Image processing failed: {0}")]
    ImageProcessing(#[from] ImageProcessingError),

    #[error("Task cancelled")]
    Cancelled,
}

/// Renders the thumbnail for `path` off the UI thread, reusing the cache when possible
pub async fn load_thumbnail(
    cache: ThumbnailCache,
    path: PathBuf,
    max_size: u32,
) -> ThumbnailResult<Handle> {
    let key = format!("{}:{max_size}", ThumbnailCache::generate_cache_key(&path));

    if let Some(pixels) = cache.get(&key).await {
        debug!("Using cached thumbnail for: {}", path.display());
        return Ok(to_handle(&pixels));
    }

    let (tx, rx) = tokio::sync::oneshot::channel();

    rayon::spawn(move || {
        let result = render_thumbnail(&path, max_size, BACKGROUND);
        let _ = tx.send(result);
    });

    let pixels = Arc::new(rx.await.map_err(|_| ThumbnailError::Cancelled)??);
    cache.put(key, pixels.clone()).await;

    Ok(to_handle(&pixels))
}

fn to_handle(pixels: &ThumbnailPixels) -> Handle {
    Handle::from_rgba(pixels.width, pixels.height, pixels.rgba.clone())
}

/// Thumbnail state for the current strip.
///
/// Every request is tagged with the generation it was made in; `reset` starts a
/// new generation so late results from an earlier scan or size are dropped.
#[derive(Debug)]
pub struct ThumbnailSlots<H> {
    generation: u64,
    ready: HashMap<PathBuf, H>,
    pending: HashSet<PathBuf>,
    failed: HashSet<PathBuf>,
}

impl<H> Default for ThumbnailSlots<H> {
    fn default() -> Self {
        Self {
            generation: 0,
            ready: HashMap::new(),
            pending: HashSet::new(),
            failed: HashSet::new(),
        }
    }
}

impl<H> ThumbnailSlots<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn reset(&mut self) {
        self.generation += 1;
        self.ready.clear();
        self.pending.clear();
        self.failed.clear();
    }

    pub fn get(&self, path: &Path) -> Option<&H> {
        self.ready.get(path)
    }

    pub fn is_failed(&self, path: &Path) -> bool {
        self.failed.contains(path)
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Not loaded, not in flight, and not known to be broken
    pub fn needs(&self, path: &Path) -> bool {
        !self.ready.contains_key(path) && !self.pending.contains(path) && !self.failed.contains(path)
    }

    /// Marks `path` in flight and returns the generation to tag the request with
    pub fn begin(&mut self, path: PathBuf) -> u64 {
        self.pending.insert(path);
        self.generation
    }

    /// Stores a finished thumbnail. Returns false for results of an older generation.
    pub fn finish_ready(&mut self, generation: u64, path: PathBuf, handle: H) -> bool {
        if generation != self.generation {
            debug!("Dropping stale thumbnail for: {}", path.display());
            return false;
        }

        self.pending.remove(&path);
        self.ready.insert(path, handle);
        true
    }

    /// Records a failed thumbnail. Returns false for results of an older generation.
    pub fn finish_failed(&mut self, generation: u64, path: PathBuf) -> bool {
        if generation != self.generation {
            return false;
        }

        self.pending.remove(&path);
        self.failed.insert(path);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_lifecycle() {
        let mut slots = ThumbnailSlots::new();
        let path = PathBuf::from("a.png");

        assert!(slots.needs(&path));
        let generation = slots.begin(path.clone());
        assert!(!slots.needs(&path));
        assert!(!slots.is_idle());

        assert!(slots.finish_ready(generation, path.clone(), 7u32));
        assert_eq!(slots.get(&path), Some(&7));
        assert!(slots.is_idle());
        assert!(!slots.needs(&path));
    }

    #[test]
    fn test_failed_slot_is_not_retried() {
        let mut slots: ThumbnailSlots<u32> = ThumbnailSlots::new();
        let path = PathBuf::from("broken.png");

        let generation = slots.begin(path.clone());
        assert!(slots.finish_failed(generation, path.clone()));
        assert!(slots.is_failed(&path));
        assert!(!slots.needs(&path));
    }

    #[test]
    fn test_results_from_before_reset_are_dropped() {
        let mut slots = ThumbnailSlots::new();
        let path = PathBuf::from("a.png");

        let old = slots.begin(path.clone());
        slots.reset();
        let new = slots.begin(path.clone());
        assert_ne!(old, new);

        // late result of the old request leaves the new one in flight
        assert!(!slots.finish_ready(old, path.clone(), 1u32));
        assert!(slots.get(&path).is_none());
        assert!(!slots.is_idle());

        assert!(!slots.finish_failed(old, path.clone()));
        assert!(!slots.is_failed(&path));

        assert!(slots.finish_ready(new, path.clone(), 2u32));
        assert_eq!(slots.get(&path), Some(&2));
    }
}
