use crate::image::ThumbnailPixels;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::Arc;
use std::time::SystemTime;
use tokio::sync::Mutex;

pub type CacheKey = String;
pub type CacheValue = Arc<ThumbnailPixels>;

const DEFAULT_CAPACITY: NonZeroUsize = NonZeroUsize::new(512).unwrap();

#[derive(Clone, Debug)]
pub struct ThumbnailCache {
    cache: Arc<Mutex<LruCache<CacheKey, CacheValue>>>,
}

impl ThumbnailCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            cache: Arc::new(Mutex::new(LruCache::new(capacity))),
        }
    }

    pub async fn get(&self, key: &CacheKey) -> Option<CacheValue> {
        let mut cache = self.cache.lock().await;
        cache.get(key).cloned()
    }

    pub async fn put(&self, key: CacheKey, value: CacheValue) -> Option<CacheValue> {
        let mut cache = self.cache.lock().await;
        cache.put(key, value)
    }

    pub async fn remove(&self, key: &CacheKey) -> Option<CacheValue> {
        let mut cache = self.cache.lock().await;
        cache.pop(key)
    }

    pub async fn clear(&self) {
        let mut cache = self.cache.lock().await;
        cache.clear();
    }

    pub async fn len(&self) -> usize {
        let cache = self.cache.lock().await;
        cache.len()
    }

    pub async fn is_empty(&self) -> bool {
        let cache = self.cache.lock().await;
        cache.is_empty()
    }

    /// Path plus modification time, so edited files miss the cache
    pub fn generate_cache_key(file_path: &Path) -> CacheKey {
        let modified = std::fs::metadata(file_path)
            .and_then(|m| m.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);

        let modified_epoch = modified
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        format!("{}:{}", file_path.display(), modified_epoch)
    }
}

impl Default for ThumbnailCache {
    fn default() -> Self {
        Self::new()
    }
}
