#[cfg(test)]
mod tests {
    use shared::cache::ThumbnailCache;
    use shared::image::ThumbnailPixels;
    use std::sync::Arc;

    fn thumb() -> Arc<ThumbnailPixels> {
        Arc::new(ThumbnailPixels {
            width: 2,
            height: 2,
            rgba: vec![0; 16],
        })
    }

    #[tokio::test]
    async fn test_cache_clear() {
        let cache = ThumbnailCache::new();
        let key1 = "test1".to_string();
        let key2 = "test2".to_string();

        cache.put(key1.clone(), thumb()).await;
        cache.put(key2.clone(), thumb()).await;
        assert_eq!(cache.len().await, 2);

        cache.clear().await;
        assert!(cache.is_empty().await);
        assert!(cache.get(&key1).await.is_none());
        assert!(cache.get(&key2).await.is_none());
    }

    #[test]
    fn test_cache_key_tracks_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.png");
        std::fs::write(&path, b"x").unwrap();

        let key = ThumbnailCache::generate_cache_key(&path);
        assert!(key.starts_with(&path.display().to_string()));
        assert_ne!(key, ThumbnailCache::generate_cache_key(&dir.path().join("b.png")));
    }
}
