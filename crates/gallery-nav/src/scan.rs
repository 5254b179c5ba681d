use crate::surface::Thumbnail;
use gallery_config::{SortMode, SortOrder};
use std::{
    cmp::Ordering,
    fs,
    path::{Path, PathBuf},
    time::SystemTime,
};
use tokio::task::spawn_blocking;
use tracing::{info, warn};

pub const EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "tiff", "tif", "ico", "avif",
];

pub fn get_image_dir(path: &Path) -> Option<PathBuf> {
    if path.is_file() {
        path.parent().map(|par| par.to_path_buf())
    } else if path.is_dir() {
        Some(path.to_path_buf())
    } else {
        None
    }
}

pub fn thumbnails_from(paths: impl IntoIterator<Item = PathBuf>) -> Vec<Thumbnail> {
    paths.into_iter().map(Thumbnail::new).collect()
}

pub async fn scan_dir(
    dir: &Path,
    include_hidden: bool,
    sort_mode: SortMode,
    sort_order: SortOrder,
) -> Vec<PathBuf> {
    let dir = dir.to_path_buf();

    match spawn_blocking(move || scan_dir_sync(&dir, include_hidden, sort_mode, sort_order)).await
    {
        Ok(images) => images,
        Err(e) => {
            warn!("Directory scan task failed: {e}");
            Vec::new()
        }
    }
}

fn scan_dir_sync(
    dir: &Path,
    include_hidden: bool,
    sort_mode: SortMode,
    sort_order: SortOrder,
) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Cannot read {}: {e}", dir.display());
            return Vec::new();
        }
    };

    let mut images: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| include_hidden || !is_hidden(path))
        .filter(|path| is_supported_image(path))
        .collect();

    images.sort_by(|a, b| {
        let ordering = match sort_mode {
            SortMode::Name => human_sort(file_name(a), file_name(b)),
            SortMode::Date => modified(a).cmp(&modified(b)),
            SortMode::Size => size(a).cmp(&size(b)),
        };

        match sort_order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });

    info!("Found {} images in {}", images.len(), dir.display());
    images
}

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    file_name(path).starts_with('.')
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|name| name.to_str()).unwrap_or("")
}

fn modified(path: &Path) -> SystemTime {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH)
}

fn size(path: &Path) -> u64 {
    fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Case-insensitive comparison that orders digit runs by value, so "img2" < "img10"
fn human_sort(a: &str, b: &str) -> Ordering {
    let mut a_chars = a.chars().peekable();
    let mut b_chars = b.chars().peekable();

    loop {
        let (ac, bc) = match (a_chars.peek(), b_chars.peek()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(&ac), Some(&bc)) => (ac, bc),
        };

        let ordering = if ac.is_ascii_digit() && bc.is_ascii_digit() {
            let a_num = take_number(&mut a_chars);
            let b_num = take_number(&mut b_chars);
            a_num.cmp(&b_num)
        } else {
            a_chars.next();
            b_chars.next();
            ac.to_lowercase().cmp(bc.to_lowercase())
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}

fn take_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> u64 {
    let mut value: u64 = 0;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        value = value.saturating_mul(10).saturating_add(digit as u64);
        chars.next();
    }
    value
}
