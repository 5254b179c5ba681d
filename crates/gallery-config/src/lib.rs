use cosmic::cosmic_config::{self, Config, ConfigGet, ConfigSet, CosmicConfigEntry};
use serde::{Deserialize, Serialize};

pub const CONFIG_VERSION: u64 = 1;
const APP_ID: &str = "io.github.galleria.Galleria";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortMode {
    #[default]
    Name,
    Date,
    Size,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Edge length of the thumbnails in the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThumbnailSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ThumbnailSize {
    pub fn pixels(self) -> u32 {
        match self {
            ThumbnailSize::Small => 64,
            ThumbnailSize::Medium => 128,
            ThumbnailSize::Large => 192,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryConfig {
    pub thumbnail_size: ThumbnailSize,
    pub show_hidden_files: bool,
    pub sort_mode: SortMode,
    pub sort_order: SortOrder,
    /// Clicking the large viewer moves on to the next image
    pub viewer_click_advances: bool,
    pub remember_last_dir: bool,
    pub last_dir: Option<String>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            thumbnail_size: ThumbnailSize::default(),
            show_hidden_files: false,
            sort_mode: SortMode::default(),
            sort_order: SortOrder::default(),
            viewer_click_advances: true,
            remember_last_dir: true,
            last_dir: None,
        }
    }
}

/// What the gallery has to redo after adopting new settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfigChanges {
    pub changed: bool,
    pub rescan: bool,
    pub thumbnails: bool,
}

impl GalleryConfig {
    /// Takes over settings changed outside the app. `last_dir` tracks this
    /// session's scans and is kept, since the stored copy may predate them.
    pub fn adopt(&mut self, mut incoming: GalleryConfig) -> ConfigChanges {
        incoming.last_dir = self.last_dir.clone();

        let changes = ConfigChanges {
            changed: incoming != *self,
            rescan: incoming.show_hidden_files != self.show_hidden_files
                || incoming.sort_mode != self.sort_mode
                || incoming.sort_order != self.sort_order,
            thumbnails: incoming.thumbnail_size != self.thumbnail_size,
        };

        *self = incoming;
        changes
    }
}

impl CosmicConfigEntry for GalleryConfig {
    const VERSION: u64 = CONFIG_VERSION;

    fn write_entry(&self, config: &cosmic_config::Config) -> Result<(), cosmic_config::Error> {
        config.set("thumbnail_size", self.thumbnail_size)?;
        config.set("show_hidden_files", self.show_hidden_files)?;
        config.set("sort_mode", self.sort_mode)?;
        config.set("sort_order", self.sort_order)?;
        config.set("viewer_click_advances", self.viewer_click_advances)?;
        config.set("remember_last_dir", self.remember_last_dir)?;
        config.set("last_dir", self.last_dir.clone())?;
        Ok(())
    }

    fn get_entry(
        config: &cosmic_config::Config,
    ) -> Result<Self, (Vec<cosmic_config::Error>, Self)> {
        let mut errors = Vec::new();
        let mut cfg = GalleryConfig::default();

        macro_rules! get_field {
            ($name:literal, $field:ident, $type:ty) => {
                match config.get::<$type>($name) {
                    Ok(val) => cfg.$field = val,
                    Err(e) => errors.push(e),
                }
            };
        }

        get_field!("thumbnail_size", thumbnail_size, ThumbnailSize);
        get_field!("show_hidden_files", show_hidden_files, bool);
        get_field!("sort_mode", sort_mode, SortMode);
        get_field!("sort_order", sort_order, SortOrder);
        get_field!("viewer_click_advances", viewer_click_advances, bool);
        get_field!("remember_last_dir", remember_last_dir, bool);
        get_field!("last_dir", last_dir, Option<String>);

        if errors.is_empty() {
            Ok(cfg)
        } else {
            Err((errors, cfg))
        }
    }

    fn update_keys<T: AsRef<str>>(
        &mut self,
        config: &cosmic_config::Config,
        changed_keys: &[T],
    ) -> (Vec<cosmic_config::Error>, Vec<&'static str>) {
        let mut errors = Vec::new();
        let mut updated = Vec::new();

        for key in changed_keys {
            match key.as_ref() {
                "viewer_click_advances" => match config.get::<bool>("viewer_click_advances") {
                    Ok(val) => {
                        self.viewer_click_advances = val;
                        updated.push("viewer_click_advances");
                    }
                    Err(e) => errors.push(e),
                },
                "show_hidden_files" => match config.get::<bool>("show_hidden_files") {
                    Ok(val) => {
                        self.show_hidden_files = val;
                        updated.push("show_hidden_files");
                    }
                    Err(e) => errors.push(e),
                },
                "sort_mode" => match config.get::<SortMode>("sort_mode") {
                    Ok(val) => {
                        self.sort_mode = val;
                        updated.push("sort_mode");
                    }
                    Err(e) => errors.push(e),
                },
                "sort_order" => match config.get::<SortOrder>("sort_order") {
                    Ok(val) => {
                        self.sort_order = val;
                        updated.push("sort_order");
                    }
                    Err(e) => errors.push(e),
                },
                _ => {}
            }
        }

        (errors, updated)
    }
}

pub fn config() -> Result<Config, cosmic_config::Error> {
    Config::new(APP_ID, CONFIG_VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = GalleryConfig::default();
        assert!(cfg.viewer_click_advances);
        assert!(cfg.remember_last_dir);
        assert!(!cfg.show_hidden_files);
        assert_eq!(cfg.sort_mode, SortMode::Name);
        assert_eq!(cfg.sort_order, SortOrder::Ascending);
        assert_eq!(cfg.thumbnail_size.pixels(), 128);
        assert!(cfg.last_dir.is_none());
    }

    #[test]
    fn test_sort_order_toggle() {
        assert_eq!(SortOrder::Ascending.toggle(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggle().toggle(), SortOrder::Descending);
    }

    #[test]
    fn test_adopt_keeps_session_last_dir() {
        let mut current = GalleryConfig {
            last_dir: Some("/photos/new".to_string()),
            ..GalleryConfig::default()
        };
        let stored = GalleryConfig {
            last_dir: Some("/photos/old".to_string()),
            sort_order: SortOrder::Descending,
            ..GalleryConfig::default()
        };

        let changes = current.adopt(stored);

        assert!(changes.changed);
        assert!(changes.rescan);
        assert!(!changes.thumbnails);
        assert_eq!(current.sort_order, SortOrder::Descending);
        assert_eq!(current.last_dir.as_deref(), Some("/photos/new"));
    }

    #[test]
    fn test_adopt_ignores_last_dir_only_difference() {
        let mut current = GalleryConfig {
            last_dir: Some("/photos/new".to_string()),
            ..GalleryConfig::default()
        };

        let changes = current.adopt(GalleryConfig::default());

        assert_eq!(changes, ConfigChanges::default());
        assert_eq!(current.last_dir.as_deref(), Some("/photos/new"));
    }

    #[test]
    fn test_adopt_reports_size_and_click_changes() {
        let mut current = GalleryConfig::default();
        let changes = current.adopt(GalleryConfig {
            thumbnail_size: ThumbnailSize::Large,
            viewer_click_advances: false,
            ..GalleryConfig::default()
        });

        assert!(changes.changed);
        assert!(changes.thumbnails);
        assert!(!changes.rescan);
        assert!(!current.viewer_click_advances);
    }

    #[test]
    fn test_thumbnail_sizes_grow() {
        assert!(ThumbnailSize::Small.pixels() < ThumbnailSize::Medium.pixels());
        assert!(ThumbnailSize::Medium.pixels() < ThumbnailSize::Large.pixels());
    }
}
