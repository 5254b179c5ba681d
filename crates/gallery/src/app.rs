//! Main app state

use crate::{
    fl, key_binds,
    message::Message,
    thumbnail::{self, ThumbnailSlots},
};
use cosmic::{
    Action, Application, ApplicationExt, Core, Element, Task,
    cosmic_config::{Config, CosmicConfigEntry},
    iced::{ContentFit, Length},
    iced_widget::scrollable::{Direction, Scrollbar},
    theme,
    widget::{button, column, container, icon, image, mouse_area, row, scrollable, text},
};
use gallery_config::GalleryConfig;
use gallery_nav::{GalleryController, Thumbnail, Viewer, ViewerSurface};
use gallery_types::GalleryEvent;
use shared::cache::ThumbnailCache;
use std::path::PathBuf;

/// Thumbnails requested per round, so a large folder doesn't flood the pool
const BATCH_SIZE: usize = 64;

/// Main app state
pub struct Galleria {
    core: Core,
    config: GalleryConfig,
    config_handler: Option<Config>,
    gallery: GalleryController<Vec<Thumbnail>, Viewer>,
    cache: ThumbnailCache,
    slots: ThumbnailSlots<cosmic::widget::image::Handle>,
    dir: Option<PathBuf>,
}

impl Galleria {
    pub const APP_ID: &'static str = "io.github.galleria.Galleria";

    /// List the directory holding `path` and rebuild the gallery from it
    fn scan(&self, path: PathBuf) -> Task<Action<Message>> {
        let Some(dir) = gallery_nav::get_image_dir(&path) else {
            tracing::warn!("Nothing to open at {}", path.display());
            return Task::none();
        };

        let target = path.is_file().then_some(path);
        let include_hidden = self.config.show_hidden_files;
        let sort_mode = self.config.sort_mode;
        let sort_order = self.config.sort_order;

        cosmic::task::future(async move {
            let images = gallery_nav::scan_dir(&dir, include_hidden, sort_mode, sort_order).await;
            Message::DirectoryScanned {
                dir,
                images,
                target,
            }
        })
    }

    fn rescan(&self) -> Task<Action<Message>> {
        match self.dir.clone() {
            Some(dir) => self.scan(dir),
            None => Task::none(),
        }
    }

    fn thumbnails_remaining(&self) -> usize {
        self.gallery
            .thumbnails()
            .iter()
            .filter(|thumb| self.slots.needs(&thumb.source))
            .count()
    }

    /// Request the next batch of strip thumbnails
    fn load_thumbnails(&mut self) -> Task<Action<Message>> {
        let size = self.config.thumbnail_size.pixels();

        let batch: Vec<PathBuf> = self
            .gallery
            .thumbnails()
            .iter()
            .filter(|thumb| self.slots.needs(&thumb.source))
            .take(BATCH_SIZE)
            .map(|thumb| thumb.source.clone())
            .collect();

        let tasks = batch.into_iter().map(|path| {
            let generation = self.slots.begin(path.clone());
            let cache = self.cache.clone();

            cosmic::task::future(async move {
                match thumbnail::load_thumbnail(cache, path.clone(), size).await {
                    Ok(handle) => Message::ThumbnailReady {
                        generation,
                        path,
                        handle,
                    },
                    Err(e) => Message::ThumbnailFailed {
                        generation,
                        path,
                        error: e.to_string(),
                    },
                }
            })
        });

        Task::batch(tasks.collect::<Vec<_>>())
    }

    fn continue_thumbnails(&mut self) -> Task<Action<Message>> {
        if self.slots.is_idle() && self.thumbnails_remaining() > 0 {
            self.load_thumbnails()
        } else {
            Task::none()
        }
    }

    /// Update window title based on current image
    fn update_title(&mut self) -> Task<Action<Message>> {
        let title = match self
            .gallery
            .current()
            .and_then(|path| path.file_name())
            .and_then(|name| name.to_str())
        {
            Some(name) => fl!("title-with-image", name = name),
            None => fl!("app-title"),
        };

        match self.core.main_window_id() {
            Some(id) => self.set_window_title(title, id),
            None => Task::none(),
        }
    }

    fn apply_config(&mut self, config: GalleryConfig) -> Task<Action<Message>> {
        let changes = self.config.adopt(config);
        if !changes.changed {
            return Task::none();
        }

        self.gallery
            .set_viewer_click_advances(self.config.viewer_click_advances);

        if changes.rescan {
            self.rescan()
        } else if changes.thumbnails {
            self.slots.reset();
            self.load_thumbnails()
        } else {
            Task::none()
        }
    }

    fn viewer_view(&self) -> Element<'_, Message> {
        match self.gallery.viewer().source() {
            Some(source) => mouse_area(
                container(
                    image(cosmic::widget::image::Handle::from_path(source))
                        .content_fit(ContentFit::Contain)
                        .width(Length::Fill)
                        .height(Length::Fill),
                )
                .width(Length::Fill)
                .height(Length::Fill)
                .center(Length::Fill),
            )
            .on_press(Message::Gallery(GalleryEvent::ViewerClicked))
            .into(),
            None => container(text::body(fl!("empty-gallery")))
                .width(Length::Fill)
                .height(Length::Fill)
                .center(Length::Fill)
                .into(),
        }
    }

    fn strip_view(&self) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;
        let size = self.config.thumbnail_size.pixels() as f32;

        let mut strip = row().spacing(spacing.space_xs).padding(spacing.space_xs);

        for (id, thumb) in self.gallery.bindings().zip(self.gallery.thumbnails()) {
            let content: Element<'_, Message> = match self.slots.get(&thumb.source) {
                Some(handle) => image(handle.clone())
                    .width(Length::Fixed(size))
                    .height(Length::Fixed(size))
                    .into(),
                None if self.slots.is_failed(&thumb.source) => {
                    container(text::caption(fl!("thumbnail-missing")))
                        .width(Length::Fixed(size))
                        .height(Length::Fixed(size))
                        .center(Length::Fixed(size))
                        .into()
                }
                None => container(icon::from_name("image-x-generic-symbolic").size(32))
                    .width(Length::Fixed(size))
                    .height(Length::Fixed(size))
                    .center(Length::Fixed(size))
                    .into(),
            };

            strip = strip.push(
                button::custom(content)
                    .padding(spacing.space_xxxs)
                    .selected(thumb.selected)
                    .class(theme::Button::Image)
                    .on_press(Message::Gallery(GalleryEvent::ThumbnailClicked(id))),
            );
        }

        scrollable(strip)
            .direction(Direction::Horizontal(Scrollbar::default()))
            .width(Length::Fill)
            .into()
    }
}

impl Application for Galleria {
    type Executor = cosmic::executor::Default;
    type Flags = Option<PathBuf>;
    type Message = Message;

    const APP_ID: &'static str = Self::APP_ID;

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Action<Self::Message>>) {
        let (config, config_handler) = match gallery_config::config() {
            Ok(handler) => {
                let config = match GalleryConfig::get_entry(&handler) {
                    Ok(c) => c,
                    Err((errors, c)) => {
                        for err in errors {
                            tracing::warn!("Config entry unreadable, using default: {err}");
                        }
                        c
                    }
                };
                (config, Some(handler))
            }
            Err(e) => {
                tracing::warn!("Config unavailable, using defaults: {e}");
                (GalleryConfig::default(), None)
            }
        };

        let mut gallery = GalleryController::new(Vec::new(), Viewer::new());
        gallery.set_viewer_click_advances(config.viewer_click_advances);

        let mut app = Self {
            core,
            config,
            config_handler,
            gallery,
            cache: ThumbnailCache::new(),
            slots: ThumbnailSlots::new(),
            dir: None,
        };

        let startup_path = flags
            .or_else(|| {
                app.config
                    .remember_last_dir
                    .then(|| app.config.last_dir.as_ref().map(PathBuf::from))
                    .flatten()
            })
            .or_else(dirs::picture_dir);

        let mut tasks = vec![app.update_title()];
        if let Some(path) = startup_path {
            tasks.push(app.scan(path));
        }

        (app, Task::batch(tasks))
    }

    fn view(&self) -> Element<'_, Self::Message> {
        column()
            .push(self.viewer_view())
            .push(self.strip_view())
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn update(&mut self, message: Message) -> Task<Action<Self::Message>> {
        match message {
            Message::Gallery(event) => {
                if self.gallery.handle_event(event) {
                    return self.update_title();
                }
            }
            Message::DirectoryScanned {
                dir,
                images,
                target,
            } => {
                tracing::info!("Loaded {} images from {}", images.len(), dir.display());

                let mut gallery = GalleryController::open(images, target.as_deref());
                gallery.set_viewer_click_advances(self.config.viewer_click_advances);
                self.gallery = gallery;

                if self.config.remember_last_dir {
                    self.config.last_dir = Some(dir.to_string_lossy().to_string());
                }
                self.dir = Some(dir);

                self.slots.reset();

                return Task::batch([self.load_thumbnails(), self.update_title()]);
            }
            Message::ThumbnailReady {
                generation,
                path,
                handle,
            } => {
                if self.slots.finish_ready(generation, path, handle) {
                    return self.continue_thumbnails();
                }
            }
            Message::ThumbnailFailed {
                generation,
                path,
                error,
            } => {
                tracing::warn!("Thumbnail failed for {}: {error}", path.display());
                if self.slots.finish_failed(generation, path) {
                    return self.continue_thumbnails();
                }
            }
            Message::ConfigChanged(config) => {
                return self.apply_config(config);
            }
        }

        Task::none()
    }

    fn subscription(&self) -> cosmic::iced::Subscription<Self::Message> {
        cosmic::iced::Subscription::batch([
            cosmic::iced::keyboard::on_key_press(key_binds::key_press_handler),
            self.core()
                .watch_config::<GalleryConfig>(Self::APP_ID)
                .map(|update| Message::ConfigChanged(update.config)),
        ])
    }

    fn on_app_exit(&mut self) -> Option<Self::Message> {
        if let Some(ref handler) = self.config_handler
            && let Err(e) = self.config.write_entry(handler)
        {
            tracing::error!("Failed to save config: {e}");
        }

        None
    }
}
