// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting two pickers over one window.
//!
//! The base picker owns its selection and carries the default and "more"
//! tiles. The overlay picker is host-controlled: the app keeps its value and
//! pushes every change back in, so the pair shows both ownership modes side
//! by side. Callbacks from either picker are reported in the status line.

pub mod catalogue;
mod message;

pub use message::{Flags, Message};

use crate::config::{self, paths, Config};
use crate::error::{Error, Result};
use crate::i18n::I18n;
use crate::media::{ImageData, ImageLoader, SourceLoader};
use crate::picker::{LayerItem, Notification, SelectionMode, XEdge};
use crate::ui::design_tokens::spacing;
use crate::ui::layer_picker::LayerPicker;
use crate::ui::theme::{PickerPalette, ThemeMode};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use iced::alignment::Horizontal;
use iced::widget::{button, text, Column, Container, Row, Stack};
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const WINDOW_DEFAULT_WIDTH: f32 = 900.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 600.0;
pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 240.0;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    base: LayerPicker,
    overlay: LayerPicker,
    /// Host-owned value of the overlay picker.
    overlay_value: Option<String>,
    last_event: Option<String>,
    /// i18n keys of startup warnings.
    warnings: Vec<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("base", &self.base)
            .field("overlay_value", &self.overlay_value)
            .field("last_event", &self.last_event)
            .finish_non_exhaustive()
    }
}

/// Stand-in used when the HTTP client cannot be built. Every load fails, so
/// thumbnails settle on the neutral placeholder.
struct UnavailableLoader(Error);

impl ImageLoader for UnavailableLoader {
    fn load(&self, _source: &str) -> BoxFuture<'static, Result<ImageData>> {
        let error = self.0.clone();
        async move { Err(error) }.boxed()
    }
}

fn bundled_assets() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/thumbnails"))
}

fn build_loader(config: &Config) -> Arc<dyn ImageLoader> {
    let asset_root = config
        .thumbnails
        .asset_root
        .clone()
        .unwrap_or_else(bundled_assets);
    match SourceLoader::new(Some(asset_root)) {
        Ok(loader) => Arc::new(loader),
        Err(error) => {
            eprintln!("Thumbnail loader unavailable: {error}");
            Arc::new(UnavailableLoader(error))
        }
    }
}

/// Reads the `--items` file, falling back to the built-in catalogue.
fn load_items(path: Option<&Path>) -> (Vec<LayerItem>, Option<String>) {
    let Some(path) = path else {
        return (catalogue::sample_items(), None);
    };
    match config::load_items_from_path(path) {
        Ok(items) => (items, None),
        Err(error) => {
            eprintln!("Failed to read items from {}: {error}", path.display());
            (
                catalogue::sample_items(),
                Some("notification-items-load-error".to_string()),
            )
        }
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires Fn for boot; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config and items, then mounts both pickers.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir);
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, config.general.language.as_deref());
        let items_path = flags.items.map(PathBuf::from);
        let (items, items_warning) = load_items(items_path.as_deref());

        let loader = build_loader(&config);
        let palette = PickerPalette::for_mode(config.general.theme);

        let default_item = items.first().cloned();
        let base_options = config.picker_options(
            SelectionMode::Uncontrolled {
                default: default_item.as_ref().map(|item| item.id.clone()),
            },
            default_item,
            true,
        );
        let (base, base_task) = LayerPicker::new(items, base_options, loader.clone(), palette);

        let mut overlay_options = config.picker_options(SelectionMode::Controlled(None), None, false);
        overlay_options.placement.x_edge = match overlay_options.placement.x_edge {
            XEdge::Left => XEdge::Right,
            XEdge::Right => XEdge::Left,
        };
        let (overlay, overlay_task) =
            LayerPicker::new(catalogue::overlay_items(), overlay_options, loader, palette);

        let app = App {
            i18n,
            theme_mode: config.general.theme,
            base,
            overlay,
            overlay_value: None,
            last_event: None,
            warnings: config_warning.into_iter().chain(items_warning).collect(),
        };

        (
            app,
            Task::batch([base_task.map(Message::Base), overlay_task.map(Message::Overlay)]),
        )
    }

    fn title(&self) -> String {
        self.i18n.tr("demo-window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            self.base.subscription().map(Message::Base),
            self.overlay.subscription().map(Message::Overlay),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Base(message) => {
                let (notifications, task) = self.base.update(message);
                self.report(&notifications);
                task.map(Message::Base)
            }
            Message::Overlay(message) => {
                let (notifications, task) = self.overlay.update(message);
                self.report(&notifications);

                let mut value = self.overlay_value.clone();
                for notification in &notifications {
                    match notification {
                        Notification::Selected(item) => value = Some(item.id.clone()),
                        Notification::DefaultChosen(_) => value = None,
                        _ => {}
                    }
                }
                let push = if value == self.overlay_value {
                    Task::none()
                } else {
                    self.overlay_value = value.clone();
                    self.overlay.set_controlled_value(value)
                };
                Task::batch([task, push]).map(Message::Overlay)
            }
            Message::ResetOverlay => {
                self.overlay_value = None;
                self.overlay.set_controlled_value(None).map(Message::Overlay)
            }
            Message::ClearBase => self.base.clear_selection().map(Message::Base),
            Message::ToggleTheme => {
                self.theme_mode = if self.theme_mode.is_dark() {
                    ThemeMode::Light
                } else {
                    ThemeMode::Dark
                };
                let palette = PickerPalette::for_mode(self.theme_mode);
                self.base.set_palette(palette);
                self.overlay.set_palette(palette);
                Task::none()
            }
        }
    }

    fn report(&mut self, notifications: &[Notification]) {
        for notification in notifications {
            let event = match notification {
                Notification::Selected(item) => {
                    self.i18n.tr_with_args("demo-event-selected", &[("id", &item.id)])
                }
                Notification::DefaultChosen(_) => self.i18n.tr("demo-event-default"),
                Notification::More => self.i18n.tr("demo-event-more"),
                Notification::Expanded => self.i18n.tr("demo-event-expanded"),
                Notification::Collapsed => self.i18n.tr("demo-event-collapsed"),
            };
            self.last_event = Some(event);
        }
    }

    #[must_use]
    pub fn last_event(&self) -> Option<&str> {
        self.last_event.as_deref()
    }

    #[must_use]
    pub fn overlay_value(&self) -> Option<&str> {
        self.overlay_value.as_deref()
    }

    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn view(&self) -> Element<'_, Message> {
        let selected = match self.base.selected_item() {
            Some(item) => self
                .i18n
                .tr_with_args("demo-selected", &[("title", &item.title)]),
            None => self.i18n.tr("demo-nothing-selected"),
        };

        let mut status = Column::new()
            .spacing(spacing::DEMO / 2.0)
            .align_x(Horizontal::Center)
            .push(text(selected).size(18));
        if let Some(event) = &self.last_event {
            status = status.push(text(
                self.i18n
                    .tr_with_args("demo-last-event", &[("event", event.as_str())]),
            ));
        }
        for warning in &self.warnings {
            status = status.push(text(self.i18n.tr(warning)).size(12));
        }
        let actions = Row::new()
            .spacing(spacing::DEMO / 2.0)
            .push(button(text(self.i18n.tr("demo-clear-first"))).on_press(Message::ClearBase))
            .push(button(text(self.i18n.tr("demo-reset-second"))).on_press(Message::ResetOverlay))
            .push(button(text(self.i18n.tr("demo-toggle-theme"))).on_press(Message::ToggleTheme));
        status = status.push(actions);

        let background = Container::new(status)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::DEMO)
            .align_x(Horizontal::Center);

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(background)
            .push(self.base.view(&self.i18n).map(Message::Base))
            .push(self.overlay.view(&self.i18n).map(Message::Overlay))
            .into()
    }
}
