// SPDX-License-Identifier: MPL-2.0
//! Iced component binding the picker core to a window.
//!
//! [`LayerPicker`] owns one [`PickerState`] and one [`ImageResolver`]. Every
//! message goes through [`LayerPicker::update`], which returns the host
//! callbacks to fire plus the follow-up tasks (thumbnail loads, scroll
//! snaps). After each state change the render contexts are re-resolved;
//! unchanged contexts are no-ops in the resolver, so redundant updates never
//! restart a load.
//!
//! Outside dismissal hit-tests each global pointer-down against the bounds
//! the picker was last laid out at. Touch presses carry their position;
//! mouse presses use the cursor position tracked from `CursorMoved`.

use crate::config::{ARROW_WIDTH, PANEL_PADDING, TILE_GAP, TILE_PADDING};
use crate::i18n::I18n;
use crate::media::{ImageLoader, ImageResolver, LoadOutcome, LoadRequest, RenderTarget, Resolution};
use crate::picker::{
    LayerItem, Notification, Observation, PanelSide, PickerOptions, PickerState, ScrollDirection,
    ScrollMetrics, SizeMetrics, Substrate, SubscriptionId, XEdge, YEdge,
};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theme::{self, PickerPalette};
use crate::ui::widgets::bounds_reporter;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Image;
use iced::widget::scrollable::{Direction, RelativeOffset, Scrollbar, Viewport};
use iced::widget::{
    button, mouse_area, operation, text, tooltip, Column, Container, Id, Row, Scrollable, Space,
    Stack,
};
use iced::{
    event, font, mouse, time, touch, window, ContentFit, Element, Event, Font, Length, Padding,
    Point, Rectangle, Subscription, Task,
};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Frame interval while a hover deadline or smooth scroll is pending.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

const TITLE_FONT: Font = Font {
    weight: font::Weight::Semibold,
    ..Font::DEFAULT
};

#[derive(Debug, Clone)]
pub enum Message {
    PointerEntered,
    PointerLeft,
    ControlPressed,
    ItemPressed(String),
    DefaultPressed,
    MorePressed,
    ArrowPressed(ScrollDirection),
    Scrolled(ScrollMetrics),
    /// Window width, while it stands in for the container width.
    ParentResized(f32),
    /// Window-space bounds of the control and panel.
    BoundsChanged(Rectangle),
    CursorChanged(Option<Point>),
    /// A press anywhere in the window; touch presses carry their position.
    GlobalPointerDown(Option<Point>),
    Tick(Instant),
    ImageLoaded(LoadOutcome),
}

/// Host substrate backed by Iced subscriptions.
///
/// Observations are realised in [`LayerPicker::subscription`], which only
/// listens for global pointer-downs and window resizes while the matching
/// observation is registered here.
#[derive(Debug, Default)]
pub struct IcedSubstrate {
    next_id: u64,
    active: BTreeMap<SubscriptionId, Observation>,
}

impl IcedSubstrate {
    #[must_use]
    pub fn is_observing(&self, observation: Observation) -> bool {
        self.active.values().any(|o| *o == observation)
    }
}

impl Substrate for IcedSubstrate {
    fn probe_touch(&self) -> bool {
        cfg!(any(target_os = "android", target_os = "ios"))
    }

    fn subscribe(&mut self, observation: Observation) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.active.insert(id, observation);
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.active.remove(&id);
    }
}

/// A picker instance ready to be embedded in an Iced view.
pub struct LayerPicker {
    state: PickerState<IcedSubstrate>,
    resolver: ImageResolver,
    loader: Arc<dyn ImageLoader>,
    palette: PickerPalette,
    scroll_id: Id,
    bounds: Option<Rectangle>,
    cursor: Option<Point>,
    /// The host set the container width; window sizes are ignored.
    width_pinned: bool,
}

impl std::fmt::Debug for LayerPicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayerPicker")
            .field("state", &self.state)
            .field("resolver", &self.resolver)
            .field("bounds", &self.bounds)
            .field("width_pinned", &self.width_pinned)
            .finish_non_exhaustive()
    }
}

impl LayerPicker {
    /// Mounts a picker and starts loading its initial thumbnails.
    pub fn new(
        items: Vec<LayerItem>,
        options: PickerOptions,
        loader: Arc<dyn ImageLoader>,
        palette: PickerPalette,
    ) -> (Self, Task<Message>) {
        let mut picker = Self {
            state: PickerState::new(items, options, IcedSubstrate::default()),
            resolver: ImageResolver::new(),
            loader,
            palette,
            scroll_id: Id::unique(),
            bounds: None,
            cursor: None,
            width_pinned: false,
        };
        let task = picker.sync_images();
        (picker, task)
    }

    #[must_use]
    pub fn state(&self) -> &PickerState<IcedSubstrate> {
        &self.state
    }

    #[must_use]
    pub fn selected_item(&self) -> Option<&LayerItem> {
        self.state.selected_item()
    }

    #[must_use]
    pub fn palette(&self) -> PickerPalette {
        self.palette
    }

    /// Switches colours, e.g. after a theme change.
    pub fn set_palette(&mut self, palette: PickerPalette) {
        self.palette = palette;
    }

    /// Pushes a new controlled value; ignored for pickers that own their value.
    pub fn set_controlled_value(&mut self, value: Option<String>) -> Task<Message> {
        self.state.set_controlled_value(value);
        self.sync_images()
    }

    /// Forces the selection from outside the interaction flow.
    pub fn force_select(&mut self, id: impl Into<String>) -> Task<Message> {
        self.state.force_select(id);
        self.sync_images()
    }

    /// Clears an owned selection; controlled pickers keep the host value.
    pub fn clear_selection(&mut self) -> Task<Message> {
        self.state.clear_selection();
        self.sync_images()
    }

    /// Replaces the item list. Returns the callbacks to fire, which hold
    /// `Collapsed` when an open panel is left empty.
    pub fn set_items(&mut self, items: Vec<LayerItem>) -> (Vec<Notification>, Task<Message>) {
        let notifications = self.state.set_items(items);
        (notifications, self.sync_images())
    }

    /// Pins the container width for hosts that do not give the picker the
    /// whole window. `None` goes back to following the window.
    pub fn set_parent_width(&mut self, width: Option<f32>) -> Task<Message> {
        self.width_pinned = width.is_some();
        self.state.set_parent_width(width);
        if self.width_pinned || !self.state.is_expanded() {
            return Task::none();
        }
        measure_window()
    }

    /// Handles one message. Returns the callbacks to fire, in order, and the
    /// follow-up task.
    pub fn update(&mut self, message: Message) -> (Vec<Notification>, Task<Message>) {
        let mut scroll_task = Task::none();
        let notifications = match message {
            Message::PointerEntered => self.state.pointer_entered(),
            Message::PointerLeft => {
                self.state.pointer_left(Instant::now());
                Vec::new()
            }
            Message::ControlPressed => self.state.toggle(),
            Message::ItemPressed(id) => self.state.select_item(&id),
            Message::DefaultPressed => self.state.choose_default(),
            Message::MorePressed => self.state.invoke_more(),
            Message::ArrowPressed(direction) => {
                self.state.scroll_arrow(direction, Instant::now());
                Vec::new()
            }
            Message::Scrolled(metrics) => {
                self.state.scroll_changed(metrics);
                Vec::new()
            }
            Message::ParentResized(width) => {
                if !self.width_pinned {
                    self.state.set_parent_width(Some(width));
                }
                Vec::new()
            }
            Message::BoundsChanged(bounds) => {
                self.bounds = Some(bounds);
                return (Vec::new(), Task::none());
            }
            Message::CursorChanged(position) => {
                self.cursor = position;
                return (Vec::new(), Task::none());
            }
            Message::GlobalPointerDown(position) => {
                if lands_outside(self.bounds, position.or(self.cursor)) {
                    self.state.outside_pointer_down()
                } else {
                    Vec::new()
                }
            }
            Message::Tick(now) => {
                let (notifications, scroll_to) = self.state.tick(now);
                if let Some(offset) = scroll_to {
                    scroll_task = self.snap_strip(offset);
                }
                notifications
            }
            Message::ImageLoaded(outcome) => {
                let next = self
                    .resolver
                    .complete(outcome, self.state.diagnostics_mut());
                return (Vec::new(), next.map_or_else(Task::none, |r| self.load(r)));
            }
        };

        let opened = notifications.contains(&Notification::Expanded);
        let measure_task = if opened && !self.width_pinned {
            measure_window()
        } else {
            Task::none()
        };
        let image_task = self.sync_images();
        (
            notifications,
            Task::batch([scroll_task, measure_task, image_task]),
        )
    }

    /// Global listeners and the frame clock.
    pub fn subscription(&self) -> Subscription<Message> {
        let substrate = self.state.substrate();

        let cursor = event::listen_with(|event, _status, _window| match event {
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                Some(Message::CursorChanged(Some(position)))
            }
            Event::Mouse(mouse::Event::CursorLeft) => Some(Message::CursorChanged(None)),
            _ => None,
        });

        let resize = if substrate.is_observing(Observation::ScrollRegion) && !self.width_pinned {
            event::listen_with(|event, _status, _window| match event {
                Event::Window(window::Event::Resized(size)) => {
                    Some(Message::ParentResized(size.width))
                }
                _ => None,
            })
        } else {
            Subscription::none()
        };

        // Captured events are observed too, so inner widgets cannot hide a
        // pointer-down from the dismissal check.
        let outside = if substrate.is_observing(Observation::OutsidePointerDown) {
            event::listen_with(|event, _status, _window| match event {
                Event::Mouse(mouse::Event::ButtonPressed(_)) => Some(Message::GlobalPointerDown(None)),
                Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                    Some(Message::GlobalPointerDown(Some(position)))
                }
                _ => None,
            })
        } else {
            Subscription::none()
        };

        let ticks = if self.state.needs_ticks() {
            time::every(TICK_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        };

        Subscription::batch([cursor, resize, outside, ticks])
    }

    fn sync_images(&mut self) -> Task<Message> {
        let contexts = self.state.render_contexts();
        let live: HashSet<RenderTarget> = contexts.iter().map(|(t, _)| t.clone()).collect();
        self.resolver.retain(|target| live.contains(target));

        let requests: Vec<LoadRequest> = contexts
            .into_iter()
            .filter_map(|(target, context)| {
                self.resolver
                    .resolve(target, context, self.state.diagnostics_mut())
            })
            .collect();

        Task::batch(requests.into_iter().map(|request| self.load(request)))
    }

    fn load(&self, request: LoadRequest) -> Task<Message> {
        let future = self.loader.load(&request.source);
        Task::perform(future, move |result| {
            Message::ImageLoaded(LoadOutcome::from_result(&request, result))
        })
    }

    fn snap_strip(&self, offset: f32) -> Task<Message> {
        let max = self.state.scroll_metrics().max_offset();
        if max <= 0.0 {
            return Task::none();
        }
        operation::snap_to(
            self.scroll_id.clone(),
            RelativeOffset {
                x: (offset / max).clamp(0.0, 1.0),
                y: 0.0,
            },
        )
    }

    // ---------------------------------------------------------------------
    // View
    // ---------------------------------------------------------------------

    /// Renders the picker anchored inside the available area. Widths come
    /// from the state, so the drawn strip and the arrow flags agree.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let placement = self.state.placement();
        let metrics = self.state.metrics();

        let control = self.view_control(&metrics);
        let panel = self
            .state
            .is_expanded()
            .then(|| self.view_panel(&metrics, i18n));

        let mut row = Row::new()
            .spacing(placement.panel_gap)
            .align_y(Vertical::Center);
        match placement.panel_side() {
            PanelSide::Right => {
                row = row.push(control);
                if let Some(panel) = panel {
                    row = row.push(panel);
                }
            }
            PanelSide::Left => {
                if let Some(panel) = panel {
                    row = row.push(panel);
                }
                row = row.push(control);
            }
        }

        let hover_zone = bounds_reporter(
            mouse_area(row)
                .on_enter(Message::PointerEntered)
                .on_exit(Message::PointerLeft),
            Message::BoundsChanged,
        );

        let mut padding = Padding::ZERO;
        let align_x = match placement.x_edge {
            XEdge::Left => {
                padding.left = placement.x;
                Horizontal::Left
            }
            XEdge::Right => {
                padding.right = placement.x;
                Horizontal::Right
            }
        };
        let align_y = match placement.y_edge {
            YEdge::Top => {
                padding.top = placement.y;
                Vertical::Top
            }
            YEdge::Bottom => {
                padding.bottom = placement.y;
                Vertical::Bottom
            }
        };

        Container::new(hover_zone)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(padding)
            .align_x(align_x)
            .align_y(align_y)
            .into()
    }

    fn view_control(&self, metrics: &SizeMetrics) -> Element<'_, Message> {
        let thumb = self.view_thumb(
            &RenderTarget::Collapsed,
            metrics.thumb,
            metrics.thumb_height(),
        );

        let face = Container::new(thumb)
            .width(Length::Fixed(metrics.collapsed))
            .height(Length::Fixed(metrics.collapsed))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(theme::collapsed_control(self.palette));

        let control = button(face)
            .padding(0)
            .style(theme::bare)
            .on_press(Message::ControlPressed);

        match self.state.tooltip() {
            Some(label) => tooltip(control, text(label), tooltip::Position::Top)
                .gap(4)
                .into(),
            None => control.into(),
        }
    }

    fn view_panel<'a>(&'a self, metrics: &SizeMetrics, i18n: &'a I18n) -> Element<'a, Message> {
        let plan = self.state.plan();
        let mut panel = Row::new().spacing(TILE_GAP).align_y(Vertical::Center);

        if plan.show_default {
            panel = panel.push(self.view_tile(
                metrics,
                RenderTarget::DefaultTile,
                i18n.tr("picker-default-title"),
                i18n.tr("picker-default-description"),
                Message::DefaultPressed,
            ));
        }

        if plan.visible > 0 {
            panel = panel.push(self.view_strip(metrics));
        }

        if plan.show_more {
            panel = panel.push(self.view_tile(
                metrics,
                RenderTarget::MoreTile,
                i18n.tr("picker-more-title"),
                i18n.tr("picker-more-description"),
                Message::MorePressed,
            ));
        }

        let mut frame = Container::new(panel)
            .padding(PANEL_PADDING)
            .style(theme::panel(self.palette));
        if let Some(max) = self.state.panel_max_width() {
            frame = frame.max_width(max);
        }
        frame.into()
    }

    fn view_strip(&self, metrics: &SizeMetrics) -> Element<'_, Message> {
        let tiles = self
            .state
            .visible_items()
            .iter()
            .fold(Row::new().spacing(TILE_GAP), |row, item| {
                row.push(self.view_tile(
                    metrics,
                    RenderTarget::Tile(item.id.clone()),
                    item.title.clone(),
                    item.description.clone().unwrap_or_default(),
                    Message::ItemPressed(item.id.clone()),
                ))
            });

        let strip = Scrollable::new(tiles)
            .id(self.scroll_id.clone())
            .width(Length::Fixed(self.state.strip_viewport_width()))
            .direction(Direction::Horizontal(Scrollbar::hidden()))
            .on_scroll(|viewport: Viewport| {
                Message::Scrolled(ScrollMetrics::new(
                    viewport.absolute_offset().x,
                    viewport.bounds().width,
                    viewport.content_bounds().width,
                ))
            });

        let arrows = self.state.arrows();
        let mut overlay = Row::new().height(Length::Fill).width(Length::Fill);
        if arrows.left {
            overlay = overlay.push(self.view_arrow("❮", ScrollDirection::Left));
        }
        overlay = overlay.push(Space::new().width(Length::Fill));
        if arrows.right {
            overlay = overlay.push(self.view_arrow("❯", ScrollDirection::Right));
        }

        Stack::new()
            .push(strip)
            .push(Container::new(overlay).padding(spacing::ARROW_GAP))
            .into()
    }

    fn view_arrow(&self, glyph: &'static str, direction: ScrollDirection) -> Element<'_, Message> {
        button(
            text(glyph)
                .size(typography::ARROW)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fixed(ARROW_WIDTH))
        .height(Length::Fill)
        .padding(0)
        .style(theme::arrow)
        .on_press(Message::ArrowPressed(direction))
        .into()
    }

    fn view_tile(
        &self,
        metrics: &SizeMetrics,
        target: RenderTarget,
        title: String,
        description: String,
        on_press: Message,
    ) -> Element<'_, Message> {
        let thumb = self.view_thumb(&target, metrics.tile_thumb, metrics.tile_thumb_height());

        let content = Column::new()
            .spacing(spacing::TILE_LABEL_GAP)
            .push(thumb)
            .push(
                text(title)
                    .size(typography::TITLE)
                    .font(TITLE_FONT)
                    .color(self.palette.text)
                    .wrapping(text::Wrapping::None)
                    .width(Length::Fixed(metrics.tile_thumb)),
            )
            .push(
                text(description)
                    .size(typography::DESCRIPTION)
                    .color(self.palette.subtext)
                    .wrapping(text::Wrapping::None)
                    .width(Length::Fixed(metrics.tile_thumb)),
            );

        button(content)
            .width(Length::Fixed(metrics.tile_width))
            .padding(TILE_PADDING)
            .style(theme::tile(self.palette))
            .on_press(on_press)
            .into()
    }

    /// Resolved image, or a neutral block while pending or unresolved.
    fn view_thumb(&self, target: &RenderTarget, width: f32, height: f32) -> Element<'_, Message> {
        match self.resolver.resolution(target) {
            Resolution::Resolved { image, .. } => Container::new(
                Image::new(image.handle.clone())
                    .width(Length::Fixed(width))
                    .height(Length::Fixed(height))
                    .content_fit(ContentFit::Cover),
            )
            .style(theme::thumb_frame)
            .into(),
            Resolution::Pending | Resolution::Unresolved => {
                Container::new(Space::new().width(Length::Fixed(width)).height(Length::Fixed(height)))
                    .style(theme::neutral_block)
                    .into()
            }
        }
    }
}

/// Asks the runtime for the current window size.
fn measure_window() -> Task<Message> {
    window::latest()
        .and_then(window::size)
        .map(|size| Message::ParentResized(size.width))
}

/// Whether a press at `position` falls outside `bounds`. An unknown position
/// or layout counts as outside.
fn lands_outside(bounds: Option<Rectangle>, position: Option<Point>) -> bool {
    match (bounds, position) {
        (Some(bounds), Some(position)) => !bounds.contains(position),
        _ => true,
    }
}
