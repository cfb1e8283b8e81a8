//! Full-window viewer for the focused slide.

use std::path::Path;
use std::time::Instant;

use eframe::egui::{self, Color32, FontId, Pos2, Rect, Sense, Stroke};

use crate::catalog::{FlatSlide, Media};
use crate::render::image_cache::{self, ImageCache};
use crate::render::{grid, paint};
use crate::theme::{self, Theme};
use crate::viewer::Viewer;
use crate::viewer::navigator::{Event, NavigatorState, Transition};

const MAX_WIDTH: f32 = 896.0;
const NUDGE: f32 = 30.0;
const ANIMATING_DIM: f32 = 0.7;
const APPEAR_SECONDS: f32 = 0.2;
const NUDGE_SECONDS: f32 = 0.15;
const CORNER_RADIUS: f32 = 12.0;
const ARROW_RADIUS: f32 = 24.0;
const DOT_SIZE: f32 = 8.0;
const DOT_FOCUSED_WIDTH: f32 = 24.0;

/// What the user asked for this frame.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ModalResponse {
    pub close: bool,
    pub prev: bool,
    pub next: bool,
    pub open_url: Option<String>,
}

impl ModalResponse {
    /// Navigator events for the requested actions. Close comes first so a
    /// close in the same frame as an arrow click wins.
    pub fn events(&self) -> Vec<Event> {
        let mut events = Vec::new();
        if self.close {
            events.push(Event::RequestClose);
        }
        if self.prev {
            events.push(Event::RequestPrev);
        }
        if self.next {
            events.push(Event::RequestNext);
        }
        events
    }
}

/// Horizontal offset and opacity of the slide container for a transition.
pub fn nudge(transition: Transition) -> (f32, f32) {
    match transition {
        Transition::Idle => (0.0, 1.0),
        Transition::TowardPrev(_) => (NUDGE, ANIMATING_DIM),
        Transition::TowardNext(_) => (-NUDGE, ANIMATING_DIM),
    }
}

/// Whether the prev and next arrows are enabled at `position`.
pub fn arrows_enabled(position: usize, len: usize) -> (bool, bool) {
    (position > 0, position + 1 < len)
}

pub fn position_label(position: usize, len: usize) -> String {
    format!("{} / {len}", position + 1)
}

/// Address to hand to the system for a video that is not embeddable. URLs
/// pass through as-is, paths resolve against `base`.
pub fn video_url(base: &Path, reference: &str) -> Option<String> {
    let reference = reference.trim();
    if reference.contains("://") {
        return Some(reference.to_string());
    }
    if let Some(rest) = reference.strip_prefix("//") {
        return Some(format!("https://{rest}"));
    }
    image_cache::resolve(base, reference).map(|p| format!("file://{}", p.display()))
}

enum Presence {
    Open { transition: Transition, visible: bool },
    Dismissing { opacity: f32 },
}

/// Draw the viewer over `screen`, above everything else, if it is open or
/// fading out.
pub fn show(
    ctx: &egui::Context,
    screen: Rect,
    viewer: &Viewer,
    theme: &Theme,
    image_cache: &ImageCache,
    now: Instant,
) -> ModalResponse {
    let id = egui::Id::new("slide_modal");
    let (position, presence) = match viewer.state() {
        NavigatorState::Open(view) => (
            view.position,
            Presence::Open {
                transition: view.transition,
                visible: view.visible,
            },
        ),
        NavigatorState::Closed => match viewer.dismissal() {
            Some(dismissal) => (
                dismissal.position,
                Presence::Dismissing {
                    opacity: dismissal.opacity(now),
                },
            ),
            None => {
                // Start the next open from fully transparent.
                ctx.animate_bool_with_time(id.with("appear"), false, 0.0);
                return ModalResponse::default();
            }
        },
    };
    let slides = viewer.slides();
    let focused = match presence {
        Presence::Open { .. } => viewer.focused(),
        Presence::Dismissing { .. } => slides.get(position),
    };
    let Some(focused) = focused else {
        return ModalResponse::default();
    };

    let (appear, transition, interactive) = match presence {
        Presence::Open {
            transition,
            visible,
        } => (
            ctx.animate_bool_with_time(id.with("appear"), visible, APPEAR_SECONDS),
            transition,
            true,
        ),
        Presence::Dismissing { opacity } => (opacity, Transition::Idle, false),
    };
    let (target_offset, target_dim) = nudge(transition);
    let offset = ctx.animate_value_with_time(id.with("offset"), target_offset, NUDGE_SECONDS);
    let dim = ctx.animate_value_with_time(id.with("dim"), target_dim, NUDGE_SECONDS);

    let mut response = ModalResponse::default();

    egui::Area::new(id)
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .interactable(true)
        .show(ctx, |ui| {
            ui.set_min_size(screen.size());

            let backdrop = ui.interact(screen, id.with("backdrop"), Sense::click());
            ui.painter()
                .rect_filled(screen, 0.0, Theme::with_opacity(theme.backdrop, appear));
            if interactive && backdrop.clicked() {
                response.close = true;
            }

            let outer = Rect::from_center_size(
                screen.center() - egui::vec2(0.0, 24.0),
                egui::vec2(
                    (screen.width() - 4.0 * ARROW_RADIUS - 32.0).min(MAX_WIDTH),
                    screen.height() - 200.0,
                ),
            );
            let frame = grid::fit_aspect(outer);
            let scale = 0.95 + 0.05 * appear;
            let slide_rect = Rect::from_center_size(frame.center(), frame.size() * scale)
                .translate(egui::vec2(offset, 0.0));

            // Clicks on the slide itself must not reach the backdrop.
            ui.interact(slide_rect, id.with("slide"), Sense::click());

            let mut painter = ui.painter().with_clip_rect(slide_rect);
            painter.set_opacity(appear * dim);
            response.open_url = draw_slide(
                ui,
                &painter,
                slide_rect,
                focused,
                theme,
                image_cache,
                interactive,
            );

            let mut chrome = ui.painter().clone();
            chrome.set_opacity(appear);

            // Close button above the top-right corner
            let close_center = egui::pos2(slide_rect.right() - 16.0, frame.top() - 28.0);
            if button(ui, &chrome, id.with("close"), close_center, 18.0, interactive) {
                response.close = true;
            }
            paint::cross(
                &chrome,
                close_center,
                16.0,
                Stroke::new(2.5, Color32::WHITE),
            );

            let (prev_enabled, next_enabled) = arrows_enabled(position, slides.len());
            let prev_center = egui::pos2(frame.left() - ARROW_RADIUS - 12.0, frame.center().y);
            let next_center = egui::pos2(frame.right() + ARROW_RADIUS + 12.0, frame.center().y);
            if button(
                ui,
                &chrome,
                id.with("prev"),
                prev_center,
                ARROW_RADIUS,
                interactive && prev_enabled,
            ) {
                response.prev = true;
            }
            if button(
                ui,
                &chrome,
                id.with("next"),
                next_center,
                ARROW_RADIUS,
                interactive && next_enabled,
            ) {
                response.next = true;
            }
            let arrow = |enabled: bool| {
                let alpha = if enabled { 1.0 } else { 0.3 };
                Stroke::new(3.0, Theme::with_opacity(Color32::WHITE, alpha))
            };
            paint::chevron(&chrome, prev_center, 18.0, -1.0, arrow(prev_enabled));
            paint::chevron(&chrome, next_center, 18.0, 1.0, arrow(next_enabled));

            let dots_top = frame.bottom() + 24.0;
            draw_dots(&chrome, frame.center().x, dots_top, position, slides.len());

            let label = chrome.layout_no_wrap(
                position_label(position, slides.len()),
                FontId::proportional(theme.small_size),
                Theme::with_opacity(Color32::WHITE, 0.6),
            );
            let label_pos = egui::pos2(
                frame.center().x - label.rect.width() / 2.0,
                dots_top + DOT_SIZE + 8.0,
            );
            chrome.galley(label_pos, label, Color32::WHITE);
        });

    response
}

/// Round translucent button. Disabled buttons neither hover nor click.
fn button(
    ui: &egui::Ui,
    painter: &egui::Painter,
    id: egui::Id,
    center: Pos2,
    radius: f32,
    enabled: bool,
) -> bool {
    let rect = Rect::from_center_size(center, egui::vec2(radius * 2.0, radius * 2.0));
    let sense = if enabled { Sense::click() } else { Sense::hover() };
    let response = ui.interact(rect, id, sense);
    let fill = if enabled && response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        0.3
    } else if enabled {
        0.2
    } else {
        0.08
    };
    painter.circle_filled(center, radius, Theme::with_opacity(Color32::WHITE, fill));
    enabled && response.clicked()
}

fn draw_dots(painter: &egui::Painter, center_x: f32, top: f32, position: usize, len: usize) {
    if len == 0 {
        return;
    }
    let gap = DOT_SIZE;
    let total = (len - 1) as f32 * (DOT_SIZE + gap) + DOT_FOCUSED_WIDTH;
    let mut x = center_x - total / 2.0;
    for index in 0..len {
        let (width, color) = if index == position {
            (DOT_FOCUSED_WIDTH, Color32::WHITE)
        } else {
            (DOT_SIZE, Theme::with_opacity(Color32::WHITE, 0.4))
        };
        let rect = Rect::from_min_size(egui::pos2(x, top), egui::vec2(width, DOT_SIZE));
        painter.rect_filled(rect, DOT_SIZE / 2.0, color);
        x += width + gap;
    }
}

/// Draw the slide by media kind. Returns a URL to open when the slide's
/// link was clicked.
fn draw_slide(
    ui: &egui::Ui,
    painter: &egui::Painter,
    rect: Rect,
    focused: &FlatSlide,
    theme: &Theme,
    image_cache: &ImageCache,
    interactive: bool,
) -> Option<String> {
    let accent = Theme::accent(&focused.color);
    let slide = &focused.slide;

    match &slide.media {
        Media::RemoteVideo { embed_url, .. } => {
            paint::poster(painter, rect, accent, CORNER_RADIUS);
            paint::play_badge(painter, rect.center(), 40.0, 1.0);
            caption(painter, rect, &slide.title, theme);
            link(ui, painter, rect, slide.id, "Watch on YouTube \u{203a}", interactive)
                .then(|| embed_url.clone())
        }
        Media::LocalVideo(path) => {
            paint::poster(painter, rect, accent, CORNER_RADIUS);
            paint::play_badge(painter, rect.center(), 40.0, 1.0);
            let name = path.rsplit('/').next().unwrap_or(path);
            caption(painter, rect, &format!("{}  \u{b7}  {name}", slide.title), theme);
            let url = video_url(image_cache.base_path(), path)?;
            link(ui, painter, rect, slide.id, "Play video \u{203a}", interactive).then_some(url)
        }
        Media::Image(path) => {
            match image_cache.get_or_load(ui.ctx(), path) {
                Some(texture) => {
                    painter.rect_filled(rect, CORNER_RADIUS, Color32::BLACK);
                    let draw_rect = grid::cover_rect(texture.size_vec2(), rect);
                    let uv = Rect::from_min_max(Pos2::ZERO, egui::pos2(1.0, 1.0));
                    painter.image(texture.id(), draw_rect, uv, Color32::WHITE);
                }
                None => {
                    paint::poster(painter, rect, accent, CORNER_RADIUS);
                    paint::image_badge(painter, rect.center(), 24.0);
                    caption(painter, rect, &slide.title, theme);
                }
            }
            None
        }
        Media::None => {
            draw_text_slide(painter, rect, &slide.title, &slide.body, accent, theme);
            None
        }
    }
}

fn draw_text_slide(
    painter: &egui::Painter,
    rect: Rect,
    title: &str,
    body: &str,
    accent: Color32,
    theme: &Theme,
) {
    let padding = rect.width() * 0.05;
    let title = painter.layout(
        title.to_string(),
        FontId::proportional(theme.h2_size * 1.4),
        theme.card_title,
        rect.width() - padding * 2.0,
    );
    let band_height = title.rect.height() + padding;
    let band = Rect::from_min_max(rect.min, egui::pos2(rect.right(), rect.top() + band_height));

    painter.rect_filled(rect, CORNER_RADIUS, theme::tint(accent, 0.15));
    painter.rect_filled(
        band,
        egui::CornerRadius {
            nw: CORNER_RADIUS as u8,
            ne: CORNER_RADIUS as u8,
            sw: 0,
            se: 0,
        },
        accent,
    );
    painter.galley(
        egui::pos2(band.left() + padding, band.top() + padding / 2.0),
        title,
        theme.card_title,
    );

    let body = painter.layout(
        body.to_string(),
        FontId::proportional(theme.body_size * 1.25),
        theme.card_body,
        rect.width() - padding * 2.0,
    );
    painter.galley(
        egui::pos2(rect.left() + padding, band.bottom() + padding * 0.6),
        body,
        theme.card_body,
    );
}

fn caption(painter: &egui::Painter, rect: Rect, text: &str, theme: &Theme) {
    let band = Rect::from_min_max(egui::pos2(rect.left(), rect.bottom() - 72.0), rect.max);
    paint::vertical_fade(painter, band, Color32::from_black_alpha(170));
    let galley = painter.layout(
        text.to_string(),
        FontId::proportional(theme.h2_size),
        Color32::WHITE,
        rect.width() - 48.0,
    );
    let pos = egui::pos2(rect.left() + 24.0, rect.bottom() - 20.0 - galley.rect.height());
    painter.galley(pos, galley, Color32::WHITE);
}

/// Pill-shaped link in the top-left corner of the slide.
fn link(
    ui: &egui::Ui,
    painter: &egui::Painter,
    rect: Rect,
    slide_id: u32,
    label: &str,
    interactive: bool,
) -> bool {
    let galley = painter.layout_no_wrap(
        label.to_string(),
        FontId::proportional(14.0),
        Color32::WHITE,
    );
    let pill = Rect::from_min_size(
        rect.min + egui::vec2(20.0, 20.0),
        galley.rect.size() + egui::vec2(28.0, 16.0),
    );
    let sense = if interactive {
        Sense::click()
    } else {
        Sense::hover()
    };
    let response = ui.interact(pill, ui.id().with(("slide_link", slide_id)), sense);
    let alpha = if response.hovered() { 190 } else { 130 };
    if interactive && response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    painter.rect_filled(pill, pill.height() / 2.0, Color32::from_black_alpha(alpha));
    painter.galley(pill.min + egui::vec2(14.0, 8.0), galley, Color32::WHITE);
    interactive && response.clicked()
}
