use eframe::egui::{self, Color32, FontId, Pos2, Rect, Sense, Stroke, StrokeKind};

use crate::catalog::{Media, Slide, SlideId};
use crate::render::image_cache::ImageCache;
use crate::render::{grid, paint};
use crate::theme::{self, Theme};

/// Body text longer than this is cut on a text card.
pub const EXCERPT_CHARS: usize = 96;
const CALL_TO_ACTION: &str = "View \u{203a}";
const CORNER_RADIUS: f32 = 8.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    Image(String),
    /// Thumbnail address of a remote video.
    Thumbnail(String),
    /// A local video shown muted as its own preview.
    MutedVideo(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    Play,
    Image,
}

/// How a card presents its slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardView {
    Media {
        preview: Preview,
        affordance: Affordance,
    },
    Text {
        excerpt: String,
    },
}

impl CardView {
    pub fn for_slide(slide: &Slide) -> Self {
        match &slide.media {
            Media::Image(path) => CardView::Media {
                preview: Preview::Image(path.clone()),
                affordance: Affordance::Image,
            },
            Media::LocalVideo(path) => CardView::Media {
                preview: Preview::MutedVideo(path.clone()),
                affordance: Affordance::Play,
            },
            media @ Media::RemoteVideo { .. } => match media.thumbnail_url() {
                Some(url) => CardView::Media {
                    preview: Preview::Thumbnail(url),
                    affordance: Affordance::Play,
                },
                None => CardView::text(slide),
            },
            Media::None => CardView::text(slide),
        }
    }

    fn text(slide: &Slide) -> Self {
        CardView::Text {
            excerpt: excerpt(&slide.body, EXCERPT_CHARS),
        }
    }
}

/// Cut `body` to at most `max_chars` characters, ending in an ellipsis when cut.
pub fn excerpt(body: &str, max_chars: usize) -> String {
    let body = body.trim();
    if body.chars().count() <= max_chars {
        return body.to_string();
    }
    let mut cut: String = body.chars().take(max_chars.saturating_sub(1)).collect();
    cut.truncate(cut.trim_end().len());
    cut.push('\u{2026}');
    cut
}

/// Draw one card. Returns the slide's id when the card was clicked.
#[allow(clippy::too_many_arguments)]
pub fn draw(
    ui: &egui::Ui,
    rect: Rect,
    slide: &Slide,
    view: &CardView,
    accent: Color32,
    theme: &Theme,
    image_cache: &ImageCache,
) -> Option<SlideId> {
    let id = ui.id().with(("card", slide.id));
    let response = ui.interact(rect, id, Sense::click());
    let hover = ui
        .ctx()
        .animate_bool_with_time(id.with("hover"), response.hovered(), 0.3);
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    let rect = rect.expand2(rect.size() * 0.025 * hover);
    let painter = ui.painter();

    // Shadow
    let shadow_alpha = 0.12 + 0.10 * hover;
    painter.rect_filled(
        rect.translate(egui::vec2(0.0, 3.0 + 3.0 * hover)),
        CORNER_RADIUS,
        Color32::from_rgba_unmultiplied(0, 0, 0, (shadow_alpha * 255.0) as u8),
    );

    match view {
        CardView::Media {
            preview,
            affordance,
        } => draw_media_card(ui, rect, slide, preview, *affordance, accent, theme, image_cache),
        CardView::Text { excerpt } => draw_text_card(ui, rect, slide, excerpt, accent, theme),
    }

    if response.has_focus() {
        ui.painter().rect_stroke(
            rect,
            CORNER_RADIUS,
            Stroke::new(2.0, Theme::with_opacity(theme.muted, 0.5)),
            StrokeKind::Outside,
        );
    }

    response.clicked().then_some(slide.id)
}

#[allow(clippy::too_many_arguments)]
fn draw_media_card(
    ui: &egui::Ui,
    rect: Rect,
    slide: &Slide,
    preview: &Preview,
    affordance: Affordance,
    accent: Color32,
    theme: &Theme,
    image_cache: &ImageCache,
) {
    let painter = ui.painter().with_clip_rect(rect);

    let texture = match preview {
        Preview::Image(path) => image_cache.get_or_load(ui.ctx(), path),
        Preview::Thumbnail(_) | Preview::MutedVideo(_) => None,
    };
    match texture {
        Some(texture) => {
            let draw_rect = grid::cover_rect(texture.size_vec2(), rect);
            let uv = Rect::from_min_max(Pos2::ZERO, egui::pos2(1.0, 1.0));
            painter.rect_filled(rect, CORNER_RADIUS, Color32::BLACK);
            painter.image(texture.id(), draw_rect, uv, Color32::WHITE);
        }
        None => paint::poster(&painter, rect, accent, CORNER_RADIUS),
    }

    // Caption over a darkened bottom band
    let band = Rect::from_min_max(egui::pos2(rect.left(), rect.bottom() - 40.0), rect.max);
    paint::vertical_fade(&painter, band, Color32::from_black_alpha(150));
    let galley = painter.layout(
        slide.title.clone(),
        FontId::proportional(theme.body_size),
        Color32::WHITE,
        rect.width() - 24.0,
    );
    let pos = egui::pos2(rect.left() + 12.0, rect.bottom() - 12.0 - galley.rect.height());
    painter.galley(pos, galley, Color32::WHITE);

    match affordance {
        Affordance::Play => paint::play_badge(&painter, rect.center(), 24.0, 1.0),
        Affordance::Image => {
            let corner = egui::pos2(rect.right() - 22.0, rect.top() + 22.0);
            paint::image_badge(&painter, corner, 12.0);
        }
    }
}

fn draw_text_card(
    ui: &egui::Ui,
    rect: Rect,
    slide: &Slide,
    excerpt: &str,
    accent: Color32,
    theme: &Theme,
) {
    let painter = ui.painter().with_clip_rect(rect);
    let padding = 16.0;

    let title = painter.layout(
        slide.title.clone(),
        FontId::proportional(theme.body_size),
        theme.card_title,
        rect.width() - padding * 2.0,
    );
    let band_height = title.rect.height() + 16.0;
    let band = Rect::from_min_max(rect.min, egui::pos2(rect.right(), rect.top() + band_height));
    let body = Rect::from_min_max(egui::pos2(rect.left(), band.bottom()), rect.max);

    painter.rect_filled(
        body,
        egui::CornerRadius {
            nw: 0,
            ne: 0,
            sw: CORNER_RADIUS as u8,
            se: CORNER_RADIUS as u8,
        },
        theme::tint(accent, 0.2),
    );
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
        egui::pos2(band.left() + padding, band.top() + 8.0),
        title,
        theme.card_title,
    );

    let mut job = egui::text::LayoutJob::simple(
        excerpt.to_string(),
        FontId::proportional(theme.small_size),
        theme.card_body,
        body.width() - padding * 2.0,
    );
    job.wrap.max_rows = 3;
    let text = painter.layout_job(job);
    painter.galley(
        egui::pos2(body.left() + padding, body.top() + 12.0),
        text,
        theme.card_body,
    );

    let cta = painter.layout_no_wrap(
        CALL_TO_ACTION.to_string(),
        FontId::proportional(theme.small_size),
        theme::lerp_color(accent, theme.card_title, 0.6),
    );
    let pos = egui::pos2(
        body.right() - padding - cta.rect.width(),
        body.bottom() - 10.0 - cta.rect.height(),
    );
    painter.galley(pos, cta, theme.card_title);
}
