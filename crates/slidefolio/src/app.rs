use eframe::egui;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::catalog::{Catalog, CatalogInfo, Section, SlideId, load};
use crate::cli::LaunchOptions;
use crate::config::Config;
use crate::render::card::{self, CardView};
use crate::render::grid::CardGrid;
use crate::render::image_cache::ImageCache;
use crate::render::{modal, paint};
use crate::theme::Theme;
use crate::viewer::Viewer;
use crate::viewer::navigator::Event;
use crate::watch::CatalogWatcher;

const CONTENT_MAX_WIDTH: f32 = 1152.0;
const PAGE_MARGIN: f32 = 24.0;
const GRID_GAP: f32 = 24.0;
const HERO_HEIGHT: f32 = 360.0;
const TOAST_SECONDS: f32 = 2.0;

struct Toast {
    message: String,
    start: Instant,
}

impl Toast {
    fn new(message: String) -> Self {
        Self {
            message,
            start: Instant::now(),
        }
    }

    fn opacity(&self) -> f32 {
        let elapsed = self.start.elapsed().as_secs_f32();
        let fade_start = TOAST_SECONDS - 0.5;
        if elapsed < fade_start {
            1.0
        } else if elapsed < TOAST_SECONDS {
            1.0 - (elapsed - fade_start) / (TOAST_SECONDS - fade_start)
        } else {
            0.0
        }
    }

    fn is_expired(&self) -> bool {
        self.start.elapsed().as_secs_f32() >= TOAST_SECONDS
    }
}

struct GalleryApp {
    catalog: Catalog,
    catalog_path: Option<PathBuf>,
    cards: HashMap<SlideId, CardView>,
    viewer: Viewer,
    theme: Theme,
    image_cache: ImageCache,
    watcher: Option<CatalogWatcher>,
    toast: Option<Toast>,
}

impl GalleryApp {
    fn new(
        catalog: Catalog,
        catalog_path: Option<PathBuf>,
        config: &Config,
        watcher: Option<CatalogWatcher>,
    ) -> Self {
        let base_path = media_base(config, catalog_path.as_deref());
        let image_cache = ImageCache::new(base_path);
        preload_images(&image_cache, &catalog);

        Self {
            cards: card_views(&catalog),
            viewer: Viewer::new(catalog.flatten(), config.navigator()),
            catalog,
            catalog_path,
            theme: Theme::from_name(config.theme_name()),
            image_cache,
            watcher,
            toast: None,
        }
    }

    fn open(&mut self, id: SlideId, now: Instant) {
        tracing::debug!(id, "open slide");
        self.viewer.dispatch(Event::Open(id), now);
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.toast = Some(Toast::new(format!("Theme: {}", self.theme.name)));
    }

    /// Re-read the catalog file. On failure the current catalog stays.
    fn reload_catalog(&mut self, now: Instant) {
        let Some(path) = self.catalog_path.clone() else {
            return;
        };
        match load::from_path(&path) {
            Ok(catalog) => {
                tracing::info!(slides = catalog.slide_count(), "catalog reloaded");
                self.viewer.replace_slides(catalog.flatten(), now);
                self.cards = card_views(&catalog);
                self.image_cache.clear();
                preload_images(&self.image_cache, &catalog);
                self.catalog = catalog;
                self.toast = Some(Toast::new("Catalog reloaded".to_string()));
            }
            Err(e) => {
                tracing::warn!("Failed to reload catalog: {e:#}");
                self.toast = Some(Toast::new(format!("Catalog error: {e}")));
            }
        }
    }
}

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        if self.watcher.as_ref().is_some_and(|w| w.poll()) {
            self.reload_catalog(now);
        }

        // Collect viewport commands to send AFTER the input closure
        // (sending inside ctx.input() causes RwLock deadlock)
        let mut viewport_cmds: Vec<egui::ViewportCommand> = Vec::new();
        let mut viewer_keys: Vec<egui::Key> = Vec::new();
        let mut toggle_theme = false;

        ctx.input(|i| {
            for event in &i.events {
                let egui::Event::Key {
                    key,
                    pressed: true,
                    repeat,
                    ..
                } = event
                else {
                    continue;
                };
                match route_key(*key, *repeat) {
                    Some(KeyRoute::Quit) => viewport_cmds.push(egui::ViewportCommand::Close),
                    Some(KeyRoute::Fullscreen) => {
                        viewport_cmds.push(egui::ViewportCommand::Fullscreen(
                            !i.viewport().fullscreen.unwrap_or(false),
                        ))
                    }
                    Some(KeyRoute::Theme) => toggle_theme = true,
                    Some(KeyRoute::Viewer(key)) => viewer_keys.push(key),
                    None => {}
                }
            }
        });

        for cmd in viewport_cmds {
            ctx.send_viewport_cmd(cmd);
        }
        if toggle_theme {
            self.toggle_theme();
        }
        for key in viewer_keys {
            self.viewer.press(key, now);
        }

        self.viewer.tick(now);

        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }

        let bg = self.theme.background;
        let mut activated: Option<SlideId> = None;
        let mut screen = egui::Rect::ZERO;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                screen = ui.max_rect();
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.spacing_mut().item_spacing = egui::vec2(0.0, 0.0);
                        draw_hero(ui, &self.catalog.info, &self.theme);
                        ui.vertical_centered(|ui| {
                            let width =
                                (ui.available_width() - PAGE_MARGIN * 2.0).min(CONTENT_MAX_WIDTH);
                            for section in self.catalog.sections() {
                                if let Some(id) = self.draw_section(ui, section, width) {
                                    activated = Some(id);
                                }
                            }
                        });
                        ui.add_space(48.0);
                        draw_footer(ui, &self.catalog.info, &self.theme);
                    });
            });

        if let Some(id) = activated {
            self.open(id, now);
        }

        let response = modal::show(
            ctx,
            screen,
            &self.viewer,
            &self.theme,
            &self.image_cache,
            now,
        );
        for event in response.events() {
            self.viewer.dispatch(event, now);
        }
        if let Some(url) = response.open_url {
            tracing::debug!(%url, "opening media");
            ctx.open_url(egui::OpenUrl::new_tab(url));
        }

        if let Some(ref toast) = self.toast {
            draw_toast(ctx, screen, toast, &self.theme);
            ctx.request_repaint();
        }

        if self.viewer.dismissal().is_some() {
            ctx.request_repaint();
        } else if let Some(deadline) = self.viewer.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }
}

impl GalleryApp {
    /// One section: accent bar, heading and the card grid. Returns the id of
    /// an activated card.
    fn draw_section(&self, ui: &mut egui::Ui, section: &Section, width: f32) -> Option<SlideId> {
        let accent = Theme::accent(&section.color);
        ui.add_space(56.0);

        let (header, _) = ui.allocate_exact_size(egui::vec2(width, 36.0), egui::Sense::hover());
        let bar = egui::Rect::from_min_size(header.min, egui::vec2(4.0, header.height()));
        ui.painter().rect_filled(bar, 2.0, accent);
        ui.painter().text(
            egui::pos2(bar.right() + 12.0, header.center().y),
            egui::Align2::LEFT_CENTER,
            &section.name,
            egui::FontId::proportional(self.theme.h2_size),
            self.theme.heading_color,
        );
        let count = section.slides.len();
        ui.painter().text(
            egui::pos2(header.right(), header.center().y),
            egui::Align2::RIGHT_CENTER,
            if count == 1 {
                "1 slide".to_string()
            } else {
                format!("{count} slides")
            },
            egui::FontId::proportional(self.theme.small_size),
            Theme::with_opacity(self.theme.foreground, 0.6),
        );
        ui.add_space(24.0);

        let grid = CardGrid::new(width, GRID_GAP);
        let (area, _) = ui.allocate_exact_size(
            egui::vec2(width, grid.height(section.slides.len())),
            egui::Sense::hover(),
        );

        let mut activated = None;
        for (index, slide) in section.slides.iter().enumerate() {
            let rect = grid.cell_rect(index, area.min);
            if !ui.is_rect_visible(rect) {
                continue;
            }
            let Some(view) = self.cards.get(&slide.id) else {
                continue;
            };
            if let Some(id) = card::draw(
                ui,
                rect,
                slide,
                view,
                accent,
                &self.theme,
                &self.image_cache,
            ) {
                activated = Some(id);
            }
        }
        activated
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyRoute {
    Quit,
    Fullscreen,
    Theme,
    Viewer(egui::Key),
}

/// Where a key-down goes. Auto-repeats reach the viewer, which rate-limits
/// them itself, but never retrigger the window toggles.
fn route_key(key: egui::Key, repeat: bool) -> Option<KeyRoute> {
    match key {
        egui::Key::Q | egui::Key::F | egui::Key::D if repeat => None,
        egui::Key::Q => Some(KeyRoute::Quit),
        egui::Key::F => Some(KeyRoute::Fullscreen),
        egui::Key::D => Some(KeyRoute::Theme),
        key => Some(KeyRoute::Viewer(key)),
    }
}

fn card_views(catalog: &Catalog) -> HashMap<SlideId, CardView> {
    catalog
        .sections()
        .iter()
        .flat_map(|s| s.slides.iter())
        .map(|slide| (slide.id, CardView::for_slide(slide)))
        .collect()
}

fn preload_images(cache: &ImageCache, catalog: &Catalog) {
    let references: Vec<&str> = catalog
        .sections()
        .iter()
        .flat_map(|s| s.slides.iter())
        .filter_map(|slide| slide.image.as_deref())
        .collect();
    cache.preload(references);
}

/// Where relative media references resolve: the configured base, else the
/// catalog file's directory, else the working directory.
fn media_base(config: &Config, catalog_path: Option<&Path>) -> PathBuf {
    if let Some(base) = config.media_base() {
        return base.to_path_buf();
    }
    catalog_path
        .and_then(Path::parent)
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn draw_hero(ui: &mut egui::Ui, info: &CatalogInfo, theme: &Theme) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), HERO_HEIGHT),
        egui::Sense::hover(),
    );
    let painter = ui.painter_at(rect);
    paint::horizontal_gradient(&painter, rect, theme.hero_start, theme.hero_end);

    let white = egui::Color32::WHITE;
    let mut y = rect.top() + 72.0;
    let x = rect.center().x;

    if let Some(kicker) = &info.kicker {
        let r = painter.text(
            egui::pos2(x, y),
            egui::Align2::CENTER_TOP,
            kicker,
            egui::FontId::proportional(theme.body_size * 1.25),
            Theme::with_opacity(white, 0.9),
        );
        y = r.bottom() + 8.0;
    }
    let title = info.title.as_deref().unwrap_or("slidefolio");
    let r = painter.text(
        egui::pos2(x, y),
        egui::Align2::CENTER_TOP,
        title,
        egui::FontId::proportional(theme.hero_size),
        white,
    );
    y = r.bottom() + 16.0;

    if let Some(tagline) = &info.tagline {
        let galley = painter.layout(
            tagline.clone(),
            egui::FontId::proportional(theme.body_size * 1.1),
            Theme::with_opacity(white, 0.9),
            (rect.width() - PAGE_MARGIN * 2.0).min(640.0),
        );
        let pos = egui::pos2(x - galley.rect.width() / 2.0, y);
        y += galley.rect.height() + 24.0;
        painter.galley(pos, galley, white);
    }

    if info.chips.is_empty() {
        return;
    }
    let font = egui::FontId::proportional(theme.small_size);
    let galleys: Vec<_> = info
        .chips
        .iter()
        .map(|chip| painter.layout_no_wrap(chip.clone(), font.clone(), white))
        .collect();
    let pad = egui::vec2(16.0, 8.0);
    let gap = 12.0;
    let total: f32 = galleys
        .iter()
        .map(|g| g.rect.width() + pad.x * 2.0)
        .sum::<f32>()
        + gap * (galleys.len() - 1) as f32;
    let mut left = x - total / 2.0;
    for galley in galleys {
        let size = galley.rect.size() + pad * 2.0;
        let chip = egui::Rect::from_min_size(egui::pos2(left, y), size);
        painter.rect_filled(chip, size.y / 2.0, Theme::with_opacity(white, 0.2));
        painter.galley(chip.min + pad, galley, white);
        left += size.x + gap;
    }
}

fn draw_footer(ui: &mut egui::Ui, info: &CatalogInfo, theme: &Theme) {
    let width = ui.available_width();
    let column = (width - PAGE_MARGIN * 2.0).min(CONTENT_MAX_WIDTH);
    let text_color = theme.footer_foreground;
    let heading = egui::FontId::proportional(theme.body_size * 1.1);
    let body = egui::FontId::proportional(theme.small_size);

    let mut blocks: Vec<(String, String)> = Vec::new();
    if let Some(about) = &info.about {
        blocks.push((info.title.clone().unwrap_or_default(), about.clone()));
    }
    if !info.contact.is_empty() {
        blocks.push(("Contact".to_string(), info.contact.join("\n")));
    }
    if !info.hours.is_empty() {
        let mut lines = info.hours.join("\n");
        if let Some(notice) = &info.notice {
            lines.push_str(&format!("\n\n{notice}"));
        }
        blocks.push(("Hours".to_string(), lines));
    }

    let painter = ui.painter().clone();
    let block_width = if blocks.is_empty() {
        column
    } else {
        (column - GRID_GAP * (blocks.len() - 1) as f32) / blocks.len() as f32
    };
    let laid_out: Vec<_> = blocks
        .into_iter()
        .map(|(title, text)| {
            (
                painter.layout(title, heading.clone(), theme.heading_color, block_width),
                painter.layout(text, body.clone(), text_color, block_width),
            )
        })
        .collect();
    let blocks_height = laid_out
        .iter()
        .map(|(t, b)| t.rect.height() + 12.0 + b.rect.height())
        .fold(0.0, f32::max);
    let copyright_height = if info.copyright.is_some() { 48.0 } else { 0.0 };

    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(width, blocks_height + copyright_height + 96.0),
        egui::Sense::hover(),
    );
    painter.rect_filled(rect, 0.0, theme.footer_background);

    let left = rect.center().x - column / 2.0;
    let top = rect.top() + 48.0;
    for (i, (title, text)) in laid_out.into_iter().enumerate() {
        let x = left + i as f32 * (block_width + GRID_GAP);
        let title_height = title.rect.height();
        painter.galley(egui::pos2(x, top), title, theme.heading_color);
        painter.galley(egui::pos2(x, top + title_height + 12.0), text, text_color);
    }

    if let Some(copyright) = &info.copyright {
        let y = top + blocks_height + 24.0;
        painter.line_segment(
            [egui::pos2(left, y), egui::pos2(left + column, y)],
            egui::Stroke::new(1.0, Theme::with_opacity(text_color, 0.3)),
        );
        painter.text(
            egui::pos2(rect.center().x, y + 16.0),
            egui::Align2::CENTER_TOP,
            copyright,
            body,
            Theme::with_opacity(text_color, 0.7),
        );
    }
}

fn draw_toast(ctx: &egui::Context, screen: egui::Rect, toast: &Toast, theme: &Theme) {
    let opacity = toast.opacity();
    if opacity <= 0.0 {
        return;
    }
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Tooltip,
        egui::Id::new("toast"),
    ));
    let toast_color = Theme::with_opacity(theme.footer_foreground, opacity);
    let toast_bg = Theme::with_opacity(theme.footer_background, opacity * 0.9);
    let galley = painter.layout_no_wrap(
        toast.message.clone(),
        egui::FontId::proportional(18.0),
        toast_color,
    );
    let padding = 16.0;
    let toast_rect = egui::Rect::from_min_size(
        egui::pos2(
            screen.center().x - galley.rect.width() / 2.0 - padding,
            screen.bottom() - 80.0,
        ),
        egui::vec2(
            galley.rect.width() + padding * 2.0,
            galley.rect.height() + padding * 2.0,
        ),
    );
    painter.rect_filled(toast_rect, 8.0, toast_bg);
    let text_pos = egui::pos2(toast_rect.left() + padding, toast_rect.top() + padding);
    painter.galley(text_pos, galley, toast_color);
}

pub fn run(options: LaunchOptions) -> anyhow::Result<()> {
    let config = Config::load_or_default();
    let catalog = match &options.catalog {
        Some(path) => load::from_path(path)?,
        None => Catalog::builtin()?,
    };

    if let Some(id) = options.slide {
        if catalog.locate(id).is_none() {
            tracing::warn!("slide {id} is not in the catalog, starting closed");
        }
    }

    let title = catalog
        .info
        .title
        .clone()
        .unwrap_or_else(|| "slidefolio".to_string());
    let windowed = options.windowed || !config.fullscreen();

    let viewport = if windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title(&title)
    } else {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(&title)
    };

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| {
            let watcher = match (&options.catalog, options.watch) {
                (Some(path), true) => {
                    let ctx = cc.egui_ctx.clone();
                    Some(CatalogWatcher::new(path, move || ctx.request_repaint())?)
                }
                _ => None,
            };
            let mut app = GalleryApp::new(catalog, options.catalog.clone(), &config, watcher);
            if let Some(id) = options.slide {
                app.open(id, Instant::now());
            }
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
