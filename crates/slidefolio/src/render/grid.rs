use eframe::egui;

/// Cards are 16:9.
const CARD_ASPECT: f32 = 9.0 / 16.0;

/// Column count for the card grid: one column on narrow windows, two on
/// medium, three on wide.
pub fn columns_for_width(width: f32) -> usize {
    if width < 640.0 {
        1
    } else if width < 1024.0 {
        2
    } else {
        3
    }
}

/// Layout of one section's card grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardGrid {
    pub columns: usize,
    pub cell_width: f32,
    pub cell_height: f32,
    pub gap: f32,
}

impl CardGrid {
    pub fn new(width: f32, gap: f32) -> Self {
        let columns = columns_for_width(width);
        let cell_width = ((width - gap * (columns as f32 - 1.0)) / columns as f32).max(0.0);
        Self {
            columns,
            cell_width,
            cell_height: cell_width * CARD_ASPECT,
            gap,
        }
    }

    pub fn rows(&self, count: usize) -> usize {
        count.div_ceil(self.columns)
    }

    pub fn height(&self, count: usize) -> f32 {
        let rows = self.rows(count);
        if rows == 0 {
            return 0.0;
        }
        rows as f32 * self.cell_height + (rows as f32 - 1.0) * self.gap
    }

    pub fn cell_rect(&self, index: usize, origin: egui::Pos2) -> egui::Rect {
        let col = index % self.columns;
        let row = index / self.columns;
        let x = origin.x + col as f32 * (self.cell_width + self.gap);
        let y = origin.y + row as f32 * (self.cell_height + self.gap);
        egui::Rect::from_min_size(
            egui::pos2(x, y),
            egui::vec2(self.cell_width, self.cell_height),
        )
    }
}

/// Largest 16:9 rect centered inside `outer`.
pub fn fit_aspect(outer: egui::Rect) -> egui::Rect {
    let width = outer.width().min(outer.height() / CARD_ASPECT);
    egui::Rect::from_center_size(outer.center(), egui::vec2(width, width * CARD_ASPECT))
}

/// Rect covering `area` with an image of `size`, centered; may overflow.
pub fn cover_rect(size: egui::Vec2, area: egui::Rect) -> egui::Rect {
    if size.x <= 0.0 || size.y <= 0.0 {
        return area;
    }
    let scale = (area.width() / size.x).max(area.height() / size.y);
    egui::Rect::from_center_size(area.center(), size * scale)
}
