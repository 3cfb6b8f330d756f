// render.rs - Paints grids: egui render target for the window, text for the terminal

use egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};

use conway::{Grid, GridSize};

const MAX_BOX_SIZE: f32 = 15.0;
const SPACING: f32 = 0.5;

/// Render target for one grid size. Built once and reused every frame;
/// the app replaces it when the grid size changes.
#[derive(Debug, Clone)]
pub struct GridView {
    size: GridSize,
    box_size: f32,
    pub live_color: Color32,
    pub dead_color: Color32,
}

impl GridView {
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            box_size: MAX_BOX_SIZE,
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Shrinks the cells until the whole grid fits in `available`, returning
    /// the total painted size.
    pub fn layout(&mut self, available: Vec2) -> Vec2 {
        let fit_x = (available.x + SPACING) / self.size.width() as f32 - SPACING;
        let fit_y = (available.y + SPACING) / self.size.height() as f32 - SPACING;
        self.box_size = fit_x.min(fit_y).clamp(1.0, MAX_BOX_SIZE);
        self.total_size()
    }

    pub fn total_size(&self) -> Vec2 {
        let pitch = self.box_size + SPACING;
        Vec2::new(
            pitch * self.size.width() as f32 - SPACING,
            pitch * self.size.height() as f32 - SPACING,
        )
    }

    pub fn cell_rect(&self, origin: Pos2, x: usize, y: usize) -> Rect {
        let pitch = self.box_size + SPACING;
        Rect::from_min_size(
            origin + Vec2::new(x as f32 * pitch, y as f32 * pitch),
            Vec2::splat(self.box_size),
        )
    }

    /// Maps a pointer position to the cell under it. Gaps between cells map to nothing.
    pub fn cell_at(&self, origin: Pos2, pos: Pos2) -> Option<(usize, usize)> {
        let offset = pos - origin;
        if offset.x < 0.0 || offset.y < 0.0 {
            return None;
        }
        let pitch = self.box_size + SPACING;
        let (x, y) = ((offset.x / pitch) as usize, (offset.y / pitch) as usize);
        if x >= self.size.width() || y >= self.size.height() {
            return None;
        }
        self.cell_rect(origin, x, y).contains(pos).then_some((x, y))
    }

    pub fn paint(&self, painter: &Painter, origin: Pos2, grid: &Grid) {
        painter.rect_filled(
            Rect::from_min_size(origin, self.total_size()),
            0.0,
            Color32::BLACK,
        );
        for (y, row) in grid.rows().enumerate() {
            for (x, &alive) in row.iter().enumerate() {
                let rect = self.cell_rect(origin, x, y);
                let color = if alive { self.live_color } else { self.dead_color };
                painter.rect_filled(rect, 1.0, color);
                painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
            }
        }
    }
}

/// One frame of terminal output: a status line, then the board.
pub fn render_text(generation: u64, grid: &Grid) -> String {
    format!(
        "generation {generation}, population {}\n{grid}",
        grid.population()
    )
}
