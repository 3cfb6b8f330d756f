// ui.rs - egui front end: controls, board and statistics

use std::time::Instant;

use eframe::egui;
use conway::PATTERNS;

use crate::app::GameOfLife;
use crate::scheduler::{MAX_SPEED, MIN_SPEED};

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.tick(Instant::now()) {
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_running() { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.toggle_running(Instant::now());
                }

                if ui.button("⏹ Clear").clicked() {
                    self.clear_grid();
                }

                if ui.button("🎲 Random").clicked() {
                    self.apply_random_pattern();
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.apply_selected_pattern();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.generation()));
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = self.speed;
                if ui
                    .add(egui::Slider::new(&mut speed, MIN_SPEED..=MAX_SPEED).suffix(" gen/sec"))
                    .changed()
                {
                    self.set_speed(speed, Instant::now());
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.view.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.view.dead_color);
            });

            ui.separator();

            ui.label("Edges wrap around. Click cells to toggle them while paused.");

            ui.separator();

            // Leave room for the statistics row
            let available = ui.available_size() - egui::vec2(0.0, 30.0);
            let total_size = self.view.layout(available);
            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
            let origin = response.rect.min;
            self.view.paint(&painter, origin, self.grid());

            if !self.is_running() && response.clicked() {
                if let Some(cell) = response
                    .interact_pointer_pos()
                    .and_then(|pos| self.view.cell_at(origin, pos))
                {
                    self.toggle_cell(cell.0, cell.1);
                }
            }

            ui.separator();

            let size = self.grid().size();
            let live_cells = self.grid().population();
            let total = size.cell_count();
            ui.horizontal(|ui| {
                ui.label(format!("Grid: {size}"));
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!(
                    "Population: {:.1}%",
                    (live_cells as f32 / total as f32) * 100.0
                ));
            });
        });

        if let Some(wait) = self.time_until_due(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}
