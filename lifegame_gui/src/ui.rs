// ui.rs - egui controls and canvas display

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Color32, TextureOptions, Vec2};
use lifegame::PATTERNS;

use crate::LifegameApp;

impl eframe::App for LifegameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-step on the configured cadence while running.
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.game.step();
            self.last_update = Instant::now();
        }

        // Re-upload the pixel buffer only when the engine painted into it.
        if self.game.surface_mut().take_dirty() || self.texture.is_none() {
            let image = self.game.surface().image().clone();
            match &mut self.texture {
                Some(texture) => texture.set(image, TextureOptions::NEAREST),
                None => {
                    self.texture =
                        Some(ctx.load_texture("lifegame-canvas", image, TextureOptions::NEAREST));
                }
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Lifegame");

            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.last_update = Instant::now();
                    }
                }

                if ui.button("⏭ Step").clicked() {
                    self.is_running = false;
                    self.game.step();
                }

                if ui.button("🎲 Reseed").clicked() {
                    self.is_running = false;
                    self.game.reseed();
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

                if ui.button("Apply").clicked() {
                    self.is_running = false;
                    self.game.apply_pattern(&PATTERNS[self.selected_pattern]);
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.game.generation()));
            });

            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis() as f32;
                if ui
                    .add(egui::Slider::new(&mut speed, 1.0..=60.0).suffix(" gen/sec"))
                    .changed()
                {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }
            });

            ui.label("Click cells to toggle them while paused.");
            ui.separator();

            if let Some(texture) = &self.texture {
                let [width, height] = self.game.surface().size();
                let size = Vec2::new(width as f32, height as f32);
                let (response, painter) = ui.allocate_painter(size, egui::Sense::click());
                painter.image(
                    texture.id(),
                    response.rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    Color32::WHITE,
                );

                if !self.is_running && response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        let rel = pos - response.rect.min;
                        let cell = self.game.cell_size() as f32;
                        let col = (rel.x.max(0.0) / cell) as usize + 1;
                        let row = (rel.y.max(0.0) / cell) as usize + 1;
                        // Out-of-range clicks are ignored by the engine.
                        self.game.toggle_cell(row, col);
                    }
                }
            }

            ui.separator();

            let live_cells = self.game.live_count();
            let total = self.game.rows() * self.game.cols();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {live_cells}"));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!(
                    "Population: {:.1}%",
                    live_cells as f32 / total as f32 * 100.0
                ));
            });
        });

        // Keep the animation moving while running.
        if self.is_running {
            ctx.request_repaint();
        }
    }
}
