// ui.rs - Draws the hexagon and turns clicks into taps

use std::f32::consts::FRAC_PI_3;

use eframe::egui;
use egui::{Align2, FontId, Pos2, Stroke, Vec2};
use hexgrid::geometry::{self, COLUMNS, Coord, MIDDLE_COLUMN};
use hexgrid::{Mode, Xorshift128Plus};
use tracing::{debug, warn};

use crate::config::AMOUNT_RANGE;
use crate::themes::THEMES;
use crate::ArrowPuzzle;

// Neighbouring columns overlap so the circles pack like a honeycomb
const COLUMN_STEP: f32 = 0.866;

/// Size of the painted board for a given cell diameter.
pub fn board_size(cell_size: f32) -> Vec2 {
    let tallest = geometry::length_of_column(MIDDLE_COLUMN) as f32;
    Vec2::new(
        cell_size * (1.0 + COLUMN_STEP * (COLUMNS - 1) as f32),
        cell_size * tallest,
    )
}

pub fn window_size(cell_size: f32) -> [f32; 2] {
    let board = board_size(cell_size);
    [board.x.max(560.0) + 40.0, board.y + 220.0]
}

/// Centre of a cell. Shorter columns are centred vertically against the
/// middle one, which is what gives the board its hexagon outline.
pub fn cell_centre(origin: Pos2, coord: Coord, cell_size: f32) -> Pos2 {
    let tallest = geometry::length_of_column(MIDDLE_COLUMN) as f32;
    let length = geometry::length_of_column(coord.column) as f32;
    let x = cell_size * (0.5 + COLUMN_STEP * coord.column as f32);
    let y = cell_size * (0.5 + coord.row as f32 + (tallest - length) / 2.0);
    origin + Vec2::new(x, y)
}

/// The cell whose circle contains `pos`, if any.
pub fn cell_at(origin: Pos2, pos: Pos2, cell_size: f32) -> Option<Coord> {
    let radius = cell_size / 2.0;
    geometry::coords().find(|&coord| cell_centre(origin, coord, cell_size).distance(pos) <= radius)
}

/// Unit vector for a cell value: 0 points up, each step turns 60 degrees clockwise.
pub fn arrow_direction(value: u8) -> Vec2 {
    let angle = f32::from(value) * FRAC_PI_3;
    // Screen y grows downwards.
    Vec2::new(angle.sin(), -angle.cos())
}

impl eframe::App for ArrowPuzzle {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Arrow Puzzle");

            // Move controls
            ui.horizontal(|ui| {
                ui.label("Mode:");
                ui.radio_value(&mut self.mode, Mode::Logical, "Logical");
                ui.radio_value(&mut self.mode, Mode::Free, "Free");

                ui.separator();

                ui.add(egui::Slider::new(&mut self.amount, AMOUNT_RANGE).text("Amount"));
            });

            // Board controls
            ui.horizontal(|ui| {
                if ui.button("⏹ Reset").clicked() {
                    self.engine.reset();
                }

                if ui.button("🎲 Random").clicked() {
                    self.engine.randomize();
                }

                if let Some((x, y)) = self.seed {
                    if ui.button(format!("🎲 Seeded ({x}, {y})")).clicked() {
                        self.engine.randomize_with(&mut Xorshift128Plus::new(x, y));
                    }
                }

                ui.separator();

                ui.label("Theme:");
                let mut selected = self.theme_index;
                egui::ComboBox::from_id_source("theme_selector")
                    .selected_text(THEMES.get(self.theme_index).map_or("", |t| t.name))
                    .show_ui(ui, |ui| {
                        for (i, theme) in THEMES.iter().enumerate() {
                            ui.selectable_value(&mut selected, i, theme.name);
                        }
                    });
                if selected != self.theme_index {
                    if let Err(err) = self.select_theme(selected) {
                        warn!(%err, "theme not applied");
                    }
                }

                ui.checkbox(&mut self.show_numbers, "Numbers");
            });

            ui.separator();

            ui.label(match self.mode {
                Mode::Logical => "Click a cell to turn it and its neighbours.",
                Mode::Free => "Click a cell to turn just that cell.",
            });

            ui.separator();

            self.draw_board(ui);

            ui.separator();

            ui.label(format!("Changes: {}", self.engine.revision()));
        });
    }
}

impl ArrowPuzzle {
    fn draw_board(&mut self, ui: &mut egui::Ui) {
        let size = self.cell_size;
        let (response, painter) = ui.allocate_painter(board_size(size), egui::Sense::click());
        let origin = response.rect.min;
        let radius = (size - self.border_width) / 2.0;

        for coord in geometry::coords() {
            let Ok(value) = self.engine.get(coord.column, coord.row) else {
                continue;
            };
            let centre = cell_centre(origin, coord, size);

            painter.circle_filled(centre, radius, self.palette.background_for(value));
            if self.border_width > 0.0 {
                painter.circle_stroke(centre, radius, Stroke::new(self.border_width, self.palette.stroke));
            }

            if self.show_numbers {
                painter.text(
                    centre,
                    Align2::CENTER_CENTER,
                    value.to_string(),
                    FontId::proportional(size * 0.5),
                    self.palette.text,
                );
            } else {
                let arrow = arrow_direction(value) * radius * 1.2;
                painter.arrow(centre - arrow * 0.5, arrow, Stroke::new(size / 12.0, self.palette.text));
            }
        }

        // Taps are applied after painting; the change notification repaints.
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                if let Some(coord) = cell_at(origin, pos, size) {
                    debug!(column = coord.column, row = coord.row, mode = %self.mode, "tap");
                    if let Err(err) = self.engine.tap(coord.column, coord.row, self.mode, self.amount) {
                        warn!(%err, "tap rejected");
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: f32 = 50.0;

    #[test]
    fn every_centre_hits_its_own_cell() {
        let origin = Pos2::new(10.0, 20.0);
        for coord in geometry::coords() {
            let centre = cell_centre(origin, coord, SIZE);
            assert_eq!(cell_at(origin, centre, SIZE), Some(coord));
        }
    }

    #[test]
    fn cells_stay_inside_the_board() {
        let origin = Pos2::ZERO;
        let rect = egui::Rect::from_min_size(origin, board_size(SIZE));
        for coord in geometry::coords() {
            let centre = cell_centre(origin, coord, SIZE);
            assert!(rect.shrink(SIZE / 2.0 - 0.01).contains(centre), "{coord:?} at {centre:?}");
        }
    }

    #[test]
    fn clicks_outside_the_hexagon_miss() {
        let origin = Pos2::ZERO;
        // Top-left corner of the bounding box is empty: column 0 starts lower.
        assert_eq!(cell_at(origin, Pos2::new(2.0, 2.0), SIZE), None);
        assert_eq!(cell_at(origin, Pos2::new(-30.0, 100.0), SIZE), None);
    }

    #[test]
    fn middle_column_is_centred_on_the_board() {
        let origin = Pos2::ZERO;
        let middle = cell_centre(origin, Coord::new(MIDDLE_COLUMN, 3), SIZE);
        let board = board_size(SIZE);
        assert!((middle.x - board.x / 2.0).abs() < 0.01);
        assert!((middle.y - board.y / 2.0).abs() < 0.01);
    }

    #[test]
    fn arrows_turn_sixty_degrees_per_value() {
        let close = |a: Vec2, b: Vec2| (a - b).length() < 1e-5;
        assert!(close(arrow_direction(0), Vec2::new(0.0, -1.0)));
        assert!(close(arrow_direction(3), Vec2::new(0.0, 1.0)));
        assert!(arrow_direction(1).x > 0.0 && arrow_direction(1).y < 0.0);
        assert!(arrow_direction(5).x < 0.0 && arrow_direction(5).y < 0.0);
        for value in 0..6 {
            assert!((arrow_direction(value).length() - 1.0).abs() < 1e-5);
        }
    }
}
