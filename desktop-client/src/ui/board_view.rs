use eframe::egui;
use tictactoe_common::games::tictactoe::{GameRenderer, GameStatus, GameView, Mark, SoundCue};

use crate::audio::AudioCues;
use crate::config::Theme;
use super::theme::{BoardPalette, board_palette};

const BOARD_PADDING: f32 = 16.0;
const STATUS_HEIGHT: f32 = 48.0;
const MIN_CELL_SIZE: f32 = 30.0;
const MAX_CELL_SIZE: f32 = 120.0;
const LINE_WIDTH: f32 = 2.0;

/// Draws a session into an egui `Ui` and reports the cell the user clicked.
pub struct EguiBoardRenderer<'a> {
    ui: &'a mut egui::Ui,
    audio: &'a mut AudioCues,
    palette: BoardPalette,
    clicked_cell: Option<usize>,
}

impl<'a> EguiBoardRenderer<'a> {
    pub fn new(ui: &'a mut egui::Ui, audio: &'a mut AudioCues, theme: Theme) -> Self {
        Self {
            ui,
            audio,
            palette: board_palette(theme),
            clicked_cell: None,
        }
    }

    pub fn clicked_cell(&self) -> Option<usize> {
        self.clicked_cell
    }

    fn render_status(&mut self, view: &GameView<'_>) {
        let text = egui::RichText::new(&view.status_text).size(22.0).strong();
        self.ui.vertical_centered(|ui| match view.status {
            GameStatus::InProgress if view.ai_move_pending => {
                ui.horizontal(|ui| {
                    ui.label(text);
                    ui.spinner();
                });
            }
            GameStatus::InProgress => {
                ui.label(text);
            }
            GameStatus::Won(_) => {
                ui.colored_label(egui::Color32::from_rgb(60, 200, 90), text);
            }
            GameStatus::Draw => {
                ui.colored_label(egui::Color32::from_rgb(230, 180, 60), text);
            }
        });
    }

    fn render_board(&mut self, view: &GameView<'_>) {
        let size = view.board.size();
        let available = self.ui.available_size();
        let cell_size = calculate_cell_size(available.x, available.y - STATUS_HEIGHT, size);
        let board_extent = cell_size * size as f32;

        let mut clicked = None;
        self.ui.vertical_centered(|ui| {
            let (rect, response) =
                ui.allocate_exact_size(egui::vec2(board_extent, board_extent), egui::Sense::click());
            let painter = ui.painter_at(rect);

            painter.rect_filled(rect, 0.0, self.palette.background);

            if let Some(pattern) = view.winning_pattern() {
                for &index in pattern {
                    painter.rect_filled(cell_rect(rect, cell_size, size, index), 0.0, self.palette.winner);
                }
            }

            let accepts_input = !view.status.is_terminal() && !view.ai_move_pending;
            if accepts_input
                && let Some(hover_pos) = response.hover_pos()
                && let Some(index) = cell_at(rect, cell_size, size, hover_pos)
                && view.board.get(index) == Some(Mark::Empty)
            {
                painter.rect_filled(cell_rect(rect, cell_size, size, index), 0.0, self.palette.hover);
            }

            for i in 0..=size {
                let offset = i as f32 * cell_size;
                let stroke = egui::Stroke::new(LINE_WIDTH, self.palette.grid);
                painter.line_segment(
                    [
                        egui::pos2(rect.left() + offset, rect.top()),
                        egui::pos2(rect.left() + offset, rect.bottom()),
                    ],
                    stroke,
                );
                painter.line_segment(
                    [
                        egui::pos2(rect.left(), rect.top() + offset),
                        egui::pos2(rect.right(), rect.top() + offset),
                    ],
                    stroke,
                );
            }

            for (index, mark) in view.board.cells().iter().enumerate() {
                let cell = cell_rect(rect, cell_size, size, index);
                match mark {
                    Mark::X => draw_x(&painter, cell, self.palette.x),
                    Mark::O => draw_o(&painter, cell, self.palette.o),
                    Mark::Empty => {}
                }
            }

            if response.clicked()
                && let Some(pointer) = response.interact_pointer_pos()
            {
                clicked = cell_at(rect, cell_size, size, pointer);
            }
        });
        self.clicked_cell = clicked;
    }
}

impl GameRenderer for EguiBoardRenderer<'_> {
    fn render(&mut self, view: &GameView<'_>) {
        self.render_status(view);
        self.ui.add_space(BOARD_PADDING / 2.0);
        self.render_board(view);
    }

    fn play_cue(&mut self, cue: SoundCue) {
        self.audio.play(cue);
    }
}

fn calculate_cell_size(available_width: f32, available_height: f32, size: usize) -> f32 {
    let usable = (available_width - BOARD_PADDING * 2.0).min(available_height - BOARD_PADDING * 2.0);
    (usable / size.max(1) as f32).clamp(MIN_CELL_SIZE, MAX_CELL_SIZE)
}

fn cell_rect(board: egui::Rect, cell_size: f32, size: usize, index: usize) -> egui::Rect {
    let row = index / size;
    let col = index % size;
    egui::Rect::from_min_size(
        egui::pos2(
            board.left() + col as f32 * cell_size,
            board.top() + row as f32 * cell_size,
        ),
        egui::vec2(cell_size, cell_size),
    )
}

fn cell_at(board: egui::Rect, cell_size: f32, size: usize, pos: egui::Pos2) -> Option<usize> {
    if !board.contains(pos) {
        return None;
    }
    let col = ((pos.x - board.left()) / cell_size) as usize;
    let row = ((pos.y - board.top()) / cell_size) as usize;
    if col >= size || row >= size {
        return None;
    }
    Some(row * size + col)
}

fn draw_x(painter: &egui::Painter, rect: egui::Rect, color: egui::Color32) {
    let padding = rect.width() * 0.2;
    let stroke = egui::Stroke::new(4.0, color);

    painter.line_segment(
        [
            egui::pos2(rect.left() + padding, rect.top() + padding),
            egui::pos2(rect.right() - padding, rect.bottom() - padding),
        ],
        stroke,
    );
    painter.line_segment(
        [
            egui::pos2(rect.right() - padding, rect.top() + padding),
            egui::pos2(rect.left() + padding, rect.bottom() - padding),
        ],
        stroke,
    );
}

fn draw_o(painter: &egui::Painter, rect: egui::Rect, color: egui::Color32) {
    let padding = rect.width() * 0.2;
    let radius = rect.width() / 2.0 - padding;
    painter.circle_stroke(rect.center(), radius, egui::Stroke::new(4.0, color));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_rect(size: usize, cell_size: f32) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(10.0, 20.0),
            egui::vec2(cell_size * size as f32, cell_size * size as f32),
        )
    }

    #[test]
    fn test_cell_at_maps_row_major() {
        let rect = board_rect(3, 50.0);
        assert_eq!(cell_at(rect, 50.0, 3, egui::pos2(15.0, 25.0)), Some(0));
        assert_eq!(cell_at(rect, 50.0, 3, egui::pos2(115.0, 25.0)), Some(2));
        assert_eq!(cell_at(rect, 50.0, 3, egui::pos2(65.0, 75.0)), Some(4));
        assert_eq!(cell_at(rect, 50.0, 3, egui::pos2(155.0, 165.0)), Some(8));
    }

    #[test]
    fn test_cell_at_outside_board_is_none() {
        let rect = board_rect(3, 50.0);
        assert_eq!(cell_at(rect, 50.0, 3, egui::pos2(5.0, 25.0)), None);
        assert_eq!(cell_at(rect, 50.0, 3, egui::pos2(15.0, 400.0)), None);
    }

    #[test]
    fn test_cell_rect_round_trips_through_cell_at() {
        let rect = board_rect(5, 40.0);
        for index in 0..25 {
            let cell = cell_rect(rect, 40.0, 5, index);
            assert_eq!(cell_at(rect, 40.0, 5, cell.center()), Some(index));
        }
    }

    #[test]
    fn test_cell_size_is_clamped() {
        assert_eq!(calculate_cell_size(2000.0, 2000.0, 3), MAX_CELL_SIZE);
        assert_eq!(calculate_cell_size(100.0, 100.0, 7), MIN_CELL_SIZE);
    }
}
