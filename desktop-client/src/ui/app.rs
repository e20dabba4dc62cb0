use std::time::Instant;

use eframe::egui;
use tictactoe_common::games::tictactoe::{SUPPORTED_BOARD_SIZES, TicTacToeSession};
use tictactoe_common::log;

use crate::audio::AudioCues;
use crate::config::Theme;
use super::board_view::EguiBoardRenderer;
use super::theme::visuals;

pub struct TicTacToeApp {
    session: TicTacToeSession,
    audio: AudioCues,
    theme: Theme,
    applied_theme: Option<Theme>,
}

impl TicTacToeApp {
    pub fn new(session: TicTacToeSession, audio: AudioCues, theme: Theme) -> Self {
        Self {
            session,
            audio,
            theme,
            applied_theme: None,
        }
    }

    fn apply_theme(&mut self, ctx: &egui::Context) {
        if self.applied_theme != Some(self.theme) {
            ctx.set_visuals(visuals(self.theme));
            self.applied_theme = Some(self.theme);
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let (undo, redo, restart) = ctx.input(|i| {
            (
                i.modifiers.command && i.key_pressed(egui::Key::Z) && !i.modifiers.shift,
                (i.modifiers.command && i.key_pressed(egui::Key::Y))
                    || (i.modifiers.command && i.modifiers.shift && i.key_pressed(egui::Key::Z)),
                i.key_pressed(egui::Key::R) && !i.modifiers.command,
            )
        });

        if undo {
            self.session.undo(Instant::now());
        }
        if redo {
            self.session.redo(Instant::now());
        }
        if restart {
            self.session.restart();
        }
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            if ui.button("Restart (R)").clicked() {
                self.session.restart();
            }

            if ui
                .add_enabled(self.session.can_undo(), egui::Button::new("Undo"))
                .clicked()
            {
                self.session.undo(Instant::now());
            }

            if ui
                .add_enabled(self.session.can_redo(), egui::Button::new("Redo"))
                .clicked()
            {
                self.session.redo(Instant::now());
            }

            ui.separator();

            let current_size = self.session.settings().board_size;
            let mut selected_size = current_size;
            egui::ComboBox::from_label("Board")
                .selected_text(format!("{}x{}", current_size, current_size))
                .show_ui(ui, |ui| {
                    for size in SUPPORTED_BOARD_SIZES {
                        ui.selectable_value(&mut selected_size, size, format!("{}x{}", size, size));
                    }
                });
            if selected_size != current_size
                && let Err(e) = self.session.set_board_size(selected_size)
            {
                log!("Failed to change board size: {}", e);
            }

            let mut ai_enabled = self.session.settings().ai_enabled;
            if ui.checkbox(&mut ai_enabled, "Play vs AI").changed() {
                self.session.set_ai_enabled(ai_enabled);
            }

            let mut sound_enabled = self.audio.is_enabled();
            if ui.checkbox(&mut sound_enabled, "Sound").changed() {
                self.audio.set_enabled(sound_enabled);
            }

            let theme_label = match self.theme {
                Theme::Dark => "☀ Light theme",
                Theme::Light => "🌙 Dark theme",
            };
            if ui.button(theme_label).clicked() {
                self.theme = self.theme.toggled();
            }
        });
    }

    fn render_scores(&mut self, ui: &mut egui::Ui) {
        let scores = self.session.scores();
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(format!("X: {}", scores.x_wins)).strong());
            ui.separator();
            ui.label(egui::RichText::new(format!("O: {}", scores.o_wins)).strong());
            ui.separator();
            ui.label(egui::RichText::new(format!("Draws: {}", scores.draws)).strong());
            ui.separator();
            ui.label(format!("Games: {}", scores.games_played()));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Reset scores").clicked() {
                    self.session.reset_scores();
                }
            });
        });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme(ctx);
        self.handle_shortcuts(ctx);
        self.session.poll_ai(Instant::now());

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(4.0);
            self.render_controls(ui);
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("scores").show(ctx, |ui| {
            ui.add_space(4.0);
            self.render_scores(ui);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let mut renderer = EguiBoardRenderer::new(ui, &mut self.audio, self.theme);
            self.session.present(&mut renderer);
            if let Some(position) = renderer.clicked_cell() {
                // Rejections are logged by the session.
                let _ = self.session.on_move_requested(position, Instant::now());
            }
        });

        if let Some(due_at) = self.session.pending_ai_move() {
            ctx.request_repaint_after(due_at.saturating_duration_since(Instant::now()));
        }
    }
}
