use eframe::egui;

use crate::config::Theme;

pub struct BoardPalette {
    pub background: egui::Color32,
    pub grid: egui::Color32,
    pub x: egui::Color32,
    pub o: egui::Color32,
    pub hover: egui::Color32,
    pub winner: egui::Color32,
}

pub fn visuals(theme: Theme) -> egui::Visuals {
    match theme {
        Theme::Dark => egui::Visuals::dark(),
        Theme::Light => egui::Visuals::light(),
    }
}

pub fn board_palette(theme: Theme) -> BoardPalette {
    match theme {
        Theme::Dark => BoardPalette {
            background: egui::Color32::from_rgb(34, 36, 44),
            grid: egui::Color32::from_rgb(120, 124, 140),
            x: egui::Color32::from_rgb(240, 90, 90),
            o: egui::Color32::from_rgb(90, 150, 240),
            hover: egui::Color32::from_rgba_unmultiplied(255, 255, 255, 24),
            winner: egui::Color32::from_rgba_unmultiplied(60, 200, 90, 90),
        },
        Theme::Light => BoardPalette {
            background: egui::Color32::from_rgb(240, 240, 240),
            grid: egui::Color32::BLACK,
            x: egui::Color32::from_rgb(220, 50, 50),
            o: egui::Color32::from_rgb(50, 50, 220),
            hover: egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
            winner: egui::Color32::from_rgba_unmultiplied(50, 200, 50, 120),
        },
    }
}
