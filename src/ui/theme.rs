//! Theme constants for the Gomoku GUI

use egui::Color32;

// Board colors - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(139, 90, 43); // Saddle brown
pub const GRID_LINE: Color32 = Color32::from_rgb(40, 25, 10);
pub const STAR_POINT: Color32 = Color32::from_rgb(35, 22, 10);

// Stone colors
pub const HUMAN_STONE: Color32 = Color32::from_rgb(25, 25, 30);
pub const HUMAN_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const AI_STONE: Color32 = Color32::from_rgb(250, 250, 252);
pub const AI_STONE_SHADOW: Color32 = Color32::from_rgb(150, 150, 155);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(20, 20, 20, 80)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_BUSY: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 36.0;
pub const STONE_RADIUS_RATIO: f32 = 0.42;
pub const STAR_POINT_RADIUS: f32 = 4.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
