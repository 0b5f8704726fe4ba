//! Colors and sizes for the Gomoku GUI

use egui::Color32;

use crate::board::Pos;

// Board: pale wood
pub const BOARD_BG: Color32 = Color32::from_rgb(232, 196, 140);
pub const GRID_LINE: Color32 = Color32::from_rgb(70, 48, 24);
pub const STAR_POINT: Color32 = Color32::from_rgb(55, 38, 20);

pub const BLACK_STONE: Color32 = Color32::from_rgb(22, 22, 28);
pub const BLACK_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(75, 75, 85);
pub const WHITE_STONE: Color32 = Color32::from_rgb(248, 248, 250);
pub const WHITE_STONE_RIM: Color32 = Color32::from_rgb(185, 185, 192);

pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(220, 50, 50);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(40, 200, 70);

pub fn hover_stone(mark_is_black: bool) -> Color32 {
    if mark_is_black {
        Color32::from_rgba_unmultiplied(20, 20, 20, 90)
    } else {
        Color32::from_rgba_unmultiplied(245, 245, 245, 110)
    }
}

// Side panel
pub const CARD_BG: Color32 = Color32::from_rgb(40, 42, 46);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(238, 238, 244);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(165, 170, 180);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(115, 120, 130);
pub const ACCENT: Color32 = Color32::from_rgb(90, 170, 250);
pub const THINKING: Color32 = Color32::from_rgb(255, 185, 60);

// Sizes
pub const BOARD_MARGIN: f32 = 36.0;
pub const STONE_RADIUS_RATIO: f32 = 0.44;
pub const STAR_POINT_RADIUS: f32 = 3.5;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.5;

/// Star points for a `size` board: corners at the fourth line (third on
/// small boards) plus the center. Boards under 9 only get the center.
pub fn star_points(size: usize) -> Vec<Pos> {
    let center = size / 2;
    if size < 9 {
        return vec![Pos::new(center, center)];
    }
    let edge = if size >= 13 { 3 } else { 2 };
    let far = size - 1 - edge;
    vec![
        Pos::new(edge, edge),
        Pos::new(edge, far),
        Pos::new(center, center),
        Pos::new(far, edge),
        Pos::new(far, far),
    ]
}
