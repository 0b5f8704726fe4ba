//! Board rendering for the Gomoku GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Mark, Pos, WIN_LENGTH};

use super::theme::*;

/// What the board should draw on top of the stones
pub struct Overlay {
    pub current_turn: Mark,
    pub last_move: Option<Pos>,
    pub winning_line: Option<[Pos; WIN_LENGTH]>,
    /// Hover preview and clicks are enabled
    pub accepts_input: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    cell_size: f32,
    board_rect: Rect,
    /// Board side the cached geometry was computed for
    lines: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
            lines: 0,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked empty cell, if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, overlay: &Overlay) -> Option<Pos> {
        let available = ui.available_size();
        let side = (available.x.min(available.y) - 16.0).max(200.0);
        self.lines = board.size();
        self.cell_size = (side - 2.0 * BOARD_MARGIN) / (self.lines.max(2) as f32 - 1.0);

        let (response, painter) = ui.allocate_painter(Vec2::new(side, side), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);

        for pos in board.positions() {
            let mark = board.get(pos);
            if mark.is_player() {
                self.draw_stone(&painter, pos, mark);
            }
        }

        if let Some(pos) = overlay.last_move {
            painter.circle_filled(self.board_to_screen(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
        }
        if let Some(line) = overlay.winning_line {
            self.draw_winning_line(&painter, &line);
        }

        if !overlay.accepts_input {
            return None;
        }

        let hovered = response
            .hover_pos()
            .and_then(|p| self.screen_to_board(p))
            .filter(|&p| board.is_empty(p))?;

        let radius = self.cell_size * STONE_RADIUS_RATIO;
        painter.circle_filled(
            self.board_to_screen(hovered),
            radius,
            hover_stone(overlay.current_turn == Mark::Black),
        );

        response.clicked().then_some(hovered)
    }

    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = (self.lines as f32 - 1.0) * self.cell_size;

        for i in 0..self.lines {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_star_points(&self, painter: &Painter) {
        for pos in star_points(self.lines) {
            painter.circle_filled(self.board_to_screen(pos), STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Row and column indices as typed in the console game
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(11.0);

        for i in 0..self.lines {
            let along = BOARD_MARGIN + i as f32 * self.cell_size;
            let label = i.to_string();

            let top = Pos2::new(self.board_rect.min.x + along, self.board_rect.min.y + 12.0);
            painter.text(top, egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);

            let left = Pos2::new(self.board_rect.min.x + 12.0, self.board_rect.min.y + along);
            painter.text(left, egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);
        }
    }

    fn draw_stone(&self, painter: &Painter, pos: Pos, mark: Mark) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow = center + Vec2::new(2.0, 2.0);

        match mark {
            Mark::Black => {
                painter.circle_filled(shadow, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 60));
                painter.circle_filled(center, radius, BLACK_STONE);
                let highlight = center + Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(highlight, radius * 0.2, BLACK_STONE_HIGHLIGHT);
            }
            Mark::White => {
                painter.circle_filled(shadow, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 40));
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_STONE_RIM));
            }
            Mark::Empty => {}
        }
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; WIN_LENGTH]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);
        for pair in line.windows(2) {
            painter.line_segment([self.board_to_screen(pair[0]), self.board_to_screen(pair[1])], stroke);
        }
        let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
        for pos in line {
            painter.circle_stroke(self.board_to_screen(*pos), radius, stroke);
        }
    }

    /// Nearest intersection to a screen point, `None` off the grid
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size + 0.5).floor();
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size + 0.5).floor();
        let limit = self.lines as f32;

        if (0.0..limit).contains(&col) && (0.0..limit).contains(&row) {
            Some(Pos::new(row as usize, col as usize))
        } else {
            None
        }
    }

    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.col as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.row as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}
