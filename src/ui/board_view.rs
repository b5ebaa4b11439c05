//! Board rendering for the Gomoku GUI

use crate::{Board, Cell, Pos};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Intersections per side of the board last drawn
    dimension: usize,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            dimension: 0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return click position if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        last_move: Option<Pos>,
        winning_line: Option<[Pos; 5]>,
        accepts_input: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();
        self.dimension = board.dimension();

        // Calculate board size to fit available space
        let board_size = (available_size.x.min(available_size.y) - 20.0).max(200.0);
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / (self.dimension as f32 - 1.0);

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_center_point(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, board);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        // Handle hover preview and click
        let mut clicked_pos = None;

        if accepts_input {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    let is_valid = board.get(board_pos) == Ok(Cell::Empty);
                    let color = if is_valid { hover_valid() } else { hover_invalid() };
                    self.draw_hover_preview(&painter, board_pos, color);

                    if response.clicked() && is_valid {
                        clicked_pos = Some(board_pos);
                    }
                }
            }
        }

        clicked_pos
    }

    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = (self.dimension as f32 - 1.0) * self.cell_size;

        for i in 0..self.dimension {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Mark the intersection the AI opens on
    fn draw_center_point(&self, painter: &Painter) {
        let center = (self.dimension / 2) as u8;
        let screen = self.board_to_screen(Pos::new(center, center));
        painter.circle_filled(screen, STAR_POINT_RADIUS, STAR_POINT);
    }

    /// Draw coordinate labels (column letters, row numbers from zero)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(11.0);

        for i in 0..self.dimension {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;
            let letter = (b'A' + i as u8) as char;

            let top = Pos2::new(self.board_rect.min.x + offset, self.board_rect.min.y + 12.0);
            painter.text(top, egui::Align2::CENTER_CENTER, letter, font.clone(), GRID_LINE);

            let left = Pos2::new(self.board_rect.min.x + 12.0, self.board_rect.min.y + offset);
            painter.text(left, egui::Align2::CENTER_CENTER, i.to_string(), font.clone(), GRID_LINE);
        }
    }

    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for pos in board.positions() {
            if let Ok(cell) = board.get(pos) {
                self.draw_stone(painter, pos, cell);
            }
        }
    }

    /// Draw a single stone with shadow
    fn draw_stone(&self, painter: &Painter, pos: Pos, cell: Cell) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow = Color32::from_rgba_unmultiplied(0, 0, 0, 50);

        match cell {
            Cell::Min => {
                painter.circle_filled(center + Vec2::new(2.0, 2.0), radius, shadow);
                painter.circle_filled(center, radius, HUMAN_STONE);
                painter.circle_filled(
                    center + Vec2::new(-radius * 0.3, -radius * 0.3),
                    radius * 0.2,
                    HUMAN_STONE_HIGHLIGHT,
                );
            }
            Cell::Max => {
                painter.circle_filled(center + Vec2::new(2.0, 2.0), radius, shadow);
                painter.circle_filled(center, radius, AI_STONE);
                painter.circle_stroke(center, radius, Stroke::new(1.0, AI_STONE_SHADOW));
            }
            Cell::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 5]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            let start = self.board_to_screen(pair[0]);
            let end = self.board_to_screen(pair[1]);
            painter.line_segment([start, end], stroke);
        }

        for pos in line {
            let center = self.board_to_screen(*pos);
            let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
            painter.circle_stroke(center, radius, stroke);
        }
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, color: Color32) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        painter.circle_filled(center, radius, color);
    }

    /// Convert screen coordinates to the nearest intersection
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).round() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).round() as i32;

        let d = self.dimension as i32;
        if col >= 0 && col < d && row >= 0 && row < d {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.col as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.row as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}
