//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use crate::board::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::{Difficulty, GameConfig, Heuristic};

use super::board_view::BoardView;
use super::game_state::{GameState, Outcome};
use super::theme::*;

/// Main Gomoku application
pub struct GomokuApp {
    state: GameState,
    /// Settings edited in the setup card, applied on "Start Game"
    pending: GameConfig,
    board_view: BoardView,
    show_debug: bool,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, state: GameState) -> Self {
        Self {
            pending: state.config,
            state,
            board_view: BoardView::default(),
            show_debug: true,
        }
    }

    fn start_game(&mut self) {
        match GameState::new(self.pending) {
            Ok(state) => self.state = state,
            Err(e) => self.state.message = Some(e.to_string()),
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game").clicked() {
                        self.start_game();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let config = &self.state.config;
                    ui.label(format!(
                        "{}x{} - {} - {}",
                        config.board_size, config.board_size, config.difficulty, config.heuristic
                    ));
                });
            });
        });
    }

    /// Render the side panel with settings and game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                self.render_setup_card(ui);
                ui.add_space(10.0);

                self.render_turn_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(result) = self.state.game_over {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, result.outcome);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Board size, difficulty and heuristic selection
    fn render_setup_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SETUP").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                ui.label(RichText::new("Board size").color(TEXT_SECONDARY));
                ui.add(
                    egui::DragValue::new(&mut self.pending.board_size)
                        .range(MIN_BOARD_SIZE..=MAX_BOARD_SIZE),
                );
            });

            egui::ComboBox::from_id_salt("difficulty")
                .selected_text(self.pending.difficulty.label())
                .show_ui(ui, |ui| {
                    for level in Difficulty::ALL {
                        ui.selectable_value(&mut self.pending.difficulty, level, level.label());
                    }
                });

            egui::ComboBox::from_id_salt("heuristic")
                .selected_text(self.pending.heuristic.to_string())
                .show_ui(ui, |ui| {
                    for heuristic in [Heuristic::Weighted, Heuristic::Simple] {
                        ui.selectable_value(
                            &mut self.pending.heuristic,
                            heuristic,
                            heuristic.to_string(),
                        );
                    }
                });

            ui.add_space(6.0);
            if ui.button("Start Game").clicked() {
                self.start_game();
            }
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let (label, color) = if self.state.game_over.is_some() {
                ("Game over", WIN_HIGHLIGHT)
            } else if self.state.is_ai_thinking() {
                ("AI thinking...", STATUS_BUSY)
            } else if self.state.is_human_turn() {
                ("Your turn (black)", STATUS_OK)
            } else {
                ("AI to move (white)", STATUS_BUSY)
            };
            ui.label(RichText::new(label).size(16.0).strong().color(color));

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                ui.label(
                    RichText::new(format!("{:.2}s", elapsed.as_secs_f32()))
                        .size(12.0)
                        .color(TEXT_SECONDARY),
                );
            }

            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render search statistics of the last AI move
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            match &self.state.last_ai_result {
                Some(result) => {
                    let small = |text: String| RichText::new(text).size(10.0).color(TEXT_SECONDARY);
                    ui.label(small(format!("Score: {}", result.score)));
                    ui.label(small(format!("Depth: {}", result.depth)));
                    ui.label(small(format!("{} nodes in {}ms", result.nodes, result.time_ms)));
                    if let Some(pos) = result.best_move {
                        ui.label(
                            RichText::new(format!("-> {pos}"))
                                .size(12.0)
                                .strong()
                                .color(WIN_HIGHLIGHT),
                        );
                    }
                }
                None => {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                }
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: Outcome) {
        let text = match outcome {
            Outcome::HumanWins => "Human wins!",
            Outcome::AiWins => "AI wins!",
            Outcome::Draw => "It's a draw!",
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(6.0);
                    ui.label(RichText::new(text).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(10.0);
                    if ui.button("New Game").clicked() {
                        self.start_game();
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let winning_line = self.state.game_over.and_then(|r| r.winning_line);
            let accepts_input = self.state.game_over.is_none() && self.state.is_human_turn();

            let clicked = self.board_view.show(
                ui,
                &self.state.board,
                self.state.last_move,
                winning_line,
                accepts_input,
            );

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.try_place_stone(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (toggle_debug, undo, new_game) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::N),
            )
        });

        if toggle_debug {
            self.show_debug = !self.show_debug;
        }
        if undo {
            self.state.undo();
        }
        if new_game {
            self.state.reset();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && self.state.game_over.is_none() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
