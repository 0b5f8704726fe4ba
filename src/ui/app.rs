//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use log::{info, warn};

use super::board_view::{BoardView, Overlay};
use super::game_state::{GameResult, GameState};
use super::theme::*;
use crate::board::Mark;
use crate::config::{GameConfig, PlayerKind, MAX_BOARD_SIZE, MAX_DEPTH, MIN_BOARD_SIZE};
use crate::game::GameOutcome;

enum Screen {
    Setup,
    Playing(GameState),
}

/// Requests collected while drawing, applied after the frame's UI is built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Start,
    Replay,
    NewGame,
    Quit,
}

/// Main Gomoku application
pub struct GomokuApp {
    screen: Screen,
    /// Settings edited on the setup screen
    draft: GameConfig,
    board_view: BoardView,
    show_debug: bool,
    setup_error: Option<String>,
}

impl GomokuApp {
    /// Start on the setup screen, prefilled with `config`
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self {
            screen: Screen::Setup,
            draft: config,
            board_view: BoardView::default(),
            show_debug: true,
            setup_error: None,
        }
    }

    fn apply(&mut self, action: Action, ctx: &Context) {
        match action {
            Action::Start => match self.draft.validate() {
                Ok(()) => {
                    info!(
                        "new game: {} ({}) vs {} ({}) on {}x{}",
                        self.draft.black.name,
                        self.draft.black.kind,
                        self.draft.white.name,
                        self.draft.white.kind,
                        self.draft.board_size,
                        self.draft.board_size
                    );
                    self.setup_error = None;
                    self.screen = Screen::Playing(GameState::new(self.draft.clone()));
                }
                Err(err) => {
                    warn!("setup rejected: {}", err);
                    self.setup_error = Some(err.to_string());
                }
            },
            Action::Replay => {
                if let Screen::Playing(state) = &mut self.screen {
                    state.reset();
                }
            }
            Action::NewGame => self.screen = Screen::Setup,
            Action::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
    }

    fn render_menu_bar(&mut self, ctx: &Context, actions: &mut Vec<Action>) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game…").clicked() {
                        actions.push(Action::NewGame);
                        ui.close_menu();
                    }
                    if ui.button("Reset").clicked() {
                        actions.push(Action::Replay);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        actions.push(Action::Quit);
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "AI Debug Panel (D)");
                });

                if let Screen::Playing(state) = &self.screen {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let config = &state.config;
                        ui.label(format!(
                            "{} vs {}",
                            config.black.kind, config.white.kind
                        ));
                    });
                }
            });
        });
    }

    fn render_setup(&mut self, ctx: &Context, actions: &mut Vec<Action>) {
        CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.label(RichText::new("GOMOKU").size(32.0).strong().color(TEXT_PRIMARY));
                ui.label(RichText::new("Five in a row").size(12.0).color(TEXT_MUTED));
                ui.add_space(16.0);
            });

            ui.vertical_centered(|ui| {
                ui.set_max_width(420.0);

                for mark in [Mark::Black, Mark::White] {
                    card_frame().show(ui, |ui| {
                        seat_editor(ui, &mut self.draft, mark);
                    });
                    ui.add_space(10.0);
                }

                card_frame().show(ui, |ui| {
                    ui.label(RichText::new("GAME").size(10.0).color(TEXT_MUTED));
                    ui.horizontal(|ui| {
                        ui.label("Who starts:");
                        ui.radio_value(&mut self.draft.first, Mark::Black, self.draft.black.name.clone());
                        ui.radio_value(&mut self.draft.first, Mark::White, self.draft.white.name.clone());
                    });
                    ui.horizontal(|ui| {
                        ui.label("Board size:");
                        ui.add(
                            egui::DragValue::new(&mut self.draft.board_size)
                                .range(MIN_BOARD_SIZE..=MAX_BOARD_SIZE),
                        );
                    });
                    ui.checkbox(&mut self.draft.parallel, "Parallel root search");
                });

                ui.add_space(14.0);
                if ui.button(RichText::new("Start Game").size(16.0).strong()).clicked() {
                    actions.push(Action::Start);
                }
                if let Some(err) = &self.setup_error {
                    ui.add_space(6.0);
                    ui.label(RichText::new(err).color(LAST_MOVE_MARKER));
                }
            });
        });
    }

    fn render_side_panel(&self, ctx: &Context, state: &GameState, actions: &mut Vec<Action>) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)).inner_margin(10.0))
            .show(ctx, |ui| {
                ui.add_space(6.0);
                ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
                ui.add_space(10.0);

                render_turn_card(ui, state);
                ui.add_space(10.0);

                card_frame().show(ui, |ui| {
                    ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        if ui.button("Reset").clicked() {
                            actions.push(Action::Replay);
                        }
                        if ui.button("New Game").clicked() {
                            actions.push(Action::NewGame);
                        }
                    });
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new(format!("Move #{}", state.move_history.len()))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                });

                if self.show_debug {
                    ui.add_space(10.0);
                    render_debug_card(ui, state);
                }

                if let Some(msg) = &state.message {
                    ui.add_space(10.0);
                    Frame::new()
                        .fill(egui::Color32::from_rgb(80, 60, 30))
                        .corner_radius(CornerRadius::same(8))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                        });
                }
            });
    }

    fn handle_input(&mut self, ctx: &Context, actions: &mut Vec<Action>) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
            if i.key_pressed(egui::Key::R) {
                actions.push(Action::Replay);
            }
        });
    }
}

fn card_frame() -> Frame {
    Frame::new()
        .fill(CARD_BG)
        .corner_radius(CornerRadius::same(8))
        .inner_margin(12.0)
}

/// Name, kind and depth for one seat
fn seat_editor(ui: &mut egui::Ui, config: &mut GameConfig, mark: Mark) {
    let seat = config.seat_mut(mark);
    ui.label(RichText::new(mark.to_string().to_uppercase()).size(10.0).color(TEXT_MUTED));
    ui.horizontal(|ui| {
        ui.label("Name:");
        ui.text_edit_singleline(&mut seat.name);
    });
    ui.horizontal(|ui| {
        ui.label("Player:");
        egui::ComboBox::from_id_salt(("seat_kind", mark))
            .selected_text(seat.kind.to_string())
            .show_ui(ui, |ui| {
                for kind in PlayerKind::ALL {
                    ui.selectable_value(&mut seat.kind, kind, kind.to_string());
                }
            });
    });
    if seat.kind.is_ai() {
        ui.horizontal(|ui| {
            ui.label("Depth:");
            ui.add(egui::DragValue::new(&mut seat.depth).range(1..=MAX_DEPTH));
        });
    }
}

fn render_turn_card(ui: &mut egui::Ui, state: &GameState) {
    card_frame().show(ui, |ui| {
        let mark = state.current_turn;
        let is_black = mark == Mark::Black;

        ui.horizontal(|ui| {
            let (rect, _) = ui.allocate_exact_size(Vec2::new(44.0, 44.0), egui::Sense::hover());
            let fill = if is_black { BLACK_STONE } else { WHITE_STONE };
            ui.painter().circle_filled(rect.center(), 18.0, fill);
            ui.painter()
                .circle_stroke(rect.center(), 18.0, egui::Stroke::new(1.0, TEXT_MUTED));

            ui.add_space(10.0);
            ui.vertical(|ui| {
                ui.label(
                    RichText::new(state.player_name(mark))
                        .size(18.0)
                        .strong()
                        .color(TEXT_PRIMARY),
                );
                let (status, color) = if state.game_over.is_some() {
                    ("Game over".to_string(), WIN_HIGHLIGHT)
                } else if let Some(elapsed) = state.ai_thinking_elapsed() {
                    (format!("AI thinking… {:.1}s", elapsed.as_secs_f32()), THINKING)
                } else if state.is_human_turn() {
                    (format!("{} to move", mark), ACCENT)
                } else {
                    ("Waiting".to_string(), TEXT_SECONDARY)
                };
                ui.label(RichText::new(status).size(12.0).color(color));
            });
        });
    });
}

fn render_debug_card(ui: &mut egui::Ui, state: &GameState) {
    card_frame().show(ui, |ui| {
        ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
        ui.add_space(6.0);

        let Some(result) = &state.last_ai_result else {
            ui.label(RichText::new("No AI move yet").size(10.0).color(TEXT_MUTED));
            return;
        };

        ui.label(
            RichText::new(format!("{} depth {}", result.strategy, result.depth))
                .size(11.0)
                .strong()
                .color(ACCENT),
        );
        ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
        ui.label(
            RichText::new(format!("{} nodes, {} cutoffs", result.nodes, result.beta_cutoffs))
                .size(10.0)
                .color(TEXT_SECONDARY),
        );
        ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_MUTED));
        if let Some(pos) = result.best_move {
            ui.add_space(4.0);
            ui.label(RichText::new(format!("→ {}", pos)).size(12.0).strong().color(WIN_HIGHLIGHT));
        }
    });
}

/// Modal-style result window with Replay and Quit
fn render_game_over(ctx: &Context, state: &GameState, result: &GameResult, actions: &mut Vec<Action>) {
    let headline = match result.outcome {
        GameOutcome::Win(mark) => format!("{} ({}) wins!", state.player_name(mark), mark),
        GameOutcome::Draw => "It's a draw!".to_string(),
    };

    egui::Window::new("Game Over")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(headline).size(18.0).strong());
                ui.label(
                    RichText::new(format!("after {} moves", state.move_history.len()))
                        .size(11.0)
                        .color(TEXT_SECONDARY),
                );
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("Replay").clicked() {
                        actions.push(Action::Replay);
                    }
                    if ui.button("Quit").clicked() {
                        actions.push(Action::Quit);
                    }
                });
            });
        });
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();
        self.handle_input(ctx, &mut actions);
        self.render_menu_bar(ctx, &mut actions);

        // take the screen out so panels can borrow the rest of `self`
        match std::mem::replace(&mut self.screen, Screen::Setup) {
            Screen::Setup => self.render_setup(ctx, &mut actions),
            Screen::Playing(mut state) => {
                state.check_ai_result();
                if state.is_ai_turn() && state.game_over.is_none() {
                    state.start_ai_thinking();
                }

                self.render_side_panel(ctx, &state, &mut actions);

                CentralPanel::default().show(ctx, |ui| {
                    let overlay = Overlay {
                        current_turn: state.current_turn,
                        last_move: state.last_move,
                        winning_line: state.game_over.and_then(|r| r.winning_line),
                        accepts_input: state.game_over.is_none()
                            && state.is_human_turn()
                            && !state.is_ai_thinking(),
                    };
                    if let Some(pos) = self.board_view.show(ui, &state.board, &overlay) {
                        if let Err(msg) = state.try_place_stone(pos) {
                            state.message = Some(msg);
                        }
                    }
                });

                if let Some(result) = state.game_over {
                    render_game_over(ctx, &state, &result, &mut actions);
                }
                if state.is_ai_thinking() {
                    ctx.request_repaint();
                }
                self.screen = Screen::Playing(state);
            }
        }

        for action in actions {
            self.apply(action, ctx);
        }
    }
}
