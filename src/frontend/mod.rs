//! Frontend module for egui UI
//!
//! Draws the active structure of a [`VisualizerSession`] and turns clicks and
//! key presses into session commands.
//!
//! # Layout
//!
//! - toolbar (top): mode selector, operations, view toggles
//! - status bar (bottom): latest message and structure sizes
//! - pseudocode panel (right, optional)
//! - canvas (center)
//!
//! # Shortcuts
//!
//! | Key | Action |
//! |-----|--------|
//! | `1` `2` `3` | Linked list, BST, array |
//! | Tab | Next structure |
//! | Space | Step |
//! | Enter | Insert |
//! | Delete / Backspace | Remove |
//! | R | Reset |

mod canvas;
mod panels;
pub mod state;
mod status_bar;
mod toolbar;

pub use canvas::render_canvas;
pub use panels::render_pseudocode_panel;
pub use state::{AppAction, ToolbarState};
pub use status_bar::render_status_bar;
pub use toolbar::{render_toolbar, ToolbarContext};

use crate::config::{AppState, VisConfig};
use crate::session::{Command, VisualizerSession};
use crate::types::Mode;

/// Longest frame gap fed to the animation, in seconds
const MAX_FRAME_DT: f32 = 0.1;

/// Main application state for the visualizer
pub struct VisualizerApp {
    session: VisualizerSession,
    app_state: AppState,
    toolbar: ToolbarState,
}

impl VisualizerApp {
    /// Create a new application instance, restoring the last mode
    pub fn new(cc: &eframe::CreationContext<'_>, config: VisConfig, app_state: AppState) -> Self {
        apply_visuals(&cc.egui_ctx, app_state.ui_preferences.dark_mode);

        let mut session = VisualizerSession::new(config);
        if app_state.last_mode != session.mode() {
            let _ = session.dispatch(Command::SelectMode(app_state.last_mode));
        }

        Self {
            session,
            app_state,
            toolbar: ToolbarState::default(),
        }
    }

    pub fn session(&self) -> &VisualizerSession {
        &self.session
    }

    fn handle_action(&mut self, ctx: &egui::Context, action: AppAction) {
        match action {
            AppAction::Dispatch(command) => {
                // Failures are already recorded as a status message
                let _ = self.session.dispatch(command);
            }
            AppAction::TogglePseudocode => {
                let prefs = &mut self.app_state.ui_preferences;
                prefs.show_pseudocode = !prefs.show_pseudocode;
            }
            AppAction::ToggleDarkMode => {
                let prefs = &mut self.app_state.ui_preferences;
                prefs.dark_mode = !prefs.dark_mode;
                apply_visuals(ctx, prefs.dark_mode);
            }
        }
    }

    fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) -> Vec<AppAction> {
        use egui::Key;

        // Typing into the value field must not trigger shortcuts
        if ctx.wants_keyboard_input() {
            return Vec::new();
        }

        let mode = self.session.mode();
        let value = self.toolbar.insert_value();
        let mut commands = Vec::new();

        ctx.input(|i| {
            if i.modifiers.any() {
                return;
            }
            let modes = [
                (Key::Num1, Mode::LinkedList),
                (Key::Num2, Mode::Bst),
                (Key::Num3, Mode::Array),
            ];
            for (key, target) in modes {
                if i.key_pressed(key) && mode != target {
                    commands.push(Command::SelectMode(target));
                }
            }
            if i.key_pressed(Key::Tab) {
                commands.push(state::next_mode_command(mode));
            }
            if i.key_pressed(Key::Space) {
                commands.push(state::step_command(mode));
            }
            if i.key_pressed(Key::Enter) {
                commands.push(state::insert_command(mode, value));
            }
            if i.key_pressed(Key::Delete) || i.key_pressed(Key::Backspace) {
                commands.extend(state::remove_command(mode));
            }
            if i.key_pressed(Key::R) {
                commands.push(state::reset_command(mode));
            }
        });

        commands.into_iter().map(AppAction::Dispatch).collect()
    }
}

fn apply_visuals(ctx: &egui::Context, dark_mode: bool) {
    if dark_mode {
        ctx.set_visuals(egui::Visuals::dark());
    } else {
        ctx.set_visuals(egui::Visuals::light());
    }
}

impl eframe::App for VisualizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = self.handle_keyboard_shortcuts(ctx);

        let dt = ctx.input(|i| i.stable_dt).min(MAX_FRAME_DT);
        if self.session.tick(dt) {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            let toolbar_ctx = ToolbarContext {
                mode: self.session.mode(),
                show_pseudocode: self.app_state.ui_preferences.show_pseudocode,
                dark_mode: self.app_state.ui_preferences.dark_mode,
                array_full: self.session.array().is_full(),
            };
            actions.extend(render_toolbar(ui, &toolbar_ctx, &mut self.toolbar));
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            render_status_bar(ui, &self.session);
        });

        if self.app_state.ui_preferences.show_pseudocode {
            egui::SidePanel::right("pseudocode")
                .resizable(true)
                .default_width(280.0)
                .show(ctx, |ui| {
                    render_pseudocode_panel(ui, self.session.mode());
                });
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let frame = self.session.frame();
                let rect = render_canvas(ui, &frame, &self.session.config().layout);
                self.session.set_viewport_width(rect.width());
            });

        let had_actions = !actions.is_empty();
        for action in actions {
            self.handle_action(ctx, action);
        }
        if had_actions {
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.app_state.last_mode = self.session.mode();

        if let Err(e) = self.app_state.save() {
            tracing::warn!("Failed to save app state: {}", e);
        }
    }
}
