//! Toolbar panel: mode selector, structure operations and view toggles.
//!
//! Sits above the canvas.

use egui::{Color32, RichText, Ui};

use crate::frontend::state::{
    insert_command, remove_command, reset_command, step_command, AppAction, ToolbarState,
};
use crate::session::Command;
use crate::types::Mode;

/// Context needed to render the toolbar.
pub struct ToolbarContext {
    pub mode: Mode,
    pub show_pseudocode: bool,
    pub dark_mode: bool,
    pub array_full: bool,
}

/// Render the main toolbar.
///
/// Returns actions to be applied by the app.
pub fn render_toolbar(
    ui: &mut Ui,
    ctx: &ToolbarContext,
    state: &mut ToolbarState,
) -> Vec<AppAction> {
    let mut actions = Vec::new();

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 4.0;

        render_mode_group(ui, ctx, &mut actions);

        ui.separator();

        render_operation_group(ui, ctx, state, &mut actions);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            render_view_group(ui, ctx, &mut actions);
        });
    });

    actions
}

fn render_mode_group(ui: &mut Ui, ctx: &ToolbarContext, actions: &mut Vec<AppAction>) {
    for (i, mode) in Mode::ALL.into_iter().enumerate() {
        let selected = ctx.mode == mode;
        let text = if selected {
            RichText::new(mode.label()).strong()
        } else {
            RichText::new(mode.label())
        };
        if ui
            .selectable_label(selected, text)
            .on_hover_text(format!("Show the {} ({})", mode.structure(), i + 1))
            .clicked()
            && !selected
        {
            actions.push(AppAction::Dispatch(Command::SelectMode(mode)));
        }
    }
}

fn render_operation_group(
    ui: &mut Ui,
    ctx: &ToolbarContext,
    state: &mut ToolbarState,
    actions: &mut Vec<AppAction>,
) {
    let value = state.insert_value();

    match ctx.mode {
        Mode::LinkedList => {
            if ui.button("Add Head").on_hover_text("Link a node before the head").clicked() {
                actions.push(AppAction::Dispatch(Command::ListInsertHead(value)));
            }
            if ui.button("Add Tail").on_hover_text("Append a node (Enter)").clicked() {
                actions.push(AppAction::Dispatch(insert_command(ctx.mode, value)));
            }
        }
        Mode::Bst => {
            if ui.button("Insert").on_hover_text("Insert a value (Enter)").clicked() {
                actions.push(AppAction::Dispatch(insert_command(ctx.mode, value)));
            }
        }
        Mode::Array => {
            let btn = egui::Button::new("Add Element");
            let response = ui.add(btn).on_hover_text(if ctx.array_full {
                "The array is at capacity"
            } else {
                "Append a value (Enter)"
            });
            if response.clicked() {
                actions.push(AppAction::Dispatch(insert_command(ctx.mode, value)));
            }
        }
    }

    if let Some(remove) = remove_command(ctx.mode) {
        let label = match ctx.mode {
            Mode::Array => "Remove Element",
            _ => "Remove Tail",
        };
        if ui.button(label).on_hover_text("Remove the last element (Delete)").clicked() {
            actions.push(AppAction::Dispatch(remove));
        }
    }

    if ui.button("Step").on_hover_text("Advance the traversal (Space)").clicked() {
        actions.push(AppAction::Dispatch(step_command(ctx.mode)));
    }

    let reset = egui::Button::new(RichText::new("Reset").color(Color32::WHITE))
        .fill(Color32::from_rgb(140, 50, 50));
    if ui.add(reset).on_hover_text("Start over (R)").clicked() {
        actions.push(AppAction::Dispatch(reset_command(ctx.mode)));
    }

    ui.separator();

    ui.checkbox(&mut state.use_custom, "Value:")
        .on_hover_text("Insert this value instead of a generated one");
    ui.add_enabled(
        state.use_custom,
        egui::DragValue::new(&mut state.custom_value).range(-999..=999),
    );
}

fn render_view_group(ui: &mut Ui, ctx: &ToolbarContext, actions: &mut Vec<AppAction>) {
    let theme = if ctx.dark_mode { "Light" } else { "Dark" };
    if ui.button(theme).on_hover_text("Switch color theme").clicked() {
        actions.push(AppAction::ToggleDarkMode);
    }
    if ui
        .selectable_label(ctx.show_pseudocode, "Pseudocode")
        .on_hover_text("Show or hide the pseudocode panel")
        .clicked()
    {
        actions.push(AppAction::TogglePseudocode);
    }
}
