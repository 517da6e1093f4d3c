//! Side panels
//!
//! - [`render_pseudocode_panel`] - explanation and pseudocode for the active mode

use egui::{RichText, Ui};

use crate::types::Mode;

/// Explanation and pseudocode of the structure on screen
pub fn render_pseudocode_panel(ui: &mut Ui, mode: Mode) {
    ui.heading(mode.label());
    ui.add_space(4.0);
    ui.label(mode.explanation());
    ui.separator();

    ui.label(RichText::new("Pseudocode").strong());
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.label(RichText::new(mode.pseudocode()).monospace());
    });
}
