//! Status bar panel: latest message plus structure sizes.
//!
//! Sits below the canvas.

use egui::{Color32, RichText, Ui};

use crate::error::StatusLevel;
use crate::session::{StatusMessage, VisualizerSession};

fn level_color(level: StatusLevel) -> Color32 {
    match level {
        StatusLevel::Info => Color32::from_rgb(120, 200, 255),
        StatusLevel::Warning => Color32::from_rgb(255, 170, 60),
    }
}

fn status_line(message: &StatusMessage) -> String {
    format!("[{}] {}", message.at.format("%H:%M:%S"), message.text)
}

/// Render the status bar.
pub fn render_status_bar(ui: &mut Ui, session: &VisualizerSession) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        // === Latest message, full history on hover ===
        if let Some(message) = session.status() {
            ui.colored_label(level_color(message.level), "●");
            ui.label(RichText::new(&message.text).small())
                .on_hover_ui(|ui| {
                    for entry in session.status_history() {
                        ui.colored_label(
                            level_color(entry.level),
                            RichText::new(status_line(entry)).small().monospace(),
                        );
                    }
                });
        }

        // === Structure sizes (right-aligned) ===
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let array = session.array();
            ui.label(
                RichText::new(format!("Array: {}/{}", array.size(), array.capacity())).small(),
            );
            ui.separator();

            let bst = session.bst();
            ui.label(
                RichText::new(format!("BST: {} (height {})", bst.len(), bst.height())).small(),
            );
            ui.separator();

            ui.label(RichText::new(format!("List: {}", session.list().len())).small());
        });
    });
}
