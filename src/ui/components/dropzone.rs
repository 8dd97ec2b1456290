// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 pdflatch contributors

//! File drop zone: drag-and-drop target and click-to-browse affordance.

use eframe::egui;

use crate::models::submission::SelectedFile;

/// Messages emitted by the drop zone view.
pub enum DropZoneMsg {
    BrowseRequested,
}

/// Render the drop zone and return any messages triggered by user interaction.
///
/// The drag-active highlight is purely visual; actual file intake happens via
/// the window-level dropped-files input handled by the app shell.
pub fn view(
    ui: &mut egui::Ui,
    file: Option<&SelectedFile>,
    drag_active: bool,
) -> Vec<DropZoneMsg> {
    let mut msgs = Vec::new();

    let visuals = ui.visuals().clone();
    let stroke = if drag_active {
        egui::Stroke::new(2.0, visuals.selection.stroke.color)
    } else if file.is_some() {
        egui::Stroke::new(1.5, egui::Color32::from_rgb(46, 125, 50))
    } else {
        visuals.window_stroke()
    };

    let inner = egui::Frame::new()
        .fill(visuals.panel_fill)
        .stroke(stroke)
        .inner_margin(18.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| match file {
                Some(file) => {
                    ui.label(egui::RichText::new(egui_phosphor::regular::FILE_PDF).size(28.0));
                    ui.label(egui::RichText::new(&file.name).strong());
                    ui.label(
                        egui::RichText::new(format_bytes(file.size()))
                            .small()
                            .color(egui::Color32::from_gray(110)),
                    );
                }
                None => {
                    ui.label(egui::RichText::new(egui_phosphor::regular::UPLOAD_SIMPLE).size(28.0));
                    ui.label("Drag & drop your PDF here");
                    ui.label(
                        egui::RichText::new("or click to browse")
                            .small()
                            .color(egui::Color32::from_gray(110)),
                    );
                }
            });
        });

    let response = inner.response.interact(egui::Sense::click());
    if response
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .clicked()
    {
        msgs.push(DropZoneMsg::BrowseRequested);
    }

    msgs
}

/// Human-readable formatting for byte sizes with binary units.
fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::format_bytes;

    #[test]
    fn format_bytes_uses_binary_units() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.0 MB");
    }
}
