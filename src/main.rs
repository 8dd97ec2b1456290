// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 pdflatch contributors

mod logic;
mod models;
mod mvu;
mod ui;

use eframe::egui;
use egui_phosphor::Variant;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([460.0, 620.0])
            .with_min_inner_size([400.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        "pdflatch",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(ui::PdfLatchApp::default()))
        }),
    )
}
