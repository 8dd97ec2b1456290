// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 pdflatch contributors

//! Top-level egui application shell for the PDF lock/unlock form.
//! Handles layout, form controls, and wiring to the transform service.

pub mod components;

use std::path::PathBuf;

use eframe::egui;

use crate::logic::transform::ServiceConfig;
use crate::models::status::{StatusKind, classify};
use crate::models::submission::Operation;
use crate::mvu::{self, AppModel, Command, Msg};
use crate::ui::components::dropzone::{self, DropZoneMsg};

/// Stateful egui application driving the submission form.
pub struct PdfLatchApp {
    model: AppModel,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl Default for PdfLatchApp {
    fn default() -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        // Two workers: one can sit in the transform request while the other
        // serves file dialogs.
        for _ in 0..2 {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            std::thread::spawn(move || {
                for cmd in cmd_rx.iter() {
                    let msg = mvu::run_command(cmd);
                    let _ = msg_tx.send(msg);
                }
            });
        }

        Self {
            model: AppModel {
                service: ServiceConfig::from_env(),
                ..Default::default()
            },
            inbox: Vec::new(),
            cmd_tx,
            msg_rx,
        }
    }
}

impl eframe::App for PdfLatchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);
        self.collect_drop_input(ctx);

        // Pull messages produced by the command workers.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.inbox.push(msg);
        }

        // Process pending messages until exhausted.
        let mut msgs = std::mem::take(&mut self.inbox);
        while let Some(msg) = msgs.pop() {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                let _ = self.cmd_tx.send(cmd);
            }
        }
        self.inbox = msgs;

        // Keep polling the worker channel while a request is outstanding.
        if self.model.loading {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(12.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                self.render_header(ui);
                ui.add_space(16.0);

                self.render_drop_zone(ui);
                ui.add_space(12.0);

                self.render_password_inputs(ui);
                ui.add_space(16.0);

                self.render_submit_button(ui);
                ui.add_space(8.0);
            });
        });
    }
}

impl PdfLatchApp {
    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    /// Track window-level drag-hover state and dropped files.
    ///
    /// Hover only drives the drop zone highlight; drops feed the intake path.
    fn collect_drop_input(&mut self, ctx: &egui::Context) {
        let hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());
        if hovering != self.model.drag_active {
            self.inbox.push(Msg::DragHover(hovering));
        }

        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });
        if !dropped.is_empty() {
            self.inbox.push(Msg::FilesDropped(dropped));
        }
    }

    /// Render the operation icon, heading, tagline, and mode toggle.
    fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(self.operation_icon()).size(32.0));
            ui.heading(self.model.operation.heading());
            ui.label(
                egui::RichText::new(self.model.operation.tagline())
                    .small()
                    .color(egui::Color32::from_gray(110)),
            );
            ui.add_space(8.0);
            self.render_mode_toggle(ui);
        });
    }

    fn operation_icon(&self) -> &'static str {
        match self.model.operation {
            Operation::Unlock => egui_phosphor::regular::LOCK_OPEN,
            Operation::Lock => egui_phosphor::regular::LOCK,
        }
    }

    /// Render segmented controls to choose between the two transform modes.
    ///
    /// Switching keeps the selected file; only the password fields and labels
    /// change. Disabled while a request is in flight.
    fn render_mode_toggle(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let unlock = egui::Button::new(format!(
                "{} Unlock",
                egui_phosphor::regular::LOCK_OPEN
            ))
            .selected(matches!(self.model.operation, Operation::Unlock));
            if ui.add_enabled(!self.model.loading, unlock).clicked() {
                self.inbox.push(Msg::SetOperation(Operation::Unlock));
            }

            let lock = egui::Button::new(format!("{} Lock", egui_phosphor::regular::LOCK))
                .selected(matches!(self.model.operation, Operation::Lock));
            if ui.add_enabled(!self.model.loading, lock).clicked() {
                self.inbox.push(Msg::SetOperation(Operation::Lock));
            }
        });
    }

    /// Render the drop zone and map its messages into the app inbox.
    fn render_drop_zone(&mut self, ui: &mut egui::Ui) {
        let msgs = dropzone::view(ui, self.model.file.as_ref(), self.model.drag_active);
        if self.model.loading {
            return;
        }
        for msg in msgs {
            match msg {
                DropZoneMsg::BrowseRequested => self.inbox.push(Msg::RequestPickFile),
            }
        }
    }

    /// Render the password field, plus the confirmation field in lock mode.
    fn render_password_inputs(&mut self, ui: &mut egui::Ui) {
        ui.label(self.model.operation.password_label());
        let mut password = self.model.password.clone();
        if ui
            .add_enabled(
                !self.model.loading,
                egui::TextEdit::singleline(&mut password)
                    .password(true)
                    .hint_text(self.model.operation.password_hint())
                    .desired_width(f32::INFINITY),
            )
            .changed()
        {
            self.inbox.push(Msg::PasswordChanged(password));
        }

        if self.model.operation == Operation::Lock {
            ui.add_space(6.0);
            ui.label("Confirm Password");
            let mut confirm = self.model.confirm_password.clone();
            if ui
                .add_enabled(
                    !self.model.loading,
                    egui::TextEdit::singleline(&mut confirm)
                        .password(true)
                        .hint_text("Confirm new password")
                        .desired_width(f32::INFINITY),
                )
                .changed()
            {
                self.inbox.push(Msg::ConfirmPasswordChanged(confirm));
            }
        }
    }

    /// Render the submit button, enabled only when the pre-flight validator
    /// would currently pass and no request is in flight.
    fn render_submit_button(&mut self, ui: &mut egui::Ui) {
        let enabled = mvu::can_submit(&self.model);
        let label = if self.model.loading {
            match self.model.operation {
                Operation::Unlock => "Unlocking...".to_string(),
                Operation::Lock => "Locking...".to_string(),
            }
        } else {
            match self.model.operation {
                Operation::Unlock => {
                    format!("{} Unlock & Download", egui_phosphor::regular::LOCK_OPEN)
                }
                Operation::Lock => format!("{} Lock & Download", egui_phosphor::regular::LOCK),
            }
        };

        let button = egui::Button::new(label).min_size(egui::vec2(ui.available_width(), 32.0));
        if ui
            .add_enabled(enabled, button)
            .on_disabled_hover_text("Select a PDF and enter a password first")
            .clicked()
        {
            self.inbox.push(Msg::SubmitRequested);
        }
    }

    /// Render the latest status message, colored by its classification.
    fn render_status(&self, ui: &mut egui::Ui) {
        if let Some(text) = &self.model.status {
            let color = match classify(text) {
                StatusKind::Error => ui.visuals().error_fg_color,
                StatusKind::Success => egui::Color32::from_rgb(46, 125, 50),
            };
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(text).color(color));
                if self.model.loading {
                    ui.add(egui::Spinner::new().size(14.0));
                }
            });
        }
    }
}
