// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 pdflatch contributors

//! Root Model-View-Update kernel wiring submission state, messages, and commands.

use std::path::PathBuf;

use crate::logic::transform::{self, ServiceConfig, TransformOutput};
use crate::models::submission::{self, Operation, SelectedFile};

/// Top-level application state: the one in-memory submission.
#[derive(Default)]
pub struct AppModel {
    /// Accepted PDF file, if any.
    pub file: Option<SelectedFile>,
    /// Password for the next submission.
    pub password: String,
    /// Confirmation password, only meaningful in lock mode.
    pub confirm_password: String,
    /// Which transform the next submission performs.
    pub operation: Operation,
    /// Latest status message to display, if any.
    pub status: Option<String>,
    /// True while a transform request is in flight.
    pub loading: bool,
    /// True while files hover over the window (visual only).
    pub drag_active: bool,
    /// Transform service address.
    pub service: ServiceConfig,
}

/// Application messages routed through the update function.
pub enum Msg {
    PasswordChanged(String),
    ConfirmPasswordChanged(String),
    SetOperation(Operation),
    RequestPickFile,
    /// Picker result; `None` means the dialog was cancelled.
    FilePicked(Option<PathBuf>),
    /// Files dropped onto the window; only the first entry is used.
    FilesDropped(Vec<PathBuf>),
    DragHover(bool),
    /// Candidate file read into memory, or the failure text.
    CandidateRead(Result<SelectedFile, String>),
    SubmitRequested,
    /// Transform finished; `Err` carries the user-facing detail text.
    TransformCompleted(Result<TransformOutput, String>),
    /// Result bytes written to disk, or the failure text.
    DownloadSaved(Result<PathBuf, String>),
    DownloadCancelled,
}

/// Commands represent side-effects executed between frames.
pub enum Command {
    PickFile,
    ReadCandidate(PathBuf),
    Transform(TransformPayload),
    SaveDownload { file_name: String, bytes: Vec<u8> },
}

/// Captured, validated data for one transform request.
///
/// Copies are taken at submit time, so edits made while the request is in
/// flight only affect the next submission.
pub struct TransformPayload {
    pub config: ServiceConfig,
    pub operation: Operation,
    pub file: SelectedFile,
    pub password: String,
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::PasswordChanged(text) => model.password = text,
        Msg::ConfirmPasswordChanged(text) => model.confirm_password = text,
        Msg::SetOperation(operation) => model.operation = operation,
        Msg::DragHover(active) => model.drag_active = active,
        Msg::RequestPickFile => cmds.push(Command::PickFile),
        Msg::FilePicked(None) => {}
        Msg::FilePicked(Some(path)) => intake_candidate(model, path, cmds),
        Msg::FilesDropped(paths) => {
            model.drag_active = false;
            if let Some(path) = paths.into_iter().next() {
                intake_candidate(model, path, cmds);
            }
        }
        Msg::CandidateRead(Ok(file)) => {
            model.file = Some(file);
            model.status = None;
        }
        Msg::CandidateRead(Err(detail)) => {
            model.status = Some(format!("Error: {detail}"));
        }
        Msg::SubmitRequested => {
            if model.loading {
                return;
            }
            match validate_for_submit(model) {
                Ok(payload) => {
                    model.loading = true;
                    model.status = Some(payload.operation.progress_message().to_string());
                    cmds.push(Command::Transform(payload));
                }
                Err(message) => model.status = Some(message),
            }
        }
        Msg::TransformCompleted(Ok(output)) => {
            model.loading = false;
            model.status = Some(output.operation.success_message());
            model.file = None;
            model.password.clear();
            model.confirm_password.clear();
            cmds.push(Command::SaveDownload {
                file_name: output.file_name,
                bytes: output.bytes,
            });
        }
        Msg::TransformCompleted(Err(detail)) => {
            model.loading = false;
            model.status = Some(format!("Error: {detail}"));
        }
        Msg::DownloadSaved(Ok(path)) => {
            model.status = Some(format!("Saved to {}", path.display()));
        }
        Msg::DownloadSaved(Err(detail)) => {
            model.status = Some(format!("Error: {detail}"));
        }
        Msg::DownloadCancelled => {
            model.status = Some("Download cancelled.".to_string());
        }
    }
}

/// Gate a candidate file on its declared content type before reading it.
///
/// Rejection is recoverable and surfaced only through the status line; an
/// already accepted file stays selected.
fn intake_candidate(model: &mut AppModel, path: PathBuf, cmds: &mut Vec<Command>) {
    if submission::is_pdf_candidate(&path) {
        cmds.push(Command::ReadCandidate(path));
    } else {
        model.status = Some("Please upload a PDF file".to_string());
    }
}

/// Execute a command on a worker thread and return the resulting message.
pub fn run_command(cmd: Command) -> Msg {
    match cmd {
        Command::PickFile => {
            let file = rfd::FileDialog::new()
                .set_title("Select a PDF")
                .add_filter("PDF", &["pdf"])
                .pick_file();
            Msg::FilePicked(file)
        }
        Command::ReadCandidate(path) => {
            Msg::CandidateRead(submission::read_candidate(&path).map_err(|e| e.to_string()))
        }
        Command::Transform(payload) => Msg::TransformCompleted(
            transform::transform(
                &payload.config,
                payload.operation,
                &payload.file,
                &payload.password,
            )
            .map_err(|e| e.to_string()),
        ),
        Command::SaveDownload { file_name, bytes } => {
            let dialog = rfd::FileDialog::new()
                .set_title("Save transformed PDF")
                .add_filter("PDF", &["pdf"])
                .set_file_name(&file_name);
            match dialog.save_file() {
                Some(path) => match std::fs::write(&path, &bytes) {
                    Ok(()) => Msg::DownloadSaved(Ok(path)),
                    Err(err) => Msg::DownloadSaved(Err(err.to_string())),
                },
                None => Msg::DownloadCancelled,
            }
        }
    }
}

/// Pre-flight validator: fixed order, first failure wins, no network involved.
pub fn validate_for_submit(model: &AppModel) -> Result<TransformPayload, String> {
    let Some(file) = model.file.as_ref() else {
        return Err("Please select a PDF file".to_string());
    };

    if model.password.is_empty() {
        return Err("Please enter a password".to_string());
    }

    if model.operation == Operation::Lock && model.password != model.confirm_password {
        return Err("Passwords do not match".to_string());
    }

    Ok(TransformPayload {
        config: model.service.clone(),
        operation: model.operation,
        file: file.clone(),
        password: model.password.clone(),
    })
}

/// Whether the submit control should currently be enabled.
pub fn can_submit(model: &AppModel) -> bool {
    !model.loading && validate_for_submit(model).is_ok()
}
