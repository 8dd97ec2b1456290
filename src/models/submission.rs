// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 pdflatch contributors

//! Submission domain model: the selected file and the transform operation (UI-agnostic).

use std::path::Path;

use anyhow::{Context, Result, bail};

/// Only declared content type accepted for intake.
pub const PDF_MIME: &str = "application/pdf";

/// A fully read candidate file: name, declared content type, and raw bytes.
///
/// The declared type is derived from the filename extension, matching what a
/// picker or drop source would report for the file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Which of the two supported transforms the next submission will perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Operation {
    #[default]
    Unlock,
    Lock,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Unlock => "unlock",
            Operation::Lock => "lock",
        }
    }

    /// Service endpoint path for this operation.
    pub fn endpoint_path(&self) -> &'static str {
        match self {
            Operation::Unlock => "/api/unlock",
            Operation::Lock => "/api/lock",
        }
    }

    /// Status text shown while the request is in flight.
    pub fn progress_message(&self) -> &'static str {
        match self {
            Operation::Unlock => "Unlocking PDF...",
            Operation::Lock => "Locking PDF...",
        }
    }

    /// Fallback detail text when the service reports a failure without one.
    pub fn failure_message(&self) -> String {
        format!("Failed to {} PDF", self.as_str())
    }

    /// Status text shown once the transform succeeded and the download was offered.
    pub fn success_message(&self) -> String {
        format!("PDF {}ed successfully! Download started.", self.as_str())
    }

    /// Filename offered to the user for the transformed result.
    pub fn download_name(&self, original: &str) -> String {
        match self {
            Operation::Unlock => format!("unlocked_{original}"),
            Operation::Lock => format!("locked_{original}"),
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Operation::Unlock => "PDF Unlocker",
            Operation::Lock => "PDF Locker",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            Operation::Unlock => "Remove password protection from your PDF files",
            Operation::Lock => "Add password protection to your PDF files",
        }
    }

    pub fn password_label(&self) -> &'static str {
        match self {
            Operation::Unlock => "Current Password",
            Operation::Lock => "New Password",
        }
    }

    pub fn password_hint(&self) -> &'static str {
        match self {
            Operation::Unlock => "Enter current password",
            Operation::Lock => "Enter new password",
        }
    }
}

/// Declared content type for a candidate path, derived from its extension.
pub fn guess_mime(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// True when the path's declared content type is `application/pdf`.
pub fn is_pdf_candidate(path: &Path) -> bool {
    guess_mime(path) == PDF_MIME
}

/// Read a candidate file into memory as a [`SelectedFile`].
///
/// # Errors
///
/// Returns an error when the declared type is not PDF or the file cannot be read.
pub fn read_candidate(path: &Path) -> Result<SelectedFile> {
    let mime = guess_mime(path);
    if mime != PDF_MIME {
        bail!("Please upload a PDF file");
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document.pdf".to_string());
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read file: {:?}", path))?;

    Ok(SelectedFile { name, mime, bytes })
}
