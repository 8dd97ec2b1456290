// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 pdflatch contributors

//! Status line classification: decides whether a message is presented as an error.

/// Presentation kind for the status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// Classify a status message for presentation.
///
/// Every validation and failure message in this app carries one of the
/// marker substrings below ("Error: ...", "Please ...", "Passwords do not
/// match"); everything else is progress or success text. The markers are
/// coupled to the literal message wording and pinned by tests, so do not
/// reword a status message without checking its classification.
pub fn classify(message: &str) -> StatusKind {
    const ERROR_MARKERS: [&str; 3] = ["Error", "Please", "match"];
    if ERROR_MARKERS.iter().any(|m| message.contains(m)) {
        StatusKind::Error
    } else {
        StatusKind::Success
    }
}

#[cfg(test)]
mod tests {
    use super::{StatusKind, classify};

    #[test]
    fn validation_messages_classify_as_error() {
        assert_eq!(classify("Please upload a PDF file"), StatusKind::Error);
        assert_eq!(classify("Please select a PDF file"), StatusKind::Error);
        assert_eq!(classify("Please enter a password"), StatusKind::Error);
        assert_eq!(classify("Passwords do not match"), StatusKind::Error);
    }

    #[test]
    fn service_failures_classify_as_error() {
        assert_eq!(classify("Error: bad password"), StatusKind::Error);
        assert_eq!(classify("Error: Failed to lock PDF"), StatusKind::Error);
        assert_eq!(classify("Error: Failed to unlock PDF"), StatusKind::Error);
    }

    #[test]
    fn progress_and_success_classify_as_success() {
        assert_eq!(classify("Unlocking PDF..."), StatusKind::Success);
        assert_eq!(classify("Locking PDF..."), StatusKind::Success);
        assert_eq!(
            classify("PDF unlocked successfully! Download started."),
            StatusKind::Success
        );
        assert_eq!(
            classify("PDF locked successfully! Download started."),
            StatusKind::Success
        );
        assert_eq!(classify("Download cancelled."), StatusKind::Success);
    }
}
