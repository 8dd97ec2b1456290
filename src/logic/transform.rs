// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 pdflatch contributors

//! Multipart transform requests against the PDF lock/unlock service.
//!
//! Responsibilities:
//! - Build the two-part multipart payload (`file` bytes + `password` text).
//! - Issue one blocking POST per submission to the operation's endpoint.
//! - Turn failure responses and transport errors into user-facing detail text.

use anyhow::{Result, bail};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::models::submission::{Operation, PDF_MIME, SelectedFile};

/// Default service address, matching the backend's local bind address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding the service base URL.
pub const BASE_URL_ENV: &str = "PDFLATCH_API_URL";

/// Where to reach the transform service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    base_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ServiceConfig {
    /// Build a config for the given base address, tolerating a trailing slash.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Read the base address from the environment, falling back to the default.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => Self::new(value.trim()),
            _ => Self::default(),
        }
    }

    /// Full endpoint URL for one operation.
    pub fn endpoint(&self, operation: Operation) -> String {
        format!("{}{}", self.base_url, operation.endpoint_path())
    }
}

/// Error body shape returned by the service on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Result bytes plus the filename offered to the user for download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransformOutput {
    /// Operation the request was submitted under.
    pub operation: Operation,
    /// Derived download filename (`unlocked_<name>` or `locked_<name>`).
    pub file_name: String,
    /// Opaque transformed PDF bytes.
    pub bytes: Vec<u8>,
}

/// Submit one transform request and return the result bytes.
///
/// Exactly one attempt is made; the caller's in-flight flag is the only
/// guard against concurrent submissions. The error message is the
/// user-facing detail text: the service's `detail` field when present, the
/// generic per-operation fallback when the failure body is missing or
/// unparseable, or the transport error's own text when the request never
/// completed.
pub fn transform(
    config: &ServiceConfig,
    operation: Operation,
    file: &SelectedFile,
    password: &str,
) -> Result<TransformOutput> {
    let url = config.endpoint(operation);
    debug!(
        url = %url,
        file = %file.name,
        size = file.bytes.len(),
        "submitting {} request",
        operation.as_str()
    );

    let part = reqwest::blocking::multipart::Part::bytes(file.bytes.clone())
        .file_name(file.name.clone())
        .mime_str(PDF_MIME)?;
    let form = reqwest::blocking::multipart::Form::new()
        .part("file", part)
        .text("password", password.to_string());

    let client = reqwest::blocking::Client::builder().build()?;
    let response = client.post(&url).multipart(form).send()?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        let detail = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|e| e.detail)
            .unwrap_or_else(|| operation.failure_message());
        warn!(status = %status, detail = %detail, "transform rejected by service");
        bail!(detail);
    }

    let bytes = response.bytes()?.to_vec();
    debug!(size = bytes.len(), "transform succeeded");

    Ok(TransformOutput {
        operation,
        file_name: operation.download_name(&file.name),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Read;
    use std::thread::JoinHandle;

    use super::{DEFAULT_BASE_URL, ServiceConfig, transform};
    use crate::models::submission::{Operation, PDF_MIME, SelectedFile};

    /// Captured request plus the response the fake service sent.
    struct Received {
        method: String,
        url: String,
        body: Vec<u8>,
    }

    /// One-shot fake service answering a single request with the given body/status.
    fn spawn_service(status: u16, response_body: Vec<u8>) -> (ServiceConfig, JoinHandle<Received>) {
        let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
        let port = server.server_addr().to_ip().unwrap().port();

        let handle = std::thread::spawn(move || {
            let mut request = server.recv().unwrap();
            let mut body = Vec::new();
            request.as_reader().read_to_end(&mut body).unwrap();
            let received = Received {
                method: request.method().as_str().to_string(),
                url: request.url().to_string(),
                body,
            };
            let response = tiny_http::Response::from_data(response_body).with_status_code(status);
            request.respond(response).unwrap();
            received
        });

        (ServiceConfig::new(format!("http://127.0.0.1:{port}")), handle)
    }

    fn sample_file() -> SelectedFile {
        SelectedFile {
            name: "report.pdf".to_string(),
            mime: PDF_MIME.to_string(),
            bytes: b"%PDF-1.4 original".to_vec(),
        }
    }

    #[test]
    fn success_returns_bytes_and_derived_name() {
        let (config, handle) = spawn_service(200, b"%PDF-1.4 unlocked".to_vec());

        let output = transform(&config, Operation::Unlock, &sample_file(), "secret")
            .expect("transform succeeds");

        assert_eq!(output.operation, Operation::Unlock);
        assert_eq!(output.file_name, "unlocked_report.pdf");
        assert_eq!(output.bytes, b"%PDF-1.4 unlocked");

        let received = handle.join().unwrap();
        assert_eq!(received.method, "POST");
        assert_eq!(received.url, "/api/unlock");
    }

    #[test]
    fn request_carries_file_and_password_parts() {
        let (config, handle) = spawn_service(200, b"ok".to_vec());

        transform(&config, Operation::Lock, &sample_file(), "hunter2").unwrap();

        let received = handle.join().unwrap();
        assert_eq!(received.url, "/api/lock");
        let body = String::from_utf8_lossy(&received.body);
        assert!(body.contains("name=\"file\""), "missing file part");
        assert!(body.contains("filename=\"report.pdf\""));
        assert!(body.contains("name=\"password\""), "missing password part");
        assert!(body.contains("hunter2"));
        // The confirmation password is client-side only and never transmitted.
        assert!(!body.contains("confirm"));
    }

    #[test]
    fn failure_surfaces_service_detail() {
        let (config, handle) = spawn_service(400, br#"{"detail":"bad password"}"#.to_vec());

        let err = transform(&config, Operation::Lock, &sample_file(), "wrong").unwrap_err();

        assert_eq!(err.to_string(), "bad password");
        handle.join().unwrap();
    }

    #[test]
    fn failure_without_detail_falls_back_to_generic_message() {
        let (config, handle) = spawn_service(500, b"".to_vec());

        let err = transform(&config, Operation::Lock, &sample_file(), "pw").unwrap_err();

        assert_eq!(err.to_string(), "Failed to lock PDF");
        handle.join().unwrap();
    }

    #[test]
    fn failure_with_unparseable_body_falls_back_too() {
        let (config, handle) = spawn_service(502, b"<html>gateway error</html>".to_vec());

        let err = transform(&config, Operation::Unlock, &sample_file(), "pw").unwrap_err();

        assert_eq!(err.to_string(), "Failed to unlock PDF");
        handle.join().unwrap();
    }

    #[test]
    fn transport_failure_yields_error_text() {
        // Nothing listens on port 1; the request never completes.
        let config = ServiceConfig::new("http://127.0.0.1:1");

        let err = transform(&config, Operation::Unlock, &sample_file(), "pw").unwrap_err();

        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn config_joins_endpoints_and_trims_trailing_slash() {
        let config = ServiceConfig::new("http://example.test:9000/");
        assert_eq!(
            config.endpoint(Operation::Unlock),
            "http://example.test:9000/api/unlock"
        );
        assert_eq!(
            config.endpoint(Operation::Lock),
            "http://example.test:9000/api/lock"
        );

        let default = ServiceConfig::default();
        assert_eq!(
            default.endpoint(Operation::Unlock),
            format!("{DEFAULT_BASE_URL}/api/unlock")
        );
    }
}
