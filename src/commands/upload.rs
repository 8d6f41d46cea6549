// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Model archive upload command
//!
//! One-shot PUT of the local model archive to the FL repository. The three
//! outcomes (uploaded, rejected, archive missing) and any transport failure
//! all print a message and end the process normally; nothing here raises.

use std::path::Path;

use tracing::{debug, info};

use crate::config::Settings;
use crate::error::Result;

/// Multipart field name the repository expects
const ARCHIVE_FIELD: &str = "file";

/// Content type sent for the archive part
const ARCHIVE_CONTENT_TYPE: &str = "application/octet-stream";

/// Outcome of one upload attempt
#[derive(Debug)]
pub enum UploadOutcome {
    /// Repository accepted the archive (HTTP 204)
    Uploaded { status: u16, body: String },

    /// Repository answered with any other status
    Rejected { status: u16, body: String },

    /// The local archive does not exist
    MissingArchive,

    /// Request could not be built or sent
    Failed(String),
}

/// PUT the archive to the repository as multipart form data
///
/// Never returns an error; every failure mode folds into the outcome.
pub async fn upload_archive(archive: &Path, url: &str) -> UploadOutcome {
    let bytes = match std::fs::read(archive) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return UploadOutcome::MissingArchive;
        }
        Err(e) => return UploadOutcome::Failed(e.to_string()),
    };
    debug!(bytes = bytes.len(), url, "uploading model archive");

    let client = match reqwest::Client::builder()
        .user_agent(format!("wattscan/{}", env!("CARGO_PKG_VERSION")))
        .build()
    {
        Ok(client) => client,
        Err(e) => return UploadOutcome::Failed(e.to_string()),
    };

    let file_name = archive
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "model.zip".to_string());

    let part = match reqwest::multipart::Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(ARCHIVE_CONTENT_TYPE)
    {
        Ok(part) => part,
        Err(e) => return UploadOutcome::Failed(e.to_string()),
    };
    let form = reqwest::multipart::Form::new().part(ARCHIVE_FIELD, part);

    let response = match client.put(url).multipart(form).send().await {
        Ok(response) => response,
        Err(e) => return UploadOutcome::Failed(e.to_string()),
    };

    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    info!(status, "repository answered");

    if status == 204 {
        UploadOutcome::Uploaded { status, body }
    } else {
        UploadOutcome::Rejected { status, body }
    }
}

/// Execute the upload command
pub fn report_outcome(outcome: &UploadOutcome) {
    match outcome {
        UploadOutcome::Uploaded { status, body } => {
            println!("Status code: {}", status);
            println!("Response: {}", body);
            println!("Model uploaded successfully!");
        }
        UploadOutcome::Rejected { status, body } => {
            println!("Status code: {}", status);
            println!("Response: {}", body);
            println!("Model upload failed!");
        }
        UploadOutcome::MissingArchive => {
            println!("Model file not found!");
        }
        UploadOutcome::Failed(e) => {
            println!("Error uploading model: {}", e);
        }
    }
}

/// Upload the configured archive and print the outcome
pub async fn execute(settings: &Settings) -> Result<()> {
    println!("Uploading formatted ZIP model to FL Repository...");

    let outcome = upload_archive(&settings.upload.archive, &settings.upload.url).await;
    report_outcome(&outcome);

    Ok(())
}
