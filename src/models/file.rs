// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! File domain models: files picked for upload, files already tracked by an
//! upload session, and uploaded file records as cached by the client.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::file_icons::{FileTypeDescriptor, classify};
use crate::utils::format::format_date;
use crate::utils::mime::{category, guess_mime};

/// A file selected by the user and not yet submitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateFile {
    pub name: String,
    /// Declared MIME type; empty when the picker could not tell.
    pub mime: String,
    /// Size in bytes.
    pub size: u64,
}

impl CandidateFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size,
        }
    }

    /// Build a candidate from a local file.
    ///
    /// The declared type is guessed from the extension and left empty when
    /// the extension is unknown, matching what a browser file picker reports.
    ///
    /// # Errors
    ///
    /// Returns an error when the path has no file name or its metadata cannot
    /// be read.
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .with_context(|| format!("Path has no file name: {:?}", path))?;
        let size = path
            .metadata()
            .with_context(|| format!("Failed to read file metadata: {:?}", path))?
            .len();
        Ok(Self::new(name, guess_mime(path), size))
    }

    /// Same file (name and size) carrying a different declared type.
    pub fn with_mime(&self, mime: impl Into<String>) -> Self {
        Self {
            name: self.name.clone(),
            mime: mime.into(),
            size: self.size,
        }
    }

    /// Duplicate-detection key: name, size and top-level type category.
    pub fn fingerprint(&self) -> String {
        fingerprint(&self.name, self.size, Some(&self.mime))
    }
}

/// A file already tracked by the current upload session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExistingFile {
    pub filename: String,
    pub size: u64,
    pub mime: Option<String>,
    /// Raw file the entry was created from, when still available.
    pub file: Option<CandidateFile>,
    /// Server-side id once the upload finished.
    pub file_id: Option<Uuid>,
}

impl ExistingFile {
    /// Track a validated candidate.
    pub fn from_candidate(candidate: CandidateFile) -> Self {
        Self {
            filename: candidate.name.clone(),
            size: candidate.size,
            mime: Some(candidate.mime.clone()),
            file: Some(candidate),
            file_id: None,
        }
    }

    /// Display name, preferring the raw file's name.
    pub fn name(&self) -> &str {
        self.file
            .as_ref()
            .map(|f| f.name.as_str())
            .unwrap_or(self.filename.as_str())
    }

    /// Duplicate-detection key; an unknown type counts as the `file` category.
    pub fn fingerprint(&self) -> String {
        fingerprint(self.name(), self.size, self.mime.as_deref())
    }
}

fn fingerprint(name: &str, size: u64, mime: Option<&str>) -> String {
    let category = mime.map(category).unwrap_or("file");
    format!("{name}-{size}-{category}")
}

/// An uploaded file as returned by the server and stored in the file list cache.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    pub file_id: Uuid,
    /// Client-side id the upload was tracked under before the server replied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_file_id: Option<String>,
    pub filename: String,
    pub filepath: String,
    #[serde(rename = "type")]
    pub mime: String,
    pub bytes: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(
        rename = "createdAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
    #[serde(
        rename = "updatedAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<String>,
}

impl FileRecord {
    /// Chip descriptor for this record's MIME type.
    pub fn descriptor(&self) -> FileTypeDescriptor {
        classify(&self.mime)
    }

    /// Creation date formatted for display, empty when unknown.
    pub fn display_date(&self, compact: bool) -> Result<String> {
        format_date(self.created_at.as_deref().unwrap_or_default(), compact)
    }
}
