// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Pre-submission validation of a batch of selected files against an
//! endpoint's upload policy.
//!
//! Responsibilities:
//! - Reject empty batches and batches over the file-count limit.
//! - Infer MIME types for known code files from their extension.
//! - Enforce the supported-type, per-file and total size limits.
//! - Detect duplicates across already tracked and incoming files.
//!
//! Checks run in a fixed order and stop at the first violation.

use std::collections::HashSet;

use log::debug;
use thiserror::Error;

use crate::models::file::{CandidateFile, ExistingFile};
use crate::models::policy::EndpointUploadPolicy;
use crate::utils::format::Megabytes;
use crate::utils::localize::{FILES_DUPE, FILES_EMPTY, Localize, localize_or_key};
use crate::utils::mime::{code_type_for_extension, extension};

/// Reason a batch of files was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Empty files are not allowed.")]
    EmptyFiles,
    #[error("You can only upload up to {limit} files at a time.")]
    TooManyFiles { limit: usize },
    #[error("Unable to determine file type for: {name}")]
    UnknownType { name: String },
    #[error("Currently, unsupported file type: {mime}")]
    UnsupportedType { mime: String },
    #[error("File size exceeds {limit} MB.")]
    FileTooLarge { limit: Megabytes },
    #[error("The total size of the files cannot exceed {limit} MB.")]
    TotalTooLarge { limit: Megabytes },
    #[error("Duplicate file detected.")]
    DuplicateFiles,
}

impl UploadError {
    /// Localization identifier for errors that are shown translated.
    pub fn message_key(&self) -> Option<&'static str> {
        match self {
            UploadError::EmptyFiles => Some(FILES_EMPTY),
            UploadError::DuplicateFiles => Some(FILES_DUPE),
            _ => None,
        }
    }

    /// User-facing message, translated where an identifier exists.
    pub fn localized(&self, localizer: &dyn Localize) -> String {
        self.message_key()
            .map(|key| localize_or_key(localizer, key))
            .unwrap_or_else(|| self.to_string())
    }
}

/// Validate `candidates` and return them with corrected MIME types.
///
/// Existing files count towards the file limit, the total size limit and
/// duplicate detection. A candidate whose extension maps to a known code type
/// is rebound to a copy carrying that type.
///
/// # Errors
///
/// Returns the first violated rule.
pub fn check_files(
    candidates: &[CandidateFile],
    existing: &[ExistingFile],
    policy: &EndpointUploadPolicy,
) -> Result<Vec<CandidateFile>, UploadError> {
    let incoming_total: u64 = candidates.iter().map(|f| f.size).sum();
    if incoming_total == 0 {
        return Err(UploadError::EmptyFiles);
    }
    let current_total: u64 = existing.iter().map(|f| f.size).sum();

    if let Some(limit) = policy.file_limit.filter(|&n| n > 0)
        && candidates.len() + existing.len() > limit
    {
        return Err(UploadError::TooManyFiles { limit });
    }

    let mut checked = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let mut mime = candidate.mime.as_str();
        if let Some(known) = code_type_for_extension(extension(&candidate.name))
            && mime != known
        {
            mime = known;
        }

        if mime.is_empty() {
            return Err(UploadError::UnknownType {
                name: candidate.name.clone(),
            });
        }

        let file = if mime != candidate.mime {
            debug!(
                "Inferred type {mime} for {} (declared {:?})",
                candidate.name, candidate.mime
            );
            candidate.with_mime(mime)
        } else {
            candidate.clone()
        };

        if !policy.accepts(&file.mime) {
            return Err(UploadError::UnsupportedType { mime: file.mime });
        }

        if let Some(limit) = policy.file_size_limit.filter(|&n| n > 0)
            && file.size >= limit
        {
            return Err(UploadError::FileTooLarge {
                limit: Megabytes(limit),
            });
        }

        checked.push(file);
    }

    if let Some(limit) = policy.total_size_limit.filter(|&n| n > 0)
        && current_total.saturating_add(incoming_total) > limit
    {
        return Err(UploadError::TotalTooLarge {
            limit: Megabytes(limit),
        });
    }

    let fingerprints: HashSet<String> = existing
        .iter()
        .map(ExistingFile::fingerprint)
        .chain(checked.iter().map(CandidateFile::fingerprint))
        .collect();
    if fingerprints.len() < existing.len() + checked.len() {
        return Err(UploadError::DuplicateFiles);
    }

    Ok(checked)
}

/// Validate a batch in place, reporting a rejection through `report`.
///
/// On success the batch is replaced by its type-corrected version and `true`
/// is returned. On failure the batch is left untouched, `report` is called
/// exactly once, and `false` is returned.
pub fn validate_files(
    candidates: &mut Vec<CandidateFile>,
    existing: &[ExistingFile],
    policy: &EndpointUploadPolicy,
    mut report: impl FnMut(UploadError),
) -> bool {
    match check_files(candidates, existing, policy) {
        Ok(checked) => {
            *candidates = checked;
            true
        }
        Err(err) => {
            debug!("Rejected upload of {} file(s): {err}", candidates.len());
            report(err);
            false
        }
    }
}
