// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Model-View-Update kernel for an upload session: selected files are
//! validated, tracked while uploading, and inserted into the file list cache
//! once the server confirms them.

use log::info;
use uuid::Uuid;

use crate::logic::cache::{CacheInsert, MemoryCache, add_file_to_cache};
use crate::logic::upload::check_files;
use crate::models::file::{CandidateFile, ExistingFile, FileRecord};
use crate::models::policy::EndpointUploadPolicy;
use crate::utils::localize::{English, Localize};

/// A file tracked by the session under its client-side temporary id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackedFile {
    pub temp_file_id: String,
    pub file: ExistingFile,
}

/// Upload session state.
pub struct UploadModel {
    /// Tracked files in selection order.
    files: Vec<TrackedFile>,
    /// Policy of the endpoint files are uploaded to.
    policy: EndpointUploadPolicy,
    /// Cached list of the user's uploaded files.
    pub cache: MemoryCache,
    localizer: Box<dyn Localize>,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Latest error message to display.
    pub error: Option<String>,
}

impl UploadModel {
    pub fn new(policy: EndpointUploadPolicy) -> Self {
        Self {
            files: Vec::new(),
            policy,
            cache: MemoryCache::default(),
            localizer: Box::new(English),
            status: None,
            error: None,
        }
    }

    /// Use a different source for localized error messages.
    pub fn with_localizer(mut self, localizer: impl Localize + 'static) -> Self {
        self.localizer = Box::new(localizer);
        self
    }

    /// Tracked files in selection order.
    pub fn files(&self) -> &[TrackedFile] {
        &self.files
    }

    fn existing(&self) -> Vec<ExistingFile> {
        self.files.iter().map(|t| t.file.clone()).collect()
    }
}

/// Messages routed through [`update`].
#[derive(Debug)]
pub enum Msg {
    /// The user picked files to upload.
    FilesSelected(Vec<CandidateFile>),
    /// The server accepted the file tracked under `temp_file_id`.
    UploadCompleted {
        temp_file_id: String,
        record: FileRecord,
    },
    /// The upload of a tracked file failed.
    UploadFailed { temp_file_id: String, error: String },
    /// Stop tracking a file.
    Remove(String),
    DismissError,
}

/// Side effects requested by [`update`].
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Upload {
        temp_file_id: String,
        file: CandidateFile,
    },
}

/// Apply a message to the session and enqueue commands.
pub fn update(model: &mut UploadModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::FilesSelected(candidates) => {
            let existing = model.existing();
            match check_files(&candidates, &existing, &model.policy) {
                Ok(checked) => {
                    let count = checked.len();
                    for file in checked {
                        let temp_file_id = Uuid::new_v4().to_string();
                        model.files.push(TrackedFile {
                            temp_file_id: temp_file_id.clone(),
                            file: ExistingFile::from_candidate(file.clone()),
                        });
                        cmds.push(Command::Upload { temp_file_id, file });
                    }
                    surface_event(model, format!("Uploading {count} file(s)"), false);
                }
                Err(err) => {
                    let message = err.localized(model.localizer.as_ref());
                    surface_event(model, message, true);
                }
            }
        }
        Msg::UploadCompleted {
            temp_file_id,
            mut record,
        } => {
            if let Some(tracked) = model
                .files
                .iter_mut()
                .find(|t| t.temp_file_id == temp_file_id)
            {
                tracked.file.file_id = Some(record.file_id);
            }
            record.temp_file_id = Some(temp_file_id);
            let filename = record.filename.clone();
            if add_file_to_cache(&mut model.cache, record) == CacheInsert::Inserted {
                info!("Cached uploaded file {filename}");
            }
            surface_event(model, format!("Uploaded {filename}"), false);
        }
        Msg::UploadFailed {
            temp_file_id,
            error,
        } => {
            model.files.retain(|t| t.temp_file_id != temp_file_id);
            surface_event(model, format!("Upload failed: {error}"), true);
        }
        Msg::Remove(temp_file_id) => {
            model.files.retain(|t| t.temp_file_id != temp_file_id);
        }
        Msg::DismissError => model.error = None,
    }
}

fn surface_event(model: &mut UploadModel, message: String, is_error: bool) {
    if is_error {
        model.error = Some(message);
    } else {
        model.status = Some(message);
    }
}
