// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges
//! File-chip descriptors (icon family, fill colour, title) keyed by MIME type
//! or category.
//!
//! This helper is intentionally UI-agnostic so both rendering code and
//! non-UI logic can choose how to present a file. Resolution follows a fixed
//! chain: exact key, spreadsheet MIME, partial prefix (`text/x-`), category,
//! and finally the generic file descriptor.

use crate::utils::mime::{category, is_spreadsheet_mime};

/// Icon families a file chip can be drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconSet {
    File,
    Text,
    Sheet,
    Code,
}

impl IconSet {
    /// Phosphor glyph used to render this family.
    pub fn glyph(self) -> &'static str {
        match self {
            IconSet::File => egui_phosphor::regular::FILE,
            IconSet::Text => egui_phosphor::regular::FILE_TEXT,
            IconSet::Sheet => egui_phosphor::regular::FILE_XLS,
            IconSet::Code => egui_phosphor::regular::FILE_CODE,
        }
    }

    /// Stable lowercase name, handy for logs and CLI output.
    pub fn as_str(self) -> &'static str {
        match self {
            IconSet::File => "file",
            IconSet::Text => "text",
            IconSet::Sheet => "sheet",
            IconSet::Code => "code",
        }
    }
}

/// Presentation metadata for a file chip or thumbnail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileTypeDescriptor {
    pub icon: IconSet,
    /// CSS hex colour used as the chip background.
    pub fill: &'static str,
    pub title: &'static str,
}

pub const GENERIC_FILE: FileTypeDescriptor = FileTypeDescriptor {
    icon: IconSet::File,
    fill: "#0000FF",
    title: "File",
};

pub const TEXT_DOCUMENT: FileTypeDescriptor = FileTypeDescriptor {
    icon: IconSet::Text,
    fill: "#FF5588",
    title: "Document",
};

pub const SPREADSHEET: FileTypeDescriptor = FileTypeDescriptor {
    icon: IconSet::Sheet,
    fill: "#10A37F",
    title: "Spreadsheet",
};

pub const CODE_FILE: FileTypeDescriptor = FileTypeDescriptor {
    icon: IconSet::Code,
    fill: "#FF6E3C",
    title: "Code",
};

pub const ARTIFACT: FileTypeDescriptor = FileTypeDescriptor {
    icon: IconSet::Code,
    fill: "#2D305C",
    title: "Code",
};

/// Registered prefixes that match anywhere inside a type key.
pub const PARTIAL_TYPES: [&str; 1] = ["text/x-"];

/// Keys that resolve directly to a descriptor.
fn registered(key: &str) -> Option<FileTypeDescriptor> {
    match key {
        "file" => Some(GENERIC_FILE),
        "text" | "txt" | "application/pdf" | "pdf" => Some(TEXT_DOCUMENT),
        "csv" => Some(SPREADSHEET),
        "text/x-" => Some(CODE_FILE),
        "artifact" => Some(ARTIFACT),
        _ => None,
    }
}

/// Return the descriptor for a MIME type or category key.
///
/// Never fails: unknown keys fall back to the generic file descriptor, and an
/// empty key is treated as the `text` category.
///
/// # Examples
///
/// ```rust
/// use filekit::utils::file_icons::{classify, CODE_FILE, TEXT_DOCUMENT};
/// assert_eq!(classify("application/pdf"), TEXT_DOCUMENT);
/// assert_eq!(classify("text/x-python"), CODE_FILE);
/// ```
pub fn classify(type_key: &str) -> FileTypeDescriptor {
    if let Some(descriptor) = registered(type_key) {
        return descriptor;
    }

    if is_spreadsheet_mime(type_key) {
        return SPREADSHEET;
    }

    if let Some(descriptor) = PARTIAL_TYPES
        .iter()
        .find(|partial| type_key.contains(*partial))
        .and_then(|partial| registered(partial))
    {
        return descriptor;
    }

    let category = match category(type_key) {
        "" => "text",
        other => other,
    };
    registered(category).unwrap_or(GENERIC_FILE)
}
