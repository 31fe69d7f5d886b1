// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Lookup of localized UI strings by identifier.

/// Identifier reported when every selected file is empty.
pub const FILES_EMPTY: &str = "com_error_files_empty";
/// Identifier reported when a selection contains duplicate files.
pub const FILES_DUPE: &str = "com_error_files_dupe";

/// Source of localized strings.
pub trait Localize {
    /// Localized text for `key`, or `None` when the key is unknown.
    fn localize(&self, key: &str) -> Option<String>;
}

/// Built-in English strings.
#[derive(Clone, Copy, Debug, Default)]
pub struct English;

impl Localize for English {
    fn localize(&self, key: &str) -> Option<String> {
        let text = match key {
            FILES_EMPTY => "Empty files are not allowed.",
            FILES_DUPE => "Duplicate file detected.",
            _ => return None,
        };
        Some(text.to_string())
    }
}

/// Localize `key`, falling back to the key itself.
pub fn localize_or_key(localizer: &dyn Localize, key: &str) -> String {
    localizer.localize(key).unwrap_or_else(|| key.to_string())
}
