// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shared helper utilities reused by rendering code and upload logic.

pub mod file_icons;
pub mod format;
pub mod localize;
pub mod mime;

/// Resolve the display descriptor for a MIME type or category.
pub use file_icons::classify;
/// Byte and date formatting for display.
pub use format::{format_bytes, format_date};
