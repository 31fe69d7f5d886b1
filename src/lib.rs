// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! File presentation and upload-policy helpers for chat clients.
//!
//! - [`utils::classify`] picks the icon, colour and title for a file chip.
//! - [`utils::format_bytes`] and [`utils::format_date`] format values for display.
//! - [`logic::upload::validate_files`] checks a selection against an endpoint policy.
//! - [`logic::cache::add_file_to_cache`] records a finished upload in the file list cache.
//! - [`mvu`] wires these together into an upload session.

pub mod logic;
pub mod models;
pub mod mvu;
pub mod utils;
