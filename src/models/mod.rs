// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: file data types and upload policies shared between the CLI,
//! the upload session, and validation logic.

pub mod file;
pub mod policy;
