// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Business logic: upload validation and file cache maintenance.

pub mod cache;
pub mod upload;
