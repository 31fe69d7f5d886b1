// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shared MIME tables: code-file extensions, spreadsheet variants, and the
//! default set of MIME patterns an endpoint accepts for upload.
//!
//! These mirror the client's shared file configuration and are kept as plain
//! `match` tables so every accepted key is visible in one place.

use std::path::Path;

use regex::Regex;

/// Bytes in one megabyte, used for all size limits.
pub const MEGABYTE: u64 = 1024 * 1024;

/// Default MIME patterns accepted when an endpoint does not configure its own.
pub const DEFAULT_SUPPORTED_MIME_PATTERNS: [&str; 4] = [
    r"^(text/(x-c|x-csharp|tab-separated-values|x-c\+\+|x-h|x-java|html|markdown|x-php|x-python|x-script\.python|x-ruby|x-tex|plain|css|vtt|javascript|csv|xml))$",
    r"^application/(vnd\.ms-excel|msexcel|x-msexcel|x-ms-excel|x-excel|x-dos_ms_excel|xls|x-xls|vnd\.openxmlformats-officedocument\.spreadsheetml\.sheet)$",
    r"^(application/(epub\+zip|csv|json|pdf|x-tar|x-sh|x-yaml|typescript|vnd\.openxmlformats-officedocument\.(wordprocessingml\.document|presentationml\.presentation|spreadsheetml\.sheet)|xml|zip))$",
    r"^image/(jpeg|gif|png|webp|heic|heif)$",
];

/// MIME type for a known code/text file extension.
///
/// Browsers often report an empty or generic type for source files; this
/// table lets upload validation infer the real one from the extension.
pub fn code_type_for_extension(extension: &str) -> Option<&'static str> {
    let mime = match extension {
        "c" => "text/x-c",
        "cs" => "text/x-csharp",
        "cpp" => "text/x-c++",
        "h" => "text/x-h",
        "md" => "text/markdown",
        "php" => "text/x-php",
        "py" => "text/x-python",
        "rb" => "text/x-ruby",
        "tex" => "text/x-tex",
        "js" => "text/javascript",
        "sh" => "application/x-sh",
        "ts" => "application/typescript",
        "tar" => "application/x-tar",
        "zip" => "application/zip",
        "yml" | "yaml" => "application/x-yaml",
        "log" => "text/plain",
        _ => return None,
    };
    Some(mime)
}

/// True for the MIME variants spreadsheet applications report.
pub fn is_spreadsheet_mime(mime: &str) -> bool {
    let Some(subtype) = mime.strip_prefix("application/") else {
        return false;
    };
    matches!(
        subtype,
        "vnd.ms-excel"
            | "msexcel"
            | "x-msexcel"
            | "x-ms-excel"
            | "x-excel"
            | "x-dos_ms_excel"
            | "xls"
            | "x-xls"
            | "vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    )
}

/// Top-level category of a MIME type (the part before the first `/`).
pub fn category(mime: &str) -> &str {
    mime.split('/').next().unwrap_or_default()
}

/// Extension used for code-type inference: everything after the last `.`.
///
/// A name without a dot yields the whole name, which never matches the code
/// table, so it behaves like "no extension".
pub fn extension(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or_default()
}

/// Compile the default supported MIME patterns.
pub fn default_supported_mime_types() -> Vec<Regex> {
    DEFAULT_SUPPORTED_MIME_PATTERNS
        .iter()
        .filter_map(|pattern| Regex::new(pattern).ok())
        .collect()
}

/// Return true when any pattern accepts the MIME type.
pub fn check_type(mime: &str, supported: &[Regex]) -> bool {
    supported.iter().any(|pattern| pattern.is_match(mime))
}

/// Guess a declared MIME type from a path, empty when the extension is unknown.
pub fn guess_mime(path: &Path) -> String {
    mime_guess::from_path(path)
        .first()
        .map(|mime| mime.essence_str().to_string())
        .unwrap_or_default()
}
