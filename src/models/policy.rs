// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Per-endpoint upload policies and the file configuration they are loaded from.
//! Parsing is kept pure so the same policy can drive the CLI and a UI session.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;
use serde::Deserialize;

use crate::utils::mime::{MEGABYTE, check_type, default_supported_mime_types};

/// Name of the endpoint entry used when a specific endpoint is not configured.
pub const DEFAULT_ENDPOINT: &str = "default";

/// Upload limits and accepted MIME types for one endpoint.
///
/// Limits of zero in configuration are treated as "no limit".
#[derive(Clone, Debug, Deserialize)]
#[serde(try_from = "RawEndpointPolicy")]
pub struct EndpointUploadPolicy {
    /// Maximum number of files tracked at once (existing plus incoming).
    pub file_limit: Option<usize>,
    /// Per-file size limit in bytes; a file of exactly this size is rejected.
    pub file_size_limit: Option<u64>,
    /// Limit on the combined size of existing and incoming files in bytes.
    pub total_size_limit: Option<u64>,
    /// Patterns a MIME type must match at least one of.
    pub supported_mime_types: Vec<Regex>,
}

impl Default for EndpointUploadPolicy {
    fn default() -> Self {
        Self {
            file_limit: Some(10),
            file_size_limit: Some(20 * MEGABYTE),
            total_size_limit: Some(25 * MEGABYTE),
            supported_mime_types: default_supported_mime_types(),
        }
    }
}

impl EndpointUploadPolicy {
    /// Policy without any count or size limits, accepting the default types.
    pub fn unlimited() -> Self {
        Self {
            file_limit: None,
            file_size_limit: None,
            total_size_limit: None,
            supported_mime_types: default_supported_mime_types(),
        }
    }

    pub fn with_file_limit(mut self, limit: usize) -> Self {
        self.file_limit = Some(limit);
        self
    }

    pub fn with_file_size_limit(mut self, bytes: u64) -> Self {
        self.file_size_limit = Some(bytes);
        self
    }

    pub fn with_total_size_limit(mut self, bytes: u64) -> Self {
        self.total_size_limit = Some(bytes);
        self
    }

    /// Replace the accepted MIME patterns.
    ///
    /// # Errors
    ///
    /// Returns an error when a pattern is not a valid regular expression.
    pub fn with_supported_mime_types<I, S>(mut self, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.supported_mime_types = compile_patterns(patterns)?;
        Ok(self)
    }

    /// True when the MIME type matches one of the supported patterns.
    pub fn accepts(&self, mime: &str) -> bool {
        check_type(mime, &self.supported_mime_types)
    }
}

fn compile_patterns<I, S>(patterns: I) -> Result<Vec<Regex>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    patterns
        .into_iter()
        .map(|pattern| {
            let pattern = pattern.as_ref();
            Regex::new(pattern).with_context(|| format!("Invalid MIME pattern: {pattern}"))
        })
        .collect()
}

/// Wire form of [`EndpointUploadPolicy`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEndpointPolicy {
    file_limit: Option<usize>,
    file_size_limit: Option<u64>,
    total_size_limit: Option<u64>,
    supported_mime_types: Option<Vec<String>>,
}

impl TryFrom<RawEndpointPolicy> for EndpointUploadPolicy {
    type Error = anyhow::Error;

    fn try_from(raw: RawEndpointPolicy) -> Result<Self> {
        let supported_mime_types = match raw.supported_mime_types {
            Some(patterns) => compile_patterns(patterns)?,
            None => default_supported_mime_types(),
        };
        Ok(Self {
            file_limit: raw.file_limit.filter(|&n| n > 0),
            file_size_limit: raw.file_size_limit.filter(|&n| n > 0),
            total_size_limit: raw.total_size_limit.filter(|&n| n > 0),
            supported_mime_types,
        })
    }
}

/// Upload policies for every configured endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub endpoints: BTreeMap<String, EndpointUploadPolicy>,
}

impl FileConfig {
    /// Parse a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed JSON or invalid MIME patterns.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse file configuration")
    }

    /// Read and parse a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file configuration: {:?}", path))?;
        Self::from_json_str(&text).with_context(|| format!("In {:?}", path))
    }

    /// Policy for an endpoint, falling back to the `default` entry and then
    /// to the built-in defaults.
    pub fn endpoint(&self, name: &str) -> EndpointUploadPolicy {
        self.endpoints
            .get(name)
            .or_else(|| self.endpoints.get(DEFAULT_ENDPOINT))
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    // Camel-case keys map onto the policy and patterns are compiled.
    #[test]
    fn from_json_str_parses_endpoint_policies() {
        let config = FileConfig::from_json_str(
            r#"{
                "endpoints": {
                    "assistants": {
                        "fileLimit": 3,
                        "fileSizeLimit": 1048576,
                        "supportedMimeTypes": ["^image/.*$"]
                    }
                }
            }"#,
        )
        .unwrap();

        let policy = config.endpoint("assistants");
        assert_eq!(policy.file_limit, Some(3));
        assert_eq!(policy.file_size_limit, Some(MEGABYTE));
        assert_eq!(policy.total_size_limit, None);
        assert!(policy.accepts("image/png"));
        assert!(!policy.accepts("application/pdf"));
    }

    // Missing pattern lists fall back to the default supported set.
    #[test]
    fn missing_patterns_use_defaults() {
        let config =
            FileConfig::from_json_str(r#"{"endpoints": {"default": {"fileLimit": 0}}}"#).unwrap();
        let policy = config.endpoint("default");
        assert_eq!(policy.file_limit, None, "zero means no limit");
        assert!(policy.accepts("text/x-python"));
    }

    // Unknown endpoints use the `default` entry, then built-in defaults.
    #[test]
    fn endpoint_lookup_falls_back() {
        let config =
            FileConfig::from_json_str(r#"{"endpoints": {"default": {"fileLimit": 2}}}"#).unwrap();
        assert_eq!(config.endpoint("openAI").file_limit, Some(2));

        let empty = FileConfig::default();
        assert_eq!(empty.endpoint("openAI").file_limit, Some(10));
    }

    // Broken regular expressions are configuration errors.
    #[test]
    fn invalid_pattern_is_rejected() {
        let result = FileConfig::from_json_str(
            r#"{"endpoints": {"default": {"supportedMimeTypes": ["("]}}}"#,
        );
        assert!(result.is_err());
    }

    // Configuration can be loaded from disk.
    #[test]
    fn load_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("files.json");
        fs::write(&path, r#"{"endpoints": {"custom": {"totalSizeLimit": 5}}}"#).unwrap();

        let config = FileConfig::load(&path).unwrap();

        assert_eq!(config.endpoint("custom").total_size_limit, Some(5));
        assert!(FileConfig::load(&tmp.path().join("missing.json")).is_err());
    }

    // Builder helpers override individual limits.
    #[test]
    fn builders_set_limits() {
        let policy = EndpointUploadPolicy::unlimited()
            .with_file_limit(1)
            .with_total_size_limit(MEGABYTE)
            .with_supported_mime_types(["^text/plain$"])
            .unwrap();
        assert_eq!(policy.file_limit, Some(1));
        assert_eq!(policy.file_size_limit, None);
        assert!(policy.accepts("text/plain"));
        assert!(!policy.accepts("text/csv"));
    }
}
