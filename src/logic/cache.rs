// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Client-side file list cache and insertion of freshly uploaded files.

use std::collections::HashMap;

use log::warn;

use crate::models::file::FileRecord;

/// Keys of the cached queries this crate reads and writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// The user's uploaded file list.
    Files,
}

/// Get/set access to cached file lists.
pub trait FileCache {
    /// Cached list for `key`, or `None` when the query was never loaded.
    fn get_query_data(&self, key: QueryKey) -> Option<&[FileRecord]>;

    /// Replace the whole cached list for `key`.
    fn set_query_data(&mut self, key: QueryKey, files: Vec<FileRecord>);
}

/// In-memory [`FileCache`].
#[derive(Clone, Debug, Default)]
pub struct MemoryCache {
    entries: HashMap<QueryKey, Vec<FileRecord>>,
}

impl FileCache for MemoryCache {
    fn get_query_data(&self, key: QueryKey) -> Option<&[FileRecord]> {
        self.entries.get(&key).map(Vec::as_slice)
    }

    fn set_query_data(&mut self, key: QueryKey, files: Vec<FileRecord>) {
        self.entries.insert(key, files);
    }
}

/// Result of [`add_file_to_cache`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheInsert {
    Inserted,
    /// The file list was never loaded; nothing was written.
    Uninitialized,
    /// A record with the same `file_id` is already cached.
    AlreadyCached,
}

/// Prepend a newly uploaded file to the cached file list.
///
/// Skips (with a warning) when the list is not loaded yet or already holds
/// the file. Otherwise the list is written back in one call with the new
/// record first and the existing order preserved.
pub fn add_file_to_cache(cache: &mut dyn FileCache, record: FileRecord) -> CacheInsert {
    let Some(current) = cache.get_query_data(QueryKey::Files) else {
        warn!("No current files found in cache, skipped updating file query cache");
        return CacheInsert::Uninitialized;
    };

    if current.iter().any(|file| file.file_id == record.file_id) {
        warn!(
            "File {} already exists in cache, skipped updating file query cache",
            record.file_id
        );
        return CacheInsert::AlreadyCached;
    }

    let mut files = Vec::with_capacity(current.len() + 1);
    files.push(record);
    files.extend_from_slice(current);
    cache.set_query_data(QueryKey::Files, files);
    CacheInsert::Inserted
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn record(name: &str) -> FileRecord {
        FileRecord {
            file_id: Uuid::new_v4(),
            temp_file_id: None,
            filename: name.to_string(),
            filepath: format!("/uploads/{name}"),
            mime: "text/plain".to_string(),
            bytes: 1,
            width: None,
            height: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn cached_names(cache: &MemoryCache) -> Vec<String> {
        cache
            .get_query_data(QueryKey::Files)
            .unwrap_or_default()
            .iter()
            .map(|f| f.filename.clone())
            .collect()
    }

    // Without a loaded list nothing is written.
    #[test]
    fn uninitialized_cache_is_left_alone() {
        let mut cache = MemoryCache::default();

        let outcome = add_file_to_cache(&mut cache, record("a.txt"));

        assert_eq!(outcome, CacheInsert::Uninitialized);
        assert!(cache.get_query_data(QueryKey::Files).is_none());
    }

    // New files go to the front and existing order is kept.
    #[test]
    fn new_file_is_prepended() {
        let mut cache = MemoryCache::default();
        cache.set_query_data(QueryKey::Files, vec![record("b.txt"), record("c.txt")]);

        let outcome = add_file_to_cache(&mut cache, record("a.txt"));

        assert_eq!(outcome, CacheInsert::Inserted);
        assert_eq!(cached_names(&cache), ["a.txt", "b.txt", "c.txt"]);
    }

    // An empty but loaded list accepts the first file.
    #[test]
    fn empty_loaded_list_accepts_file() {
        let mut cache = MemoryCache::default();
        cache.set_query_data(QueryKey::Files, Vec::new());

        assert_eq!(
            add_file_to_cache(&mut cache, record("a.txt")),
            CacheInsert::Inserted
        );
        assert_eq!(cached_names(&cache), ["a.txt"]);
    }

    // The first cached copy of a file wins over later inserts.
    #[test]
    fn duplicate_file_id_is_skipped() {
        let original = record("a.txt");
        let mut renamed = original.clone();
        renamed.filename = "renamed.txt".into();

        let mut cache = MemoryCache::default();
        cache.set_query_data(QueryKey::Files, vec![original]);

        let outcome = add_file_to_cache(&mut cache, renamed);

        assert_eq!(outcome, CacheInsert::AlreadyCached);
        assert_eq!(cached_names(&cache), ["a.txt"]);
    }
}
