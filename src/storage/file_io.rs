//! JSON file read/write helpers
//!
//! Reads and writes whole documents in one call. Writes are a plain
//! overwrite of the target file: no merge with on-disk state and no atomic
//! swap, matching the persistence contract of the catalog.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::CatalogError;

/// Read a JSON document from a file.
///
/// A missing file is not an error: returns `Ok(None)` so the caller can log
/// and skip it.
pub fn read_json_optional<T, P>(path: P) -> Result<Option<T>, CatalogError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path)
        .map_err(|e| CatalogError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map(Some)
        .map_err(|e| CatalogError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write a JSON document to a file, fully replacing prior contents.
pub fn write_json<T, P>(path: P, data: &T) -> Result<(), CatalogError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CatalogError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = File::create(path).map_err(|e| {
        CatalogError::Storage(format!("Failed to create {}: {}", path.display(), e))
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| CatalogError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| CatalogError::Storage(format!("Failed to flush data: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_read_missing_file_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let data: Option<Vec<TestData>> = read_json_optional(&path).unwrap();
        assert!(data.is_none());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        let data = vec![TestData {
            name: "test".to_string(),
            value: 42,
        }];

        write_json(&path, &data).unwrap();
        let loaded: Option<Vec<TestData>> = read_json_optional(&path).unwrap();
        assert_eq!(loaded, Some(data));
    }

    #[test]
    fn test_write_fully_replaces_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        let first = vec![
            TestData {
                name: "a".to_string(),
                value: 1,
            },
            TestData {
                name: "b".to_string(),
                value: 2,
            },
        ];
        write_json(&path, &first).unwrap();

        let second = vec![TestData {
            name: "c".to_string(),
            value: 3,
        }];
        write_json(&path, &second).unwrap();

        let loaded: Option<Vec<TestData>> = read_json_optional(&path).unwrap();
        assert_eq!(loaded, Some(second));
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.json");

        write_json(&path, &Vec::<TestData>::new()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_read_malformed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        fs::write(&path, "not json at all").unwrap();

        let result: Result<Option<Vec<TestData>>, _> = read_json_optional(&path);
        assert!(matches!(result, Err(CatalogError::Storage(_))));
    }
}
