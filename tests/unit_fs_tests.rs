//! # File System Module Unit Tests / 文件系统模块单元测试
//!
//! This module contains unit tests for the `fs.rs` module, testing payload
//! writing, directory removal and relative listings.
//!
//! 此模块包含 `fs.rs` 模块的单元测试，测试载荷写入、目录删除和相对路径列表。

use harness_runner::infra::fs::{is_directory, relative_listing, remove_dir_if_exists, write_payload};
use std::fs;
use tempfile::tempdir;

#[cfg(test)]
mod write_payload_tests {
    use super::*;

    #[test]
    fn test_write_payload_creates_the_directory() {
        let root = tempdir().unwrap();
        let dir = root.path().join("tmp");

        let written = write_payload(&dir, "file", "test").unwrap();

        assert_eq!(written, dir.join("file"));
        assert_eq!(fs::read_to_string(&written).unwrap(), "test");
    }

    #[test]
    fn test_write_payload_overwrites_existing_content() {
        let root = tempdir().unwrap();
        write_payload(root.path(), "file", "old content").unwrap();
        let written = write_payload(root.path(), "file", "test").unwrap();
        assert_eq!(fs::read_to_string(written).unwrap(), "test");
    }
}

#[cfg(test)]
mod remove_dir_tests {
    use super::*;

    #[test]
    fn test_remove_populated_directory() {
        let root = tempdir().unwrap();
        let dir = root.path().join("tmp2");
        write_payload(&dir.join("nested"), "file", "test").unwrap();

        remove_dir_if_exists(&dir).unwrap();

        assert!(!dir.exists());
        assert!(root.path().exists());
    }

    #[test]
    fn test_remove_missing_directory_is_not_an_error() {
        let root = tempdir().unwrap();
        assert!(remove_dir_if_exists(&root.path().join("absent")).is_ok());
    }
}

#[cfg(test)]
mod listing_tests {
    use super::*;

    #[test]
    fn test_listing_is_relative_and_sorted() {
        let root = tempdir().unwrap();
        write_payload(root.path(), "file", "test").unwrap();
        write_payload(&root.path().join("b").join("c"), "leaf", "x").unwrap();
        write_payload(&root.path().join("a"), "first", "x").unwrap();

        let listing = relative_listing(root.path()).unwrap();

        assert_eq!(
            listing,
            vec!["a", "a/first", "b", "b/c", "b/c/leaf", "file"]
        );
    }

    #[test]
    fn test_listing_of_empty_directory_is_empty() {
        let root = tempdir().unwrap();
        assert!(relative_listing(root.path()).unwrap().is_empty());
    }

    #[test]
    fn test_identical_trees_have_identical_listings() {
        let root = tempdir().unwrap();
        let source = root.path().join("tmp");
        let copy = root.path().join("tmp2");
        write_payload(&source, "file", "test").unwrap();
        write_payload(&copy, "file", "test").unwrap();

        assert_eq!(
            relative_listing(&source).unwrap(),
            relative_listing(&copy).unwrap()
        );
    }

    #[test]
    fn test_is_directory() {
        let root = tempdir().unwrap();
        let file = write_payload(root.path(), "file", "test").unwrap();

        assert!(is_directory(root.path()));
        assert!(!is_directory(&file));
        assert!(!is_directory(&root.path().join("absent")));
    }
}
