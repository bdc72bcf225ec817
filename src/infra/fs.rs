//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides utilities for the file system side of the harness:
//! populating scratch directories, removing them, and listing their content
//! for comparison.
//!
//! 此模块为测试框架的文件系统部分提供实用功能：
//! 填充临时目录、删除它们以及列出其内容以供比较。

use fs_extra::dir::{self, DirOptions};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Writes `content` to `dir/name`, creating `dir` first if necessary.
///
/// # Returns
/// The path of the written file
pub fn write_payload(dir: &Path, name: &str, content: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let file_path = dir.join(name);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Removes a directory and everything below it. A missing directory is not
/// an error.
pub fn remove_dir_if_exists(path: &Path) -> io::Result<()> {
    dir::remove(path).map_err(|e| io::Error::other(format!("{}: {}", path.display(), e)))
}

/// Lists every file and directory below `root`, relative to `root`, using `/`
/// as separator and sorted, so two trees can be compared directly.
///
/// # Arguments
/// * `root` - Directory to list; it must exist
///
/// # Returns
/// The sorted relative paths, without `root` itself
pub fn relative_listing(root: &Path) -> io::Result<Vec<String>> {
    let content = dir::get_dir_content2(root, &DirOptions::new())
        .map_err(|e| io::Error::other(format!("{}: {}", root.display(), e)))?;

    let mut entries: Vec<String> = content
        .directories
        .iter()
        .chain(content.files.iter())
        .filter_map(|entry| {
            let relative = Path::new(entry).strip_prefix(root).ok()?;
            if relative.as_os_str().is_empty() {
                return None;
            }
            Some(
                relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect::<Vec<_>>()
                    .join("/"),
            )
        })
        .collect();

    entries.sort();
    Ok(entries)
}

/// Checks if a path exists and is a directory.
///
/// # Arguments
/// * `path` - Path to check
///
/// # Returns
/// `true` if the path exists and is a directory, `false` otherwise
pub fn is_directory(path: &Path) -> bool {
    path.exists() && path.is_dir()
}
