//! Child-path construction with a bounded working capacity
//!
//! Paths are owned `String`s, but the skip-on-overflow policy of the
//! original fixed buffers is kept: a constructed path that would exceed
//! [`MAX_PATH_LEN`] causes that single entry (or directory) to be skipped
//! rather than failing the run.

use std::path::is_separator;

/// Upper bound on any constructed path, in bytes.
pub const MAX_PATH_LEN: usize = 4096;

/// True if `dir` can still host at least a one-byte child name.
///
/// Checked before enumerating a directory so that a pathological parent is
/// abandoned without any filesystem work.
pub fn can_list(dir: &str) -> bool {
    dir.len() + 2 <= MAX_PATH_LEN
}

/// Join `dir` and `name`, inserting a separator unless `dir` already ends
/// in one. Returns `None` when the result would exceed [`MAX_PATH_LEN`].
pub fn join_child(dir: &str, name: &str) -> Option<String> {
    let needs_sep = !dir.chars().next_back().map(is_separator).unwrap_or(false);

    let total = dir.len() + usize::from(needs_sep) + name.len();
    if total > MAX_PATH_LEN {
        return None;
    }

    let mut path = String::with_capacity(total);
    path.push_str(dir);
    if needs_sep {
        path.push(std::path::MAIN_SEPARATOR);
    }
    path.push_str(name);
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_child_inserts_separator() {
        let sep = std::path::MAIN_SEPARATOR;
        assert_eq!(
            join_child("/data", "file.txt").unwrap(),
            format!("/data{sep}file.txt")
        );
    }

    #[test]
    fn test_join_child_keeps_existing_separator() {
        assert_eq!(join_child("/", "etc").unwrap(), "/etc");
        assert_eq!(join_child("/data/", "file").unwrap(), "/data/file");
    }

    #[test]
    fn test_join_child_capacity_overflow() {
        let long_dir = format!("/{}", "d".repeat(MAX_PATH_LEN));
        assert!(join_child(&long_dir, "x").is_none());

        // Exactly at the bound is still fine
        let dir = "a".repeat(MAX_PATH_LEN - 2);
        assert!(join_child(&dir, "b").is_some());
    }

    #[test]
    fn test_can_list() {
        assert!(can_list("/tmp"));
        assert!(!can_list(&"x".repeat(MAX_PATH_LEN)));
    }
}
