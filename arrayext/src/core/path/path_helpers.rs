// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! String helpers for slash separated paths and simple prefix checks. Both `/` and `\`
//! are treated as separators, regardless of platform. Nothing here touches the file
//! system.

use super::Comparison;
use crate::{ArrayOpError, ArrayOpResult};

pub const PATH_SEPARATORS: [char; 2] = ['/', '\\'];

/// Whether any non empty segment of `path` equals `folder`.
///
/// ```
/// use arrayext::{Comparison, path_contains_folder};
///
/// assert!(path_contains_folder(r"\Root/Child\ChildB", "Child", Comparison::CaseSensitive));
/// assert!(!path_contains_folder("", "Root", Comparison::CaseSensitive));
/// ```
#[must_use]
pub fn path_contains_folder(path: &str, folder: &str, comparison: Comparison) -> bool {
    path.split(PATH_SEPARATORS)
        .filter(|segment| !segment.is_empty())
        .any(|segment| comparison.equals(segment, folder))
}

/// Position of `folder` among the segments of `path`, after leading separators are
/// stripped. Returns `Ok(None)` for an empty path or when the folder isn't there.
///
/// # Errors
///
/// [`ArrayOpError::PathMissingFolderName`] when an empty segment (eg: `a//b`) is reached
/// before a match.
pub fn index_of_folder_in_path(
    path: &str,
    folder: &str,
    comparison: Comparison,
) -> ArrayOpResult<Option<usize>> {
    let trimmed = remove_chars_from_start(path, &PATH_SEPARATORS);
    if trimmed.is_empty() {
        return Ok(None);
    }

    for (index, segment) in trimmed.split(PATH_SEPARATORS).enumerate() {
        if segment.is_empty() {
            return Err(ArrayOpError::PathMissingFolderName {
                path: path.to_string(),
            });
        }
        if comparison.equals(segment, folder) {
            return Ok(Some(index));
        }
    }
    Ok(None)
}

/// Splits `path` on separators. Empty segments are kept, so `/a/b` yields
/// `["", "a", "b"]`.
#[must_use]
pub fn parent_folders(path: &str) -> Vec<&str> { path.split(PATH_SEPARATORS).collect() }

#[must_use]
pub fn starts_with_any<S: AsRef<str>>(
    value: &str,
    prefixes: &[S],
    comparison: Comparison,
) -> bool {
    prefixes
        .iter()
        .any(|prefix| comparison.starts_with(value, prefix.as_ref()))
}

/// Strips every leading char that is in `chars`.
#[must_use]
pub fn remove_chars_from_start<'a>(value: &'a str, chars: &[char]) -> &'a str {
    value.trim_start_matches(chars)
}

/// True when `value` has visible content and every char equals the first one.
#[must_use]
pub fn all_the_same(value: &str) -> bool {
    if value.trim().is_empty() {
        return false;
    }
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => chars.all(|it| it == first),
        None => false,
    }
}
