// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The vizcfg authors
// SPDX-License-Identifier: AGPL-3.0-or-later

/// Separator used when composing and decomposing file paths.
///
/// Composed paths are plain strings handed over to the host application,
/// built with this separator independent of the platform.
pub const PATH_SEPARATOR: char = '/';

/// File name suffix that identifies a configuration file.
pub const CONFIG_FILE_SUFFIX: &str = ".rviz";

/// Checks if `file_name` names a configuration file.
///
/// Literal, case-sensitive trailing-character comparison. Any name that
/// ends in the suffix characters matches, no matter what precedes them.
/// This is deliberately not an extension-aware comparison.
#[must_use]
pub fn has_config_file_suffix(file_name: &str) -> bool {
    file_name.ends_with(CONFIG_FILE_SUFFIX)
}

/// Composes the full path of a file within a directory.
///
/// Pure string concatenation. Neither component is validated.
#[must_use]
pub fn compose_file_path(dir: &str, file_name: &str) -> String {
    let mut path = String::with_capacity(dir.len() + 1 + file_name.len());
    path.push_str(dir);
    path.push(PATH_SEPARATOR);
    path.push_str(file_name);
    path
}

/// Derives the containing directory from a full file path.
///
/// Strips everything after (and including) the last separator. A path
/// without any separator is returned unchanged.
#[must_use]
pub fn containing_dir(file_path: &str) -> &str {
    file_path
        .rfind(PATH_SEPARATOR)
        .map_or(file_path, |last_separator| &file_path[..last_separator])
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests;
