// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The vizcfg authors
// SPDX-License-Identifier: AGPL-3.0-or-later

#[cfg(feature = "async-file-dialog")]
use std::{
    path::{Path, PathBuf},
    str::Utf8Error,
};

pub use vizcfg_core::util::fs::{DirPath, OwnedDirPath};

/// Decode percent-encoded RFD path
///
/// The returned path seems to be percent-encoded, e.g. space characters
/// are replaced by %20!?
///
/// # Errors
///
/// Fails if the path is not a valid UTF-8 string.
#[cfg(feature = "async-file-dialog")]
fn percent_decode_path(path: &Path) -> Result<PathBuf, Utf8Error> {
    let encoded = path.display().to_string();
    percent_encoding::percent_decode_str(&encoded)
        .decode_utf8()
        .map(|decoded| Path::new(decoded.as_ref()).to_path_buf())
}

/// Open a native dialog for choosing the configuration directory.
///
/// Starts in `dir_path` if given. Returns `None` if the user dismissed
/// the dialog without choosing a directory.
#[cfg(feature = "async-file-dialog")]
pub async fn choose_directory(dir_path: impl Into<Option<&Path>>) -> Option<OwnedDirPath> {
    log::debug!("Open rfd::AsyncFileDialog");
    let mut file_dialog = rfd::AsyncFileDialog::new();
    if let Some(dir_path) = dir_path.into() {
        file_dialog = file_dialog.set_directory(dir_path);
    }
    let dir_handle = file_dialog.pick_folder().await;
    log::debug!("rfd::AsyncFileDialog closed");
    dir_handle.and_then(|file_handle| {
        percent_decode_path(file_handle.path())
            .inspect_err(|err| {
                log::warn!("Failed to decode path: {err}");
            })
            .map(DirPath::from_owned)
            .ok()
    })
}
