// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The vizcfg authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::{Path, PathBuf};

use vizcfg::util::fs::DirPath;

/// Open a file dialog to choose a directory path
///
/// Start with the given path if available.
///
/// The chosen path (or `None` if the dialog has been dismissed) is passed
/// to the callback when the dialog closes.
pub fn choose_directory_path<P>(
    rt: &tokio::runtime::Handle,
    dir_path: Option<&P>,
    on_dir_path_chosen: impl FnOnce(Option<DirPath<'static>>) + Send + 'static,
) where
    P: AsRef<Path>,
{
    let dir_path = dir_path.as_ref().map(AsRef::as_ref).map(PathBuf::from);
    rt.spawn(async move {
        let dir_path = vizcfg::desktop_app::fs::choose_directory(dir_path.as_deref()).await;
        on_dir_path_chosen(dir_path);
    });
}
