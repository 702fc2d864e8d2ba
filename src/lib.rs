// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The vizcfg authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Facade crate that bundles the `vizcfg` sub-crates.

pub use vizcfg_core::{config_file, util};

#[cfg(feature = "desktop-app")]
pub use vizcfg_desktop_app as desktop_app;
