// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The vizcfg authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Domain model for configuration-file selection.
//!
//! Pure string/path logic only, no I/O.

/// Configuration-file naming and path composition
pub mod config_file;

/// Common utilities
pub mod util;
