// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The vizcfg authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Desktop app support for the configuration picker.
//!
//! Observable dialog state plus the file system plumbing around it.

/// File system utilities
pub mod fs;

/// Configuration-file picker state
pub mod picker;
