// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The vizcfg authors
// SPDX-License-Identifier: AGPL-3.0-or-later

/// File system utilities
pub mod fs;
