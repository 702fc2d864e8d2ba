// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The vizcfg authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use anyhow::Context as _;
use clap::Parser;
use log::LevelFilter;

use vizcfg::desktop_app::picker;

pub mod app;
use self::app::App;

pub mod fs;

#[derive(Debug)]
pub struct NoReceiverForEvent;

/// Default log level for debug builds.
#[cfg(debug_assertions)]
const DEFAULT_LOG_FILTER_LEVEL: LevelFilter = LevelFilter::Info;

/// Reduce log verbosity for release builds.
#[cfg(not(debug_assertions))]
const DEFAULT_LOG_FILTER_LEVEL: LevelFilter = LevelFilter::Warn;

#[derive(Debug, Parser)]
#[command(name = app_name(), version, about)]
struct Args {
    /// Full path of a previously chosen configuration file.
    ///
    /// Initializes the dialog with the containing directory and its
    /// configuration-file choices.
    file: Option<String>,

    /// Pre-set the hide-menu toggle.
    #[arg(long)]
    hide_menu: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(DEFAULT_LOG_FILTER_LEVEL)
        // Parse environment variables after configuring all default option(s).
        .parse_default_env()
        .init();

    let args = Args::parse();

    let mut initial_state = picker::State::default();
    if let Some(file) = &args.file {
        initial_state.load_file_path(file);
    }
    initial_state.set_hide_menu(args.hide_menu);

    let rt = tokio::runtime::Handle::try_current().context("no Tokio runtime")?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Choose configuration")
            .with_inner_size([480.0, 180.0]),
        ..Default::default()
    };
    eframe::run_native(
        app_name(),
        native_options,
        Box::new(move |ctx| {
            let mdl = app::Model::new(picker::ObservableState::new(initial_state));
            let app = App::new(ctx, rt, mdl);
            Ok(Box::new(app))
        }),
    )
    .map_err(|err| anyhow::anyhow!("failed to run the dialog: {err}"))?;
    Ok(())
}

#[must_use]
const fn app_name() -> &'static str {
    env!("CARGO_PKG_NAME")
}
