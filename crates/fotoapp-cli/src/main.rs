// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Fotoapp — download an image and resize, equalize, filter, or binarize it.
//
// Entry point. Initialises logging and services, asks for the image URL,
// downloads it once, then hands over to the operation menu.

mod menu;
mod services;

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use fotoapp_core::error::Result;
use fotoapp_core::human_errors::humanize_error;
use fotoapp_imaging::acquire;

use services::app_services::AppServices;
use services::prompt::prompt_url;

/// Settings file read from the working directory, if present.
const CONFIG_FILE: &str = "fotoapp.json";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    tracing::info!("Fotoapp starting");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    match run(&mut input, &mut output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Fotoapp aborted");
            let human = humanize_error(&err);
            eprintln!("{}\n{}", human.message, human.suggestion);
            ExitCode::FAILURE
        }
    }
}

fn run<I: BufRead, O: Write>(input: &mut I, output: &mut O) -> Result<()> {
    let mut services = AppServices::init(Path::new(CONFIG_FILE))?;

    let Some(url) = prompt_url(input, output)? else {
        return Ok(());
    };
    let image = acquire(&services.source, &url)?;
    writeln!(
        output,
        "Downloaded a {}x{} image.",
        image.width(),
        image.height()
    )?;

    menu::run(
        &mut services.workbench,
        &image,
        services.config.default_threshold,
        input,
        output,
    )
}
