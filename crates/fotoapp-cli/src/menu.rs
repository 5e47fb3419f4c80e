// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Interactive operation menu.

use std::io::{BufRead, Write};
use std::str::FromStr;

use fotoapp_core::error::{FotoError, Result};
use fotoapp_core::human_errors::humanize_error;
use fotoapp_core::{FilterKind, Platform};
use fotoapp_imaging::{RenderTarget, Workbench};
use image::DynamicImage;
use tracing::warn;

use crate::services::prompt::prompt_line;

/// One menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Resize,
    Equalize,
    Filter,
    AllFilters,
    Binarize,
    Quit,
}

impl FromStr for Choice {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" => Ok(Self::Resize),
            "2" => Ok(Self::Equalize),
            "3" => Ok(Self::Filter),
            "4" => Ok(Self::AllFilters),
            "5" => Ok(Self::Binarize),
            "q" | "quit" | "exit" => Ok(Self::Quit),
            _ => Err(()),
        }
    }
}

const MENU: &str = "\
What would you like to do?
  1) Resize for a social network
  2) Equalize the color histogram
  3) Apply one filter
  4) Apply every filter
  5) Binarize
  q) Quit
";

/// Show the menu until the user quits or input ends.
///
/// Operation failures are reported and the loop continues; only terminal I/O
/// errors end it early.
pub fn run<R, I, O>(
    workbench: &mut Workbench<R>,
    image: &DynamicImage,
    default_threshold: i32,
    input: &mut I,
    output: &mut O,
) -> Result<()>
where
    R: RenderTarget,
    I: BufRead,
    O: Write,
{
    loop {
        write!(output, "\n{MENU}")?;
        let Some(answer) = prompt_line(input, output, "> ")? else {
            return Ok(());
        };
        let Ok(choice) = answer.parse::<Choice>() else {
            writeln!(output, "Unknown option {answer:?}.")?;
            continue;
        };
        if choice == Choice::Quit {
            return Ok(());
        }

        if let Err(err) = dispatch(choice, workbench, image, default_threshold, input, output) {
            if let FotoError::Io(_) = err {
                return Err(err);
            }
            warn!(error = %err, ?choice, "operation failed");
            writeln!(output, "{}", humanize_error(&err))?;
        }
    }
}

fn dispatch<R, I, O>(
    choice: Choice,
    workbench: &mut Workbench<R>,
    image: &DynamicImage,
    default_threshold: i32,
    input: &mut I,
    output: &mut O,
) -> Result<()>
where
    R: RenderTarget,
    I: BufRead,
    O: Write,
{
    match choice {
        Choice::Resize => {
            let question = format!("Platform ({}): ", Platform::options());
            let Some(platform) = prompt_line(input, output, &question)? else {
                return Ok(());
            };
            match workbench.resize_for_platform(image, &platform)? {
                Some(saved) => writeln!(
                    output,
                    "Image resized for {platform}. Saved as '{}' with dimensions: ({}, {})",
                    saved.path.display(),
                    saved.image.width(),
                    saved.image.height()
                )?,
                None => writeln!(
                    output,
                    "{}",
                    humanize_error(&FotoError::UnsupportedPlatform(platform))
                )?,
            }
        }

        Choice::Equalize => {
            let equalized = workbench.equalize(image)?;
            writeln!(
                output,
                "Histogram equalized ({}x{}).",
                equalized.width(),
                equalized.height()
            )?;
        }

        Choice::Filter => {
            for kind in FilterKind::CATALOG {
                writeln!(output, "  {:<18} {}", kind.name(), kind.description())?;
            }
            let Some(name) = prompt_line(input, output, "Filter: ")? else {
                return Ok(());
            };
            let saved = workbench.apply_filter(image, &name)?;
            writeln!(output, "Saved '{}'.", saved.path.display())?;
        }

        Choice::AllFilters => {
            for (kind, outcome) in workbench.apply_all_filters(image) {
                match outcome {
                    Ok(saved) => writeln!(output, "Saved '{}'.", saved.path.display())?,
                    Err(err) => writeln!(output, "{kind}: {}", humanize_error(&err))?,
                }
            }
        }

        Choice::Binarize => {
            let question = format!("Threshold [{default_threshold}]: ");
            let Some(answer) = prompt_line(input, output, &question)? else {
                return Ok(());
            };
            let threshold = if answer.is_empty() {
                default_threshold
            } else {
                match answer.parse::<i32>() {
                    Ok(value) => value,
                    Err(_) => {
                        writeln!(output, "{answer:?} is not a whole number.")?;
                        return Ok(());
                    }
                }
            };
            let binary = workbench.binarize(image, threshold)?;
            let white = binary.pixels().filter(|p| p.0[0] == 255).count();
            writeln!(
                output,
                "Binarized at threshold {threshold}: {white} of {} pixels are white.",
                binary.as_raw().len()
            )?;
        }

        Choice::Quit => {}
    }
    Ok(())
}
