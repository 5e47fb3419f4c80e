// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Terminal prompts.

use std::io::{self, BufRead, Write};

/// Print `question`, then read one line. Returns `None` at end of input.
pub fn prompt_line<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
    question: &str,
) -> io::Result<Option<String>> {
    write!(output, "{question}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask for the image URL until a non-empty answer arrives.
pub fn prompt_url<I: BufRead, O: Write>(input: &mut I, output: &mut O) -> io::Result<Option<String>> {
    loop {
        match prompt_line(input, output, "Please enter the URL of the image (e.g. a raw GitHub link): ")? {
            Some(url) if url.is_empty() => continue,
            other => return Ok(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn line_is_trimmed() {
        let mut input = Cursor::new("  https://example.com/a.png \n");
        let mut output = Vec::new();
        let line = prompt_line(&mut input, &mut output, "? ").unwrap();
        assert_eq!(line.as_deref(), Some("https://example.com/a.png"));
        assert_eq!(output, b"? ");
    }

    #[test]
    fn end_of_input_is_none() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert_eq!(prompt_line(&mut input, &mut output, "? ").unwrap(), None);
    }

    #[test]
    fn url_prompt_skips_blank_lines() {
        let mut input = Cursor::new("\n   \nhttps://example.com/b.jpg\n");
        let mut output = Vec::new();
        let url = prompt_url(&mut input, &mut output).unwrap();
        assert_eq!(url.as_deref(), Some("https://example.com/b.jpg"));
    }
}
