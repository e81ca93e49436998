use std::io;
use std::io::{BufRead, Write};

// Prompt routines hand the chosen value back to the caller; None always
// means the user cancelled with a blank line (or end of input), and the
// pending operation must be abandoned without touching the catalog.

pub(crate) fn ask_line<R: BufRead, W: Write>(input: &mut R, out: &mut W,
                                             prompt: &str) -> io::Result<Option<String>> {
    write!(out, "{} ", prompt)?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

// Re-asks until the value parses and lands inside [min, max].
pub(crate) fn ask_number<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str,
                                               min: i64, max: i64) -> io::Result<Option<i64>> {
    loop {
        let line = match ask_line(input, out, prompt)? {
            Some(line) => line,
            None => return Ok(None),
        };
        match line.parse::<i64>() {
            Ok(n) if n >= min && n <= max => return Ok(Some(n)),
            _ => writeln!(out, "Enter a number between {} and {}, or leave blank to cancel.", min, max)?,
        }
    }
}

pub(crate) fn ask_selection<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str,
                                                  options: &[String]) -> io::Result<Option<String>> {
    writeln!(out, "{}", prompt)?;
    for (i, option) in options.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, option)?;
    }
    let picked = match ask_number(input, out, "Choice (blank to cancel):", 1, options.len() as i64)? {
        Some(picked) => picked,
        None => return Ok(None),
    };
    Ok(Some(options[picked as usize - 1].clone()))
}

pub(crate) fn ask_confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W,
                                                prompt: &str) -> io::Result<bool> {
    let answer = match ask_line(input, out, prompt)? {
        Some(answer) => answer,
        None => return Ok(false),
    };
    Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
}
