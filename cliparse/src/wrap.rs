//! Fixed-width text wrapping for help screens.
//!
//! Wraps long lines at word boundaries while re-emitting the original
//! line's leading indentation (tabs counted as 4 spaces) on every
//! continuation line. A run of non-space characters longer than the width
//! (a path, a URL) falls back to hard breaks: at the full width while still
//! on the first segment, and at the width minus the indentation afterwards,
//! since the indentation consumes part of the budget.

use crate::error::{CliParseError, Result};

/// Line width used by the help renderer.
pub const DEFAULT_SCREEN_WIDTH: usize = 80;

/// Wrap every line of `text` to `max_line_length`, preserving the existing
/// line breaks.
pub fn format_text_for_screen(text: &str, max_line_length: usize) -> Result<String> {
    let mut wrapped = Vec::new();
    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        wrapped.push(break_string_to_length(line, max_line_length)?);
    }
    Ok(wrapped.join("\n"))
}

/// Wrap a single logical line to `max_line_length` characters.
///
/// Lines of at most `max_line_length - 1` characters are returned
/// unchanged. `max_line_length` values of 0 and 1 are range errors.
pub fn break_string_to_length(line: &str, max_line_length: usize) -> Result<String> {
    if max_line_length <= 1 {
        return Err(CliParseError::LineLength(max_line_length));
    }
    if line.is_empty() {
        return Ok(String::new());
    }

    let chars: Vec<char> = line.chars().collect();
    let len = chars.len();
    if len <= max_line_length - 1 {
        return Ok(line.to_string());
    }

    let indent = leading_whitespace_as_spaces(line);
    let indent_len = indent.len();

    let mut out = String::new();
    let mut current = 0;
    let mut possible = 0;

    loop {
        // Candidate break point: the position after the next space, so the
        // continuation starts on a word.
        let scan = find_space(&chars, possible + 1).map(|i| i + 1);

        if let Some(scan) = scan {
            if scan + indent_len > current + max_line_length {
                out.extend(chars[current..possible].iter());
                out.push('\n');
                out.push_str(&indent);
                current = possible;
            }
            possible = scan;
        } else {
            let remaining = len - current;
            if current == 0 {
                // Still on the first segment: the full width is available.
                if remaining > max_line_length {
                    out.extend(chars[current..current + max_line_length].iter());
                    out.push('\n');
                    out.push_str(&indent);
                    current += max_line_length;
                } else {
                    out.extend(chars[current..].iter());
                    break;
                }
            } else if remaining + indent_len > max_line_length {
                // Indentation wider than the budget still makes progress.
                let take = max_line_length.saturating_sub(indent_len).max(1);
                out.extend(chars[current..current + take].iter());
                out.push('\n');
                out.push_str(&indent);
                current += take;
            } else {
                out.extend(chars[current..].iter());
                break;
            }
        }
    }

    Ok(out)
}

fn find_space(chars: &[char], from: usize) -> Option<usize> {
    if from >= chars.len() {
        return None;
    }
    chars[from..].iter().position(|&c| c == ' ').map(|i| from + i)
}

/// Leading whitespace of `line` rendered as spaces: a space counts as one,
/// a tab as four. Stops at the first non-whitespace character.
fn leading_whitespace_as_spaces(line: &str) -> String {
    let mut count = 0;
    for c in line.chars() {
        if !c.is_whitespace() {
            break;
        }
        if c == ' ' {
            count += 1;
        }
        if c == '\t' {
            count += 4;
        }
    }
    " ".repeat(count)
}
