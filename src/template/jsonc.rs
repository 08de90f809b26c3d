//! Cleanup of hand-authored template text into strict JSON.
//!
//! Templates are written with `//` comments naming the counties each age
//! group belongs to, and hand edits leave behind two kinds of damage: a
//! comma dangling before a closing bracket, and a key whose value was never
//! typed in. Strict mode reports those as errors; lenient mode repairs them.

use super::TemplateError;
use crate::domain::SENTINEL;

/// A repair applied to the source text in lenient mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Repair {
    /// A dangling comma was dropped.
    DanglingComma { line: usize },
    /// A missing value was filled with the sentinel.
    MissingValue { line: usize, key: String },
}

/// Strict JSON plus the repairs made to get there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cleaned {
    pub json: String,
    pub repairs: Vec<Repair>,
}

/// Strips comments and handles the known defects. Strict mode stops at the
/// first defect; lenient mode repairs all of them.
pub fn clean(input: &str, lenient: bool) -> Result<Cleaned, TemplateError> {
    let stripped = strip_comments(input)?;
    let chars: Vec<char> = stripped.chars().collect();

    let mut json = String::with_capacity(stripped.len());
    let mut repairs = Vec::new();

    let mut line = 1;
    let mut in_string = false;
    let mut escaped = false;
    let mut current = String::new();
    let mut last_key = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '\n' {
            line += 1;
        }

        if in_string {
            json.push(c);
            if escaped {
                escaped = false;
                current.push(c);
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
                last_key = std::mem::take(&mut current);
            } else {
                current.push(c);
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                current.clear();
                json.push(c);
            }
            ',' if matches!(next_significant(&chars, i + 1), Some('}' | ']')) => {
                if !lenient {
                    return Err(TemplateError::DanglingComma { line });
                }
                repairs.push(Repair::DanglingComma { line });
            }
            ':' => {
                json.push(c);
                if matches!(next_significant(&chars, i + 1), None | Some(',' | '}' | ']')) {
                    if !lenient {
                        return Err(TemplateError::MissingValue {
                            line,
                            key: last_key,
                        });
                    }
                    json.push(' ');
                    json.push_str(&SENTINEL.to_string());
                    repairs.push(Repair::MissingValue {
                        line,
                        key: last_key.clone(),
                    });
                }
            }
            _ => json.push(c),
        }
    }

    Ok(Cleaned { json, repairs })
}

fn next_significant(chars: &[char], from: usize) -> Option<char> {
    chars[from.min(chars.len())..]
        .iter()
        .copied()
        .find(|c| !c.is_whitespace())
}

/// Removes `//` and `/* */` comments outside string literals. Newlines inside
/// comments are kept so line numbers still match the source.
pub fn strip_comments(input: &str) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    let mut line = 1;
    let mut in_string = false;
    let mut escaped = false;

    while let Some(c) = chars.next() {
        if c == '\n' {
            line += 1;
        }

        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match (c, chars.peek()) {
            ('"', _) => {
                in_string = true;
                out.push(c);
            }
            ('/', Some('/')) => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        line += 1;
                        out.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                let start = line;
                chars.next();
                let mut closed = false;
                let mut prev = '\0';
                for c in chars.by_ref() {
                    if c == '\n' {
                        line += 1;
                        out.push('\n');
                    }
                    if prev == '*' && c == '/' {
                        closed = true;
                        break;
                    }
                    prev = c;
                }
                if !closed {
                    return Err(TemplateError::UnterminatedComment { line: start });
                }
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}
