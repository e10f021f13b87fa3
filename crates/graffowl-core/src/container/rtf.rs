//! Plain-text extraction from RTF.
//!
//! Diagram editors store shape text and notes as RTF documents. Only the
//! character content matters here, so formatting is discarded.

use std::{iter::Peekable, str::Chars};

/// Destination groups whose content is never visible text.
const SKIPPED_DESTINATIONS: &[&str] = &[
    "fonttbl",
    "colortbl",
    "expandedcolortbl",
    "stylesheet",
    "info",
    "pict",
    "header",
    "footer",
    "listtable",
    "listoverridetable",
];

/// Returns `true` when the text is an RTF document.
pub fn is_rtf(text: &str) -> bool {
    text.trim_start().starts_with("{\\rtf")
}

/// Returns the plain text of `text`, stripping RTF markup when present.
///
/// Non-RTF text is returned unchanged. For RTF input, one trailing newline
/// produced by a final paragraph mark is removed.
///
/// # Examples
///
/// ```
/// # use graffowl_core::container::rtf::plain_text;
/// let rtf = r"{\rtf1\ansi{\fonttbl\f0\fswiss Helvetica;}\f0\fs24 obj prop a\par second}";
/// assert_eq!(plain_text(rtf), "obj prop a\nsecond");
/// assert_eq!(plain_text("not rtf"), "not rtf");
/// ```
pub fn plain_text(text: &str) -> String {
    if !is_rtf(text) {
        return text.to_string();
    }

    let mut out = RtfStripper::default().strip(text);
    if out.ends_with('\n') {
        out.pop();
    }
    out
}

#[derive(Default)]
struct RtfStripper {
    out: String,
    /// One entry per open group: whether its content is skipped.
    groups: Vec<bool>,
}

impl RtfStripper {
    fn skipping(&self) -> bool {
        self.groups.last().copied().unwrap_or(false)
    }

    fn emit(&mut self, c: char) {
        if !self.skipping() {
            self.out.push(c);
        }
    }

    fn skip_group(&mut self) {
        if let Some(top) = self.groups.last_mut() {
            *top = true;
        }
    }

    fn strip(mut self, text: &str) -> String {
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' => {
                    let inherited = self.skipping();
                    self.groups.push(inherited);
                }
                '}' => {
                    self.groups.pop();
                }
                '\\' => self.control(&mut chars),
                '\r' | '\n' => {}
                _ => self.emit(c),
            }
        }

        self.out
    }

    fn control(&mut self, chars: &mut Peekable<Chars<'_>>) {
        let Some(&next) = chars.peek() else {
            return;
        };

        if !next.is_ascii_alphabetic() {
            chars.next();
            match next {
                '\\' | '{' | '}' => self.emit(next),
                '\'' => {
                    if let Some(c) = read_hex_escape(chars) {
                        self.emit(c);
                    }
                }
                '*' => self.skip_group(),
                '\n' | '\r' => self.emit('\n'),
                '~' => self.emit(' '),
                '_' => self.emit('-'),
                _ => {}
            }
            return;
        }

        let mut word = String::new();
        while let Some(&c) = chars.peek() {
            if !c.is_ascii_alphabetic() {
                break;
            }
            word.push(c);
            chars.next();
        }

        let mut param = String::new();
        if chars.peek() == Some(&'-') {
            param.push('-');
            chars.next();
        }
        while let Some(&c) = chars.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            param.push(c);
            chars.next();
        }
        if chars.peek() == Some(&' ') {
            chars.next();
        }

        match word.as_str() {
            "par" | "line" => self.emit('\n'),
            "tab" => self.emit('\t'),
            "u" => {
                if let Some(c) = param
                    .parse::<i32>()
                    .ok()
                    .map(|code| if code < 0 { code + 0x10000 } else { code })
                    .and_then(|code| char::from_u32(code as u32))
                {
                    self.emit(c);
                }
                skip_fallback(chars);
            }
            w if SKIPPED_DESTINATIONS.contains(&w) => self.skip_group(),
            _ => {}
        }
    }
}

fn read_hex_escape(chars: &mut Peekable<Chars<'_>>) -> Option<char> {
    let hex: String = chars.by_ref().take(2).collect();
    u8::from_str_radix(&hex, 16).ok().map(char::from)
}

/// Skips the single fallback character that follows a `\uN` escape.
fn skip_fallback(chars: &mut Peekable<Chars<'_>>) {
    match chars.peek() {
        Some('\\') => {
            chars.next();
            if chars.peek() == Some(&'\'') {
                chars.next();
                chars.next();
                chars.next();
            }
        }
        Some('{') | Some('}') | None => {}
        Some(_) => {
            chars.next();
        }
    }
}
