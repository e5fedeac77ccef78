//! Best-effort repair of truncated or sloppy JSON text.
//!
//! Generative services stop mid-token when they hit their output limit and
//! occasionally emit JavaScript-style object literals. The passes here turn
//! the common cases back into parseable JSON:
//!
//! 1. remove `//` and `/* */` comments outside strings
//! 2. quote bare object keys
//! 3. drop a dangling trailing object member: a partial key, a key with no
//!    value, or a key with a partial bare value
//! 4. close a dangling trailing string value
//! 5. drop a dangling trailing nested object or array
//! 6. drop trailing commas
//! 7. append the closers still missing, innermost first
//!
//! Every pass is string-aware except the bare-key and tail rewrites, which
//! are anchored to the end of the text or to structural characters.

use regex::Regex;
use std::sync::OnceLock;

fn regex(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("invalid regex pattern"))
}

/// Character-level state shared by every string-aware pass.
#[derive(Default)]
struct StringState {
    in_string: bool,
    escaped: bool,
}

impl StringState {
    /// Advances over `c`; returns `true` when `c` is structural (outside a string).
    fn structural(&mut self, c: char) -> bool {
        if self.escaped {
            self.escaped = false;
            return false;
        }
        if self.in_string {
            match c {
                '\\' => self.escaped = true,
                '"' => self.in_string = false,
                _ => {}
            }
            return false;
        }
        if c == '"' {
            self.in_string = true;
            return false;
        }
        true
    }
}

/// Returns the first balanced `{ ... }` at the start of `text`, if it closes.
///
/// Only braces are counted; brackets and braces inside strings are ignored.
pub fn balanced_object(text: &str) -> Option<&str> {
    if !text.starts_with('{') {
        return None;
    }
    let mut state = StringState::default();
    let mut depth = 0usize;
    for (i, c) in text.char_indices() {
        if !state.structural(c) {
            continue;
        }
        match c {
            '{' => depth += 1,
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(&text[..=i]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Removes line and block comments that appear outside strings.
pub fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut state = StringState::default();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '/' && !state.in_string && !state.escaped {
            match chars.peek() {
                Some('/') => {
                    for next in chars.by_ref() {
                        if next == '\n' {
                            out.push('\n');
                            break;
                        }
                    }
                    continue;
                }
                Some('*') => {
                    chars.next();
                    let mut prev = '\0';
                    for next in chars.by_ref() {
                        if prev == '*' && next == '/' {
                            break;
                        }
                        prev = next;
                    }
                    continue;
                }
                _ => {}
            }
        }
        state.structural(c);
        out.push(c);
    }
    out
}

/// Quotes bare identifiers used as object keys.
pub fn quote_bare_keys(text: &str) -> String {
    static BARE_KEY: OnceLock<Regex> = OnceLock::new();
    regex(&BARE_KEY, r"([{,]\s*)([a-zA-Z_$][a-zA-Z0-9_$]*)\s*:")
        .replace_all(text, "$1\"$2\":")
        .into_owned()
}

#[derive(Clone, Copy, PartialEq)]
enum Slot {
    Key,
    Value,
}

/// An open `{` or `[` seen while scanning for a dangling member.
struct Frame {
    object: bool,
    slot: Slot,
    /// Byte offset of the leading `,`, or just past the opening brace.
    member_start: usize,
    /// First non-whitespace character of the current value.
    first: Option<char>,
}

/// Drops the last member of the innermost open object when it cannot be
/// completed: a key cut off before or inside its name, a key whose value
/// never started, or a bare value such as `tr` or `12` cut off mid-token.
///
/// String values and nested containers are left for the later passes.
pub fn trim_dangling_member(text: &str) -> String {
    let mut state = StringState::default();
    let mut frames: Vec<Frame> = Vec::new();
    for (i, c) in text.char_indices() {
        let structural = state.structural(c);
        if let Some(frame) = frames.last_mut() {
            let separator = structural && (c == ',' || c == ':');
            if frame.first.is_none() && !c.is_whitespace() && !separator {
                frame.first = Some(c);
            }
        }
        if !structural {
            continue;
        }
        match c {
            '{' | '[' => frames.push(Frame {
                object: c == '{',
                slot: if c == '{' { Slot::Key } else { Slot::Value },
                member_start: i + 1,
                first: None,
            }),
            '}' | ']' => {
                frames.pop();
            }
            ',' => {
                if let Some(frame) = frames.last_mut() {
                    if frame.object {
                        frame.slot = Slot::Key;
                    }
                    frame.member_start = i;
                    frame.first = None;
                }
            }
            ':' => {
                if let Some(frame) = frames.last_mut() {
                    frame.slot = Slot::Value;
                    frame.first = None;
                }
            }
            _ => {}
        }
    }

    let dangling = match frames.last() {
        Some(frame) if frame.object => match (frame.slot, frame.first) {
            (Slot::Key, None | Some('"')) | (Slot::Value, None) => Some(frame.member_start),
            (Slot::Value, Some(first)) if !matches!(first, '"' | '{' | '[') => {
                Some(frame.member_start)
            }
            _ => None,
        },
        _ => None,
    };
    match dangling {
        Some(end) => text[..end].to_string(),
        None => text.to_string(),
    }
}

/// Trims incomplete content from the end of truncated text.
pub fn trim_dangling_tail(text: &str) -> String {
    static TRAILING_STRING: OnceLock<Regex> = OnceLock::new();
    static TRAILING_NESTED: OnceLock<Regex> = OnceLock::new();
    static COMMA_BEFORE_CLOSE: OnceLock<Regex> = OnceLock::new();
    static COMMA_AT_END: OnceLock<Regex> = OnceLock::new();

    let text = regex(&TRAILING_STRING, r#":\s*"[^"]*?$"#).replace(text, ": \"\"");
    let text = regex(&TRAILING_NESTED, r",\s*[{\[][^}\]]*?$").replace(&text, "");
    let text = regex(&COMMA_BEFORE_CLOSE, r",(\s*[}\]])").replace_all(&text, "$1");
    regex(&COMMA_AT_END, r",\s*$").replace(&text, "").into_owned()
}

/// Appends the closers for every `{` and `[` left open, innermost first.
///
/// Stray closers that match nothing are left in place for the parser to reject.
pub fn close_open_structures(text: &str) -> String {
    let mut state = StringState::default();
    let mut open: Vec<char> = Vec::new();
    for c in text.chars() {
        if !state.structural(c) {
            continue;
        }
        match c {
            '{' => open.push('}'),
            '[' => open.push(']'),
            '}' | ']' => {
                if open.last() == Some(&c) {
                    open.pop();
                }
            }
            _ => {}
        }
    }
    let mut out = text.trim_end().to_string();
    if state.escaped {
        out.pop();
    }
    if state.in_string {
        out.push('"');
    }
    out.extend(open.iter().rev());
    out
}

/// Runs every repair pass in order.
pub fn repair(text: &str) -> String {
    let text = strip_comments(text);
    let text = quote_bare_keys(&text);
    let text = trim_dangling_member(text.trim_end());
    let text = trim_dangling_tail(&text);
    close_open_structures(&text)
}
