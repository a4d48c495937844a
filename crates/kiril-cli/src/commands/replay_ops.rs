use kiril::{ApplyMode, EditResult, EditSession};

const BACKSPACE: char = '\u{8}';

/// Expand the `\b` escape into a backspace char; everything else is typed
/// as-is.
pub fn parse_keys(keys: &str) -> Vec<char> {
    let mut out = Vec::with_capacity(keys.len());
    let mut chars = keys.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' && chars.peek() == Some(&'b') {
            chars.next();
            out.push(BACKSPACE);
        } else {
            out.push(c);
        }
    }
    out
}

/// Feed `keys` one at a time through an [`EditSession`] and return the
/// snapshot after each keystroke.
pub fn replay(keys: &[char], mode: ApplyMode) -> Vec<(char, EditResult)> {
    let mut session = EditSession::new().with_mode(mode);
    let mut buf = [0u8; 4];
    keys.iter()
        .map(|&key| {
            let result = if key == BACKSPACE {
                session.backspace()
            } else {
                session.insert(key.encode_utf8(&mut buf))
            };
            (key, result)
        })
        .collect()
}

pub fn replay_cmd(keys: &str, forward_only: bool) {
    let mode = if forward_only {
        ApplyMode::ForwardOnly
    } else {
        ApplyMode::RoundTrip
    };
    for (key, result) in replay(&parse_keys(keys), mode) {
        let label = if key == BACKSPACE {
            "⌫".to_string()
        } else {
            format!("{key:?}")
        };
        // Cursor drawn as '|'
        let mut shown: String = result.text.chars().take(result.cursor).collect();
        shown.push('|');
        shown.extend(result.text.chars().skip(result.cursor));
        println!("{label:>5}  {shown}  (cursor {})", result.cursor);
    }
}
