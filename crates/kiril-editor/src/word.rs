/// Characters that end a word besides whitespace.
const PUNCT_SEPARATORS: [char; 13] = ['.', ',', ';', '!', '?', '(', ')', '{', '}', '[', ']', '"', '\''];

pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || PUNCT_SEPARATORS.contains(&c)
}

/// Char range `[start, end)` of the word touching a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSpan {
    pub start: usize,
    pub end: usize,
}

impl WordSpan {
    /// Maximal run of non-separators around `cursor`. `cursor` must be
    /// `<= chars.len()`; an empty span means no word touches the cursor.
    pub fn locate(chars: &[char], cursor: usize) -> Self {
        let start = chars[..cursor]
            .iter()
            .rposition(|&c| is_separator(c))
            .map_or(0, |p| p + 1);
        let end = chars[cursor..]
            .iter()
            .position(|&c| is_separator(c))
            .map_or(chars.len(), |p| cursor + p);
        WordSpan { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
