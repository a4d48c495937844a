use std::collections::HashMap;

#[derive(Default)]
struct Node {
    children: HashMap<char, Node>,
    cyrillic: Option<String>,
}

/// Char-keyed trie over the multigraph table.
#[derive(Default)]
pub struct MultigraphTrie {
    root: Node,
}

impl MultigraphTrie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, latin: &str, cyrillic: &str) {
        let mut node = &mut self.root;
        for c in latin.chars() {
            node = node.children.entry(c).or_default();
        }
        node.cyrillic = Some(cyrillic.to_string());
    }

    /// Longest key that is a prefix of `lowered`, as `(key_len, cyrillic)`.
    ///
    /// Keys are unique, so at most one key of each length can match and the
    /// deepest terminal node on the walk is the answer.
    pub fn longest_match(&self, lowered: &[char]) -> Option<(usize, &str)> {
        let mut node = &self.root;
        let mut best = None;
        for (depth, c) in lowered.iter().enumerate() {
            match node.children.get(c) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(cyr) = &node.cyrillic {
                best = Some((depth + 1, cyr.as_str()));
            }
        }
        best
    }
}
