use std::io::{self, BufRead, BufWriter, Write};

use kiril::{list_mappings, reverse_transliterate, transliterate, TransliterationOptions};

use super::die;

/// Run `f` over `text`, or over stdin line by line when `text` is absent.
fn each_input(text: Option<&str>, f: impl Fn(&str) -> String) {
    if let Some(text) = text {
        println!("{}", f(text));
        return;
    }
    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());
    for line in stdin.lock().lines() {
        let line = die!(line, "Error reading stdin: {}");
        die!(writeln!(out, "{}", f(&line)), "Error writing output: {}");
    }
    die!(out.flush(), "Error writing output: {}");
}

pub fn convert_cmd(text: Option<&str>, preserve_case: bool, ascii_harmony: bool) {
    let options = TransliterationOptions {
        preserve_case,
        ascii_harmony,
    };
    each_input(text, |s| transliterate(s, options));
}

pub fn reverse_cmd(text: Option<&str>) {
    each_input(text, reverse_transliterate);
}

pub fn table_cmd(json: bool) {
    let mappings = list_mappings();
    if json {
        let s = die!(
            serde_json::to_string_pretty(&mappings),
            "Error serializing table: {}"
        );
        println!("{s}");
        return;
    }
    let width = mappings
        .iter()
        .map(|m| m.latin.chars().count())
        .max()
        .unwrap_or(0);
    for m in &mappings {
        println!("{:<width$}  {}", m.latin, m.cyrillic);
    }
    eprintln!("{} mappings", mappings.len());
}
