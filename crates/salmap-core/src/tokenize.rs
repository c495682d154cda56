//! Whitespace-preserving tokenizer for free-form text.

/// One unit of input text. Concatenating every unit's text in order
/// reproduces the input exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextUnit {
    /// Maximal run of non-whitespace characters.
    Word(String),
    /// Maximal run of non-newline whitespace.
    Spaces(String),
    /// A single newline character.
    Newline,
}

impl TextUnit {
    /// The exact characters this unit covers.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Word(s) | Self::Spaces(s) => s,
            Self::Newline => "\n",
        }
    }
}

/// Partition text into words, whitespace runs, and newlines.
///
/// Every character lands in exactly one unit; empty input yields no units.
#[must_use]
pub fn tokenize_text(input: &str) -> Vec<TextUnit> {
    let mut units = Vec::new();
    let mut rest = input;
    while let Some(first) = rest.chars().next() {
        if first == '\n' {
            units.push(TextUnit::Newline);
            rest = &rest[1..];
            continue;
        }
        let run_end = if first.is_whitespace() {
            rest.find(|c: char| c == '\n' || !c.is_whitespace())
                .unwrap_or(rest.len())
        } else {
            rest.find(char::is_whitespace).unwrap_or(rest.len())
        };
        let (run, tail) = rest.split_at(run_end);
        if first.is_whitespace() {
            units.push(TextUnit::Spaces(run.to_string()));
        } else {
            units.push(TextUnit::Word(run.to_string()));
        }
        rest = tail;
    }
    units
}
