//! Field and subtoken splitting.
//!
//! A subtoken is a maximal run of ASCII digits or a maximal run of ASCII
//! letters, taken after every other character has been removed from the
//! field. `"BTY659-A2081"` becomes `BTY`, `659`, `A`, `2081`.

/// Splits `line` on `delimiter` and trims each field.
pub fn split_fields(line: &str, delimiter: char) -> Vec<String> {
    strip_tokens(line.split(delimiter))
}

/// Splits `line` on `delimiter`, keeping fields exactly as written.
pub fn split_raw(line: &str, delimiter: char) -> Vec<String> {
    line.split(delimiter).map(str::to_string).collect()
}

pub fn strip_tokens<I, S>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|t| t.as_ref().trim().to_string())
        .collect()
}

pub fn strip_non_alphanumeric(field: &str) -> String {
    field.chars().filter(char::is_ascii_alphanumeric).collect()
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubtokenKind {
    Digits,
    Text,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Subtoken {
    pub kind: SubtokenKind,
    pub text: String,
}

impl Subtoken {
    fn new(kind: SubtokenKind, text: &str) -> Self {
        Self {
            kind,
            text: text.to_string(),
        }
    }
}

pub fn subtokens(field: &str) -> Vec<Subtoken> {
    let stripped = strip_non_alphanumeric(field);
    let bytes = stripped.as_bytes();
    let mut out = Vec::new();

    let mut start = 0usize;
    while start < bytes.len() {
        let digits = bytes[start].is_ascii_digit();
        let mut end = start + 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() == digits {
            end += 1;
        }

        let kind = if digits {
            SubtokenKind::Digits
        } else {
            SubtokenKind::Text
        };
        // `stripped` is pure ASCII, so every byte offset is a char boundary.
        out.push(Subtoken::new(kind, &stripped[start..end]));
        start = end;
    }

    out
}
