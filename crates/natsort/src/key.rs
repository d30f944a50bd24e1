use crate::record::Record;
use crate::tokenize::{self, SubtokenKind};

/// One typed subtoken of a natural key.
///
/// Variant order is the comparison order: at a tied position a number sorts
/// before any text.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum KeyPart {
    Number(u64),
    Text(String),
}

/// Comparable key for one field of one record.
///
/// - `Missing` (field index past the end of the record) sorts first.
/// - `Parts` compare element-wise; a proper prefix sorts before the longer key.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum NaturalKey {
    Missing,
    Parts(Vec<KeyPart>),
}

impl NaturalKey {
    pub fn parts(&self) -> &[KeyPart] {
        match self {
            NaturalKey::Missing => &[],
            NaturalKey::Parts(parts) => parts,
        }
    }
}

/// Builds the natural key of `fields[field_index]`, starting at subtoken
/// `subtoken_offset`.
///
/// An offset past the end of the subtoken list is ignored and the whole list
/// is used; `None` also means the whole list.
pub fn natural_key(
    fields: &[String],
    field_index: usize,
    subtoken_offset: Option<usize>,
) -> NaturalKey {
    key_for_row(0, fields, field_index, subtoken_offset)
}

fn key_for_row(
    row: usize,
    fields: &[String],
    field_index: usize,
    subtoken_offset: Option<usize>,
) -> NaturalKey {
    let Some(field) = fields.get(field_index) else {
        tracing::error!(
            row,
            field_index,
            len = fields.len(),
            "field index out of range, using minimal key"
        );
        return NaturalKey::Missing;
    };

    let mut parts: Vec<KeyPart> = tokenize::subtokens(field)
        .into_iter()
        .map(|sub| match sub.kind {
            SubtokenKind::Digits => KeyPart::Number(parse_digits(&sub.text)),
            SubtokenKind::Text => KeyPart::Text(sub.text.to_ascii_lowercase()),
        })
        .collect();

    match subtoken_offset {
        Some(offset) if offset > parts.len() => {
            tracing::debug!(
                row,
                offset,
                subtokens = parts.len(),
                "subtoken offset past end of field, using whole field"
            );
        }
        Some(offset) => {
            parts.drain(..offset);
        }
        None => {}
    }

    NaturalKey::Parts(parts)
}

fn parse_digits(text: &str) -> u64 {
    text.parse::<u64>().unwrap_or_else(|_| {
        tracing::debug!(digits = text, "numeric subtoken overflows u64, saturating");
        u64::MAX
    })
}

/// Stable sort of field rows by the natural key of one field. Keys are built
/// once per row.
pub fn sort_by_natural_key<R: AsRef<[String]>>(
    rows: Vec<R>,
    field_index: usize,
    subtoken_offset: Option<usize>,
) -> Vec<R> {
    let numbered = rows.into_iter().enumerate().collect();
    sort_numbered(numbered, field_index, subtoken_offset)
        .into_iter()
        .map(|(_, r)| r)
        .collect()
}

/// [`sort_by_natural_key`] over rows tagged with their input position. The
/// tag is what diagnostics report as `row`.
pub(crate) fn sort_numbered<R: AsRef<[String]>>(
    rows: Vec<(usize, R)>,
    field_index: usize,
    subtoken_offset: Option<usize>,
) -> Vec<(usize, R)> {
    let mut keyed: Vec<(NaturalKey, (usize, R))> = rows
        .into_iter()
        .map(|(row, r)| {
            let key = key_for_row(row, r.as_ref(), field_index, subtoken_offset);
            (key, (row, r))
        })
        .collect();

    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, r)| r).collect()
}

/// Single-level natural sort over records of either representation.
///
/// Lines are split on `delimiter` (fields trimmed) only to build keys; the
/// records themselves are returned untouched, in natural order.
pub fn natural_sort(
    records: Vec<Record>,
    field_index: usize,
    subtoken_offset: Option<usize>,
    delimiter: char,
) -> Vec<Record> {
    let mut keyed: Vec<(NaturalKey, Record)> = records
        .into_iter()
        .enumerate()
        .map(|(row, r)| {
            let key = key_for_row(row, &r.fields(delimiter), field_index, subtoken_offset);
            (key, r)
        })
        .collect();

    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, r)| r).collect()
}
