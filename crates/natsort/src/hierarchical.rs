//! Cascading multi-level natural sort.
//!
//! Level 0 sorts every row by its natural key. Each later level first
//! partitions the current order on the raw value of the previous level's
//! field, then natural-sorts inside each partition. This is not a tuple
//! comparator over all levels: a level only breaks ties left by the field of
//! the level immediately before it.

use crate::error::{Result, SortError};
use crate::group::group_numbered;
use crate::key::sort_numbered;
use crate::record::{Record, RecordShape, join_fields, shape_of};
use crate::spec::{SortLevel, SortSpec, SpecEntry};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SortOptions {
    /// Field separator used to split line records.
    pub delimiter: char,
    /// Separator used to join output fields. Defaults to `delimiter`.
    pub output_delimiter: Option<char>,
    /// Keep the first record out of the sort and emit it first.
    pub has_header: bool,
    /// Trim whitespace around fields split from line records.
    pub trim_fields: bool,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            output_delimiter: None,
            has_header: false,
            trim_fields: false,
        }
    }
}

impl SortOptions {
    pub fn output_delimiter(&self) -> char {
        self.output_delimiter.unwrap_or(self.delimiter)
    }
}

/// Result of a hierarchical sort.
///
/// `Unchanged` carries the whole original input, header included, together
/// with the reason nothing was reordered.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SortOutcome {
    Sorted(Vec<String>),
    Unchanged {
        input: Vec<Record>,
        reason: SortError,
    },
}

impl SortOutcome {
    pub fn is_sorted(&self) -> bool {
        matches!(self, SortOutcome::Sorted(_))
    }

    pub fn reason(&self) -> Option<&SortError> {
        match self {
            SortOutcome::Sorted(_) => None,
            SortOutcome::Unchanged { reason, .. } => Some(reason),
        }
    }

    /// Output lines; a rejected input is rendered in its original order.
    pub fn into_lines(self, delimiter: char) -> Vec<String> {
        match self {
            SortOutcome::Sorted(lines) => lines,
            SortOutcome::Unchanged { input, .. } => {
                input.iter().map(|r| r.render(delimiter)).collect()
            }
        }
    }

    pub fn into_result(self) -> Result<Vec<String>> {
        match self {
            SortOutcome::Sorted(lines) => Ok(lines),
            SortOutcome::Unchanged { reason, .. } => Err(reason),
        }
    }
}

/// Sorts `records` by the cascade described by raw `spec` entries.
///
/// Malformed specs, mixed record representations, and rows too short to
/// group on are logged and returned as [`SortOutcome::Unchanged`].
pub fn hierarchical_sort(
    records: Vec<Record>,
    spec: &[SpecEntry],
    options: &SortOptions,
) -> SortOutcome {
    match SortSpec::normalize(spec) {
        Ok(spec) => hierarchical_sort_with(records, &spec, options),
        Err(reason) => reject(records, reason),
    }
}

pub fn hierarchical_sort_with(
    records: Vec<Record>,
    spec: &SortSpec,
    options: &SortOptions,
) -> SortOutcome {
    if records.is_empty() {
        tracing::warn!("no records to sort");
        return SortOutcome::Sorted(Vec::new());
    }

    match try_sort(&records, spec.levels(), options) {
        Ok(lines) => SortOutcome::Sorted(lines),
        Err(reason) => reject(records, reason),
    }
}

/// Sorts delimited lines.
pub fn sort_lines<S: AsRef<str>>(
    lines: &[S],
    spec: &SortSpec,
    options: &SortOptions,
) -> SortOutcome {
    let records = lines.iter().map(|l| Record::from(l.as_ref())).collect();
    hierarchical_sort_with(records, spec, options)
}

/// Sorts pre-tokenized rows.
pub fn sort_rows(rows: Vec<Vec<String>>, spec: &SortSpec, options: &SortOptions) -> SortOutcome {
    let records = rows.into_iter().map(Record::Fields).collect();
    hierarchical_sort_with(records, spec, options)
}

fn reject(input: Vec<Record>, reason: SortError) -> SortOutcome {
    tracing::error!(%reason, records = input.len(), "sort rejected, input returned unchanged");
    SortOutcome::Unchanged { input, reason }
}

fn try_sort(
    records: &[Record],
    levels: &[SortLevel],
    options: &SortOptions,
) -> Result<Vec<String>> {
    let (header, body) = match records.split_first() {
        Some((header, body)) if options.has_header => (Some(header), body),
        _ => (None, records),
    };

    if let RecordShape::Mixed { lines, fields } = shape_of(body) {
        return Err(SortError::HeterogeneousInput { lines, fields });
    }

    // Rows are numbered by their position in `records` for diagnostics.
    let first_row = usize::from(header.is_some());
    let rows: Vec<(usize, Vec<String>)> = body
        .iter()
        .cloned()
        .map(|r| r.into_fields(options.delimiter, options.trim_fields))
        .enumerate()
        .map(|(i, fields)| (first_row + i, fields))
        .collect();

    let sorted = cascade(rows, levels)?;

    let out_delim = options.output_delimiter();
    let mut out = Vec::with_capacity(records.len());
    if let Some(header) = header {
        out.push(header.render(out_delim));
    }
    out.extend(sorted.iter().map(|(_, row)| join_fields(row, out_delim)));
    Ok(out)
}

fn cascade(
    rows: Vec<(usize, Vec<String>)>,
    levels: &[SortLevel],
) -> Result<Vec<(usize, Vec<String>)>> {
    let Some((first, rest)) = levels.split_first() else {
        tracing::debug!("empty sort spec, keeping input order");
        return Ok(rows);
    };

    let mut current = sort_numbered(rows, first.field, Some(first.subtoken));
    let mut prev_field = first.field;

    for level in rest {
        let len = current.len();
        let groups = group_numbered(current, prev_field)?;
        tracing::debug!(
            group_field = prev_field,
            field = level.field,
            subtoken = level.subtoken,
            groups = groups.len(),
            "refining level"
        );

        let mut next = Vec::with_capacity(len);
        for group in groups {
            next.extend(sort_numbered(
                group.members,
                level.field,
                Some(level.subtoken),
            ));
        }
        current = next;
        prev_field = level.field;
    }

    Ok(current)
}
