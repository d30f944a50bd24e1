use thiserror::Error;

/// Reasons a sort request was rejected or a record could not be keyed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    #[error("invalid sort spec: {0}")]
    InvalidSortSpec(String),

    #[error(
        "records must be all delimited lines or all field lists \
         (got {lines} lines, {fields} field lists)"
    )]
    HeterogeneousInput { lines: usize, fields: usize },

    #[error("field index {index} out of range for row {row} with {len} fields")]
    FieldIndexOutOfRange {
        row: usize,
        index: usize,
        len: usize,
    },

    #[error("elements have no total order")]
    UnorderedElementType,
}

pub type Result<T> = std::result::Result<T, SortError>;
