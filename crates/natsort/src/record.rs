use crate::tokenize;

/// One input row, either still delimited or already split into fields.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Record {
    Line(String),
    Fields(Vec<String>),
}

impl Record {
    /// Fields of this record. Lines are split on `delimiter` and trimmed;
    /// field lists are returned as they are.
    pub fn fields(&self, delimiter: char) -> Vec<String> {
        match self {
            Record::Line(line) => tokenize::split_fields(line, delimiter),
            Record::Fields(fields) => fields.clone(),
        }
    }

    pub(crate) fn into_fields(self, delimiter: char, trim: bool) -> Vec<String> {
        match self {
            Record::Line(line) if trim => tokenize::split_fields(&line, delimiter),
            Record::Line(line) => tokenize::split_raw(&line, delimiter),
            Record::Fields(fields) => fields,
        }
    }

    /// Renders the record as one line. Lines are returned verbatim.
    pub fn render(&self, delimiter: char) -> String {
        match self {
            Record::Line(line) => line.clone(),
            Record::Fields(fields) => join_fields(fields, delimiter),
        }
    }

    pub fn is_line(&self) -> bool {
        matches!(self, Record::Line(_))
    }
}

impl From<String> for Record {
    fn from(line: String) -> Self {
        Record::Line(line)
    }
}

impl From<&str> for Record {
    fn from(line: &str) -> Self {
        Record::Line(line.to_string())
    }
}

impl From<Vec<String>> for Record {
    fn from(fields: Vec<String>) -> Self {
        Record::Fields(fields)
    }
}

impl From<Vec<&str>> for Record {
    fn from(fields: Vec<&str>) -> Self {
        Record::Fields(fields.into_iter().map(str::to_string).collect())
    }
}

pub(crate) fn join_fields(fields: &[String], delimiter: char) -> String {
    let mut buf = [0_u8; 4];
    fields.join(&*delimiter.encode_utf8(&mut buf))
}

/// Representation shared by a batch of records.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RecordShape {
    Empty,
    Lines,
    Fields,
    Mixed { lines: usize, fields: usize },
}

pub fn shape_of(records: &[Record]) -> RecordShape {
    let lines = records.iter().filter(|r| r.is_line()).count();
    let fields = records.len() - lines;
    match (lines, fields) {
        (0, 0) => RecordShape::Empty,
        (_, 0) => RecordShape::Lines,
        (0, _) => RecordShape::Fields,
        (lines, fields) => RecordShape::Mixed { lines, fields },
    }
}
