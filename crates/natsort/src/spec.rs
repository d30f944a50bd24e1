use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SortError};

/// One cascade level: sort on field `field`, starting at subtoken `subtoken`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct SortLevel {
    pub field: usize,
    pub subtoken: usize,
}

impl SortLevel {
    pub const fn new(field: usize, subtoken: usize) -> Self {
        Self { field, subtoken }
    }
}

/// A sort spec entry as a caller writes it: a bare field index or a
/// `[field, subtoken]` pair. Shapes are checked by [`SortSpec::normalize`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecEntry {
    Index(usize),
    Tuple(Vec<usize>),
}

impl From<usize> for SpecEntry {
    fn from(field: usize) -> Self {
        SpecEntry::Index(field)
    }
}

impl From<(usize, usize)> for SpecEntry {
    fn from((field, subtoken): (usize, usize)) -> Self {
        SpecEntry::Tuple(vec![field, subtoken])
    }
}

/// Validated, ordered cascade levels.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SortSpec {
    levels: Vec<SortLevel>,
}

impl SortSpec {
    pub fn new(levels: Vec<SortLevel>) -> Self {
        Self { levels }
    }

    /// Checks entry shapes and fills in missing subtoken offsets.
    ///
    /// Entries must be all bare indices (offset 0 is added) or all pairs.
    pub fn normalize(entries: &[SpecEntry]) -> Result<Self> {
        if entries.iter().all(|e| matches!(e, SpecEntry::Index(_))) {
            let levels = entries
                .iter()
                .filter_map(|e| match e {
                    SpecEntry::Index(field) => Some(SortLevel::new(*field, 0)),
                    SpecEntry::Tuple(_) => None,
                })
                .collect();
            return Ok(Self { levels });
        }

        let mut levels = Vec::with_capacity(entries.len());
        for entry in entries {
            match entry {
                SpecEntry::Tuple(parts) if parts.len() == 2 => {
                    levels.push(SortLevel::new(parts[0], parts[1]));
                }
                SpecEntry::Tuple(parts) => {
                    return Err(SortError::InvalidSortSpec(format!(
                        "pairs must have exactly 2 components, got {}",
                        parts.len()
                    )));
                }
                SpecEntry::Index(_) => {
                    return Err(SortError::InvalidSortSpec(
                        "entries must be all field indices or all (field, subtoken) pairs"
                            .to_string(),
                    ));
                }
            }
        }
        Ok(Self { levels })
    }

    pub fn levels(&self) -> &[SortLevel] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// Splits textual spec `"4:0,4:1,1:3"` (or `"4,4,1"`) into raw entries
/// without checking shapes.
pub fn parse_entries(text: &str) -> Result<Vec<SpecEntry>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }

    text.split(',')
        .map(|token| {
            let parts = token
                .split(':')
                .map(|p| {
                    p.trim().parse::<usize>().map_err(|_| {
                        SortError::InvalidSortSpec(format!("bad number {p:?} in entry {token:?}"))
                    })
                })
                .collect::<Result<Vec<usize>>>()?;
            Ok(if token.contains(':') {
                SpecEntry::Tuple(parts)
            } else {
                SpecEntry::Index(parts[0])
            })
        })
        .collect()
}

impl FromStr for SortSpec {
    type Err = SortError;

    fn from_str(text: &str) -> Result<Self> {
        SortSpec::normalize(&parse_entries(text)?)
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, level) in self.levels.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}:{}", level.field, level.subtoken)?;
        }
        Ok(())
    }
}

impl From<Vec<SortLevel>> for SortSpec {
    fn from(levels: Vec<SortLevel>) -> Self {
        Self::new(levels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_indices_get_zero_offset() {
        let spec = SortSpec::normalize(&[SpecEntry::from(4), SpecEntry::from(1)]).unwrap();
        assert_eq!(spec.levels(), &[SortLevel::new(4, 0), SortLevel::new(1, 0)]);
    }

    #[test]
    fn pairs_pass_through() {
        let spec = SortSpec::normalize(&[
            SpecEntry::from((4, 0)),
            SpecEntry::from((4, 1)),
            SpecEntry::from((1, 3)),
        ])
        .unwrap();
        assert_eq!(spec.len(), 3);
        assert_eq!(spec.levels()[2], SortLevel::new(1, 3));
    }

    #[test]
    fn rejects_bad_shapes() {
        let triple = [SpecEntry::Tuple(vec![0, 0, 0])];
        assert!(matches!(
            SortSpec::normalize(&triple),
            Err(SortError::InvalidSortSpec(_))
        ));

        let single = [SpecEntry::Tuple(vec![0])];
        assert!(SortSpec::normalize(&single).is_err());

        let mixed = [SpecEntry::Index(1), SpecEntry::from((2, 0))];
        assert!(SortSpec::normalize(&mixed).is_err());
    }

    #[test]
    fn empty_spec_is_valid() {
        assert!(SortSpec::normalize(&[]).unwrap().is_empty());
        assert!("".parse::<SortSpec>().unwrap().is_empty());
    }

    #[test]
    fn parse_text() {
        let spec: SortSpec = "4:0, 4:1,1:3".parse().unwrap();
        assert_eq!(spec.to_string(), "4:0,4:1,1:3");

        let spec: SortSpec = "2,0".parse().unwrap();
        assert_eq!(spec.to_string(), "2:0,0:0");

        assert!("0:0:0".parse::<SortSpec>().is_err());
        assert!("1,2:0".parse::<SortSpec>().is_err());
        assert!("x".parse::<SortSpec>().is_err());
        assert!("-1".parse::<SortSpec>().is_err());
    }
}
