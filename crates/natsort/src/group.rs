use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{Result, SortError};

/// Insertion-ordered multimap.
///
/// - Keys iterate in order of first insertion.
/// - Values under one key keep their push order.
/// - `push` and `get` are O(1) expected.
#[derive(Clone, Debug)]
pub struct GroupIndex<K, V> {
    slots: HashMap<K, usize>,
    entries: Vec<(K, Vec<V>)>,
}

impl<K: Eq + Hash + Clone, V> GroupIndex<K, V> {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, key: K, value: V) {
        match self.slots.get(&key) {
            Some(&slot) => self.entries[slot].1.push(value),
            None => {
                self.slots.insert(key.clone(), self.entries.len());
                self.entries.push((key, vec![value]));
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&[V]> {
        let &slot = self.slots.get(key)?;
        Some(&self.entries[slot].1)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn into_entries(self) -> Vec<(K, Vec<V>)> {
        self.entries
    }
}

impl<K: Eq + Hash + Clone, V> Default for GroupIndex<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Rows sharing one raw field value, in input order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Group<R> {
    pub key: String,
    pub members: Vec<R>,
}

/// Partitions `rows` by the exact value of `field_index`.
///
/// Groups come out in first-seen order. Fails on the first row that has no
/// such field.
pub fn group_by_field<R: AsRef<[String]>>(
    rows: Vec<R>,
    field_index: usize,
) -> Result<Vec<Group<R>>> {
    let groups = group_numbered(rows.into_iter().enumerate().collect(), field_index)?;
    Ok(groups
        .into_iter()
        .map(|g| Group {
            key: g.key,
            members: g.members.into_iter().map(|(_, r)| r).collect(),
        })
        .collect())
}

/// [`group_by_field`] over rows tagged with their input position; an error
/// names the tag of the short row.
pub(crate) fn group_numbered<R: AsRef<[String]>>(
    rows: Vec<(usize, R)>,
    field_index: usize,
) -> Result<Vec<Group<(usize, R)>>> {
    let mut index = GroupIndex::new();

    for (row, r) in rows {
        let fields = r.as_ref();
        let Some(value) = fields.get(field_index) else {
            return Err(SortError::FieldIndexOutOfRange {
                row,
                index: field_index,
                len: fields.len(),
            });
        };
        index.push(value.clone(), (row, r));
    }

    Ok(index
        .into_entries()
        .into_iter()
        .map(|(key, members)| Group { key, members })
        .collect())
}
