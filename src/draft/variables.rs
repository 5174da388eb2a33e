use super::DraftError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct KeyValueEntry {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableListKind {
    Input,
    Output,
}

impl VariableListKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Output => "output",
        }
    }
}

/// Ordered key/value rows. Duplicate keys are allowed; removal shifts later rows left.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct VariableList {
    entries: Vec<KeyValueEntry>,
}

impl VariableList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self) -> usize {
        self.entries.push(KeyValueEntry::default());
        self.entries.len() - 1
    }

    pub fn set_key(&mut self, index: usize, key: impl Into<String>) -> Result<(), DraftError> {
        self.entry_mut(index)?.key = key.into();
        Ok(())
    }

    pub fn set_value(&mut self, index: usize, value: impl Into<String>) -> Result<(), DraftError> {
        self.entry_mut(index)?.value = value.into();
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<KeyValueEntry, DraftError> {
        self.check_index(index)?;
        Ok(self.entries.remove(index))
    }

    pub fn has_any(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&KeyValueEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[KeyValueEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KeyValueEntry> {
        self.entries.iter()
    }

    fn check_index(&self, index: usize) -> Result<(), DraftError> {
        if index < self.entries.len() {
            return Ok(());
        }
        Err(DraftError::OutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    fn entry_mut(&mut self, index: usize) -> Result<&mut KeyValueEntry, DraftError> {
        self.check_index(index)?;
        Ok(&mut self.entries[index])
    }
}

impl<'a> IntoIterator for &'a VariableList {
    type Item = &'a KeyValueEntry;
    type IntoIter = std::slice::Iter<'a, KeyValueEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
