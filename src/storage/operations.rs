use crate::{domain::cd::Cd, storage::error::StorageError};

/// The ordered set of CDs held in memory.
///
/// Insertion order is kept for display and decides which record a delete
/// hits when ids repeat.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Inventory {
    records: Vec<Cd>,
}

/// Parses a user typed id, ignoring surrounding whitespace.
pub fn parse_id(text: &str) -> Result<i64, StorageError> {
    let text = text.trim();
    text.parse().map_err(|_| StorageError::InvalidId {
        input: text.to_string(),
    })
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Cd] {
        &self.records
    }

    /// Drops every record and takes `records` instead
    pub fn replace(&mut self, records: Vec<Cd>) {
        self.records = records;
    }

    /// Appends a new CD. Duplicate ids are accepted.
    ///
    /// Fails without touching the inventory when `id_text` is not an integer.
    pub fn add(
        &mut self,
        id_text: &str,
        title: &str,
        artist: &str,
    ) -> Result<(), StorageError> {
        let id = parse_id(id_text)?;
        self.records.push(Cd::new(id, title, artist));
        log::debug!("Added CD {id}, inventory now holds {}", self.records.len());
        Ok(())
    }

    /// Removes the earliest inserted CD with the given id.
    ///
    /// Returns `None` when no record matches.
    pub fn remove(&mut self, id: i64) -> Option<Cd> {
        let pos = self.records.iter().position(|cd| cd.id == id)?;
        let removed = self.records.remove(pos);
        log::debug!("Removed CD {id} at position {pos}");
        Some(removed)
    }
}
