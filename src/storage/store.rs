use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, warn};

use super::error::{Result, StoreError};
use super::record::StudentRecord;

/// Owns the full roster, keyed by roll number. All reads hand out clones so
/// callers can never mutate stored records behind the store's back.
///
/// A BTreeMap keeps iteration in ascending roll-number order, which makes
/// listing, save output, and sort tie-breaking deterministic.
pub struct RecordStore {
    records: BTreeMap<u32, StudentRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }

    pub fn add(&mut self, record: StudentRecord) -> Result<()> {
        if self.records.contains_key(&record.id()) {
            return Err(StoreError::DuplicateKey(record.id()));
        }
        self.records.insert(record.id(), record);
        Ok(())
    }

    pub fn delete(&mut self, id: u32) -> Result<()> {
        self.records
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    /// Replaces the record stored under `id` wholesale. The replacement is
    /// re-keyed: the stored record carries `id` as its roll number no matter
    /// what roll number the argument carries, so key and record cannot
    /// disagree.
    pub fn update(&mut self, id: u32, record: StudentRecord) -> Result<()> {
        if !self.records.contains_key(&id) {
            return Err(StoreError::NotFound(id));
        }
        let rekeyed = StudentRecord::new(
            id,
            record.name().to_string(),
            record.email().to_string(),
            record.course().to_string(),
            record.score(),
        );
        self.records.insert(id, rekeyed);
        Ok(())
    }

    pub fn find(&self, id: u32) -> Result<StudentRecord> {
        self.records.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    /// All records in ascending roll-number order. Empty is a valid result;
    /// the caller decides how to render it.
    pub fn list_all(&self) -> Vec<StudentRecord> {
        self.records.values().cloned().collect()
    }

    /// Records sorted by score, highest first. The sort is stable, so equal
    /// scores stay in ascending roll-number order.
    pub fn sorted_by_score_desc(&self) -> Vec<StudentRecord> {
        let mut records = self.list_all();
        records.sort_by(|a, b| {
            b.score()
                .partial_cmp(&a.score())
                .unwrap_or(Ordering::Equal)
        });
        records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Loads the roster from the data file, replacing any current contents.
    /// A missing file is an empty roster, not an error. Blank lines are
    /// skipped; malformed lines are skipped with a warning so one bad line
    /// cannot take the rest of the file down. Returns the number of records
    /// loaded.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        self.records.clear();

        if !path.exists() {
            debug!("data file {:?} does not exist, starting empty", path);
            return Ok(0);
        }

        let content = fs::read_to_string(path)?;
        for line in content.lines() {
            if line.trim().is_empty() {
                continue;
            }
            match StudentRecord::from_line(line) {
                Ok(record) => {
                    // Last occurrence of a duplicate roll number wins,
                    // matching how the original populated its map.
                    self.records.insert(record.id(), record);
                }
                Err(e) => warn!("skipping bad line in {:?}: {}", path, e),
            }
        }

        debug!("loaded {} records from {:?}", self.records.len(), path);
        Ok(self.records.len())
    }

    /// Writes the full roster to the data file, one record per line,
    /// replacing whatever was there. Output is deterministic: ascending
    /// roll-number order, default float formatting.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = fs::File::create(path)?;
        let mut writer = BufWriter::new(file);

        for record in self.records.values() {
            writeln!(writer, "{}", record.to_line())?;
        }
        writer.flush()?;

        debug!("saved {} records to {:?}", self.records.len(), path);
        Ok(())
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
