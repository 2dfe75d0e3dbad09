use tracing::{debug, info, warn};

use super::extractor::{extract, ExtractError};
use super::record::Record;
use crate::error::{ErrorKind, Result};

/// A line that could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected {
    line_no: usize,
    line: String,
    error: ExtractError,
}

impl Rejected {
    /// 1-based position of the line in the input.
    #[inline]
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    #[inline]
    pub fn line(&self) -> &str {
        &self.line
    }

    #[inline]
    pub fn error(&self) -> &ExtractError {
        &self.error
    }
}

/// Records extracted from a whole input, in input order.
///
/// Malformed lines never abort the build: they are skipped and kept aside,
/// with their line numbers, in `rejected()`.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    rejected: Vec<Rejected>,
}

impl RecordStore {
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut store = Self::default();
        for (idx, line) in lines.into_iter().enumerate() {
            store.push(idx + 1, line.as_ref());
        }
        store.finish();
        store
    }

    /// Drains a line source. A read error fails the whole build since the
    /// input is incomplete at that point.
    pub fn from_reader<I>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<Vec<u8>>>,
    {
        let mut store = Self::default();
        for (idx, line) in lines.into_iter().enumerate() {
            let line = line.map_err(|e| e.kind_of(ErrorKind::Io))?;
            store.push(idx + 1, &String::from_utf8_lossy(&line));
        }
        store.finish();
        Ok(store)
    }

    fn push(&mut self, line_no: usize, line: &str) {
        match extract(line) {
            Ok(record) => self.records.push(record),
            Err(error) => {
                debug!(line_no, %error, "skipping malformed line");
                self.rejected.push(Rejected {
                    line_no,
                    line: line.trim_end_matches(&['\n', '\r'][..]).to_owned(),
                    error,
                });
            }
        }
    }

    fn finish(&self) {
        if !self.rejected.is_empty() {
            warn!(skipped = self.rejected.len(), "skipped malformed lines");
        }
        info!(
            parsed = self.records.len(),
            skipped = self.rejected.len(),
            "record store built"
        );
    }

    #[inline]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[inline]
    pub fn rejected(&self) -> &[Rejected] {
        &self.rejected
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
