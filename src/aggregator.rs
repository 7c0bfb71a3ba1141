use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use log::trace;

const HYPHEN: u8 = b'-';

/// One input record, newline stripped. Not required to be UTF-8.
pub type Line = Vec<u8>;

/// Number of hyphens in `line`.
pub fn count_hyphens(line: &[u8]) -> usize {
    bytecount::count(line, HYPHEN)
}

/// Groups lines by hyphen count. Shared by every worker during ingestion.
pub struct Aggregator {
    data: Mutex<HashMap<usize, Vec<Line>>>,
}

impl Aggregator {
    pub fn new() -> Self {
        Aggregator {
            data: Mutex::new(HashMap::new()),
        }
    }

    pub fn insert(&self, line: Line) {
        let count = count_hyphens(&line);
        trace!("{} -> {}", String::from_utf8_lossy(&line), count);

        // push is the only mutation, a poisoned map is still consistent
        let mut data = self.data.lock().unwrap_or_else(PoisonError::into_inner);
        data.entry(count).or_default().push(line);
    }

    /// Consumes the aggregator once every writer is gone.
    pub fn into_buckets(self) -> Buckets {
        let data = self
            .data
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        Buckets { data }
    }

    #[cfg(test)]
    pub(crate) fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<usize, Vec<Line>>> {
        self.data.lock().unwrap()
    }
}

/// Read-only view of the lines grouped by hyphen count.
#[derive(Debug, Default)]
pub struct Buckets {
    data: HashMap<usize, Vec<Line>>,
}

impl Buckets {
    pub fn get(&self, count: usize) -> Option<&[Line]> {
        self.data.get(&count).map(Vec::as_slice)
    }

    /// Distinct hyphen counts, ascending.
    pub fn counts(&self) -> Vec<usize> {
        let mut keys: Vec<usize> = self.data.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Total number of lines across all buckets.
    pub fn len(&self) -> usize {
        self.data.values().map(Vec::len).sum()
    }
}
