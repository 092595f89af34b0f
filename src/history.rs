use std::{
    fs,
    path::Path,
    time::{SystemTime, UNIX_EPOCH},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::HistoryError;

/// One finished calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The expression exactly as the user typed it.
    pub expression: String,
    /// The formatted result that was shown.
    pub result:     String,
    /// When the calculation happened, in milliseconds since the Unix epoch.
    pub timestamp:  u64,
}

/// Past calculations in insertion order.
///
/// Stored on disk as a JSON array of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Appends a calculation stamped with the current time.
    pub fn record(&mut self, expression: &str, result: &str) {
        self.push(HistoryEntry { expression: expression.to_string(),
                                 result:     result.to_string(),
                                 timestamp:  now_millis(), });
    }

    /// Appends an entry as is.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Deletes the entry at `index` (oldest is `0`).
    ///
    /// Out-of-range indices are ignored and return `None`.
    ///
    /// # Example
    /// ```
    /// use infix::history::History;
    ///
    /// let mut history = History::new();
    /// history.record("1+1", "2.0000");
    ///
    /// assert!(history.remove(5).is_none());
    /// assert_eq!(history.remove(0).unwrap().expression, "1+1");
    /// assert!(history.is_empty());
    /// ```
    pub fn remove(&mut self, index: usize) -> Option<HistoryEntry> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    /// Returns the entry at `index`, oldest first.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates newest first, yielding each entry with its index.
    ///
    /// The index is the one [`History::remove`] and [`History::get`] expect.
    pub fn newest_first(&self) -> impl Iterator<Item = (usize, &HistoryEntry)> {
        self.entries.iter().enumerate().rev()
    }

    /// Reads a history file.
    ///
    /// # Errors
    /// [`HistoryError`] if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> Result<Self, HistoryError> {
        let contents = fs::read_to_string(path)?;
        let history: Self = serde_json::from_str(&contents)?;
        debug!(path = %path.display(), entries = history.len(), "loaded history");
        Ok(history)
    }

    /// Reads a history file, starting fresh if it is missing or unreadable.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::new();
        }
        Self::load(path).unwrap_or_else(|error| {
                            warn!(path = %path.display(), %error, "could not load history, starting empty");
                            Self::new()
                        })
    }

    /// Writes the history to `path`, replacing its contents.
    ///
    /// # Errors
    /// [`HistoryError`] if serializing or writing fails.
    pub fn save(&self, path: &Path) -> Result<(), HistoryError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        debug!(path = %path.display(), entries = self.len(), "saved history");
        Ok(())
    }
}

fn now_millis() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH)
                     .map_or(0, |elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
}
