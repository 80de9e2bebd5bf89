//! Calculation history.
//!
//! Completed calculations are kept newest first and capped at
//! [`HISTORY_LIMIT`] entries; the oldest entry is dropped silently when a new
//! one arrives on a full log.

mod item;

pub use item::HistoryItem;

/// Maximum number of calculations kept.
pub const HISTORY_LIMIT: usize = 10;

/// Newest-first list of completed calculations.
#[derive(Clone, Debug, Default)]
pub struct HistoryLog {
    items: Vec<HistoryItem>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item at the front, evicting the oldest if the log is full.
    pub fn push(&mut self, item: HistoryItem) {
        self.items.insert(0, item);
        self.items.truncate(HISTORY_LIMIT);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Find an item by id.
    pub fn get(&self, id: u64) -> Option<&HistoryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items, newest first.
    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
